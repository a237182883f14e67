//! # Editor Host Daemon
//!
//! Main entry point: runs an edit script against a fresh editor and prints
//! the resulting content and view labels.

use editord::{HostRuntime, HostRuntimeConfig};
use editor_settings::load_settings_file;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    match runtime.run() {
        Ok(report) => {
            for message in &report.rejected_edits {
                eprintln!("Rejected: {}", message);
            }
            println!("{}", report);
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> Result<HostRuntimeConfig, String> {
    let mut config = HostRuntimeConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--settings" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --settings".to_string());
                }
                config.settings = load_settings_file(&args[i])
                    .map_err(|e| format!("Failed to load settings: {}", e))?;
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                config.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    if config.script.is_none() {
        let mut script_text = String::new();
        io::stdin()
            .read_to_string(&mut script_text)
            .map_err(|e| format!("Failed to read script from stdin: {}", e))?;
        if !script_text.trim().is_empty() {
            config.script = Some(script_text);
        }
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --settings <FILE>    Editor settings (JSON)");
    eprintln!("  -s, --script <FILE>      Edit script (default: read from stdin)");
    eprintln!("  --max-steps <N>          Maximum steps to run (0 = unlimited)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Logging is controlled by RUST_LOG (e.g. RUST_LOG=debug).");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script editord/scripts/hello.edits", program);
    eprintln!("  {} -c editor.json < session.edits", program);
}
