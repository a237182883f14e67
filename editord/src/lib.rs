//! # Editor Host Daemon
//!
//! Drives an [`Editor`](editor_core::Editor) from edit scripts, standing in
//! for an interactive presentation layer.
//!
//! ## Philosophy
//!
//! - **Deterministic**: The same script and settings always give the same result
//! - **Recoverable**: Rejected edits are reported and the run continues
//! - **Thin shell**: All editing semantics live in `editor_core`

pub mod diff;
pub mod edit_script;
pub mod runtime;

pub use diff::{infer_edit, InferredEdit};
pub use edit_script::{EditScript, EditScriptError, ModeChange, ScriptAction};
pub use runtime::{HostRuntime, HostRuntimeConfig, HostRuntimeError, RunReport, StepOutcome};
