//! Content-change observers
//!
//! Observers are shared behind `Rc` and identified by address, so attaching
//! the same observer twice keeps a single registration. Notification walks a
//! copy of the list taken when it starts: an observer may detach itself, or
//! attach others, through a [`RegistryHandle`] without disturbing the walk in
//! progress.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::ptr;

use log::trace;

/// Passive listener told about every accepted content change
pub trait ContentObserver {
    fn on_content_changed(&self, content: &str);
}

type ObserverList = RefCell<Vec<Rc<dyn ContentObserver>>>;

fn attach_to(list: &ObserverList, observer: Rc<dyn ContentObserver>) -> bool {
    let mut observers = list.borrow_mut();
    let address = Rc::as_ptr(&observer) as *const ();
    if observers.iter().any(|o| ptr::addr_eq(Rc::as_ptr(o), address)) {
        return false;
    }
    observers.push(observer);
    true
}

fn detach_from(list: &ObserverList, address: *const ()) -> bool {
    let mut observers = list.borrow_mut();
    let before = observers.len();
    observers.retain(|o| !ptr::addr_eq(Rc::as_ptr(o), address));
    observers.len() != before
}

/// Attachment-ordered set of observers owned by a document
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Rc<ObserverList>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the observer was already attached
    pub fn attach(&self, observer: Rc<dyn ContentObserver>) -> bool {
        attach_to(&self.observers, observer)
    }

    /// Returns false if the observer was not attached
    pub fn detach<T: ContentObserver + ?Sized>(&self, observer: &Rc<T>) -> bool {
        detach_from(&self.observers, Rc::as_ptr(observer) as *const ())
    }

    pub fn contains<T: ContentObserver + ?Sized>(&self, observer: &Rc<T>) -> bool {
        let address = Rc::as_ptr(observer) as *const ();
        self.observers
            .borrow()
            .iter()
            .any(|o| ptr::addr_eq(Rc::as_ptr(o), address))
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Weak handle usable from inside a notification
    pub fn handle(&self) -> RegistryHandle {
        RegistryHandle {
            observers: Rc::downgrade(&self.observers),
        }
    }

    pub fn notify_all(&self, content: &str) {
        let observers: Vec<Rc<dyn ContentObserver>> = self.observers.borrow().clone();
        trace!("notifying {} observer(s)", observers.len());
        for observer in &observers {
            observer.on_content_changed(content);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

/// Non-owning handle to an [`ObserverRegistry`]
///
/// Every operation is a no-op once the registry is dropped.
#[derive(Clone)]
pub struct RegistryHandle {
    observers: Weak<ObserverList>,
}

impl RegistryHandle {
    pub fn is_alive(&self) -> bool {
        self.observers.strong_count() > 0
    }

    pub fn attach(&self, observer: Rc<dyn ContentObserver>) -> bool {
        match self.observers.upgrade() {
            Some(list) => attach_to(&list, observer),
            None => false,
        }
    }

    pub fn detach<T: ContentObserver + ?Sized>(&self, observer: &Rc<T>) -> bool {
        self.detach_address(Rc::as_ptr(observer) as *const ())
    }

    /// Detach by reference, for an observer removing itself from `on_content_changed`
    pub fn detach_self<T: ContentObserver + ?Sized>(&self, observer: &T) -> bool {
        self.detach_address(observer as *const T as *const ())
    }

    fn detach_address(&self, address: *const ()) -> bool {
        match self.observers.upgrade() {
            Some(list) => detach_from(&list, address),
            None => false,
        }
    }
}

impl fmt::Debug for RegistryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use core::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    impl ContentObserver for Recorder {
        fn on_content_changed(&self, content: &str) {
            self.seen.borrow_mut().push(content.to_string());
        }
    }

    struct OneShot {
        handle: RegistryHandle,
        calls: Cell<usize>,
    }

    impl ContentObserver for OneShot {
        fn on_content_changed(&self, _content: &str) {
            self.calls.set(self.calls.get() + 1);
            self.handle.detach_self(self);
        }
    }

    #[test]
    fn test_attach_is_idempotent() {
        let registry = ObserverRegistry::new();
        let recorder = Rc::new(Recorder::default());

        assert!(registry.attach(recorder.clone()));
        assert!(!registry.attach(recorder.clone()));
        assert_eq!(registry.len(), 1);

        registry.notify_all("x");
        assert_eq!(*recorder.seen.borrow(), vec!["x".to_string()]);
    }

    #[test]
    fn test_detach() {
        let registry = ObserverRegistry::new();
        let recorder = Rc::new(Recorder::default());

        registry.attach(recorder.clone());
        assert!(registry.contains(&recorder));
        assert!(registry.detach(&recorder));
        assert!(!registry.detach(&recorder));
        assert!(registry.is_empty());

        registry.notify_all("ignored");
        assert!(recorder.seen.borrow().is_empty());
    }

    #[test]
    fn test_notify_in_attachment_order() {
        struct Tagged {
            tag: &'static str,
            log: Rc<RefCell<Vec<&'static str>>>,
        }

        impl ContentObserver for Tagged {
            fn on_content_changed(&self, _content: &str) {
                self.log.borrow_mut().push(self.tag);
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = ObserverRegistry::new();
        for tag in ["first", "second", "third"] {
            registry.attach(Rc::new(Tagged {
                tag,
                log: log.clone(),
            }));
        }

        registry.notify_all("");
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_self_detach_during_notification() {
        let registry = ObserverRegistry::new();
        let one_shot = Rc::new(OneShot {
            handle: registry.handle(),
            calls: Cell::new(0),
        });
        let recorder = Rc::new(Recorder::default());

        registry.attach(one_shot.clone());
        registry.attach(recorder.clone());

        registry.notify_all("a");
        registry.notify_all("b");

        assert_eq!(one_shot.calls.get(), 1);
        assert_eq!(registry.len(), 1);
        // The observer after the detaching one still saw both changes
        assert_eq!(recorder.seen.borrow().len(), 2);
    }

    #[test]
    fn test_handle_outlives_registry() {
        let registry = ObserverRegistry::new();
        let handle = registry.handle();
        assert!(handle.is_alive());

        drop(registry);
        assert!(!handle.is_alive());
        assert!(!handle.attach(Rc::new(Recorder::default())));
    }
}
