//! Storage abstraction for the two persisted page values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Best-effort key/value persistence injected into the page session.
///
/// Implementations swallow write failures and surface read failures as
/// `None`; the session always has a default to fall back on.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used by tests and server-side rendering.
///
/// Clones share the same backing map, so a store handed to one session can
/// be inspected afterwards or reused to hydrate a second session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        store.set("key", "value");
        assert_eq!(store.get("key"), Some("value".to_string()));
        store.set("key", "overwritten");
        assert_eq!(store.get("key"), Some("overwritten".to_string()));
    }

    #[test]
    fn clones_share_backing_values() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.set("key", "value");
        assert_eq!(clone.get("key"), Some("value".to_string()));
    }
}
