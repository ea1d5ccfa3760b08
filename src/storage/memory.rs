use super::KeyValueStore;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory store for exercising note logic without a browser.
///
/// Uses `RefCell` since the app is single-threaded, which lets the trait keep
/// `&self` on every method.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every key and value currently stored.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.set("a", "1");
        store.remove("b");
        assert_eq!(store.keys(), vec!["a".to_string()]);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("a", "1");
        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.snapshot().len(), 1);
    }
}
