//! Key-value persistence behind the notes core.
//!
//! Every read and write the app performs goes through [`KeyValueStore`], so the
//! note logic runs the same against `window.localStorage` in the browser and
//! against an in-memory map in native tests.

mod browser;
#[cfg(test)]
mod memory;

pub(crate) use browser::BrowserStorage;
#[cfg(test)]
pub(crate) use memory::MemoryStore;

use leptos::logging::warn;
use serde::{Deserialize, Serialize};

/// Key holding the JSON index of every known note.
pub(crate) const NOTE_LIST_KEY: &str = "note_lists";

/// Key holding the editor's typing mode flag.
pub(crate) const TYPING_MODE_KEY: &str = "typing_mode";

/// Keys that belong to non-note state and must never be used as note names.
pub(crate) const RESERVED_KEYS: [&str; 2] = [NOTE_LIST_KEY, TYPING_MODE_KEY];

/// Synchronous string store.
///
/// `get` returns `None` for a missing key and `remove` on a missing key is a
/// no-op. Writes never report failure to the caller.
pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Absent and unparsable values both come back as `None`.
pub(crate) fn load_json<T: for<'de> Deserialize<'de>>(
    store: &impl KeyValueStore,
    key: &str,
) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("ignoring malformed value under {key:?}: {e}");
            None
        }
    }
}

pub(crate) fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => warn!("failed to serialize value for {key:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteContent;

    #[test]
    fn test_load_json_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(load_json::<NoteContent>(&store, "nope").is_none());
    }

    #[test]
    fn test_load_json_malformed_is_none() {
        let store = MemoryStore::new();
        store.set("n", "{not json");
        assert!(load_json::<NoteContent>(&store, "n").is_none());

        store.set("n", r#"{"name": 3}"#);
        assert!(load_json::<NoteContent>(&store, "n").is_none());
    }

    #[test]
    fn test_save_json_writes_object_shape() {
        let store = MemoryStore::new();
        let content = NoteContent {
            name: "todo".to_string(),
            value: "milk".to_string(),
        };
        save_json(&store, "todo", &content);

        let raw = store.get("todo").expect("value should be written");
        let v: serde_json::Value = serde_json::from_str(&raw).expect("should be json");
        assert_eq!(v["name"], "todo");
        assert_eq!(v["value"], "milk");
        assert_eq!(load_json::<NoteContent>(&store, "todo"), Some(content));
    }

    #[test]
    fn test_store_through_reference() {
        let store = MemoryStore::new();
        let by_ref: &MemoryStore = &store;
        KeyValueStore::set(&by_ref, "k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        KeyValueStore::remove(&by_ref, "k");
        assert!(store.get("k").is_none());
    }
}
