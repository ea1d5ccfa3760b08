use super::KeyValueStore;
use leptos::logging::warn;

/// `window.localStorage`, looked up on every call.
///
/// When there is no window or storage is disabled, reads see nothing and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!("localStorage unavailable; dropping write to {key:?}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!("localStorage rejected write to {key:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
