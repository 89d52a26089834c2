//! `localStorage`-backed implementation of the core storage capability.

use bloomnote_core::KeyValueStore;

/// Persists page state in the browser's `localStorage`.
///
/// Reads and writes are best-effort: when storage is unavailable (or when
/// compiled for a non-wasm target, as in server-side rendering tests) reads
/// yield `None` and writes are dropped, so the page degrades to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(storage) = crate::dom::local_storage() else {
                log::warn!("localStorage unavailable; treating {key:?} as unset");
                return None;
            };
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        match crate::dom::local_storage() {
            Some(storage) => {
                let _ = storage.set_item(key, value);
            }
            None => log::warn!("localStorage unavailable; dropping write to {key:?}"),
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }
}
