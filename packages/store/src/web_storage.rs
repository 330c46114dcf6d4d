//! # Web Storage backend — browser-side persistence
//!
//! [`WebStorage`] is the [`KeyValueStore`] implementation used on the **web platform**.
//! It wraps the browser's two `Storage` areas through [`web_sys`]:
//!
//! | Area | Lifetime | Used for |
//! |------|----------|----------|
//! | `localStorage` | until the user clears site data | anonymous id, bearer token |
//! | `sessionStorage` | until the tab closes | session id, link marker |
//!
//! ## Handle management
//!
//! `WebStorage` only remembers which area it points at and looks the `Storage`
//! object up on every operation. `web_sys::Storage` is not `Send` and holding it
//! across renders buys nothing; the lookup is a property read on `window`.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Storage can be disabled by privacy settings or full;
//! the client then behaves as if nothing was ever stored.

use crate::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Area {
    Local,
    Session,
}

/// `Storage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    area: Area,
}

impl WebStorage {
    /// Durable storage (`window.localStorage`).
    pub fn local() -> Self {
        Self { area: Area::Local }
    }

    /// Per-tab storage (`window.sessionStorage`).
    pub fn session() -> Self {
        Self {
            area: Area::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("{:?} storage unavailable, dropping write to {key}", self.area);
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
