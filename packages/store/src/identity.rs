//! # Client identity — anonymous id, session id and bearer token
//!
//! [`Identity`] bundles the two storage areas the client writes to and exposes
//! the identifiers attached to every backend call:
//!
//! | Value | Area | Key | Lifetime |
//! |-------|------|-----|----------|
//! | anonymous id | durable | [`ANON_ID_KEY`] | created once per browser profile |
//! | session id | volatile | [`SESSION_ID_KEY`] | created once per tab |
//! | bearer token | durable | [`TOKEN_KEY`] | set after OAuth, removed on logout or rejection |
//!
//! Ids are UUID v4 strings, generated lazily on first read and persisted
//! immediately so later reads return the same value.

use crate::KeyValueStore;

pub const ANON_ID_KEY: &str = "anon_id";
pub const SESSION_ID_KEY: &str = "session_id";
pub const TOKEN_KEY: &str = "mp_token";
/// Session marker set once anonymous records were linked to the account.
pub const ANON_LINKED_KEY: &str = "anon_linked";

/// Identity and token accessors over a durable and a volatile store.
#[derive(Clone, Debug)]
pub struct Identity<D, V> {
    durable: D,
    volatile: V,
}

impl<D: KeyValueStore, V: KeyValueStore> Identity<D, V> {
    pub fn new(durable: D, volatile: V) -> Self {
        Self { durable, volatile }
    }

    /// The persistent anonymous id, created on first use.
    pub fn anon_id(&self) -> String {
        get_or_create(&self.durable, ANON_ID_KEY)
    }

    /// The per-session id, created on first use in each session.
    pub fn session_id(&self) -> String {
        get_or_create(&self.volatile, SESSION_ID_KEY)
    }

    pub fn token(&self) -> Option<String> {
        self.durable.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.durable.set(TOKEN_KEY, token);
    }

    pub fn remove_token(&self) {
        self.durable.remove(TOKEN_KEY);
    }

    /// Presence check only. Expiry and signature are the backend's concern.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Whether anonymous records were already linked in this session.
    pub fn anon_linked(&self) -> bool {
        self.volatile.get(ANON_LINKED_KEY).is_some()
    }

    pub fn mark_anon_linked(&self) {
        self.volatile.set(ANON_LINKED_KEY, "1");
    }
}

fn get_or_create(store: &impl KeyValueStore, key: &str) -> String {
    if let Some(existing) = store.get(key).filter(|v| !v.is_empty()) {
        return existing;
    }
    let id = new_id();
    store.set(key, &id);
    tracing::debug!("created {key} {id}");
    id
}

/// Fresh UUID v4 string.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
