pub mod config;
pub mod identity;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use config::MoodPingConfig;
pub use identity::Identity;

/// String key-value storage with browser `Storage` semantics.
///
/// Implementations never fail: a backend that cannot be reached reads as
/// empty and ignores writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
