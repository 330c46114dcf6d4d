//! Client services shared by every view.
//!
//! [`Services`] is provided once at the app root and read with
//! [`use_services`]. Storage is picked per platform:
//! - **Web** (WASM + `web` feature): `localStorage` / `sessionStorage` via [`store::WebStorage`]
//! - **Native** (desktop tools, tests): [`store::MemoryStore`], forgotten on exit

use api::{Event, HttpBackend};
use dioxus::prelude::*;
use record::Recorder;
use store::{Identity, MoodPingConfig};

use crate::browser;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::WebStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type ClientIdentity = Identity<PlatformStore, PlatformStore>;
pub type ClientRecorder = Recorder<HttpBackend, PlatformStore, PlatformStore>;

/// Backend origin used when neither the config nor the page provide one.
const FALLBACK_BASE_URL: &str = "http://localhost:8000";

/// Create the platform identity (durable store, session store).
pub fn make_identity() -> ClientIdentity {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Identity::new(store::WebStorage::local(), store::WebStorage::session())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Identity::new(store::MemoryStore::new(), store::MemoryStore::new())
    }
}

#[derive(Clone)]
pub struct Services {
    pub config: MoodPingConfig,
    pub backend: HttpBackend,
    pub identity: ClientIdentity,
    pub recorder: ClientRecorder,
}

impl Services {
    pub fn new(config: MoodPingConfig) -> Self {
        let base_url = if config.api.base_url.is_empty() {
            browser::origin().unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
        } else {
            config.api.base_url.clone()
        };
        tracing::debug!("backend at {base_url}");

        let backend = HttpBackend::new(base_url);
        let identity = make_identity();
        let recorder = Recorder::new(backend.clone(), identity.clone());
        Self {
            config,
            backend,
            identity,
            recorder,
        }
    }

    /// Fire-and-forget analytics. The caller never waits and never sees a failure.
    pub fn track(&self, event: Event) {
        let events = self.recorder.events().clone();
        spawn(async move {
            events.log(event).await;
        });
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
