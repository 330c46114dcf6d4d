//! Network side of the record flow.

use api::auth::auth_headers;
use api::{ApiError, Backend, Event, EventLogger, MoodRecordRequest, MoodRecordResponse};
use store::{Identity, KeyValueStore};

/// Submits records and logs the record-screen events for one client identity.
#[derive(Clone, Debug)]
pub struct Recorder<B, D, V> {
    backend: B,
    identity: Identity<D, V>,
    events: EventLogger<B, D, V>,
}

impl<B, D, V> Recorder<B, D, V>
where
    B: Backend + Clone,
    D: KeyValueStore + Clone,
    V: KeyValueStore + Clone,
{
    pub fn new(backend: B, identity: Identity<D, V>) -> Self {
        let events = EventLogger::new(backend.clone(), identity.clone());
        Self {
            backend,
            identity,
            events,
        }
    }

    pub fn identity(&self) -> &Identity<D, V> {
        &self.identity
    }

    pub fn events(&self) -> &EventLogger<B, D, V> {
        &self.events
    }

    /// `POST /mood-records` with the client's auth headers.
    pub async fn submit(&self, request: &MoodRecordRequest) -> Result<MoodRecordResponse, ApiError> {
        let result = self
            .backend
            .create_mood_record(auth_headers(&self.identity), request)
            .await;
        match &result {
            Ok(resp) => tracing::info!(
                "record {} saved, analysis {}",
                resp.record_id,
                resp.analysis_status
            ),
            Err(e) => tracing::error!("failed to save mood record: {e}"),
        }
        result
    }

    /// Log the final confirmation. Resolves once the beacon has been sent
    /// (or dropped), so the caller can navigate afterwards.
    pub async fn confirm(&self) {
        self.events.log(Event::FeedbackConfirmed).await;
    }
}
