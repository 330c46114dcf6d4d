//! # Analytics events
//!
//! [`Event`] is the closed set of beacons the client emits, one variant per
//! event name with its payload as fields. [`EventLogger`] turns an event into a
//! [`EventLogRequest`] stamped with the client's identity and posts it.
//!
//! Delivery is at-most-once and best-effort: [`EventLogger::log`] never fails,
//! never retries, and reports problems only through `tracing`. Callers that
//! must not wait (UI handlers) spawn the returned future; callers that must
//! sequence after the beacon (the final "confirm" button) await it.

use serde::Serialize;
use serde_json::{json, Value};
use store::{identity::new_id, Identity, KeyValueStore};

use crate::auth::auth_headers;
use crate::backend::Backend;
use crate::models::{Intensity, Mood};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    RecordScreenView,
    EmojiSelected { label: Mood },
    IntensitySelected { intensity: Intensity },
    TextInputStart,
    RecordComplete { record_id: i64 },
    AnalysisView { record_id: i64, status: String },
    FeedbackConfirmed,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::RecordScreenView => "record_screen_view",
            Event::EmojiSelected { .. } => "emoji_selected",
            Event::IntensitySelected { .. } => "intensity_selected",
            Event::TextInputStart => "text_input_start",
            Event::RecordComplete { .. } => "record_complete",
            Event::AnalysisView { .. } => "analysis_view",
            Event::FeedbackConfirmed => "feedback_confirmed",
        }
    }

    /// Payload sent as `extra_data`. Events without fields send `{}`.
    pub fn extra_data(&self) -> Value {
        match self {
            Event::EmojiSelected { label } => json!({ "label": label }),
            Event::IntensitySelected { intensity } => json!({ "intensity": intensity }),
            Event::RecordComplete { record_id } => json!({ "record_id": record_id }),
            Event::AnalysisView { record_id, status } => {
                json!({ "record_id": record_id, "status": status })
            }
            Event::RecordScreenView | Event::TextInputStart | Event::FeedbackConfirmed => json!({}),
        }
    }
}

/// Body of `POST /api/events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLogRequest {
    pub event_id: String,
    pub session_id: String,
    pub user_id: Option<String>,
    pub anon_id: Option<String>,
    pub event_name: String,
    pub extra_data: Value,
}

impl EventLogRequest {
    /// Stamp `event` with a fresh event id and the client's identifiers.
    ///
    /// `user_id` is always null: the backend resolves the user from the
    /// bearer token when there is one.
    pub fn new<D: KeyValueStore, V: KeyValueStore>(event: &Event, identity: &Identity<D, V>) -> Self {
        Self {
            event_id: new_id(),
            session_id: identity.session_id(),
            user_id: None,
            anon_id: Some(identity.anon_id()),
            event_name: event.name().to_string(),
            extra_data: event.extra_data(),
        }
    }
}

/// Best-effort event sender.
#[derive(Clone, Debug)]
pub struct EventLogger<B, D, V> {
    backend: B,
    identity: Identity<D, V>,
}

impl<B, D, V> EventLogger<B, D, V>
where
    B: Backend,
    D: KeyValueStore,
    V: KeyValueStore,
{
    pub fn new(backend: B, identity: Identity<D, V>) -> Self {
        Self { backend, identity }
    }

    /// Send `event`. Failures are logged and dropped.
    pub async fn log(&self, event: Event) {
        let body = EventLogRequest::new(&event, &self.identity);
        tracing::debug!("event {} {}", body.event_name, body.extra_data);

        if let Err(e) = self
            .backend
            .log_event(auth_headers(&self.identity), &body)
            .await
        {
            tracing::warn!("failed to log event {}: {e}", body.event_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ApiError;
    use crate::testing::MockBackend;
    use reqwest::header::AUTHORIZATION;
    use store::MemoryStore;

    fn identity() -> Identity<MemoryStore, MemoryStore> {
        Identity::new(MemoryStore::new(), MemoryStore::new())
    }

    #[test]
    fn test_event_payloads() {
        let e = Event::EmojiSelected { label: Mood::Calm };
        assert_eq!(e.name(), "emoji_selected");
        assert_eq!(e.extra_data(), json!({ "label": "calm" }));

        let e = Event::IntensitySelected {
            intensity: Intensity::clamped(3),
        };
        assert_eq!(e.extra_data(), json!({ "intensity": 3 }));

        let e = Event::AnalysisView {
            record_id: 9,
            status: "success".to_string(),
        };
        assert_eq!(e.name(), "analysis_view");
        assert_eq!(e.extra_data(), json!({ "record_id": 9, "status": "success" }));

        assert_eq!(Event::FeedbackConfirmed.extra_data(), json!({}));
    }

    #[test]
    fn test_request_carries_identity() {
        let id = identity();
        let first = EventLogRequest::new(&Event::RecordScreenView, &id);
        let second = EventLogRequest::new(&Event::TextInputStart, &id);

        assert_eq!(first.session_id, id.session_id());
        assert_eq!(first.anon_id.as_deref(), Some(id.anon_id().as_str()));
        assert!(first.user_id.is_none());
        assert_ne!(first.event_id, second.event_id);

        let wire = serde_json::to_value(&first).unwrap();
        assert_eq!(wire["user_id"], Value::Null);
        assert_eq!(wire["event_name"], "record_screen_view");
        assert_eq!(wire["extra_data"], json!({}));
    }

    #[tokio::test]
    async fn test_logger_posts_with_auth_headers() {
        let backend = MockBackend::new();
        let id = identity();
        id.set_token("jwt");
        let logger = EventLogger::new(backend.clone(), id);

        logger.log(Event::RecordComplete { record_id: 5 }).await;

        let events = backend.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1.event_name, "record_complete");
        assert_eq!(events[0].1.extra_data, json!({ "record_id": 5 }));
        assert_eq!(events[0].0[AUTHORIZATION], "Bearer jwt");
    }

    #[tokio::test]
    async fn test_logger_swallows_failures() {
        let backend = MockBackend::new().with_event_error(ApiError::Network("offline".to_string()));
        let logger = EventLogger::new(backend.clone(), identity());

        // Completes without panicking or surfacing the error
        logger.log(Event::FeedbackConfirmed).await;
        assert_eq!(backend.events().len(), 1);
    }
}
