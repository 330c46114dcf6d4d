//! Recording [`Backend`] double for tests in this and dependent crates.

use std::sync::{Arc, Mutex};

use reqwest::header::HeaderMap;

use crate::backend::{ApiError, Backend};
use crate::events::EventLogRequest;
use crate::models::{LinkDataRequest, LinkDataResponse, MoodRecordRequest, MoodRecordResponse, UserInfo};

#[derive(Debug)]
struct MockState {
    record_reply: Result<MoodRecordResponse, ApiError>,
    user_reply: Result<UserInfo, ApiError>,
    event_error: Option<ApiError>,
    records: Vec<(HeaderMap, MoodRecordRequest)>,
    user_lookups: Vec<String>,
    events: Vec<(HeaderMap, EventLogRequest)>,
    links: Vec<LinkDataRequest>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            record_reply: Err(ApiError::Status(500)),
            user_reply: Err(ApiError::Status(401)),
            event_error: None,
            records: Vec::new(),
            user_lookups: Vec::new(),
            events: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Backend that answers with canned replies and records every request.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect another.
#[derive(Clone, Debug, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    /// Records fail with HTTP 500 and `/auth/me` with 401 until configured.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, reply: Result<MoodRecordResponse, ApiError>) -> Self {
        self.state.lock().unwrap().record_reply = reply;
        self
    }

    pub fn with_user(self, reply: Result<UserInfo, ApiError>) -> Self {
        self.state.lock().unwrap().user_reply = reply;
        self
    }

    pub fn with_event_error(self, error: ApiError) -> Self {
        self.state.lock().unwrap().event_error = Some(error);
        self
    }

    pub fn records(&self) -> Vec<(HeaderMap, MoodRecordRequest)> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn user_lookups(&self) -> Vec<String> {
        self.state.lock().unwrap().user_lookups.clone()
    }

    pub fn events(&self) -> Vec<(HeaderMap, EventLogRequest)> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events().into_iter().map(|(_, e)| e.event_name).collect()
    }

    pub fn links(&self) -> Vec<LinkDataRequest> {
        self.state.lock().unwrap().links.clone()
    }
}

impl Backend for MockBackend {
    async fn create_mood_record(
        &self,
        headers: HeaderMap,
        body: &MoodRecordRequest,
    ) -> Result<MoodRecordResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.records.push((headers, body.clone()));
        state.record_reply.clone()
    }

    async fn current_user(&self, token: &str) -> Result<UserInfo, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.user_lookups.push(token.to_string());
        state.user_reply.clone()
    }

    async fn log_event(&self, headers: HeaderMap, body: &EventLogRequest) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.events.push((headers, body.clone()));
        match &state.event_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn link_anon_data(
        &self,
        _headers: HeaderMap,
        body: &LinkDataRequest,
    ) -> Result<LinkDataResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.links.push(body.clone());
        Ok(LinkDataResponse { updated_count: 0 })
    }
}
