//! The backend seam: the four HTTP endpoints the client consumes.

use reqwest::header::HeaderMap;
use thiserror::Error;

use crate::events::EventLogRequest;
use crate::models::{LinkDataRequest, LinkDataResponse, MoodRecordRequest, MoodRecordResponse, UserInfo};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Operations against the MoodPing backend.
///
/// Request headers are passed in by the caller so that every call carries the
/// same auth conventions (see [`crate::auth::auth_headers`]).
pub trait Backend {
    /// `POST /mood-records`
    async fn create_mood_record(
        &self,
        headers: HeaderMap,
        body: &MoodRecordRequest,
    ) -> Result<MoodRecordResponse, ApiError>;

    /// `GET /auth/me` with a bearer token.
    async fn current_user(&self, token: &str) -> Result<UserInfo, ApiError>;

    /// `POST /api/events`. The response body is ignored.
    async fn log_event(&self, headers: HeaderMap, body: &EventLogRequest) -> Result<(), ApiError>;

    /// `POST /users/link-data`
    async fn link_anon_data(
        &self,
        headers: HeaderMap,
        body: &LinkDataRequest,
    ) -> Result<LinkDataResponse, ApiError>;
}
