//! # reqwest implementation of [`Backend`]
//!
//! On `wasm32` reqwest drives the browser's `fetch`, so the same client works
//! in the web build and in native tools. reqwest on the web requires absolute
//! URLs, which is why [`HttpBackend`] always carries an origin.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::backend::{ApiError, Backend};
use crate::events::EventLogRequest;
use crate::models::{LinkDataRequest, LinkDataResponse, MoodRecordRequest, MoodRecordResponse, UserInfo};
use crate::routes;

/// HTTP client for the MoodPing backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend rooted at `base_url` (scheme + host, trailing slash optional).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map non-2xx statuses to [`ApiError::Status`].
fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl Backend for HttpBackend {
    async fn create_mood_record(
        &self,
        headers: HeaderMap,
        body: &MoodRecordRequest,
    ) -> Result<MoodRecordResponse, ApiError> {
        let response = self
            .client
            .post(self.url(routes::MOOD_RECORDS))
            .headers(headers)
            .json(body)
            .send()
            .await?;
        json(check(response)?).await
    }

    async fn current_user(&self, token: &str) -> Result<UserInfo, ApiError> {
        let response = self
            .client
            .get(self.url(routes::AUTH_ME))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        json(check(response)?).await
    }

    async fn log_event(&self, headers: HeaderMap, body: &EventLogRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(routes::EVENTS))
            .headers(headers)
            .json(body)
            .send()
            .await?;
        check(response)?;
        Ok(())
    }

    async fn link_anon_data(
        &self,
        headers: HeaderMap,
        body: &LinkDataRequest,
    ) -> Result<LinkDataResponse, ApiError> {
        let response = self
            .client
            .post(self.url(routes::LINK_DATA))
            .headers(headers)
            .json(body)
            .send()
            .await?;
        json(check(response)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalised() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(
            backend.url(routes::MOOD_RECORDS),
            "http://localhost:8000/mood-records"
        );
    }
}
