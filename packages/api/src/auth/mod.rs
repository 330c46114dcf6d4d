//! # Authentication helpers
//!
//! The client never validates a token itself. It stores whatever the OAuth
//! redirect hands over, sends it as a bearer header, and forgets it as soon as
//! the backend rejects it.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`auth_headers`] | JSON content type plus `Authorization: Bearer` when a token is stored |
//! | [`fetch_user_info`] | `GET /auth/me`; a rejected token is removed |
//! | [`consume_token_from_query`] | one-time pickup of `?token=` after the OAuth redirect |
//! | [`link_anonymous_records`] | attach records saved under the anonymous id to the account |

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use store::{Identity, KeyValueStore};

use crate::backend::{ApiError, Backend};
use crate::models::{LinkDataRequest, UserInfo};

/// Query parameter the OAuth callback uses to deliver the token.
pub const TOKEN_PARAM: &str = "token";

/// Headers for every call to the backend.
pub fn auth_headers<D: KeyValueStore, V: KeyValueStore>(identity: &Identity<D, V>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = identity.token().filter(|t| !t.is_empty()) {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("stored token is not a valid header value, sending without it"),
        }
    }
    headers
}

/// Look up the logged-in user.
///
/// Returns `None` without a request when no token is stored. A non-success
/// status means the token is no longer accepted, so it is removed. Transport
/// and decode failures keep the token and also return `None`.
pub async fn fetch_user_info<B, D, V>(backend: &B, identity: &Identity<D, V>) -> Option<UserInfo>
where
    B: Backend,
    D: KeyValueStore,
    V: KeyValueStore,
{
    let token = identity.token().filter(|t| !t.is_empty())?;

    match backend.current_user(&token).await {
        Ok(user) => Some(user),
        Err(ApiError::Status(status)) => {
            tracing::info!("token rejected with HTTP {status}, logging out");
            identity.remove_token();
            None
        }
        Err(e) => {
            tracing::warn!("failed to fetch user info: {e}");
            None
        }
    }
}

/// Extract the `token` parameter from a URL query string (with or without `?`).
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Store a token delivered via the query string.
///
/// Returns `true` when a token was consumed and the caller should rewrite the
/// address bar without the query.
pub fn consume_token_from_query<D: KeyValueStore, V: KeyValueStore>(
    identity: &Identity<D, V>,
    query: &str,
) -> bool {
    match token_from_query(query) {
        Some(token) => {
            identity.set_token(&token);
            true
        }
        None => false,
    }
}

/// Forget the stored token.
pub fn logout<D: KeyValueStore, V: KeyValueStore>(identity: &Identity<D, V>) {
    identity.remove_token();
}

/// Attach records saved under the anonymous id to `user`.
///
/// Runs at most once per browser session. Returns the number of records moved,
/// or `None` when nothing was sent or the call failed.
pub async fn link_anonymous_records<B, D, V>(
    backend: &B,
    identity: &Identity<D, V>,
    user: &UserInfo,
) -> Option<u64>
where
    B: Backend,
    D: KeyValueStore,
    V: KeyValueStore,
{
    if identity.anon_linked() {
        return None;
    }
    let user_id = user.id?;

    let body = LinkDataRequest {
        user_id: user_id.to_string(),
        anon_id: identity.anon_id(),
    };
    match backend.link_anon_data(auth_headers(identity), &body).await {
        Ok(resp) => {
            identity.mark_anon_linked();
            tracing::debug!("linked {} anonymous records to user {user_id}", resp.updated_count);
            Some(resp.updated_count)
        }
        Err(e) => {
            tracing::warn!("failed to link anonymous records: {e}");
            None
        }
    }
}
