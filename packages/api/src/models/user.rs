//! # Profile of the logged-in user
//!
//! [`UserInfo`] is the body of `GET /auth/me`. Every field is optional on the
//! client side: the navigation bar only needs a display name and an avatar, and
//! the anonymous-record link needs the numeric id when the backend sends it.

use serde::{Deserialize, Serialize};

/// Fallback shown when the account has no nickname.
pub const DEFAULT_NICKNAME: &str = "사용자";

/// User information returned by the backend for a valid bearer token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    /// Kakao account id, sent as a decimal string.
    #[serde(default)]
    pub kakao_id: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to a generic label if nickname is not set.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_NICKNAME)
    }

    /// Avatar URL, if the profile carries a non-empty one.
    pub fn avatar(&self) -> Option<&str> {
        self.profile_image.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_parses() {
        let user: UserInfo = serde_json::from_str(r#"{"nickname":"민지"}"#).unwrap();
        assert_eq!(user.display_name(), "민지");
        assert!(user.avatar().is_none());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_full_profile_parses() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":1,"kakao_id":"3141592653","nickname":"민지","profile_image":null}"#,
        )
        .unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.kakao_id.as_deref(), Some("3141592653"));
        assert_eq!(user.display_name(), "민지");
        assert!(user.avatar().is_none());
    }

    #[test]
    fn test_display_name_fallback() {
        let user = UserInfo {
            nickname: Some(String::new()),
            profile_image: Some("https://k.kakaocdn.net/p.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), DEFAULT_NICKNAME);
        assert_eq!(user.avatar(), Some("https://k.kakaocdn.net/p.jpg"));
    }
}
