//! # Client configuration — `moodping.toml`
//!
//! Defines the TOML file the web crate embeds at build time
//! (filename: [`MoodPingConfig::filename`] = `"moodping.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                              # empty = same origin as the page
//!
//! [routes]
//! home = "/"
//! login = "/kakao-auth/request-oauth-link"
//!
//! [ui]
//! scroll_delay_ms = 100
//! ```
//!
//! All structs derive `Default` with production values, so a missing or empty
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `moodping.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodPingConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend, without trailing slash.
    /// Empty string means the origin the page was served from.
    #[serde(default)]
    pub base_url: String,
}

/// Page routes the client navigates to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_home")]
    pub home: String,
    /// Entry point of the OAuth login redirect.
    #[serde(default = "default_login")]
    pub login: String,
}

fn default_home() -> String {
    "/".to_string()
}

fn default_login() -> String {
    "/kakao-auth/request-oauth-link".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            login: default_login(),
        }
    }
}

/// Presentation tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Delay before scrolling a newly revealed section into view.
    #[serde(default = "default_scroll_delay")]
    pub scroll_delay_ms: u32,
}

fn default_scroll_delay() -> u32 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_delay_ms: default_scroll_delay(),
        }
    }
}

impl MoodPingConfig {
    /// Builder method to point the client at a specific backend origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "moodping.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = MoodPingConfig::from_toml("").unwrap();
        assert_eq!(config, MoodPingConfig::default());
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.routes.home, "/");
        assert_eq!(config.routes.login, "/kakao-auth/request-oauth-link");
        assert_eq!(config.ui.scroll_delay_ms, 100);
    }

    #[test]
    fn test_partial_sections() {
        let config = MoodPingConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.moodping.example"

            [ui]
            scroll_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.moodping.example");
        assert_eq!(config.ui.scroll_delay_ms, 250);
        assert_eq!(config.routes, RoutesConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = MoodPingConfig::default().with_base_url("http://localhost:8000");
        let text = config.to_toml().unwrap();
        assert_eq!(MoodPingConfig::from_toml(&text).unwrap(), config);
    }
}
