//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod browser;

mod services;
pub use services::{make_identity, use_services, ClientIdentity, ClientRecorder, PlatformStore, Services};

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{consume_token_from_url, logout, nav_view, LoginLink, NavAuth, NavView};

mod record_wizard;
pub use record_wizard::{slider_background, RecordWizard};
