//! Backend endpoint paths.

pub const MOOD_RECORDS: &str = "/mood-records";
pub const AUTH_ME: &str = "/auth/me";
pub const EVENTS: &str = "/api/events";
pub const LINK_DATA: &str = "/users/link-data";
