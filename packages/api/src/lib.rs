//! # API crate — MoodPing backend client
//!
//! Everything the frontend needs to talk to the MoodPing backend: the wire
//! models, a [`Backend`] trait over the consumed endpoints, its `reqwest`
//! implementation, and the auth and analytics conventions layered on top.
//! The endpoints themselves are owned by the backend; this crate only
//! consumes their contracts.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Bearer headers, `/auth/me` lookup, token pickup from the OAuth redirect, anonymous-record linking |
//! | [`events`] | — | Typed analytics events and the best-effort [`EventLogger`] |
//! | [`models`] | — | Request/response bodies, the [`Mood`] vocabulary and [`Intensity`] scale |
//! | [`routes`] | — | Endpoint paths |
//! | [`testing`] | `testing` | A recording [`Backend`] double |
//!
//! ## Endpoints
//!
//! - `POST /mood-records`: save a record, returns the AI analysis
//! - `GET /auth/me`: profile for a bearer token
//! - `POST /api/events`: analytics beacon, response ignored
//! - `POST /users/link-data`: move anonymous records to an account

mod backend;
mod http;

pub mod auth;
pub mod events;
pub mod models;
pub mod routes;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::{ApiError, Backend};
pub use events::{Event, EventLogRequest, EventLogger};
pub use http::HttpBackend;
pub use models::{
    AnalysisResult, Intensity, Mood, MoodRecordRequest, MoodRecordResponse, UserInfo,
};
