//! Request and response types, plus re-exports from external crates used in the public API.
//!
//! The re-exports are here so users don't need to add these dependencies to their
//! `Cargo.toml`.

pub mod request;
pub mod response;

/// Raw response body type held by [`crate::Response`].
pub use bytes::Bytes;
/// Date and time types for timestamps in API responses.
pub use chrono::{DateTime, NaiveDate, Utc};
/// Header map of a [`crate::Response`] and of [`crate::Config`] default headers.
pub use reqwest::header::HeaderMap;
/// HTTP method and status types used by [`crate::Endpoint`].
pub use reqwest::{Method, StatusCode};
