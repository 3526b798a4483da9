//! # RecGov
//!
//! This crate provides a client for the Recreation.gov API, which is used to look up
//! campgrounds and timed-entry facilities and fetch their availability.

/// Client configuration (base URL, User-Agent, log level).
mod config;
pub use config::*;

/// Payload and error types for the Recreation.gov API.
mod types;
pub use types::*;

/// The lookups the availability checker needs from Recreation.gov.
mod api;
pub use api::*;

/// HTTP client for the Recreation.gov API.
mod rec_gov_client;
pub use rec_gov_client::*;
