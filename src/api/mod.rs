//! Upstream API module
//!
//! Talks to the Ultrahuman Partnership API.

pub mod client;

pub use client::{ApiError, ApiResult, MetricsSource, UltrahumanClient};
