//! HTTP networking module
//!
//! Provides the HTTP client used to talk to the directory service.

mod client;

pub use client::{ApiResponse, HttpClient};
