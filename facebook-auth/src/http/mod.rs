//! HTTP client building for the provider endpoints.

mod client;

pub use client::{HttpClientBuilder, HttpClientConfig};
