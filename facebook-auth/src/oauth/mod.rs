//! Facebook OAuth 2.0 client.
//!
//! Supports the server-side "code" flow and the client-side implicit "token"
//! flow, plus the profile fetch that usually follows a code exchange.

mod access_token;
mod client;
mod code_flow;
mod config;
mod graph;
mod token_flow;
mod urls;

pub use access_token::{AccessToken, Profile};
pub use client::{Client, ClientBuilder};
pub use code_flow::CodeFlow;
pub use config::{AppConfig, AppOptions, Scope};
pub use graph::Graph;
pub use token_flow::TokenFlow;
pub use urls::FacebookUrls;
