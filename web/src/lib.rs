//! Binding of the Facebook OAuth client to a hosting web framework.
//!
//! The host supplies two collaborators: a [`settings::SettingsStore`] holding
//! the application's configuration and an [`request::InboundRequest`] giving
//! access to that store and to the request's query/form parameters.
//! [`facebook::FacebookRequest`] resolves the client configuration from them
//! and reads the `code` parameter for the code-flow exchanges.

pub mod facebook;
pub mod request;
pub mod settings;

pub use facebook::{FacebookRequest, RequestCodeFlow};
pub use request::{InboundRequest, ParamsRequest};
pub use settings::SettingsStore;
