//! # facebook-auth
//!
//! Helpers for logging users in with Facebook's OAuth 2.0 dialog:
//! - Dialog URLs for the server-side "code" flow and the implicit "token" flow
//! - Exchanging an authorization code for an access token
//! - Fetching the user's profile with that token
//!
//! The client is stateless configuration plus blocking HTTP calls; nothing is
//! cached, retried or persisted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use facebook_auth::oauth::Client;
//!
//! let client = Client::builder()
//!     .app_id("123")
//!     .app_secret("s3cr3t")
//!     .oauth_code_redirect_uri("https://example.com/account/facebook-authenticate-oauth")
//!     .build()?;
//!
//! // Redirect the user here...
//! let dialog_url = client.code_flow().dialog_url(None, None)?;
//!
//! // ...and on the way back exchange the `code` query parameter.
//! let (access_token, profile) = client
//!     .code_flow()
//!     .get_access_token_and_profile(Some(code), None, None)?;
//! ```

pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
