//! Error types for the `facebook-auth` crate.
//!
//! Follows the same pattern as the other layers: a root `Error` struct holding an
//! `error_kind` tree and an optional `source` for error chaining. Callers match on
//! `error_kind` to tell invalid input apart from provider or transport failures.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for facebook-auth.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
    /// Provider endpoint (scheme, host and path only) involved in the failure.
    pub endpoint: Option<String>,
}

impl Error {
    /// Attach the endpoint a transport or response error came from.
    ///
    /// Only pass endpoints without a query string: the token endpoint's query
    /// carries the app secret and the profile endpoint's carries the token.
    pub fn at(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }
}

/// Major categories of errors in facebook-auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The application configuration is incomplete.
    Configuration(ConfigurationErrorKind),
    /// A code-flow exchange was requested without an authorization code.
    MissingCode,
    /// A profile operation was requested without an access token.
    MissingToken,
    /// The provider answered, but not with what the endpoint documents.
    InvalidResponse(InvalidResponseKind),
    /// The provider could not be reached.
    Transport(TransportErrorKind),
    /// A removed operation was invoked.
    DeprecatedOperation(DeprecatedOperation),
}

/// Errors from incomplete configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationErrorKind {
    MissingAppId,
    MissingAppSecret,
    /// No redirect URI was passed and none is configured for the flow.
    MissingRedirectUri,
    /// A mandatory key is absent from the host's settings store.
    MissingSetting(String),
}

/// Errors from provider responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidResponseKind {
    /// The token endpoint body had no `access_token` field.
    MissingAccessToken,
    /// The body could not be parsed in the endpoint's documented format.
    MalformedBody,
    /// The provider returned a non-success HTTP status.
    ErrorStatus(u16),
}

/// Errors from the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

/// Operations that were removed along with their implicit token sourcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecatedOperation {
    /// `Graph::url_me`, replaced by `Graph::profile_url`.
    UrlMe,
    /// `Graph::me`, replaced by `Graph::get_profile`.
    Me,
}

impl DeprecatedOperation {
    /// Name of the removed operation.
    pub fn name(&self) -> &'static str {
        match self {
            DeprecatedOperation::UrlMe => "graph.url_me",
            DeprecatedOperation::Me => "graph.me",
        }
    }

    /// Name of the operation callers should migrate to.
    pub fn replacement(&self) -> &'static str {
        match self {
            DeprecatedOperation::UrlMe => "graph.profile_url(access_token)",
            DeprecatedOperation::Me => "graph.get_profile(access_token)",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Configuration(kind) => write!(f, "Configuration error: {:?}", kind),
            ErrorKind::MissingCode => write!(f, "Missing submitted code"),
            ErrorKind::MissingToken => write!(f, "Missing access token"),
            ErrorKind::InvalidResponse(kind) => write!(f, "Invalid response: {:?}", kind),
            ErrorKind::Transport(kind) => write!(f, "Transport error: {:?}", kind),
            ErrorKind::DeprecatedOperation(op) => write!(
                f,
                "{} has been removed, use {} instead",
                op.name(),
                op.replacement()
            ),
        }?;
        if let Some(endpoint) = &self.endpoint {
            write!(f, " at {}", endpoint)?;
        }
        if let Some(source) = &self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors happen before any network call is made.
        let error_kind = if err.is_builder() {
            ErrorKind::Transport(TransportErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Transport(TransportErrorKind::RequestFailed)
        } else {
            ErrorKind::Transport(TransportErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
            endpoint: None,
        }
    }
}

/// Helper function to create configuration errors.
pub fn configuration_error(kind: ConfigurationErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Configuration(kind),
        endpoint: None,
    }
}

/// Helper function to create invalid response errors.
pub fn invalid_response(kind: InvalidResponseKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::InvalidResponse(kind),
        endpoint: None,
    }
}

/// Helper function to create the missing code error.
pub fn missing_code() -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::MissingCode,
        endpoint: None,
    }
}

/// Helper function to create the missing token error.
pub fn missing_token() -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::MissingToken,
        endpoint: None,
    }
}

/// Helper function to create deprecated operation errors.
pub fn deprecated(op: DeprecatedOperation) -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::DeprecatedOperation(op),
        endpoint: None,
    }
}
