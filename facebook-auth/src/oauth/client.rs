//! Configured client holding app credentials and the HTTP transport.

use std::sync::OnceLock;

use log::*;
use secrecy::SecretString;

use super::code_flow::CodeFlow;
use super::graph::Graph;
use super::token_flow::TokenFlow;
use super::{AppConfig, AppOptions, FacebookUrls, Scope};
use crate::error::{invalid_response, Error, InvalidResponseKind};
use crate::http::{HttpClientBuilder, HttpClientConfig};

/// Facebook OAuth client.
///
/// Immutable after construction: every operation only reads the configuration,
/// so one instance can be shared across threads.
///
/// The HTTP transport is only built on the first token or profile call, so
/// building a client per request just to render a dialog URL costs no thread
/// and is safe inside an async handler. Hosts making many exchanges can pass a
/// shared transport with [`ClientBuilder::http_client`].
///
/// ```rust,ignore
/// let client = Client::builder()
///     .app_id("123")
///     .app_secret("s3cr3t")
///     .app_scope("email,user_birthday")
///     .oauth_code_redirect_uri("https://example.com/account/facebook-authenticate-oauth")
///     .build()?;
///
/// let url = client.code_flow().dialog_url(None, None)?;
/// ```
#[derive(Debug)]
pub struct Client {
    config: AppConfig,
    urls: FacebookUrls,
    http_config: HttpClientConfig,
    http: OnceLock<reqwest::blocking::Client>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn urls(&self) -> &FacebookUrls {
        &self.urls
    }

    /// Server-side flow: dialog, code exchange and token + profile retrieval.
    pub fn code_flow(&self) -> CodeFlow<'_> {
        CodeFlow::new(self)
    }

    /// Client-side implicit flow: dialog only.
    pub fn token_flow(&self) -> TokenFlow<'_> {
        TokenFlow::new(self)
    }

    /// Graph API calls made with an access token.
    pub fn graph(&self) -> Graph<'_> {
        Graph::new(self)
    }

    /// Issue one blocking GET and return the body of a successful response.
    pub(crate) fn get(&self, url: &str) -> Result<String, Error> {
        let endpoint = endpoint_of(url);
        let http = self.transport().map_err(|e| e.at(&endpoint))?;
        debug!("GET {}", endpoint);

        let response = http.get(url).send().map_err(|e| {
            warn!("Failed to reach {}: {:?}", endpoint, e);
            Error::from(e).at(&endpoint)
        })?;

        let status = response.status();
        if status.is_success() {
            response.text().map_err(|e| {
                warn!("Failed to read response body from {}: {:?}", endpoint, e);
                Error::from(e).at(&endpoint)
            })
        } else {
            let error_text = response.text().unwrap_or_default();
            warn!("{} returned {}: {}", endpoint, status, error_text);
            Err(
                invalid_response(InvalidResponseKind::ErrorStatus(status.as_u16()), &error_text)
                    .at(&endpoint),
            )
        }
    }
}

impl Client {
    /// The blocking transport, built on first use.
    fn transport(&self) -> Result<&reqwest::blocking::Client, Error> {
        if let Some(http) = self.http.get() {
            return Ok(http);
        }
        let http = HttpClientBuilder::new()
            .with_config(self.http_config.clone())
            .build()?;
        debug!("Started HTTP transport for app_id {}", self.config.app_id());
        Ok(self.http.get_or_init(|| http))
    }
}

/// Strip the query from a request URL so it can be logged or reported.
fn endpoint_of(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => url.split('?').next().unwrap_or_default().to_string(),
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    options: AppOptions,
    http_config: HttpClientConfig,
    http_client: Option<reqwest::blocking::Client>,
    urls: FacebookUrls,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all application options at once.
    pub fn options(mut self, options: AppOptions) -> Self {
        self.options = options;
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.options.app_id = Some(app_id.into());
        self
    }

    pub fn app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.options.app_secret = Some(SecretString::new(app_secret.into()));
        self
    }

    pub fn app_scope(mut self, app_scope: impl Into<Scope>) -> Self {
        self.options.app_scope = Some(app_scope.into());
        self
    }

    pub fn app_domain(mut self, app_domain: impl Into<String>) -> Self {
        self.options.app_domain = Some(app_domain.into());
        self
    }

    pub fn oauth_code_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.options.oauth_code_redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn oauth_token_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.options.oauth_token_redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Timeout and user agent for the outbound calls.
    pub fn http_config(mut self, http_config: HttpClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Use an existing transport instead of building one. Takes precedence
    /// over [`ClientBuilder::http_config`].
    pub fn http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn urls(mut self, urls: FacebookUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Validate the configuration. No transport is started here.
    pub fn build(self) -> Result<Client, Error> {
        let config = AppConfig::new(self.options)?;

        debug!("Built Facebook OAuth client for app_id {}", config.app_id());

        let http = match self.http_client {
            Some(http_client) => OnceLock::from(http_client),
            None => OnceLock::new(),
        };
        Ok(Client {
            config,
            urls: self.urls,
            http_config: self.http_config,
            http,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{ConfigurationErrorKind, ErrorKind};

    /// Client with both redirect URIs configured and graph calls sent to `graph_base_url`.
    pub(crate) fn test_client(graph_base_url: &str) -> Client {
        Client::builder()
            .app_id("123")
            .app_secret("s3cr3t")
            .app_scope("email,user_birthday")
            .oauth_code_redirect_uri("http://example.com/oauth-code")
            .oauth_token_redirect_uri("http://example.com/oauth-token")
            .urls(FacebookUrls::with_graph_base(graph_base_url))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_with_credentials() {
        let client = Client::builder().app_id("1").app_secret("s").build().unwrap();
        assert_eq!(client.config().app_id(), "1");
        assert_eq!(client.urls(), &FacebookUrls::default());
    }

    #[test]
    fn test_build_starts_no_transport() {
        let client = test_client("https://graph.facebook.com");
        client.code_flow().dialog_url(None, None).unwrap();
        client.token_flow().dialog_url(None, None).unwrap();
        client.graph().profile_url("AAA").unwrap();
        assert!(client.http.get().is_none());
    }

    #[test]
    fn test_transport_built_on_first_request_and_reused() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/me")
            .match_query(mockito::Matcher::Any)
            .with_body("{}")
            .expect(2)
            .create();
        let client = test_client(&server.url());
        let url = format!("{}/me?access_token=AAA", server.url());

        client.get(&url).unwrap();
        let first = client.http.get().map(|http| http as *const reqwest::blocking::Client);
        client.get(&url).unwrap();
        let second = client.http.get().map(|http| http as *const reqwest::blocking::Client);

        mock.assert();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_with_shared_http_client() {
        let shared = HttpClientBuilder::new().build().unwrap();
        let client = Client::builder()
            .app_id("1")
            .app_secret("s")
            .http_client(shared)
            .build()
            .unwrap();
        assert!(client.http.get().is_some());
    }

    #[test]
    fn test_build_without_app_secret() {
        let err = Client::builder().app_id("1").build().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Configuration(ConfigurationErrorKind::MissingAppSecret)
        );
    }

    #[test]
    fn test_build_with_empty_app_id() {
        let err = Client::builder().app_id("").app_secret("s").build().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Configuration(ConfigurationErrorKind::MissingAppId)
        );
    }

    #[test]
    fn test_endpoint_of_strips_query() {
        assert_eq!(
            endpoint_of("https://graph.facebook.com/oauth/access_token?client_secret=shh&code=c"),
            "https://graph.facebook.com/oauth/access_token"
        );
    }

    #[test]
    fn test_get_reports_error_status() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/me")
            .match_query(mockito::Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":{"message":"Invalid OAuth access token."}}"#)
            .create();
        let client = test_client(&server.url());

        let err = client
            .get(&format!("{}/me?access_token=bad", server.url()))
            .unwrap_err();

        mock.assert();
        assert_eq!(
            err.error_kind,
            ErrorKind::InvalidResponse(InvalidResponseKind::ErrorStatus(400))
        );
        assert_eq!(err.endpoint, Some(format!("{}/me", server.url())));
    }

    #[test]
    fn test_get_reports_transport_failure() {
        // Nothing listens on port 9 locally.
        let client = test_client("http://127.0.0.1:9");
        let err = client.get("http://127.0.0.1:9/me?access_token=t").unwrap_err();
        assert!(matches!(err.error_kind, ErrorKind::Transport(_)));
        assert_eq!(err.endpoint, Some("http://127.0.0.1:9/me".to_string()));
    }
}
