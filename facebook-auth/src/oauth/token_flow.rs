//! Client-side implicit ("token") flow.
//!
//! Facebook returns the access token in the URL fragment of the redirect, which
//! the browser never sends to the server. Only the dialog link is built here;
//! getting the token to the server is up to the page's JavaScript.

use super::config::resolve_redirect_uri;
use super::{Client, Scope};
use crate::error::Error;

pub struct TokenFlow<'a> {
    client: &'a Client,
}

impl<'a> TokenFlow<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// URL of the authorization dialog for the implicit flow.
    ///
    /// Same as the code-flow dialog, but `redirect_uri` defaults to
    /// `oauth_token_redirect_uri` and `response_type=token` is appended.
    /// The redirect URI is encoded the same way, `/` included.
    pub fn dialog_url(
        &self,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<String, Error> {
        let config = self.client.config();
        let redirect_uri =
            resolve_redirect_uri(redirect_uri, config.oauth_token_redirect_uri())?;

        Ok(format!(
            "{}?client_id={}&scope={}&redirect_uri={}&response_type=token",
            self.client.urls().dialog_url,
            config.app_id(),
            config.resolve_scope(scope),
            urlencoding::encode(redirect_uri)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationErrorKind, ErrorKind};
    use crate::oauth::client::tests::test_client;

    #[test]
    fn test_dialog_url_uses_token_redirect_uri() {
        let client = test_client("https://graph.facebook.com");
        let url = client.token_flow().dialog_url(None, None).unwrap();
        assert_eq!(
            url,
            "https://www.facebook.com/dialog/oauth?client_id=123&scope=email,user_birthday&redirect_uri=http%3A%2F%2Fexample.com%2Foauth-token&response_type=token"
        );
    }

    #[test]
    fn test_dialog_url_always_requests_token() {
        let client = test_client("https://graph.facebook.com");
        let url = client
            .token_flow()
            .dialog_url(Some("http://x.com/a?b=c&d=e"), Some(&Scope::from("email")))
            .unwrap();
        assert!(url.ends_with("&response_type=token"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Fx.com%2Fa%3Fb%3Dc%26d%3De"));
    }

    #[test]
    fn test_dialog_url_ignores_code_redirect_uri() {
        let client = Client::builder()
            .app_id("1")
            .app_secret("s")
            .oauth_code_redirect_uri("http://example.com/oauth-code")
            .build()
            .unwrap();
        let err = client.token_flow().dialog_url(None, None).unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Configuration(ConfigurationErrorKind::MissingRedirectUri)
        );
    }
}
