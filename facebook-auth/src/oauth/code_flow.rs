//! Server-side ("code") flow.
//!
//! 1. Redirect the user to [`CodeFlow::dialog_url`].
//! 2. Facebook redirects back to the redirect URI with a `code` query parameter.
//! 3. Exchange it with [`CodeFlow::get_access_token`] or
//!    [`CodeFlow::get_access_token_and_profile`].
//!
//! The redirect URI used for the exchange must be byte-identical to the one
//! used for the dialog, otherwise Facebook rejects the code. This is not
//! checked here.

use log::*;
use secrecy::ExposeSecret;

use super::config::resolve_redirect_uri;
use super::{AccessToken, Client, Profile, Scope};
use crate::error::{invalid_response, missing_code, Error, InvalidResponseKind};

pub struct CodeFlow<'a> {
    client: &'a Client,
}

impl<'a> CodeFlow<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// URL of the authorization dialog for the server-side flow.
    ///
    /// `redirect_uri` defaults to `oauth_code_redirect_uri` and `scope` to
    /// `app_scope`. Only the redirect URI is percent-encoded, and every reserved
    /// character is encoded including `/` (`http%3A%2F%2Fx.com%2Fa`, not
    /// `http%3A//x.com/a`). Facebook decodes both forms the same way; the token
    /// exchange uses the same encoding so the two URIs stay byte-identical.
    pub fn dialog_url(
        &self,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<String, Error> {
        let config = self.client.config();
        let redirect_uri =
            resolve_redirect_uri(redirect_uri, config.oauth_code_redirect_uri())?;

        Ok(format!(
            "{}?client_id={}&scope={}&redirect_uri={}",
            self.client.urls().dialog_url,
            config.app_id(),
            config.resolve_scope(scope),
            urlencoding::encode(redirect_uri)
        ))
    }

    /// URL used server-to-server to exchange `submitted_code` for a token.
    ///
    /// `scope` is accepted so callers can pass the same arguments they gave
    /// [`CodeFlow::dialog_url`]; the token endpoint does not take it.
    pub fn access_token_url(
        &self,
        submitted_code: Option<&str>,
        redirect_uri: Option<&str>,
        _scope: Option<&Scope>,
    ) -> Result<String, Error> {
        let code = submitted_code
            .filter(|code| !code.is_empty())
            .ok_or_else(missing_code)?;
        let config = self.client.config();
        let redirect_uri =
            resolve_redirect_uri(redirect_uri, config.oauth_code_redirect_uri())?;

        Ok(format!(
            "{}?client_id={}&redirect_uri={}&client_secret={}&code={}",
            self.client.urls().access_token_url,
            config.app_id(),
            urlencoding::encode(redirect_uri),
            config.app_secret().expose_secret(),
            code
        ))
    }

    /// Exchange `submitted_code` for an access token.
    pub fn get_access_token(
        &self,
        submitted_code: Option<&str>,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<AccessToken, Error> {
        let url = self.access_token_url(submitted_code, redirect_uri, scope)?;

        debug!("Exchanging Facebook OAuth code for an access token");
        let body = self.client.get(&url)?;
        let access_token = parse_access_token(&body)
            .map_err(|e| e.at(&self.client.urls().access_token_url))?;

        info!("Successfully exchanged Facebook OAuth code for an access token");
        Ok(access_token)
    }

    /// Exchange `submitted_code` for an access token, then fetch the profile with it.
    pub fn get_access_token_and_profile(
        &self,
        submitted_code: Option<&str>,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<(AccessToken, Profile), Error> {
        let access_token = self.get_access_token(submitted_code, redirect_uri, scope)?;
        let profile = self.client.graph().get_profile(access_token.secret())?;
        Ok((access_token, profile))
    }
}

/// Read `access_token` out of a URL-encoded token endpoint body.
///
/// Facebook may repeat keys; the last `access_token` wins. Blank values are
/// ignored, as if the key were absent.
fn parse_access_token(body: &str) -> Result<AccessToken, Error> {
    url::form_urlencoded::parse(body.trim().as_bytes())
        .filter(|(key, value)| key == "access_token" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .last()
        .map(AccessToken::new)
        .ok_or_else(|| {
            warn!("Facebook token response has no access_token");
            invalid_response(
                InvalidResponseKind::MissingAccessToken,
                "token response has no access_token",
            )
        })
}
