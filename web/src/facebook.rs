//! Facebook client resolved from the host's settings and request.

use facebook_auth::error::{configuration_error, ConfigurationErrorKind};
use facebook_auth::oauth::{
    AccessToken, AppOptions, Client, ClientBuilder, CodeFlow, Graph, Profile, Scope, TokenFlow,
};
use facebook_auth::Error;
use log::*;
use secrecy::SecretString;

use crate::request::InboundRequest;
use crate::settings::{self, SettingsStore};

/// Request parameter carrying the authorization code on the way back from the dialog.
const CODE_PARAM: &str = "code";

/// Facebook client for one inbound request.
///
/// Owns a core [`Client`] built from explicit overrides, falling back to the
/// request's settings store, and reads the authorization code from the request
/// when the caller does not pass one.
///
/// ```rust,ignore
/// let facebook = FacebookRequest::new(&request, AppOptions {
///     oauth_code_redirect_uri: Some(format!("http://{domain}/account/facebook-authenticate-oauth")),
///     ..Default::default()
/// })?;
/// let (access_token, profile) = facebook.code_flow().get_access_token_and_profile(None, None, None)?;
/// ```
pub struct FacebookRequest<'r> {
    request: &'r dyn InboundRequest,
    client: Client,
}

impl<'r> FacebookRequest<'r> {
    /// Resolve the configuration and build a client with default HTTP settings.
    pub fn new(request: &'r dyn InboundRequest, overrides: AppOptions) -> Result<Self, Error> {
        Self::with_builder(request, overrides, Client::builder())
    }

    /// Like [`FacebookRequest::new`], keeping the HTTP configuration and endpoints
    /// already set on `builder`.
    pub fn with_builder(
        request: &'r dyn InboundRequest,
        overrides: AppOptions,
        builder: ClientBuilder,
    ) -> Result<Self, Error> {
        let options = resolve_options(request.settings(), overrides)?;
        let client = builder.options(options).build()?;
        Ok(Self { request, client })
    }

    /// The wrapped core client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn code_flow(&self) -> RequestCodeFlow<'_> {
        RequestCodeFlow {
            request: self.request,
            inner: self.client.code_flow(),
        }
    }

    pub fn token_flow(&self) -> TokenFlow<'_> {
        self.client.token_flow()
    }

    pub fn graph(&self) -> Graph<'_> {
        self.client.graph()
    }
}

/// Code flow that takes the submitted code from the request unless given one.
pub struct RequestCodeFlow<'a> {
    request: &'a dyn InboundRequest,
    inner: CodeFlow<'a>,
}

impl<'a> RequestCodeFlow<'a> {
    pub fn dialog_url(
        &self,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<String, Error> {
        self.inner.dialog_url(redirect_uri, scope)
    }

    pub fn access_token_url(
        &self,
        submitted_code: Option<&str>,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<String, Error> {
        self.inner
            .access_token_url(self.submitted_code(submitted_code), redirect_uri, scope)
    }

    pub fn get_access_token(
        &self,
        submitted_code: Option<&str>,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<AccessToken, Error> {
        self.inner
            .get_access_token(self.submitted_code(submitted_code), redirect_uri, scope)
    }

    pub fn get_access_token_and_profile(
        &self,
        submitted_code: Option<&str>,
        redirect_uri: Option<&str>,
        scope: Option<&Scope>,
    ) -> Result<(AccessToken, Profile), Error> {
        self.inner.get_access_token_and_profile(
            self.submitted_code(submitted_code),
            redirect_uri,
            scope,
        )
    }

    fn submitted_code<'c>(&'c self, explicit: Option<&'c str>) -> Option<&'c str> {
        explicit.or_else(|| {
            debug!("No code passed, reading the `{}` request parameter", CODE_PARAM);
            self.request.param(CODE_PARAM)
        })
    }
}

/// Explicit overrides first, then the settings store.
///
/// Only `app_domain` is mandatory here; missing credentials are left unset for
/// the client's own validation to reject.
fn resolve_options(store: &dyn SettingsStore, overrides: AppOptions) -> Result<AppOptions, Error> {
    let setting = |key: &str| store.get(key).map(str::to_string);

    let app_domain = match overrides.app_domain {
        Some(app_domain) => app_domain,
        None => setting(settings::APP_DOMAIN).ok_or_else(|| {
            warn!("Setting `{}` is not configured", settings::APP_DOMAIN);
            configuration_error(
                ConfigurationErrorKind::MissingSetting(settings::APP_DOMAIN.to_string()),
                "app_domain must be set in the settings store",
            )
        })?,
    };

    Ok(AppOptions {
        app_id: overrides.app_id.or_else(|| setting(settings::APP_ID)),
        app_secret: overrides
            .app_secret
            .or_else(|| setting(settings::APP_SECRET).map(SecretString::new)),
        app_scope: overrides
            .app_scope
            .or_else(|| setting(settings::APP_SCOPE).map(Scope::from)),
        app_domain: Some(app_domain),
        oauth_code_redirect_uri: overrides
            .oauth_code_redirect_uri
            .or_else(|| setting(settings::OAUTH_CODE_REDIRECT_URI)),
        oauth_token_redirect_uri: overrides
            .oauth_token_redirect_uri
            .or_else(|| setting(settings::OAUTH_TOKEN_REDIRECT_URI)),
    })
}
