//! Application configuration and call-time parameter resolution.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{configuration_error, ConfigurationErrorKind, Error};

/// Permissions requested in the dialog.
///
/// Hosts usually configure scope as a single comma separated string
/// (`email,user_birthday`), which is passed through untouched. A list is
/// rendered comma joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Raw(String),
    List(Vec<String>),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scope::Raw(scope) => f.write_str(scope),
            Scope::List(permissions) => f.write_str(&permissions.join(",")),
        }
    }
}

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Scope::Raw(scope.to_string())
    }
}

impl From<String> for Scope {
    fn from(scope: String) -> Self {
        Scope::Raw(scope)
    }
}

impl From<Vec<String>> for Scope {
    fn from(permissions: Vec<String>) -> Self {
        Scope::List(permissions)
    }
}

impl From<&[&str]> for Scope {
    fn from(permissions: &[&str]) -> Self {
        Scope::List(permissions.iter().map(|p| p.to_string()).collect())
    }
}

/// Unvalidated application settings, every field optional.
///
/// This is what hosts and the framework adapter assemble before construction;
/// [`AppConfig::new`] turns it into a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub app_id: Option<String>,
    pub app_secret: Option<SecretString>,
    pub app_scope: Option<Scope>,
    pub app_domain: Option<String>,
    pub oauth_code_redirect_uri: Option<String>,
    pub oauth_token_redirect_uri: Option<String>,
}

/// Validated, immutable application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    app_id: String,
    app_secret: SecretString,
    app_scope: Option<Scope>,
    app_domain: Option<String>,
    oauth_code_redirect_uri: Option<String>,
    oauth_token_redirect_uri: Option<String>,
}

impl AppConfig {
    /// Validate the options.
    ///
    /// Fails when `app_id` or `app_secret` is missing or empty.
    pub fn new(options: AppOptions) -> Result<Self, Error> {
        let app_id = options
            .app_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                configuration_error(ConfigurationErrorKind::MissingAppId, "app_id is required")
            })?;
        let app_secret = options
            .app_secret
            .filter(|secret| !secret.expose_secret().is_empty())
            .ok_or_else(|| {
                configuration_error(
                    ConfigurationErrorKind::MissingAppSecret,
                    "app_secret is required",
                )
            })?;

        Ok(Self {
            app_id,
            app_secret,
            app_scope: options.app_scope,
            app_domain: options.app_domain,
            oauth_code_redirect_uri: options.oauth_code_redirect_uri,
            oauth_token_redirect_uri: options.oauth_token_redirect_uri,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_secret(&self) -> &SecretString {
        &self.app_secret
    }

    pub fn app_scope(&self) -> Option<&Scope> {
        self.app_scope.as_ref()
    }

    /// Informational only, never used to build URLs.
    pub fn app_domain(&self) -> Option<&str> {
        self.app_domain.as_deref()
    }

    pub fn oauth_code_redirect_uri(&self) -> Option<&str> {
        self.oauth_code_redirect_uri.as_deref()
    }

    pub fn oauth_token_redirect_uri(&self) -> Option<&str> {
        self.oauth_token_redirect_uri.as_deref()
    }

    /// Explicit scope, else the configured one, else an empty scope.
    pub(crate) fn resolve_scope(&self, explicit: Option<&Scope>) -> String {
        explicit
            .or(self.app_scope.as_ref())
            .map(|scope| scope.to_string())
            .unwrap_or_default()
    }
}

/// Explicit redirect URI, else the configured default for the flow.
pub(crate) fn resolve_redirect_uri<'a>(
    explicit: Option<&'a str>,
    configured: Option<&'a str>,
) -> Result<&'a str, Error> {
    explicit
        .or(configured)
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| {
            configuration_error(
                ConfigurationErrorKind::MissingRedirectUri,
                "no redirect_uri passed and none configured",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn options() -> AppOptions {
        AppOptions {
            app_id: Some("123".to_string()),
            app_secret: Some(SecretString::new("shh".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_with_credentials() {
        let config = AppConfig::new(options()).unwrap();
        assert_eq!(config.app_id(), "123");
        assert_eq!(config.app_secret().expose_secret(), "shh");
        assert!(config.app_scope().is_none());
    }

    #[test]
    fn test_new_without_app_id() {
        let err = AppConfig::new(AppOptions {
            app_id: None,
            ..options()
        })
        .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Configuration(ConfigurationErrorKind::MissingAppId)
        );
    }

    #[test]
    fn test_new_with_empty_app_secret() {
        let err = AppConfig::new(AppOptions {
            app_secret: Some(SecretString::new(String::new())),
            ..options()
        })
        .unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Configuration(ConfigurationErrorKind::MissingAppSecret)
        );
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::from("email, user_birthday").to_string(), "email, user_birthday");
        let list: &[&str] = &["email", "user_birthday"];
        assert_eq!(Scope::from(list).to_string(), "email,user_birthday");
    }

    #[test]
    fn test_resolve_scope_prefers_explicit() {
        let config = AppConfig::new(AppOptions {
            app_scope: Some(Scope::from("email")),
            ..options()
        })
        .unwrap();
        assert_eq!(config.resolve_scope(None), "email");
        assert_eq!(
            config.resolve_scope(Some(&Scope::from("user_likes"))),
            "user_likes"
        );
    }

    #[test]
    fn test_resolve_scope_defaults_to_empty() {
        let config = AppConfig::new(options()).unwrap();
        assert_eq!(config.resolve_scope(None), "");
    }

    #[test]
    fn test_resolve_redirect_uri() {
        assert_eq!(
            resolve_redirect_uri(Some("http://a"), Some("http://b")).unwrap(),
            "http://a"
        );
        assert_eq!(resolve_redirect_uri(None, Some("http://b")).unwrap(), "http://b");
        let err = resolve_redirect_uri(None, None).unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Configuration(ConfigurationErrorKind::MissingRedirectUri)
        );
    }
}
