use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::collections::HashMap;
use std::time::Duration;

/// Settings keys the web adapter reads. Kept in sync with `web::settings`.
const APP_ID_KEY: &str = "facebook.app.id";
const APP_SECRET_KEY: &str = "facebook.app.secret";
const APP_SCOPE_KEY: &str = "facebook.app.scope";
const OAUTH_CODE_REDIRECT_URI_KEY: &str = "facebook.app.oauth_code_redirect_uri";
const OAUTH_TOKEN_REDIRECT_URI_KEY: &str = "facebook.app.oauth_token_redirect_uri";
const APP_DOMAIN_KEY: &str = "app_domain";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The Facebook application ID.
    #[arg(long, env)]
    facebook_app_id: Option<String>,

    /// The Facebook application secret. Only ever sent server-to-server.
    #[arg(long, env, hide_env_values = true)]
    facebook_app_secret: Option<String>,

    /// Comma separated permissions requested in the dialog (e.g. email,user_birthday).
    #[arg(long, env)]
    facebook_app_scope: Option<String>,

    /// The domain the application is served from.
    #[arg(long, env, default_value = "localhost:4000")]
    app_domain: String,

    /// Where Facebook sends the user back with a `code` after the server-side dialog.
    #[arg(long, env)]
    oauth_code_redirect_uri: Option<String>,

    /// Where Facebook sends the user back with a `#access_token` after the implicit dialog.
    #[arg(long, env)]
    oauth_token_redirect_uri: Option<String>,

    /// Timeout in seconds for calls to the Facebook graph
    #[arg(long, env, default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// An authorization code returned by the dialog. When set, it is exchanged
    /// for an access token and profile instead of printing the dialog URLs.
    #[arg(long)]
    code: Option<String>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Render the configured values under the settings-store keys a web host would use.
    ///
    /// Unset values are left out so the adapter sees them as absent.
    pub fn settings(&self) -> HashMap<String, String> {
        let mut settings = HashMap::new();
        settings.insert(APP_DOMAIN_KEY.to_string(), self.app_domain.clone());

        let optional = [
            (APP_ID_KEY, &self.facebook_app_id),
            (APP_SECRET_KEY, &self.facebook_app_secret),
            (APP_SCOPE_KEY, &self.facebook_app_scope),
            (OAUTH_CODE_REDIRECT_URI_KEY, &self.oauth_code_redirect_uri),
            (OAUTH_TOKEN_REDIRECT_URI_KEY, &self.oauth_token_redirect_uri),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                settings.insert(key.to_string(), value.clone());
            }
        }

        settings
    }
}
