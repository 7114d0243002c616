use facebook_auth::error::{ConfigurationErrorKind, Error, ErrorKind};
use facebook_auth::http::HttpClientConfig;
use facebook_auth::oauth::{AppOptions, Client};
use log::{error, info, warn};
use service::{config::Config, logging::Logger};
use web::{FacebookRequest, ParamsRequest};

fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start simplelog: {e}");
    }

    // Stand in for the inbound request a web host would hand over.
    let mut request = ParamsRequest::new(config.settings());
    if let Some(code) = config.code() {
        request = request.with_param("code", code);
    }

    let builder = Client::builder().http_config(HttpClientConfig {
        timeout: config.http_timeout(),
        ..Default::default()
    });
    let facebook = match FacebookRequest::with_builder(&request, AppOptions::default(), builder) {
        Ok(facebook) => facebook,
        Err(e) => {
            error!("Failed to configure the Facebook client: {e}");
            std::process::exit(1);
        }
    };

    let result = match config.code() {
        Some(_) => exchange_code(&facebook),
        None => print_dialog_urls(&facebook),
    };
    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Print the dialog URL of every flow that has a redirect URI configured.
fn print_dialog_urls(facebook: &FacebookRequest) -> Result<(), Error> {
    let dialogs = [
        ("code", facebook.code_flow().dialog_url(None, None)),
        ("token", facebook.token_flow().dialog_url(None, None)),
    ];

    let mut printed = 0;
    for (flow, dialog_url) in dialogs {
        match dialog_url {
            Ok(url) => {
                println!("{flow}: {url}");
                printed += 1;
            }
            Err(Error {
                error_kind: ErrorKind::Configuration(ConfigurationErrorKind::MissingRedirectUri),
                ..
            }) => warn!("No redirect URI configured for the {flow} flow, skipping"),
            Err(e) => return Err(e),
        }
    }

    if printed == 0 {
        warn!("Set OAUTH_CODE_REDIRECT_URI or OAUTH_TOKEN_REDIRECT_URI to build a dialog URL");
    }
    Ok(())
}

/// Exchange the `--code` request parameter for a token and print the profile.
fn exchange_code(facebook: &FacebookRequest) -> Result<(), Error> {
    let (access_token, profile) = facebook
        .code_flow()
        .get_access_token_and_profile(None, None, None)?;
    info!("Fetched profile with {} fields", profile.len());

    println!("access_token: {}", access_token.secret());
    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to render profile: {e}"),
    }
    Ok(())
}
