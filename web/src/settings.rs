//! Settings store collaborator and the keys read from it.

use std::collections::{BTreeMap, HashMap};

pub const APP_ID: &str = "facebook.app.id";
pub const APP_SECRET: &str = "facebook.app.secret";
pub const APP_SCOPE: &str = "facebook.app.scope";
pub const OAUTH_CODE_REDIRECT_URI: &str = "facebook.app.oauth_code_redirect_uri";
pub const OAUTH_TOKEN_REDIRECT_URI: &str = "facebook.app.oauth_token_redirect_uri";
/// Not namespaced: hosts usually share it with the rest of the application.
pub const APP_DOMAIN: &str = "app_domain";

/// String settings looked up by exact key.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<&str>;
}

impl SettingsStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl SettingsStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}
