//! Inbound request collaborator.

use std::collections::HashMap;

use crate::settings::SettingsStore;

/// What the adapter needs from the host framework's request.
pub trait InboundRequest {
    /// Settings associated with the application serving the request.
    fn settings(&self) -> &dyn SettingsStore;

    /// Query or form parameter `name`, if present.
    fn param(&self, name: &str) -> Option<&str>;
}

/// Request whose settings and parameters are already in hand.
///
/// Useful for hosts that extract the query into a map before calling in, and
/// for tooling outside a web server.
#[derive(Debug, Clone, Default)]
pub struct ParamsRequest {
    settings: HashMap<String, String>,
    params: HashMap<String, String>,
}

impl ParamsRequest {
    pub fn new(settings: HashMap<String, String>) -> Self {
        Self {
            settings,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

impl InboundRequest for ParamsRequest {
    fn settings(&self) -> &dyn SettingsStore {
        &self.settings
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
