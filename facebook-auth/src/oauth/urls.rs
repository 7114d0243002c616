//! Provider endpoints.

const DIALOG_URL: &str = "https://www.facebook.com/dialog/oauth";
const GRAPH_BASE_URL: &str = "https://graph.facebook.com";

/// Endpoint URLs used by the client.
///
/// Defaults to Facebook's production hosts. Override the graph host in tests
/// to point at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookUrls {
    pub dialog_url: String,
    pub access_token_url: String,
    pub profile_url: String,
}

impl FacebookUrls {
    /// Production dialog URL with token and profile endpoints under `graph_base_url`.
    pub fn with_graph_base(graph_base_url: &str) -> Self {
        let base = graph_base_url.trim_end_matches('/');
        Self {
            dialog_url: DIALOG_URL.to_string(),
            access_token_url: format!("{}/oauth/access_token", base),
            profile_url: format!("{}/me", base),
        }
    }
}

impl Default for FacebookUrls {
    fn default() -> Self {
        Self::with_graph_base(GRAPH_BASE_URL)
    }
}
