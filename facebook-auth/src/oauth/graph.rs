//! Graph API profile calls.

use log::*;

use super::{Client, Profile};
use crate::error::{
    deprecated, missing_token, DeprecatedOperation, Error, ErrorKind, InvalidResponseKind,
};

pub struct Graph<'a> {
    client: &'a Client,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// URL of the current user's profile for `access_token`.
    pub fn profile_url(&self, access_token: &str) -> Result<String, Error> {
        if access_token.is_empty() {
            return Err(missing_token());
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("access_token", access_token)
            .finish();
        Ok(format!("{}?{}", self.client.urls().profile_url, query))
    }

    /// Fetch the profile of the user `access_token` was issued for.
    pub fn get_profile(&self, access_token: &str) -> Result<Profile, Error> {
        let url = self.profile_url(access_token)?;

        debug!("Fetching Facebook profile");
        let body = self.client.get(&url)?;
        let profile: Profile = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse Facebook profile: {:?}", e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::InvalidResponse(InvalidResponseKind::MalformedBody),
                endpoint: Some(self.client.urls().profile_url.clone()),
            }
        })?;
        Ok(profile)
    }

    /// Removed: the profile URL now needs an explicit token.
    #[deprecated(note = "use Graph::profile_url(access_token)")]
    pub fn url_me(&self) -> Result<String, Error> {
        Err(deprecated(DeprecatedOperation::UrlMe))
    }

    /// Removed: the profile fetch now needs an explicit token.
    #[deprecated(note = "use Graph::get_profile(access_token)")]
    pub fn me(&self) -> Result<Profile, Error> {
        Err(deprecated(DeprecatedOperation::Me))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth::client::tests::test_client;
    use mockito::Matcher;

    #[test]
    fn test_profile_url_encodes_token() {
        let client = test_client("https://graph.facebook.com");
        assert_eq!(
            client.graph().profile_url("a b&c").unwrap(),
            "https://graph.facebook.com/me?access_token=a+b%26c"
        );
    }

    #[test]
    fn test_profile_url_requires_token() {
        let client = test_client("https://graph.facebook.com");
        let err = client.graph().profile_url("").unwrap_err();
        assert_eq!(err.error_kind, ErrorKind::MissingToken);
    }

    #[test]
    fn test_get_profile_without_token_makes_no_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/me")
            .match_query(Matcher::Any)
            .expect(0)
            .create();
        let client = test_client(&server.url());

        let err = client.graph().get_profile("").unwrap_err();

        assert_eq!(err.error_kind, ErrorKind::MissingToken);
        mock.assert();
    }

    #[test]
    fn test_get_profile_passes_json_through() {
        let mut server = mockito::Server::new();
        let body = serde_json::json!({
            "id": "4",
            "email": "zuck@example.com",
            "hometown": { "id": "1", "name": "Dobbs Ferry" }
        });
        let mock = server
            .mock("GET", "/me")
            .match_query(Matcher::UrlEncoded("access_token".into(), "AAA".into()))
            .with_body(body.to_string())
            .create();
        let client = test_client(&server.url());

        let profile = client.graph().get_profile("AAA").unwrap();

        mock.assert();
        assert_eq!(serde_json::Value::Object(profile), body);
    }

    #[test]
    fn test_get_profile_rejects_non_json() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/me")
            .match_query(Matcher::Any)
            .with_body("access_token=AAA")
            .create();
        let client = test_client(&server.url());

        let err = client.graph().get_profile("AAA").unwrap_err();

        assert_eq!(
            err.error_kind,
            ErrorKind::InvalidResponse(InvalidResponseKind::MalformedBody)
        );
    }

    #[test]
    fn test_get_profile_propagates_transport_failure() {
        // Nothing listens on port 9 locally.
        let client = test_client("http://127.0.0.1:9");

        let err = client.graph().get_profile("AAA").unwrap_err();

        assert!(matches!(err.error_kind, ErrorKind::Transport(_)));
        assert_eq!(err.endpoint, Some("http://127.0.0.1:9/me".to_string()));
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_operations_are_rejected() {
        let client = test_client("https://graph.facebook.com");
        assert_eq!(
            client.graph().url_me().unwrap_err().error_kind,
            ErrorKind::DeprecatedOperation(DeprecatedOperation::UrlMe)
        );
        assert_eq!(
            client.graph().me().unwrap_err().error_kind,
            ErrorKind::DeprecatedOperation(DeprecatedOperation::Me)
        );
    }
}
