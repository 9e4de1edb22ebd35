//! GitHub → Slack user mapping client
//!
//! The mapping service answers `GET <endpoint><github_user>` with
//! `{"slack_user_id": "..."}`, or 404 when it has no entry for the user.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::errors::{MappingError, SlackError};

/// Upper bound for the whole lookup, connect through body.
pub const MAPPING_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SlackMappingResponse {
    slack_user_id: String,
}

/// Resolves a GitHub username to a Slack user ID.
#[async_trait]
pub trait UserMapping: Send + Sync {
    /// # Errors
    ///
    /// `MappingError::NotFound` when the service has no entry for the user,
    /// `MappingError::Transport` for every other failure.
    async fn fetch_slack_user_id(&self, github_user: &str) -> Result<String, MappingError>;
}

/// HTTP implementation of [`UserMapping`].
#[derive(Debug, Clone)]
pub struct MappingClient {
    http: Client,
    endpoint: String,
}

impl MappingClient {
    /// `endpoint` is used as a plain prefix: the username is appended as is.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::HttpError` if the HTTP client cannot be built with
    /// the lookup timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SlackError> {
        let http = Client::builder()
            .timeout(MAPPING_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SlackError::HttpError(format!("build mapping client: {e}")))?;

        Ok(Self::with_client(http, endpoint))
    }

    #[must_use]
    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl UserMapping for MappingClient {
    async fn fetch_slack_user_id(&self, github_user: &str) -> Result<String, MappingError> {
        let url = format!("{}{}", self.endpoint, github_user);
        let request = self
            .http
            .get(&url)
            .build()
            .map_err(|e| MappingError::Transport(format!("create mapping request: {e}")))?;

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|e| MappingError::Transport(format!("execute mapping request: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MappingError::Transport(format!("read mapping response: {e}")))?;

        if status == StatusCode::NOT_FOUND {
            return Err(MappingError::NotFound(github_user.to_string()));
        }

        if status != StatusCode::OK {
            return Err(MappingError::Transport(format!(
                "mapping API returned status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let payload: SlackMappingResponse = serde_json::from_str(&body)
            .map_err(|e| MappingError::Transport(format!("unmarshal mapping response: {e}")))?;

        Ok(payload.slack_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> MappingClient {
        MappingClient::new(format!("{}/users/", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "slack_user_id": "U12345" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let id = client_for(&server)
            .fetch_slack_user_id("octocat")
            .await
            .unwrap();
        assert_eq!(id, "U12345");
    }

    #[tokio::test]
    async fn test_not_found_is_distinct() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_slack_user_id("octocat")
            .await
            .unwrap_err();
        match err {
            MappingError::NotFound(user) => assert_eq!(user, "octocat"),
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_slack_user_id("octocat")
            .await
            .unwrap_err();
        match err {
            MappingError::Transport(msg) => {
                assert!(msg.contains("status 500"), "{msg}");
                assert!(msg.contains("boom"), "{msg}");
            }
            other => panic!("Expected Transport, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_slack_user_id("octocat")
            .await
            .unwrap_err();
        assert!(
            matches!(err, MappingError::Transport(ref msg) if msg.starts_with("unmarshal mapping response")),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop a listener so nothing is accepting on the port.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = MappingClient::new(format!("http://127.0.0.1:{port}/users/"))
            .unwrap()
            .fetch_slack_user_id("octocat")
            .await
            .unwrap_err();
        assert!(
            matches!(err, MappingError::Transport(ref msg) if msg.starts_with("execute mapping request")),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "slack_user_id": "U12345" }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let http = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let err = MappingClient::with_client(http, format!("{}/users/", server.uri()))
            .fetch_slack_user_id("octocat")
            .await
            .unwrap_err();
        assert!(
            matches!(err, MappingError::Transport(ref msg) if msg.starts_with("execute mapping request")),
            "{err:?}"
        );
    }

    #[test]
    fn test_new_builds_client() {
        assert!(MappingClient::new("https://getslackuserid.local/").is_ok());
    }
}
