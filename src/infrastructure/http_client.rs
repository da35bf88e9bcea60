use async_trait::async_trait;

use crate::domain::AuditError;

#[cfg(test)]
use mockall::automock;

/// Trait for HTTP GET operations (for mocking).
///
/// `Ok(None)` means the resource does not exist (HTTP 404); any other
/// non-success status is a directory error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
    ) -> Result<Option<serde_json::Value>, AuditError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, AuditError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuditError::directory(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(String, String)>,
    ) -> Result<Option<serde_json::Value>, AuditError> {
        let mut request = self.client.get(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuditError::directory(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AuditError::directory(format!(
                "HTTP {}: {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| AuditError::directory(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "alice"
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let body = client
            .get_json(
                &format!("{}/users/alice", server.uri()),
                vec![("accept".to_string(), "application/json".to_string())],
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(body["login"], "alice");
    }

    #[tokio::test]
    async fn test_get_json_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let body = client
            .get_json(&format!("{}/users/ghost", server.uri()), vec![])
            .await
            .unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_get_json_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let err = client
            .get_json(&format!("{}/anything", server.uri()), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, AuditError::Directory { .. }));
        assert!(err.to_string().contains("500"));
    }
}
