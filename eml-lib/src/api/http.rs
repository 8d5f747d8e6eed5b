//! HTTP registration client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::RegistrationApi;
use crate::config::RegistrationConfig;
use crate::error::ApiError;
use crate::model::RegistrationRecord;

/// Client for the user registration endpoint.
///
/// Cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use eml_lib::api::HttpRegistrationClient;
///
/// let client = HttpRegistrationClient::builder()
///     .url("https://api.example.com")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
#[derive(Clone)]
pub struct HttpRegistrationClient {
    inner: Arc<HttpRegistrationClientInner>,
}

struct HttpRegistrationClientInner {
    endpoint: url::Url,
    http_client: Client,
    timeout: Option<Duration>,
}

/// Successful registration response body.
#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(rename = "_id")]
    id: String,
}

impl HttpRegistrationClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> HttpRegistrationClientBuilder<Missing> {
        HttpRegistrationClientBuilder::new()
    }

    /// Builds a client from configuration.
    pub fn from_config(config: &RegistrationConfig) -> Result<Self, ApiError> {
        Self::builder()
            .url(&config.api_url)
            .register_path(&config.register_path)
            .timeout_opt(config.timeout)
            .build()
    }

    /// Returns the full URL registrations are posted to.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    fn map_send_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationClient {
    async fn register_user(&self, record: &RegistrationRecord) -> Result<String, ApiError> {
        let mut request = self
            .inner
            .http_client
            .post(self.inner.endpoint.clone())
            .json(record);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), body));
        }

        let parsed: RegisterResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body.clone()))?;

        Ok(parsed.id)
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`HttpRegistrationClient`].
///
/// Uses the typestate pattern so the base URL must be set before `build`.
pub struct HttpRegistrationClientBuilder<Url> {
    url: Url,
    register_path: String,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl HttpRegistrationClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        let defaults = RegistrationConfig::default();
        Self {
            url: Missing,
            register_path: defaults.register_path,
            timeout: defaults.timeout,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    pub fn url(self, url: impl Into<String>) -> HttpRegistrationClientBuilder<Set<String>> {
        HttpRegistrationClientBuilder {
            url: Set(url.into()),
            register_path: self.register_path,
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for HttpRegistrationClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> HttpRegistrationClientBuilder<U> {
    /// Sets the registration endpoint path.
    pub fn register_path(mut self, path: impl Into<String>) -> Self {
        self.register_path = path.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets or clears the request timeout.
    pub fn timeout_opt(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a custom reqwest client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl HttpRegistrationClientBuilder<Set<String>> {
    /// Builds the client, resolving the endpoint URL.
    pub fn build(self) -> Result<HttpRegistrationClient, ApiError> {
        let Set(base) = self.url;
        let endpoint = join_endpoint(&base, &self.register_path)?;

        Ok(HttpRegistrationClient {
            inner: Arc::new(HttpRegistrationClientInner {
                endpoint,
                http_client: self.http_client.unwrap_or_default(),
                timeout: self.timeout,
            }),
        })
    }
}

fn join_endpoint(base: &str, path: &str) -> Result<url::Url, ApiError> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url::Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    use super::*;

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            name: "Ana Maria".into(),
            email: "ana@x.com".into(),
            password: "abcdefg1".into(),
        }
    }

    /// Answers a single request with a canned response and hands back the raw
    /// request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\
                 connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (base, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            let Some(head_end) = text.find("\r\n\r\n") else { continue };
            let length = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + length {
                break;
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn client_for(base: &str) -> HttpRegistrationClient {
        HttpRegistrationClient::builder()
            .url(base)
            .register_path("/api/users")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_returns_server_id() {
        let (base, server) = serve_once("201 Created", r#"{"_id":"42"}"#).await;

        let id = client_for(&base).register_user(&record()).await.unwrap();
        assert_eq!(id, "42");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/users HTTP/1.1"));
        assert!(request.contains(r#""password":"abcdefg1""#));
        assert!(request.contains(r#""name":"Ana Maria""#));
    }

    #[tokio::test]
    async fn test_register_bad_request_keeps_status() {
        let (base, server) = serve_once("400 Bad Request", r#"{"error":"duplicate"}"#).await;

        let err = client_for(&base).register_user(&record()).await.unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 400, .. }));
        assert!(err.is_bad_request());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_register_server_error_is_not_bad_request() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = client_for(&base).register_user(&record()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_bad_request());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_register_missing_id_is_parse_error() {
        let (base, server) = serve_once("200 OK", r#"{"name":"Ana Maria"}"#).await;

        let err = client_for(&base).register_user(&record()).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
        server.await.unwrap();
    }

    #[test]
    fn test_endpoint_join() {
        let client = HttpRegistrationClient::builder()
            .url("https://api.eml.dev/")
            .register_path("/api/users")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "https://api.eml.dev/api/users");

        let client = HttpRegistrationClient::builder()
            .url("https://api.eml.dev")
            .register_path("users")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "https://api.eml.dev/users");
    }

    #[test]
    fn test_from_config_defaults() {
        let client = HttpRegistrationClient::from_config(&RegistrationConfig::default()).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_invalid_url() {
        let result = HttpRegistrationClient::builder().url("not a url").build();
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_response_id_field() {
        let parsed: RegisterResponse =
            serde_json::from_str(r#"{"_id":"42","name":"Ana Maria"}"#).unwrap();
        assert_eq!(parsed.id, "42");
    }
}
