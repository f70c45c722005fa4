//! Client configuration and the request dispatcher.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default endpoint for the Loops API.
pub const DEFAULT_ENDPOINT: &str = "https://app.loops.so/api/v1";

/// Asynchronous client for the Loops API.
///
/// Holds the configuration triple of API key, base endpoint, and the
/// `reqwest::Client` executing the requests. Construct with
/// [`LoopsClient::new`], optionally reconfigure through the fluent `with_*`
/// setters before first use; the configuration is read-only afterwards.
///
/// The client is cheap to clone and safe to share across tasks — the only
/// state is the read-only triple, and `reqwest::Client` pools connections
/// internally. Each operation performs exactly one HTTP round trip; dropping
/// the returned future (for example via `tokio::time::timeout`) aborts the
/// in-flight request.
#[derive(Debug, Clone)]
pub struct LoopsClient {
    api_key: String,
    endpoint: String,
    http_client: reqwest::Client,
}

impl LoopsClient {
    /// Create a client authenticating with `api_key` against the production
    /// endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Point the client at a non-default endpoint, generally a dedicated or
    /// self-hosted deployment.
    ///
    /// Trailing slashes are stripped so request paths can be appended
    /// verbatim.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Swap in a caller-configured `reqwest::Client`, e.g. with custom
    /// timeouts or proxies, or a test transport.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// The configured base endpoint, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Verify the configured API key against the service.
    pub async fn test_api_key(&self) -> Result<ApiKeyResponse> {
        self.request(Method::GET, "/api-key", None::<&serde_json::Value>)
            .await
    }

    /// Build and execute one HTTP request against `endpoint + path`.
    ///
    /// Serializes `body` when present, attaches the bearer token when an API
    /// key is configured, and decodes the JSON response into `T`. Statuses
    /// `>= 400` become [`Error::Api`] carrying the status line and the raw
    /// response body.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!(method = %method, %url, "dispatching request");

        let mut request = self.http_client.request(method, url.as_str());
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Serialization)?;
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        // Drain the body in full regardless of status. On an error status the
        // read is best-effort: a read failure must not mask the status itself.
        let bytes = response.bytes().await;
        if status.as_u16() >= 400 {
            let body = bytes
                .map(|b| String::from_utf8_lossy(&b).into_owned())
                .unwrap_or_default();
            tracing::debug!(status = %status, "request rejected by the API");
            return Err(Error::Api { status, body });
        }
        let bytes = bytes?;
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }
}

/// Response of the API-key verification endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub success: bool,
    /// Name of the team the key belongs to.
    #[serde(default)]
    pub team_name: String,
}
