use shared_types::AppError;
use std::time::Duration;

/// Status and body of a completed HTTP exchange, before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response carrying `value` serialized as JSON.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between the API client and the network.
///
/// Paths are relative to the transport's base URL and already
/// percent-encoded. Implementations report timeouts and connectivity
/// loss as `NetworkError`; any response that arrives, whatever its
/// status, is returned as `Ok`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<RawResponse, AppError>;

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RawResponse, AppError>;
}

/// `reqwest`-backed transport against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport whose requests fail after `timeout`.
    ///
    /// The bound is set on every request rather than on the client so it
    /// holds for the browser fetch backend too.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .timeout(self.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn map_send_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::network(format!("Request timed out: {e}"))
    } else {
        AppError::network(e.to_string())
    }
}

async fn read_response(resp: reqwest::Response) -> Result<RawResponse, AppError> {
    let status = resp.status().as_u16();
    let body = resp.bytes().await.map_err(map_send_error)?;
    Ok(RawResponse::new(status, body.to_vec()))
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, AppError> {
        let resp = self
            .request(reqwest::Method::GET, path)
            .send()
            .await
            .map_err(map_send_error)?;
        read_response(resp).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RawResponse, AppError> {
        let resp = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;
        read_response(resp).await
    }
}
