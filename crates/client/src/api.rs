use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, CauseListRequest, CauseListResponse, CourtResponse, DistrictResponse,
    HealthResponse, JudgeInfo, JudgeResponse, StateResponse,
};
use urlencoding::encode;

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, RawResponse, Transport};

/// Typed client for the cause list backend.
///
/// Constructed explicitly and passed to whoever needs it; tests swap the
/// transport for a scripted one.
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Build a client that talks HTTP to `config.base_url`.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let transport = HttpTransport::new(&config.base_url, config.timeout)?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Cascading lookups ───────────────────────────────────────────

    pub async fn list_states(&self) -> Result<Vec<String>, AppError> {
        let resp: StateResponse = self.get_json("/states").await?;
        Ok(resp.states)
    }

    pub async fn list_districts(&self, state: &str) -> Result<Vec<String>, AppError> {
        let path = format!("/districts/{}", encode(state));
        let resp: DistrictResponse = self.get_json(&path).await?;
        Ok(resp.districts)
    }

    pub async fn list_courts(&self, state: &str, district: &str) -> Result<Vec<String>, AppError> {
        let path = format!("/courts/{}/{}", encode(state), encode(district));
        let resp: CourtResponse = self.get_json(&path).await?;
        Ok(resp.courts)
    }

    pub async fn list_judges(
        &self,
        state: &str,
        district: &str,
        court_complex: &str,
    ) -> Result<Vec<JudgeInfo>, AppError> {
        let path = format!(
            "/judges/{}/{}/{}",
            encode(state),
            encode(district),
            encode(court_complex)
        );
        let resp: JudgeResponse = self.get_json(&path).await?;
        Ok(resp.judges)
    }

    // ── Submission and retrieval ────────────────────────────────────

    /// Ask the backend to generate the cause list document(s).
    ///
    /// A `success: false` payload is returned as `Ok`; only transport and
    /// HTTP-level failures are errors here.
    pub async fn fetch_cause_list(
        &self,
        request: &CauseListRequest,
    ) -> Result<CauseListResponse, AppError> {
        let body = encode_body(request)?;
        let path = "/fetch-causelist";
        tracing::debug!("Making POST request to {path}");
        let raw = self.transport.post_json(path, &body).await;
        let raw = log_failure(path, raw.and_then(check_status))?;
        decode(path, &raw)
    }

    /// Fetch a generated document (PDF or archive) by name.
    pub async fn download_file(&self, filename: &str) -> Result<Vec<u8>, AppError> {
        let path = format!("/download/{}", encode(filename));
        let raw = self.send_get(&path).await?;
        Ok(raw.body)
    }

    pub async fn health_check(&self) -> Result<HealthResponse, AppError> {
        self.get_json("/health").await
    }

    // ── Internals ───────────────────────────────────────────────────

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let raw = self.send_get(path).await?;
        decode(path, &raw)
    }

    async fn send_get(&self, path: &str) -> Result<RawResponse, AppError> {
        tracing::debug!("Making GET request to {path}");
        let raw = self.transport.get(path).await;
        log_failure(path, raw.and_then(check_status))
    }
}

fn check_status(raw: RawResponse) -> Result<RawResponse, AppError> {
    if raw.is_success() {
        Ok(raw)
    } else {
        Err(AppError::server(raw.status, AppError::parse_detail(&raw.body)))
    }
}

fn log_failure(path: &str, result: Result<RawResponse, AppError>) -> Result<RawResponse, AppError> {
    if let Err(e) = &result {
        tracing::error!(path, error = %e, "API error");
    }
    result
}

/// Encoding failures are reported as invalid input; nothing is sent.
fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(body).map_err(|e| {
        tracing::error!(error = %e, "Could not encode request body");
        AppError::validation(format!("Could not encode request: {e}"), Default::default())
    })
}

fn decode<R: DeserializeOwned>(path: &str, raw: &RawResponse) -> Result<R, AppError> {
    serde_json::from_slice(&raw.body).map_err(|e| {
        tracing::error!(path, error = %e, "Undecodable response body");
        AppError::server(raw.status, Some("Unexpected response from server".to_string()))
    })
}
