//! One-shot backend availability check.

use crate::api::ApiClient;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HealthStatus {
    /// The mount-time check has not completed yet.
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Unknown => "Checking...",
            HealthStatus::Healthy => "Online",
            HealthStatus::Unhealthy => "Offline",
        }
    }
}

/// Ask the backend whether it is up. Any successful answer counts.
pub async fn check_health<T: Transport>(client: &ApiClient<T>) -> HealthStatus {
    match client.health_check().await {
        Ok(resp) => {
            tracing::info!(status = %resp.status, "API health check succeeded");
            HealthStatus::Healthy
        }
        Err(e) => {
            tracing::error!(error = %e, "API health check failed");
            HealthStatus::Unhealthy
        }
    }
}

/// Warning shown while the backend is unreachable.
pub fn offline_banner(base_url: &str) -> String {
    format!("API server is offline. Please ensure the backend server is running on {base_url}")
}
