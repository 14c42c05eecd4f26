use client::health::{check_health, HealthStatus};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;
use std::time::Duration;

use crate::common::{self, StubOptions};

#[tokio::test]
async fn test_health_online() {
    let backend = common::stub_backend().await;

    let health = backend.client().health_check().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(check_health(&backend.client()).await, HealthStatus::Healthy);
}

#[tokio::test]
async fn test_health_unavailable_is_offline() {
    let backend = common::stub_backend_with(StubOptions {
        health_down: true,
        ..StubOptions::default()
    })
    .await;

    let err = backend.client().health_check().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.status, Some(503));
    assert_eq!(check_health(&backend.client()).await, HealthStatus::Unhealthy);
}

#[tokio::test]
async fn test_health_unreachable_is_offline() {
    let config = client::ClientConfig {
        base_url: common::unreachable_base_url().await,
        ..client::ClientConfig::default()
    };
    let api = client::ApiClient::new(&config).unwrap();

    assert_eq!(check_health(&api).await, HealthStatus::Unhealthy);
}

#[tokio::test]
async fn test_slow_backend_times_out_as_network_error() {
    let backend = common::stub_backend_with(StubOptions {
        health_delay: Some(Duration::from_secs(2)),
        ..StubOptions::default()
    })
    .await;

    let err = backend
        .client_with_timeout(Duration::from_millis(150))
        .health_check()
        .await
        .unwrap_err();

    assert!(err.is_network(), "expected a network error, got {err}");
}
