//! Client side of the cause list fetcher: the HTTP API client, the
//! cascading selection state machine, the submission orchestrator and
//! the backend health check.

pub mod api;
pub mod cascade;
pub mod config;
pub mod health;
pub mod sink;
pub mod store;
pub mod submit;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use store::StateHandle;
pub use transport::{HttpTransport, RawResponse, Transport};
