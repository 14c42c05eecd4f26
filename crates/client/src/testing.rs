//! Scripted stand-ins for the network and the filesystem.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use shared_types::AppError;
use tokio::sync::oneshot;

use crate::sink::DocumentSink;
use crate::transport::{RawResponse, Transport};

enum Scripted {
    Ready(Result<RawResponse, AppError>),
    Gated(oneshot::Receiver<()>, Result<RawResponse, AppError>),
}

#[derive(Default)]
struct FakeState {
    scripts: HashMap<String, VecDeque<Scripted>>,
    requests: Vec<String>,
    posted: Vec<serde_json::Value>,
}

/// Holds back a gated response until `open` is called.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

/// A `Transport` that answers from a per-path script.
///
/// Entries for a path are consumed in order; the last ready entry is
/// reused for any further requests. Gated entries wait for their `Gate`
/// so tests can control the order in which responses land.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, path: &str, entry: Scripted) {
        self.lock()
            .scripts
            .entry(path.to_string())
            .or_default()
            .push_back(entry);
    }

    pub fn reply(&self, path: &str, response: RawResponse) {
        self.push(path, Scripted::Ready(Ok(response)));
    }

    pub fn reply_json(&self, path: &str, status: u16, body: serde_json::Value) {
        self.reply(path, RawResponse::json(status, &body));
    }

    pub fn fail(&self, path: &str, error: AppError) {
        self.push(path, Scripted::Ready(Err(error)));
    }

    /// Script a JSON reply that is only delivered once the returned gate opens.
    pub fn gated_json(&self, path: &str, status: u16, body: serde_json::Value) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(path, Scripted::Gated(rx, Ok(RawResponse::json(status, &body))));
        Gate(tx)
    }

    /// Every request seen so far, as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self, request: &str) -> usize {
        self.lock().requests.iter().filter(|r| *r == request).count()
    }

    /// JSON bodies of every POST, in order.
    pub fn posted_bodies(&self) -> Vec<serde_json::Value> {
        self.lock().posted.clone()
    }

    fn take(&self, method: &str, path: &str) -> Option<Scripted> {
        let mut state = self.lock();
        state.requests.push(format!("{method} {path}"));
        let queue = state.scripts.get_mut(path)?;
        if queue.len() == 1 {
            if let Some(Scripted::Ready(result)) = queue.front() {
                return Some(Scripted::Ready(result.clone()));
            }
        }
        queue.pop_front()
    }

    async fn respond(&self, method: &str, path: &str) -> Result<RawResponse, AppError> {
        match self.take(method, path) {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Gated(rx, result)) => match rx.await {
                Ok(()) => result,
                Err(_) => Err(AppError::network("Request abandoned")),
            },
            None => Ok(RawResponse::json(
                404,
                &serde_json::json!({ "detail": format!("No scripted response for {path}") }),
            )),
        }
    }
}

impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, AppError> {
        self.respond("GET", path).await
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RawResponse, AppError> {
        self.lock().posted.push(body.clone());
        self.respond("POST", path).await
    }
}

/// A `DocumentSink` that keeps everything it is handed.
#[derive(Clone, Default)]
pub struct RecordingSink {
    saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    failure: Option<AppError>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every save fails with `error`.
    pub fn failing(error: AppError) -> Self {
        Self {
            saved: Arc::default(),
            failure: Some(error),
        }
    }

    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DocumentSink for RecordingSink {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.saved
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((filename.to_string(), bytes));
        Ok(filename.to_string())
    }
}
