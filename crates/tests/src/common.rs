use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use client::{ApiClient, ClientConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Court complex whose lists are bundled into one archive.
pub const BUNDLED_COMPLEX: &str = "Patiala House Court Complex";
/// Court complex with no sittings on any date.
pub const EMPTY_COMPLEX: &str = "Surajpur Court Complex";
/// Court complex whose upstream portal is down.
pub const BROKEN_COMPLEX: &str = "Karkardooma Court Complex";
/// Court complex answered with several documents and no archive.
pub const SPLIT_COMPLEX: &str = "Tis Hazari Court Complex";

/// Knobs for the stub cause list backend.
#[derive(Clone, Default)]
pub struct StubOptions {
    /// Delay before `/districts/{state}` answers, per state.
    pub district_delays: HashMap<String, Duration>,
    /// Delay before `/health` answers.
    pub health_delay: Option<Duration>,
    /// Answer `/health` with a bare 503.
    pub health_down: bool,
}

#[derive(Clone)]
struct StubState {
    options: StubOptions,
    requests: Arc<Mutex<Vec<String>>>,
    posted: Arc<Mutex<Vec<Value>>>,
}

/// A cause list backend on an ephemeral local port.
pub struct StubBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    posted: Arc<Mutex<Vec<Value>>>,
    server: tokio::task::JoinHandle<()>,
}

impl StubBackend {
    /// Every request seen so far as `"METHOD /raw/path"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, request: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == request).count()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(5),
            download_dir: PathBuf::from("downloads"),
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config()).expect("Failed to build API client")
    }

    /// A client that gives up after `timeout`.
    pub fn client_with_timeout(&self, timeout: Duration) -> ApiClient {
        let config = ClientConfig {
            timeout,
            ..self.config()
        };
        ApiClient::new(&config).expect("Failed to build API client")
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Start the stub backend with default behavior.
pub async fn stub_backend() -> StubBackend {
    stub_backend_with(StubOptions::default()).await
}

/// Start the stub backend with the given options. Routes live under `/api`.
pub async fn stub_backend_with(options: StubOptions) -> StubBackend {
    let state = StubState {
        options,
        requests: Arc::default(),
        posted: Arc::default(),
    };

    let api = Router::new()
        .route("/health", get(health))
        .route("/states", get(states))
        .route("/districts/{state}", get(districts))
        .route("/courts/{state}/{district}", get(courts))
        .route("/judges/{state}/{district}/{court_complex}", get(judges))
        .route("/fetch-causelist", post(fetch_causelist))
        .route("/download/{filename}", get(download));

    let router = Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("No local address");
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub backend failed");
    });

    StubBackend {
        base_url: format!("http://{addr}/api"),
        requests: state.requests,
        posted: state.posted,
        server,
    }
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}/api")
}

async fn record(State(state): State<StubState>, req: Request, next: Next) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push(format!("{} {}", req.method(), req.uri().path()));
    next.run(req).await
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn health(State(state): State<StubState>) -> Response {
    if let Some(delay) = state.options.health_delay {
        tokio::time::sleep(delay).await;
    }
    if state.options.health_down {
        return (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").into_response();
    }
    Json(json!({"status": "healthy", "message": "Court Cause List API is running"})).into_response()
}

async fn states() -> Json<Value> {
    Json(json!({"states": ["Delhi", "Uttar Pradesh"]}))
}

async fn districts(State(state): State<StubState>, Path(name): Path<String>) -> Response {
    if let Some(delay) = state.options.district_delays.get(&name) {
        tokio::time::sleep(*delay).await;
    }
    match name.as_str() {
        "Delhi" => Json(json!({"districts": ["New Delhi", "East Delhi"]})).into_response(),
        "Uttar Pradesh" => {
            Json(json!({"districts": ["Gautam Buddh Nagar", "Ghaziabad"]})).into_response()
        }
        _ => detail(StatusCode::NOT_FOUND, "State not found"),
    }
}

async fn courts(Path((state, district)): Path<(String, String)>) -> Json<Value> {
    let courts = match (state.as_str(), district.as_str()) {
        ("Delhi", "New Delhi") => vec![BUNDLED_COMPLEX, SPLIT_COMPLEX],
        ("Delhi", "East Delhi") => vec![BROKEN_COMPLEX],
        ("Uttar Pradesh", "Gautam Buddh Nagar") => vec![EMPTY_COMPLEX],
        _ => vec![],
    };
    Json(json!({ "courts": courts }))
}

async fn judges(Path((_, _, court_complex)): Path<(String, String, String)>) -> Json<Value> {
    if court_complex != BUNDLED_COMPLEX {
        return Json(json!({"judges": []}));
    }
    Json(json!({"judges": [
        {"name": "Sh. Arun Kumar", "designation": "Chief Judicial Magistrate", "court_number": "12"},
        {"name": "Ms. Neha Verma", "designation": "Civil Judge", "court_number": "7"},
    ]}))
}

async fn fetch_causelist(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.posted.lock().unwrap().push(body.clone());

    let date = body["date"].as_str().unwrap_or_default().to_string();
    let single_judge = body.get("court_name").and_then(Value::as_str).is_some();

    match body["court_complex"].as_str().unwrap_or_default() {
        BUNDLED_COMPLEX if single_judge => {
            let filename = format!("cause_list_{date}.pdf");
            Json(json!({
                "success": true,
                "message": "Generated cause list PDF",
                "pdf_url": format!("/download/{filename}"),
                "filename": filename,
            }))
            .into_response()
        }
        BUNDLED_COMPLEX => {
            let filename = format!("cause_lists_{date}.zip");
            Json(json!({
                "success": true,
                "message": "Generated 2 cause list PDFs",
                "pdf_url": format!("/download/{filename}"),
                "filename": filename,
            }))
            .into_response()
        }
        SPLIT_COMPLEX => Json(json!({
            "success": true,
            "message": "Generated 2 cause list PDFs",
            "pdf_urls": [
                format!("/download/cause_list_court_1_{date}.pdf"),
                format!("/download/cause_list_court_2_{date}.pdf"),
            ],
        }))
        .into_response(),
        EMPTY_COMPLEX => Json(json!({
            "success": false,
            "message": "No cause lists found for the given criteria",
        }))
        .into_response(),
        BROKEN_COMPLEX => detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error fetching cause list: upstream portal unreachable",
        ),
        _ => detail(StatusCode::NOT_FOUND, "Court complex not found"),
    }
}

async fn download(Path(filename): Path<String>) -> Response {
    if filename.starts_with("cause_list") {
        (StatusCode::OK, document_bytes(&filename)).into_response()
    } else {
        detail(StatusCode::NOT_FOUND, "File not found")
    }
}

/// Body the stub serves for a generated document.
pub fn document_bytes(filename: &str) -> Vec<u8> {
    format!("%PDF-1.4 stub document {filename}").into_bytes()
}
