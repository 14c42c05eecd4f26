//! Submitting a cause list request and retrieving the resulting document.

use chrono::NaiveDate;
use shared_types::{last_path_segment, AppError, CauseListResponse};
use std::collections::HashMap;

use crate::api::ApiClient;
use crate::cascade::{build_request, Selection};
use crate::sink::DocumentSink;
use crate::store::StateHandle;
use crate::transport::Transport;

/// Fallback shown when a submission fails without a server explanation.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to fetch cause list";

pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download the file. Please try again.";

/// What the result panel renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    /// A submission is outstanding; further submits are no-ops.
    pub in_flight: bool,
    /// Last structured response from the backend, successful or not.
    pub result: Option<CauseListResponse>,
    /// Request or download failure message.
    pub error: Option<String>,
    /// Inline validation messages keyed by field name.
    pub field_errors: HashMap<String, String>,
    /// Where the last downloaded document was saved.
    pub saved_as: Option<String>,
}

impl SubmissionState {
    /// Document URLs the user can retrieve one by one.
    pub fn bundle_urls(&self) -> &[String] {
        self.result
            .as_ref()
            .and_then(CauseListResponse::bundle_urls)
            .unwrap_or_default()
    }
}

/// How a call to [`submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was already outstanding.
    Skipped,
    /// Validation failed; nothing was sent.
    Invalid,
    /// The single document was downloaded and saved.
    Downloaded { saved_as: String },
    /// Several documents are available for individual retrieval.
    BundleAvailable(Vec<String>),
    /// Success without any document to fetch.
    Completed,
    /// The backend answered `success: false`.
    Rejected(AppError),
    /// The request succeeded but the document could not be retrieved.
    DownloadFailed(AppError),
    /// The request itself failed.
    Failed(AppError),
}

/// Validate `selection`, send it, and download the resulting document.
pub async fn submit<T, S, D>(
    client: &ApiClient<T>,
    store: &S,
    sink: &D,
    selection: &Selection,
    today: NaiveDate,
) -> SubmitOutcome
where
    T: Transport,
    S: StateHandle<SubmissionState>,
    D: DocumentSink,
{
    if store.with(|s| s.in_flight) {
        tracing::debug!("Submission already in flight; ignoring");
        return SubmitOutcome::Skipped;
    }

    let request = match build_request(selection, today) {
        Ok(request) => request,
        Err(e) => {
            store.update(|s| {
                s.field_errors = e.field_errors.clone();
                s.error = None;
                s.result = None;
            });
            return SubmitOutcome::Invalid;
        }
    };

    store.update(|s| {
        s.in_flight = true;
        s.result = None;
        s.error = None;
        s.field_errors.clear();
        s.saved_as = None;
    });

    let outcome = match client.fetch_cause_list(&request).await {
        Ok(response) => handle_response(client, store, sink, response).await,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching cause list");
            let message = e.display_message(SUBMIT_FAILED_MESSAGE);
            store.update(|s| s.error = Some(message));
            SubmitOutcome::Failed(e)
        }
    };

    store.update(|s| s.in_flight = false);
    outcome
}

async fn handle_response<T, S, D>(
    client: &ApiClient<T>,
    store: &S,
    sink: &D,
    response: CauseListResponse,
) -> SubmitOutcome
where
    T: Transport,
    S: StateHandle<SubmissionState>,
    D: DocumentSink,
{
    store.update(|s| s.result = Some(response.clone()));

    if !response.success {
        return SubmitOutcome::Rejected(AppError::application(response.message));
    }

    if let Some(target) = response.download_target() {
        return match retrieve(client, sink, &target.remote_name, &target.save_as).await {
            Ok(saved_as) => {
                store.update(|s| s.saved_as = Some(saved_as.clone()));
                SubmitOutcome::Downloaded { saved_as }
            }
            Err(e) => {
                store.update(|s| s.error = Some(DOWNLOAD_FAILED_MESSAGE.to_string()));
                SubmitOutcome::DownloadFailed(e)
            }
        };
    }

    match response.bundle_urls() {
        Some(urls) => SubmitOutcome::BundleAvailable(urls.to_vec()),
        None => SubmitOutcome::Completed,
    }
}

async fn retrieve<T: Transport, D: DocumentSink>(
    client: &ApiClient<T>,
    sink: &D,
    remote_name: &str,
    save_as: &str,
) -> Result<String, AppError> {
    let bytes = client.download_file(remote_name).await?;
    sink.save(save_as, bytes).await.inspect_err(|e| {
        tracing::error!(error = %e, "Error saving downloaded file");
    })
}

/// Fetch one document of a multi-document result on demand.
pub async fn download_document<T, S, D>(
    client: &ApiClient<T>,
    store: &S,
    sink: &D,
    url: &str,
) -> Result<String, AppError>
where
    T: Transport,
    S: StateHandle<SubmissionState>,
    D: DocumentSink,
{
    let Some(name) = last_path_segment(url) else {
        let err = AppError::validation(format!("No document name in {url}"), HashMap::new());
        store.update(|s| s.error = Some(DOWNLOAD_FAILED_MESSAGE.to_string()));
        return Err(err);
    };

    match retrieve(client, sink, &name, &name).await {
        Ok(saved_as) => {
            store.update(|s| {
                s.saved_as = Some(saved_as.clone());
                s.error = None;
            });
            Ok(saved_as)
        }
        Err(e) => {
            store.update(|s| s.error = Some(DOWNLOAD_FAILED_MESSAGE.to_string()));
            Err(e)
        }
    }
}

/// Clear the result and any messages.
pub fn dismiss<S: StateHandle<SubmissionState>>(store: &S) {
    store.update(|s| {
        s.result = None;
        s.error = None;
        s.field_errors.clear();
        s.saved_as = None;
    });
}
