use chrono::NaiveDate;
use client::cascade::Selection;
use client::submit::{
    download_document, submit, SubmissionState, SubmitOutcome, DOWNLOAD_FAILED_MESSAGE,
};
use client::testing::RecordingSink;
use client::StateHandle;
use pretty_assertions::assert_eq;
use shared_types::{CaseType, NETWORK_ERROR_MESSAGE};
use std::cell::RefCell;
use std::rc::Rc;

use crate::common;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn selection(court_complex: &str) -> Selection {
    Selection {
        state: "Delhi".into(),
        district: "New Delhi".into(),
        court_complex: court_complex.into(),
        court_name: String::new(),
        date: "2026-10-16".into(),
        case_type: CaseType::Both,
    }
}

fn store() -> Rc<RefCell<SubmissionState>> {
    Rc::new(RefCell::new(SubmissionState::default()))
}

#[tokio::test]
async fn test_bundle_is_downloaded_once_under_server_filename() {
    let backend = common::stub_backend().await;
    let client = backend.client();
    let sink = RecordingSink::new();
    let state = store();

    let outcome = submit(&client, &state, &sink, &selection(common::BUNDLED_COMPLEX), today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Downloaded {
            saved_as: "cause_lists_2026-10-16.zip".into()
        }
    );
    assert_eq!(
        backend.request_count("GET /api/download/cause_lists_2026-10-16.zip"),
        1
    );
    assert_eq!(
        sink.saved(),
        vec![(
            "cause_lists_2026-10-16.zip".to_string(),
            common::document_bytes("cause_lists_2026-10-16.zip")
        )]
    );

    let result = state.snapshot().result.unwrap();
    assert!(result.success);
    assert_eq!(result.message, "Generated 2 cause list PDFs");
}

#[tokio::test]
async fn test_request_body_omits_unset_judge() {
    let backend = common::stub_backend().await;
    let sink = RecordingSink::new();

    submit(&backend.client(), &store(), &sink, &selection(common::BUNDLED_COMPLEX), today()).await;

    let posted = backend.posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0]["state"], "Delhi");
    assert_eq!(posted[0]["court_complex"], common::BUNDLED_COMPLEX);
    assert_eq!(posted[0]["date"], "2026-10-16");
    assert_eq!(posted[0]["case_type"], "both");
    assert!(posted[0].get("court_name").is_none());
}

#[tokio::test]
async fn test_single_judge_yields_single_pdf() {
    let backend = common::stub_backend().await;
    let sink = RecordingSink::new();
    let mut chosen = selection(common::BUNDLED_COMPLEX);
    chosen.court_name = "Sh. Arun Kumar".into();
    chosen.case_type = CaseType::Criminal;

    let outcome = submit(&backend.client(), &store(), &sink, &chosen, today()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Downloaded {
            saved_as: "cause_list_2026-10-16.pdf".into()
        }
    );
    let posted = backend.posted();
    assert_eq!(posted[0]["court_name"], "Sh. Arun Kumar");
    assert_eq!(posted[0]["case_type"], "criminal");
}

#[tokio::test]
async fn test_no_results_shows_message_and_skips_download() {
    let backend = common::stub_backend().await;
    let sink = RecordingSink::new();
    let state = store();

    let outcome = submit(&backend.client(), &state, &sink, &selection(common::EMPTY_COMPLEX), today()).await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert!(sink.saved().is_empty());
    assert_eq!(backend.requests(), vec!["POST /api/fetch-causelist"]);
    let snapshot = state.snapshot();
    assert_eq!(
        snapshot.result.unwrap().message,
        "No cause lists found for the given criteria"
    );
    assert_eq!(snapshot.error, None);
}

#[tokio::test]
async fn test_server_failure_surfaces_detail() {
    let backend = common::stub_backend().await;
    let state = store();

    submit(&backend.client(), &state, &RecordingSink::new(), &selection(common::BROKEN_COMPLEX), today()).await;

    let snapshot = state.snapshot();
    assert_eq!(snapshot.result, None);
    assert_eq!(
        snapshot.error.as_deref(),
        Some("Error fetching cause list: upstream portal unreachable")
    );
    assert!(!snapshot.in_flight);
}

#[tokio::test]
async fn test_unreachable_backend_gives_network_message() {
    let config = client::ClientConfig {
        base_url: common::unreachable_base_url().await,
        ..client::ClientConfig::default()
    };
    let api = client::ApiClient::new(&config).unwrap();
    let state = store();

    let outcome = submit(&api, &state, &RecordingSink::new(), &selection(common::BUNDLED_COMPLEX), today()).await;

    match outcome {
        SubmitOutcome::Failed(e) => assert!(e.is_network()),
        other => panic!("Expected a network failure, got {other:?}"),
    }
    assert_eq!(state.snapshot().error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_future_date_is_rejected_before_sending() {
    let backend = common::stub_backend().await;
    let state = store();
    let mut chosen = selection(common::BUNDLED_COMPLEX);
    chosen.date = "2026-10-18".into();

    let outcome = submit(&backend.client(), &state, &RecordingSink::new(), &chosen, today()).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(backend.requests().is_empty());
    assert_eq!(
        state.snapshot().field_errors["date"],
        "Date cannot be in the future"
    );
}

#[tokio::test]
async fn test_split_result_is_offered_per_document() {
    let backend = common::stub_backend().await;
    let client = backend.client();
    let sink = RecordingSink::new();
    let state = store();

    let outcome = submit(&client, &state, &sink, &selection(common::SPLIT_COMPLEX), today()).await;

    let urls = match outcome {
        SubmitOutcome::BundleAvailable(urls) => urls,
        other => panic!("Expected per-document links, got {other:?}"),
    };
    assert_eq!(urls.len(), 2);
    assert!(sink.saved().is_empty());

    let saved = download_document(&client, &state, &sink, &urls[1]).await.unwrap();
    assert_eq!(saved, "cause_list_court_2_2026-10-16.pdf");
    assert_eq!(
        backend.request_count("GET /api/download/cause_list_court_2_2026-10-16.pdf"),
        1
    );
}

#[tokio::test]
async fn test_missing_document_sets_download_error() {
    let backend = common::stub_backend().await;
    let state = store();

    let err = download_document(&backend.client(), &state, &RecordingSink::new(), "/download/missing.pdf")
        .await
        .unwrap_err();

    assert_eq!(err.server_detail(), Some("File not found"));
    assert_eq!(state.snapshot().error.as_deref(), Some(DOWNLOAD_FAILED_MESSAGE));
}
