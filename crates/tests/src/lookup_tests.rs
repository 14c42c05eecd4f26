use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_list_states() {
    let backend = common::stub_backend().await;

    let states = backend.client().list_states().await.unwrap();

    assert_eq!(states, vec!["Delhi", "Uttar Pradesh"]);
    assert_eq!(backend.requests(), vec!["GET /api/states"]);
}

#[tokio::test]
async fn test_state_with_space_is_percent_encoded() {
    let backend = common::stub_backend().await;

    let districts = backend.client().list_districts("Uttar Pradesh").await.unwrap();

    assert_eq!(districts, vec!["Gautam Buddh Nagar", "Ghaziabad"]);
    assert_eq!(backend.requests(), vec!["GET /api/districts/Uttar%20Pradesh"]);
}

#[tokio::test]
async fn test_courts_and_judges_encode_every_segment() {
    let backend = common::stub_backend().await;
    let client = backend.client();

    let courts = client.list_courts("Delhi", "New Delhi").await.unwrap();
    assert_eq!(courts, vec![common::BUNDLED_COMPLEX, common::SPLIT_COMPLEX]);

    let judges = client
        .list_judges("Delhi", "New Delhi", common::BUNDLED_COMPLEX)
        .await
        .unwrap();
    assert_eq!(judges.len(), 2);
    assert_eq!(judges[0].label(), "Sh. Arun Kumar - Chief Judicial Magistrate");
    assert_eq!(judges[1].court_number, "7");

    assert_eq!(
        backend.requests(),
        vec![
            "GET /api/courts/Delhi/New%20Delhi",
            "GET /api/judges/Delhi/New%20Delhi/Patiala%20House%20Court%20Complex",
        ]
    );
}

#[tokio::test]
async fn test_unknown_state_surfaces_detail() {
    let backend = common::stub_backend().await;

    let err = backend.client().list_districts("Atlantis").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.server_detail(), Some("State not found"));
}

#[tokio::test]
async fn test_empty_court_list_is_not_an_error() {
    let backend = common::stub_backend().await;

    let courts = backend.client().list_courts("Uttar Pradesh", "Ghaziabad").await.unwrap();

    assert!(courts.is_empty());
}
