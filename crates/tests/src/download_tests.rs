use client::sink::{DirectorySink, DocumentSink};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

use crate::common;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("causelist-tests-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn test_download_returns_exact_bytes() {
    let backend = common::stub_backend().await;

    let bytes = backend
        .client()
        .download_file("cause_list_2026-10-16.pdf")
        .await
        .unwrap();

    assert_eq!(bytes, common::document_bytes("cause_list_2026-10-16.pdf"));
}

#[tokio::test]
async fn test_directory_sink_writes_document() {
    let backend = common::stub_backend().await;
    let dir = scratch_dir("writes");
    let sink = DirectorySink::new(&dir);

    let bytes = backend.client().download_file("cause_lists_2026-10-16.zip").await.unwrap();
    let location = sink.save("cause_lists_2026-10-16.zip", bytes.clone()).await.unwrap();

    let written = tokio::fs::read(dir.join("cause_lists_2026-10-16.zip")).await.unwrap();
    assert_eq!(written, bytes);
    assert!(location.ends_with("cause_lists_2026-10-16.zip"));

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_directory_sink_strips_path_components() {
    let dir = scratch_dir("strips");
    let sink = DirectorySink::new(&dir);

    sink.save("../../etc/cause_list.pdf", b"pdf".to_vec()).await.unwrap();

    assert!(dir.join("cause_list.pdf").exists());
    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
