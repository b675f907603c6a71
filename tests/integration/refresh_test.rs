// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{mount_listing, mount_reviews, request, review_html, service, CATALOG_HTML};
use std::sync::Arc;
use vinors::application::use_cases::refresh_reviews::{RefreshError, RefreshReviewsUseCase};
use vinors::domain::repositories::storage_repository::StorageRepository;
use vinors::infrastructure::storage::LocalStorage;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_refresh_writes_snapshot_file() {
    let server = MockServer::start().await;
    mount_listing(&server, CATALOG_HTML, 1).await;
    mount_reviews(&server, "/acme-reserva/w/1", review_html(&["5"]), 1).await;
    mount_reviews(&server, "/acme-blanco/w/2", review_html(&["2"]), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalStorage::new(dir.path()));
    let use_case = RefreshReviewsUseCase::new(
        service(&server),
        storage.clone(),
        request(&server, 5, 1),
        "vivino_reviews.json",
    );

    assert_eq!(use_case.execute().await.unwrap(), 3);

    let raw = std::fs::read_to_string(dir.path().join("vivino_reviews.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["reviews"][0]["rating"], "5");
    assert_eq!(json[2]["reviews"], serde_json::json!([]));

    let snapshot = use_case.load_snapshot().await.unwrap().unwrap();
    assert_eq!(snapshot.review_count(), 1);
}

#[tokio::test]
async fn test_unavailable_refresh_leaves_file_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalStorage::new(dir.path()));
    storage.save("vivino_reviews.json", b"[\"old\"]").await.unwrap();

    let use_case = RefreshReviewsUseCase::new(
        service(&server),
        storage.clone(),
        request(&server, 5, 1),
        "vivino_reviews.json",
    );

    assert!(matches!(
        use_case.execute().await,
        Err(RefreshError::FetchFailed { .. })
    ));
    assert_eq!(
        storage.get("vivino_reviews.json").await.unwrap(),
        Some(b"[\"old\"]".to_vec())
    );
}
