// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    html_response, mount_listing, mount_reviews, request, review_html, service, CATALOG_HTML,
    LISTING_PATH,
};
use vinors::domain::models::outcome::ScrapeOutcome;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_pipeline_follows_linked_wines_once() {
    let server = MockServer::start().await;
    mount_listing(&server, CATALOG_HTML, 1).await;
    mount_reviews(&server, "/acme-reserva/w/1", review_html(&["5", "4", "5"]), 1).await;
    mount_reviews(&server, "/acme-blanco/w/2", review_html(&["3"]), 1).await;

    let outcome = service(&server).run(&request(&server, 4, 10)).await;

    let result = outcome.found().expect("catalog should be found");
    assert_eq!(result.len(), 3);

    let reserva = &result.wines[0];
    assert_eq!(reserva.title, "Acme Reserva 2018");
    assert_eq!(reserva.location_country, "Spain");
    assert_eq!(reserva.rating_count, "1312");
    let ratings: Vec<&str> = reserva.reviews.iter().map(|r| r.rating.as_str()).collect();
    assert_eq!(ratings, vec!["5", "4", "5"]);
    assert_eq!(reserva.reviews[0].author, "taster 0");
    assert_eq!(reserva.reviews[0].description, "tasting note 0");

    assert_eq!(result.wines[1].title, "");
    assert!(result.wines[1].reviews.is_empty());
    assert!(result.wines[2].reviews.is_empty());

    // expect(1) on every detail path is verified when the server drops
}

#[tokio::test]
async fn test_filter_then_cap_keeps_document_order() {
    let server = MockServer::start().await;
    mount_listing(&server, CATALOG_HTML, 1).await;
    mount_reviews(
        &server,
        "/acme-reserva/w/1",
        review_html(&["5", "3", "5", "4", "2"]),
        1,
    )
    .await;
    mount_reviews(&server, "/acme-blanco/w/2", review_html(&[]), 1).await;

    let result = service(&server)
        .run(&request(&server, 4, 2))
        .await
        .found()
        .unwrap();

    let reserva = &result.wines[0];
    assert_eq!(reserva.reviews.len(), 2);
    assert_eq!(reserva.reviews[0].author, "taster 0");
    assert_eq!(reserva.reviews[1].author, "taster 2");
}

#[tokio::test]
async fn test_missing_listing_is_unavailable_without_gets() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = service(&server).run(&request(&server, 5, 1)).await;

    assert!(matches!(outcome, ScrapeOutcome::Unavailable(_)));
}

#[tokio::test]
async fn test_detail_page_failure_is_isolated() {
    let server = MockServer::start().await;
    mount_listing(&server, CATALOG_HTML, 1).await;
    Mock::given(method("GET"))
        .and(path("/acme-reserva/w/1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    mount_reviews(&server, "/acme-blanco/w/2", review_html(&["5"]), 1).await;

    let result = service(&server)
        .run(&request(&server, 5, 1))
        .await
        .found()
        .unwrap();

    assert!(result.wines[0].reviews.is_empty());
    assert_eq!(result.wines[2].reviews.len(), 1);
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let server = MockServer::start().await;
    mount_listing(&server, CATALOG_HTML, 2).await;
    mount_reviews(&server, "/acme-reserva/w/1", review_html(&["5", "1"]), 2).await;
    mount_reviews(&server, "/acme-blanco/w/2", review_html(&["4"]), 2).await;

    let service = service(&server);
    let request = request(&server, 4, 3);

    let first = service.run(&request).await;
    let second = service.run(&request).await;

    assert!(first.is_found());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listing_path_is_requested_verbatim() {
    let server = MockServer::start().await;
    mount_listing(&server, r#"<div id="wine-list"></div>"#, 1).await;

    let outcome = service(&server).run(&request(&server, 5, 1)).await;

    assert_eq!(outcome.found().map(|r| r.len()), Some(0));
    let received = server.received_requests().await.unwrap();
    assert!(received.iter().all(|r| r.url.path() == LISTING_PATH));
}

#[tokio::test]
async fn test_head_rejecting_server_gets_listing_once() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(html_response(CATALOG_HTML))
        .expect(1)
        .mount(&server)
        .await;
    mount_reviews(&server, "/acme-reserva/w/1", review_html(&["5"]), 1).await;
    mount_reviews(&server, "/acme-blanco/w/2", review_html(&["5"]), 1).await;

    let result = service(&server)
        .run(&request(&server, 5, 1))
        .await
        .found()
        .unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.review_count(), 2);
}
