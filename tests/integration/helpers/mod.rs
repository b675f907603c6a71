// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use url::Url;
use vinors::domain::services::scrape_service::{ScrapeRequest, ScrapeService};
use vinors::engines::reqwest_engine::{ReqwestEngine, DEFAULT_USER_AGENT};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LISTING_PATH: &str = "/wineries/acme/wines";

/// 三张酒卡，其中第二张没有详情页链接
pub const CATALOG_HTML: &str = r#"<html><body>
<div id="wine-list">
    <div class="wine-card-box">
        <div class="wine-name"><a href="/acme-reserva/w/1">Acme Reserva 2018</a></div>
        <div class="wine-country">
            <span class="district"><a href="/regions/rioja">Rioja</a></span>
            <span class="country"><a href="/countries/spain">Spain</a></span>
        </div>
        <div class="key-figure-item" itemprop="ratingValue">4.2</div>
        <meta itemprop="reviewCount" content="1312">
    </div>
    <div class="wine-card-box">
        <div class="wine-name"><span>Acme Rosado</span></div>
    </div>
    <div class="wine-card-box">
        <div class="wine-name"><a href="/acme-blanco/w/2">Acme Blanco</a></div>
    </div>
</div>
</body></html>"#;

/// 按给定评分生成评论页
pub fn review_html(ratings: &[&str]) -> String {
    let units: String = ratings
        .iter()
        .enumerate()
        .map(|(i, rating)| {
            format!(
                r#"<div class="review">
                    <a itemprop="author" href="/users/{i}">taster {i}</a>
                    <meta itemprop="ratingValue" content="{rating}">
                    <p itemprop="description">tasting note {i}</p>
                </div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div class="user-reviews">{units}</div></body></html>"#)
}

pub fn html_response(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into(), "text/html; charset=utf-8")
}

/// 挂载列表页（HEAD 和 GET）
pub async fn mount_listing(server: &MockServer, body: &str, expected_gets: u64) {
    Mock::given(method("HEAD"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(html_response(body))
        .expect(expected_gets)
        .mount(server)
        .await;
}

pub async fn mount_reviews(server: &MockServer, detail_path: &str, body: String, expected: u64) {
    Mock::given(method("GET"))
        .and(path(detail_path))
        .respond_with(html_response(body))
        .expect(expected)
        .mount(server)
        .await;
}

pub fn service(server: &MockServer) -> Arc<ScrapeService> {
    let engine = ReqwestEngine::new(Duration::from_secs(5), DEFAULT_USER_AGENT).unwrap();
    let base = Url::parse(&server.uri()).unwrap();
    Arc::new(ScrapeService::new(Arc::new(engine), base).unwrap())
}

pub fn request(server: &MockServer, min_rating: u8, max_reviews: usize) -> ScrapeRequest {
    ScrapeRequest {
        listing_url: format!("{}{}", server.uri(), LISTING_PATH),
        min_rating,
        max_reviews,
    }
}
