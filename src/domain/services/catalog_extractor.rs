// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::outcome::ScrapeOutcome;
use crate::domain::models::wine::WineRecord;
use crate::domain::services::extraction_service::{
    Accessor, ExtractionRule, ExtractionService, FieldRule,
};
use crate::engines::availability::{self, Availability};
use crate::engines::traits::PageFetcher;
use crate::utils::document::{compile, Document, DocumentError};
use scraper::Selector;
use std::sync::Arc;
use tracing::{info, warn};

/// 酒卡选择器
pub const WINE_CARD_SELECTOR: &str = "#wine-list .wine-card-box";

/// 酒卡字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WineField {
    Title,
    TitleUrl,
    LocationDistrict,
    LocationDistrictUrl,
    LocationCountry,
    LocationCountryUrl,
    RatingAverage,
    RatingCount,
}

impl WineField {
    fn slot(self, record: &mut WineRecord) -> &mut String {
        match self {
            WineField::Title => &mut record.title,
            WineField::TitleUrl => &mut record.title_url,
            WineField::LocationDistrict => &mut record.location_district,
            WineField::LocationDistrictUrl => &mut record.location_district_url,
            WineField::LocationCountry => &mut record.location_country,
            WineField::LocationCountryUrl => &mut record.location_country_url,
            WineField::RatingAverage => &mut record.rating_average,
            WineField::RatingCount => &mut record.rating_count,
        }
    }
}

/// 酒卡字段提取表
pub const WINE_CARD_FIELDS: [FieldRule<WineField>; 8] = [
    FieldRule::new(WineField::Title, ".wine-name a", Accessor::Text),
    FieldRule::new(WineField::TitleUrl, ".wine-name a", Accessor::Attr("href")),
    FieldRule::new(WineField::LocationDistrict, ".wine-country .district a", Accessor::Text),
    FieldRule::new(
        WineField::LocationDistrictUrl,
        ".wine-country .district a",
        Accessor::Attr("href"),
    ),
    FieldRule::new(WineField::LocationCountry, ".wine-country .country a", Accessor::Text),
    FieldRule::new(
        WineField::LocationCountryUrl,
        ".wine-country .country a",
        Accessor::Attr("href"),
    ),
    FieldRule::new(
        WineField::RatingAverage,
        ".key-figure-item[itemprop=ratingValue]",
        Accessor::Text,
    ),
    FieldRule::new(
        WineField::RatingCount,
        "meta[itemprop=reviewCount]",
        Accessor::Attr("content"),
    ),
];

/// 酒庄列表页解析器
pub struct CatalogParser {
    card: Selector,
    rules: Vec<ExtractionRule<WineField>>,
}

impl CatalogParser {
    pub fn new() -> Result<Self, DocumentError> {
        Ok(Self {
            card: compile(WINE_CARD_SELECTOR)?,
            rules: ExtractionService::compile(&WINE_CARD_FIELDS)?,
        })
    }

    /// 解析列表页
    ///
    /// 按文档顺序返回酒卡；没有酒卡时返回空列表
    pub fn parse(&self, html: &str) -> Vec<WineRecord> {
        let document = Document::parse(html);

        document
            .find_all(&self.card)
            .iter()
            .map(|card| {
                let mut record = WineRecord::default();
                for rule in &self.rules {
                    *rule.field.slot(&mut record) = rule.extract(card);
                }
                record
            })
            .collect()
    }
}

/// 酒庄目录提取器
pub struct CatalogExtractor {
    fetcher: Arc<dyn PageFetcher>,
    parser: CatalogParser,
}

impl CatalogExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Result<Self, DocumentError> {
        Ok(Self {
            fetcher,
            parser: CatalogParser::new()?,
        })
    }

    /// 抓取并解析酒庄列表页
    ///
    /// 可用性检查未通过、请求失败或状态码非2xx时返回 `Unavailable`，
    /// 响应体不是HTML时返回 `ParseFailure`。不会返回部分目录。
    pub async fn extract(&self, listing_url: &str) -> ScrapeOutcome<Vec<WineRecord>> {
        let probed = match availability::check(self.fetcher.as_ref(), listing_url).await {
            Availability::Missing => {
                warn!(url = listing_url, "listing page is unavailable");
                return ScrapeOutcome::Unavailable(format!("{} does not exist", listing_url));
            }
            Availability::Exists => None,
            Availability::Fetched(page) => Some(page),
        };

        let fetched = match probed {
            Some(page) => Ok(page),
            None => self.fetcher.fetch(listing_url).await,
        };
        let page = match fetched {
            Ok(page) => page,
            Err(e) if e.is_transport() => {
                warn!(url = listing_url, error = %e, "failed to fetch listing page");
                return ScrapeOutcome::Unavailable(e.to_string());
            }
            Err(e) => {
                warn!(url = listing_url, error = %e, "failed to read listing page");
                return ScrapeOutcome::ParseFailure(e.to_string());
            }
        };

        if !page.is_success() {
            warn!(url = listing_url, status = page.status_code, "listing page returned an error status");
            return ScrapeOutcome::Unavailable(format!("HTTP {}", page.status_code));
        }

        if !page.is_html() {
            warn!(url = listing_url, content_type = %page.content_type, "listing page is not HTML");
            return ScrapeOutcome::ParseFailure(format!("unexpected content type {}", page.content_type));
        }

        let wines = self.parser.parse(&page.content);
        info!(url = listing_url, count = wines.len(), "parsed wine catalog");

        ScrapeOutcome::Found(wines)
    }
}
