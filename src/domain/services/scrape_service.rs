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
use crate::domain::models::wine::ScrapeResult;
use crate::domain::services::catalog_extractor::CatalogExtractor;
use crate::domain::services::review_extractor::ReviewExtractor;
use crate::engines::traits::PageFetcher;
use crate::utils::document::DocumentError;
use metrics::counter;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

/// 抓取参数
///
/// 由调用方校验，服务内部不再检查
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    /// 酒庄列表页URL
    pub listing_url: String,
    /// 最低评分（含）
    pub min_rating: u8,
    /// 每款酒最多保留的评论数
    pub max_reviews: usize,
}

/// 抓取服务
///
/// 先构建酒庄目录，再逐个抓取酒款详情页并附加评论。
/// 所有请求按目录顺序依次执行。
pub struct ScrapeService {
    catalog: CatalogExtractor,
    reviews: ReviewExtractor,
}

impl ScrapeService {
    /// 创建新的抓取服务实例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取引擎
    /// * `base_url` - 详情页相对链接的站点根地址
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: Url) -> Result<Self, DocumentError> {
        Ok(Self {
            catalog: CatalogExtractor::new(fetcher.clone())?,
            reviews: ReviewExtractor::new(fetcher, base_url)?,
        })
    }

    /// 执行一次完整抓取
    ///
    /// # 返回值
    ///
    /// * `Found(ScrapeResult)` - 目录中的所有酒款（可能为空），已附加评论
    /// * `Unavailable` / `ParseFailure` - 目录无法获取，不会抓取任何详情页
    pub async fn run(&self, request: &ScrapeRequest) -> ScrapeOutcome<ScrapeResult> {
        let start = Instant::now();

        let mut wines = match self.catalog.extract(&request.listing_url).await {
            ScrapeOutcome::Found(wines) => wines,
            failed => {
                counter!("vinors_runs_total", "outcome" => failed.label()).increment(1);
                return failed.map(ScrapeResult::new);
            }
        };

        for wine in wines.iter_mut().filter(|w| w.has_detail_link()) {
            wine.reviews = match self
                .reviews
                .extract(&wine.title_url, request.min_rating, request.max_reviews)
                .await
            {
                Ok(reviews) => {
                    counter!("vinors_review_pages_total", "status" => "ok").increment(1);
                    reviews
                }
                Err(e) => {
                    counter!("vinors_review_pages_total", "status" => "error").increment(1);
                    warn!(wine = %wine.title, url = %wine.title_url, error = %e, "failed to extract reviews");
                    Vec::new()
                }
            };
        }

        let result = ScrapeResult::new(wines);
        counter!("vinors_runs_total", "outcome" => "found").increment(1);
        counter!("vinors_wines_scraped_total").increment(result.len() as u64);
        info!(
            wines = result.len(),
            reviews = result.review_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scrape finished"
        );

        ScrapeOutcome::Found(result)
    }
}

#[cfg(test)]
#[path = "scrape_service_test.rs"]
mod tests;
