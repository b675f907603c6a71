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

use crate::domain::models::wine::ReviewRecord;
use crate::domain::services::extraction_service::{
    Accessor, ExtractionRule, ExtractionService, FieldRule,
};
use crate::engines::traits::PageFetcher;
use crate::utils::document::{compile, Document, DocumentError};
use crate::utils::errors::ExtractError;
use crate::utils::url_utils::{resolve_url, same_origin};
use scraper::Selector;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// 评论单元选择器
pub const REVIEW_SELECTOR: &str = ".user-reviews .review";

/// 评论字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Author,
    Rating,
    Description,
}

/// 评论字段提取表
pub const REVIEW_FIELDS: [FieldRule<ReviewField>; 3] = [
    FieldRule::new(ReviewField::Author, "[itemprop=author]", Accessor::Text),
    FieldRule::new(ReviewField::Rating, "[itemprop=ratingValue]", Accessor::Attr("content")),
    FieldRule::new(ReviewField::Description, "[itemprop=description]", Accessor::Text),
];

/// 把评分文本宽松地转换为整数
///
/// 跳过前导空白，读取可选符号和连续数字，其余部分忽略；
/// 没有数字时为 0。例如 `"4.5"` 为 4，`"abc"` 为 0。
pub fn coerce_rating(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative {
        -value
    } else {
        value
    }
}

/// 详情页评论解析器
pub struct ReviewParser {
    review: Selector,
    author: ExtractionRule<ReviewField>,
    rating: ExtractionRule<ReviewField>,
    description: ExtractionRule<ReviewField>,
}

impl ReviewParser {
    pub fn new() -> Result<Self, DocumentError> {
        let [author, rating, description] = REVIEW_FIELDS;
        Ok(Self {
            review: compile(REVIEW_SELECTOR)?,
            author: ExtractionService::compile_one(author)?,
            rating: ExtractionService::compile_one(rating)?,
            description: ExtractionService::compile_one(description)?,
        })
    }

    /// 解析评论并过滤
    ///
    /// 先按评分阈值过滤，再取前 `max_reviews` 条；达到上限后不再处理剩余评论。
    /// 缺少评分属性的评论会被跳过。
    pub fn parse(&self, html: &str, min_rating: u8, max_reviews: usize) -> Vec<ReviewRecord> {
        let document = Document::parse(html);
        let threshold = i64::from(min_rating);

        document
            .find_all(&self.review)
            .into_iter()
            .enumerate()
            .filter_map(|(index, unit)| {
                let Some(rating) = self.rating.lookup(&unit) else {
                    warn!(index, "review has no rating, skipping");
                    return None;
                };

                if coerce_rating(&rating) < threshold {
                    return None;
                }

                Some(ReviewRecord {
                    author: self.author.extract(&unit),
                    rating,
                    description: self.description.extract(&unit),
                })
            })
            .take(max_reviews)
            .collect()
    }
}

/// 评论提取器
pub struct ReviewExtractor {
    fetcher: Arc<dyn PageFetcher>,
    parser: ReviewParser,
    base_url: Url,
}

impl ReviewExtractor {
    /// 创建评论提取器
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取引擎
    /// * `base_url` - 解析相对详情页链接使用的站点根地址
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: Url) -> Result<Self, DocumentError> {
        Ok(Self {
            fetcher,
            parser: ReviewParser::new()?,
            base_url,
        })
    }

    /// 抓取详情页并返回符合条件的评论
    ///
    /// `max_reviews` 为 0 时仍会发起请求，但结果一定为空。
    /// 链接或重定向后的地址不在 `base_url` 同源下时返回 `ForeignOrigin`，不读取内容
    pub async fn extract(
        &self,
        detail_path: &str,
        min_rating: u8,
        max_reviews: usize,
    ) -> Result<Vec<ReviewRecord>, ExtractError> {
        let url = resolve_url(&self.base_url, detail_path).map_err(|source| {
            ExtractError::InvalidUrl {
                path: detail_path.to_string(),
                source,
            }
        })?;
        if !same_origin(&url, &self.base_url) {
            return Err(ExtractError::ForeignOrigin(url.to_string()));
        }

        let page = self.fetcher.fetch(url.as_str()).await?;

        let landed = Url::parse(&page.url).ok();
        if !landed.is_some_and(|u| same_origin(&u, &self.base_url)) {
            return Err(ExtractError::ForeignOrigin(page.url));
        }

        if !page.is_success() {
            return Err(ExtractError::HttpStatus(page.status_code));
        }
        if !page.is_html() {
            return Err(ExtractError::NotHtml(page.content_type));
        }

        let reviews = self.parser.parse(&page.content, min_rating, max_reviews);
        debug!(url = %url, count = reviews.len(), "extracted reviews");

        Ok(reviews)
    }
}
