// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{FetchedPage, PageFetcher};
use tracing::{debug, warn};

const NOT_FOUND: u16 = 404;
const METHOD_NOT_ALLOWED: u16 = 405;

/// 可用性检查结果
#[derive(Debug)]
pub enum Availability {
    /// 传输失败或 404
    Missing,
    /// HEAD 确认存在
    Exists,
    /// HEAD 被拒绝，退回 GET 得到的完整响应，调用方可直接使用
    Fetched(FetchedPage),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        !matches!(self, Availability::Missing)
    }
}

/// 检查URL是否存在
///
/// 先发送 HEAD 请求；服务器拒绝 HEAD（405）时退回 GET。
/// 传输失败或 404 视为不存在，其余状态一律视为存在。
pub async fn check(fetcher: &dyn PageFetcher, url: &str) -> Availability {
    match fetcher.head(url).await {
        Ok(METHOD_NOT_ALLOWED) => match fetcher.fetch(url).await {
            Ok(page) if page.status_code == NOT_FOUND => {
                debug!(url, status = page.status_code, "availability check via GET");
                Availability::Missing
            }
            Ok(page) => {
                debug!(url, status = page.status_code, "availability check via GET");
                Availability::Fetched(page)
            }
            Err(e) => {
                warn!(url, error = %e, "availability check failed");
                Availability::Missing
            }
        },
        Ok(status) => {
            debug!(url, status, "availability check");
            if status == NOT_FOUND {
                Availability::Missing
            } else {
                Availability::Exists
            }
        }
        Err(e) => {
            warn!(url, error = %e, "availability check failed");
            Availability::Missing
        }
    }
}
