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

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{EngineError, FetchedPage, PageFetcher};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// 默认User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; vinors/0.1; +https://github.com/Kirky-X/vinors)";

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎。不保存 Cookie，每个请求都有超时上限
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的抓取引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求超时时间
    /// * `user_agent` - 请求使用的User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// 根据抓取配置创建引擎
    pub fn from_settings(settings: &ScraperSettings) -> Result<Self, EngineError> {
        Self::new(Duration::from_secs(settings.timeout_secs), &settings.user_agent)
    }
}

fn map_error(e: reqwest::Error) -> EngineError {
    if e.is_timeout() {
        EngineError::Timeout
    } else {
        EngineError::RequestFailed(e)
    }
}

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// 非2xx状态码不视为错误，由调用方根据 `status_code` 判断
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await.map_err(map_error)?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let content = response
            .text()
            .await
            .map_err(|e| if e.is_timeout() { EngineError::Timeout } else { EngineError::Body(e.to_string()) })?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(url, status_code, elapsed_ms = elapsed, "fetched page");

        Ok(FetchedPage {
            url: final_url,
            status_code,
            content_type,
            content,
        })
    }

    async fn head(&self, url: &str) -> Result<u16, EngineError> {
        let response = self.client.head(url).send().await.map_err(map_error)?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
