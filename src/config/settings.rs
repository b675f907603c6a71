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

use crate::domain::services::scrape_service::ScrapeRequest;
use crate::engines::reqwest_engine::DEFAULT_USER_AGENT;
use crate::utils::validators::{self, ListingUrlError};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use validator::Validate;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 配置加载失败
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    /// 字段校验失败
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    /// 列表页URL不合法
    #[error(transparent)]
    ListingUrl(#[from] ListingUrlError),
}

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub scraper: ScraperSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 调度配置
    pub schedule: ScheduleSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScraperSettings {
    /// 站点根地址，详情页相对链接基于它解析
    #[validate(url(message = "Base URL must be an absolute URL"))]
    pub base_url: String,
    /// 酒庄列表页URL
    #[validate(url(message = "Winery URL must be an absolute URL"))]
    pub listing_url: String,
    /// 最低评分
    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub min_rating: i64,
    /// 每款酒抓取的评论数量
    #[validate(range(min = 0, message = "Amount of reviews must be a positive number"))]
    pub max_reviews: i64,
    /// 单次请求超时时间（秒）
    #[validate(range(min = 1, message = "Timeout must be at least one second"))]
    pub timeout_secs: u64,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 本地存储路径
    pub local_path: String,
    /// 抓取结果保存的键名
    pub snapshot_key: String,
}

/// 调度配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSettings {
    /// 抓取间隔（秒），0 表示只运行一次
    pub interval_secs: u64,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 监听地址
    pub listen_addr: String,
}

impl ScraperSettings {
    /// 解析后的站点根地址
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        Url::parse(&self.base_url)
            .map_err(|_| SettingsError::ListingUrl(ListingUrlError::Malformed(self.base_url.clone())))
    }

    /// 转换为抓取参数
    ///
    /// 调用前应先通过 [`Settings::validate`]
    pub fn to_request(&self) -> ScrapeRequest {
        ScrapeRequest {
            listing_url: self.listing_url.clone(),
            min_rating: self.min_rating.clamp(0, 5) as u8,
            max_reviews: self.max_reviews.max(0) as usize,
        }
    }
}

impl Settings {
    /// 带默认值的配置构建器
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("scraper.base_url", "https://www.vivino.com")?
            .set_default("scraper.min_rating", 5)?
            .set_default("scraper.max_reviews", 1)?
            .set_default("scraper.timeout_secs", 10)?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            .set_default("storage.local_path", "./storage")?
            .set_default("storage.snapshot_key", "vivino_reviews.json")?
            .set_default("schedule.interval_secs", 3600)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }

    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和 `VINORS__*` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并校验的配置
    /// * `Err(SettingsError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let settings: Settings = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("VINORS").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// 校验用户提供的配置
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.scraper.validate()?;
        let base = self.scraper.base_url()?;
        validators::validate_listing_url(&self.scraper.listing_url, &base)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
