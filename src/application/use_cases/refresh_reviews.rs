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

use crate::domain::{
    models::{outcome::ScrapeOutcome, wine::ScrapeResult},
    repositories::storage_repository::{StorageError, StorageRepository},
    services::scrape_service::{ScrapeRequest, ScrapeService},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Failed to fetch reviews, please make sure your URL exists and your settings are valid.")]
    FetchFailed { reason: String },
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Snapshot encoding error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 刷新评论快照
///
/// 运行一次完整抓取，成功后整体替换存储中的快照。
/// 抓取失败时保留上一份快照。
pub struct RefreshReviewsUseCase {
    service: Arc<ScrapeService>,
    storage: Arc<dyn StorageRepository>,
    request: ScrapeRequest,
    snapshot_key: String,
}

impl RefreshReviewsUseCase {
    pub fn new(
        service: Arc<ScrapeService>,
        storage: Arc<dyn StorageRepository>,
        request: ScrapeRequest,
        snapshot_key: impl Into<String>,
    ) -> Self {
        Self {
            service,
            storage,
            request,
            snapshot_key: snapshot_key.into(),
        }
    }

    /// 执行抓取并保存快照
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 保存的酒款数量
    /// * `Err(RefreshError)` - 抓取失败或存储失败
    pub async fn execute(&self) -> Result<usize, RefreshError> {
        let result = match self.service.run(&self.request).await {
            ScrapeOutcome::Found(result) => result,
            ScrapeOutcome::Unavailable(reason) | ScrapeOutcome::ParseFailure(reason) => {
                warn!(url = %self.request.listing_url, %reason, "refresh aborted, keeping previous snapshot");
                return Err(RefreshError::FetchFailed { reason });
            }
        };

        if result.is_empty() {
            warn!(url = %self.request.listing_url, "catalog has no wines, storing empty snapshot");
        }

        let body = serde_json::to_vec_pretty(&result)?;
        self.storage.save(&self.snapshot_key, &body).await?;

        info!(
            key = %self.snapshot_key,
            count = result.len(),
            reviews = result.review_count(),
            "stored review snapshot"
        );
        Ok(result.len())
    }

    /// 读取最近一次保存的快照
    pub async fn load_snapshot(&self) -> Result<Option<ScrapeResult>, RefreshError> {
        match self.storage.get(&self.snapshot_key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// 删除已保存的快照
    pub async fn clear(&self) -> Result<(), RefreshError> {
        self.storage.delete(&self.snapshot_key).await?;
        info!(key = %self.snapshot_key, "cleared review snapshot");
        Ok(())
    }
}
