// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::refresh_reviews::RefreshReviewsUseCase;
use chrono::{Duration as ChronoDuration, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

/// 最短刷新间隔
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// 评论刷新调度器
///
/// 启动后立即刷新一次，之后按固定间隔刷新。耗时超过间隔时跳过错过的节拍，
/// 刷新过程中不会被打断，停止信号只在两次刷新之间生效。
pub struct ReviewScheduler {
    use_case: Arc<RefreshReviewsUseCase>,
    interval: Duration,
}

impl ReviewScheduler {
    /// 创建新的调度器实例
    ///
    /// # 参数
    ///
    /// * `use_case` - 刷新用例
    /// * `interval` - 刷新间隔，小于 [`MIN_INTERVAL`] 时按 [`MIN_INTERVAL`] 处理
    pub fn new(use_case: Arc<RefreshReviewsUseCase>, interval: Duration) -> Self {
        if interval < MIN_INTERVAL {
            warn!(?interval, "refresh interval too short, using {:?}", MIN_INTERVAL);
        }
        Self {
            use_case,
            interval: interval.max(MIN_INTERVAL),
        }
    }

    /// 运行调度循环直到 `shutdown` 完成
    ///
    /// # 返回值
    ///
    /// 返回已执行的刷新次数
    pub async fn run<S>(&self, shutdown: S) -> u64
    where
        S: Future<Output = ()>,
    {
        info!(interval_secs = self.interval.as_secs(), "Review scheduler started");

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        let mut runs = 0u64;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(runs, "Review scheduler stopping");
                    return runs;
                }
                _ = ticker.tick() => {}
            }

            self.refresh_once().await;
            runs += 1;

            let next = ChronoDuration::from_std(self.interval)
                .map(|d| (Utc::now() + d).to_rfc3339())
                .unwrap_or_default();
            info!(next_run = %next, "Review refresh finished");
        }
    }

    async fn refresh_once(&self) {
        match self.use_case.execute().await {
            Ok(count) => info!(count, "Refreshed review snapshot"),
            Err(e) => error!("Failed to refresh reviews: {}", e),
        }
    }
}
