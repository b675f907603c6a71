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

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use vinors::application::use_cases::refresh_reviews::RefreshReviewsUseCase;
use vinors::config::settings::Settings;
use vinors::domain::repositories::storage_repository::StorageRepository;
use vinors::domain::services::scrape_service::ScrapeService;
use vinors::engines::reqwest_engine::ReqwestEngine;
use vinors::engines::traits::PageFetcher;
use vinors::infrastructure::metrics;
use vinors::infrastructure::storage::LocalStorage;
use vinors::queue::scheduler::ReviewScheduler;
use vinors::utils::telemetry;

/// 主函数
///
/// 加载配置，组装抓取服务，然后执行一次刷新或进入定时刷新
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting vinors...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(listing_url = %settings.scraper.listing_url, "Configuration loaded");

    metrics::init_metrics(&settings.metrics)?;

    // 3. Wire components
    let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestEngine::from_settings(&settings.scraper)?);
    let service = Arc::new(ScrapeService::new(fetcher, settings.scraper.base_url()?)?);
    let storage: Arc<dyn StorageRepository> = Arc::new(LocalStorage::from_settings(&settings.storage));
    let use_case = Arc::new(RefreshReviewsUseCase::new(
        service,
        storage,
        settings.scraper.to_request(),
        settings.storage.snapshot_key.clone(),
    ));

    // 4. Run
    if settings.schedule.interval_secs == 0 {
        let count = use_case.execute().await?;
        info!(count, "Stored reviews for {} wines", count);
        return Ok(());
    }

    let scheduler = ReviewScheduler::new(
        use_case,
        Duration::from_secs(settings.schedule.interval_secs),
    );
    let runs = scheduler.run(shutdown_signal()).await;
    info!(runs, "Shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
