// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{info, warn};

/// 指标初始化错误
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Invalid metrics address '{0}'")]
    InvalidAddress(String),
}

/// 启动 Prometheus 导出器
///
/// 未启用时直接返回。端口被占用等安装失败只记录警告，不影响抓取
pub fn init_metrics(settings: &MetricsSettings) -> Result<(), MetricsError> {
    if !settings.enabled {
        return Ok(());
    }

    let addr: SocketAddr = settings
        .listen_addr
        .parse()
        .map_err(|_| MetricsError::InvalidAddress(settings.listen_addr.clone()))?;

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return Ok(());
    }

    describe_counter!("vinors_runs_total", "Scrape runs by outcome");
    describe_counter!("vinors_review_pages_total", "Detail page fetches by status");
    describe_counter!("vinors_wines_scraped_total", "Wines in successful catalogs");

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}
