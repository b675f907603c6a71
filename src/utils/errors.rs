// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::EngineError;
use thiserror::Error;

/// 详情页提取错误类型
///
/// 只影响单个酒款，不会中断整次抓取
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("无效的详情页链接 {path}: {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("详情页链接不在站点内: {0}")]
    ForeignOrigin(String),

    #[error("请求失败: {0}")]
    Engine(#[from] EngineError),

    #[error("HTTP状态码异常: {0}")]
    HttpStatus(u16),

    #[error("响应不是HTML: {0}")]
    NotHtml(String),
}
