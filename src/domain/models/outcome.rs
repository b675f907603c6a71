// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取结果标签
///
/// 区分“成功但为空”和“无法获取”，调用方不能把二者混淆
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome<T> {
    /// 成功获取
    Found(T),
    /// 目标不可达或不存在
    Unavailable(String),
    /// 页面可达但内容无法解析
    ParseFailure(String),
}

impl<T> ScrapeOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, ScrapeOutcome::Found(_))
    }

    /// 转换为 `Option`，丢弃失败原因
    pub fn found(self) -> Option<T> {
        match self {
            ScrapeOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ScrapeOutcome<U> {
        match self {
            ScrapeOutcome::Found(value) => ScrapeOutcome::Found(f(value)),
            ScrapeOutcome::Unavailable(reason) => ScrapeOutcome::Unavailable(reason),
            ScrapeOutcome::ParseFailure(reason) => ScrapeOutcome::ParseFailure(reason),
        }
    }

    /// 指标标签
    pub fn label(&self) -> &'static str {
        match self {
            ScrapeOutcome::Found(_) => "found",
            ScrapeOutcome::Unavailable(_) => "unavailable",
            ScrapeOutcome::ParseFailure(_) => "parse_failure",
        }
    }
}
