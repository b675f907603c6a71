// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 葡萄酒记录
///
/// 对应酒庄列表页中的一张酒卡。所有字符串字段在页面缺少对应元素时为空字符串，
/// `reviews` 只由编排器写入一次。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineRecord {
    /// 酒名
    pub title: String,
    /// 详情页相对链接
    pub title_url: String,
    /// 产区名称
    pub location_district: String,
    /// 产区链接
    pub location_district_url: String,
    /// 国家名称
    pub location_country: String,
    /// 国家链接
    pub location_country_url: String,
    /// 平均评分（站点原始格式）
    pub rating_average: String,
    /// 评分数量
    pub rating_count: String,
    /// 过滤后的评论
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

impl WineRecord {
    /// 是否有可跟进的详情页链接
    pub fn has_detail_link(&self) -> bool {
        !self.title_url.trim().is_empty()
    }
}

/// 评论记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// 作者
    pub author: String,
    /// 评分（保留页面原始文本）
    pub rating: String,
    /// 评论内容
    pub description: String,
}

/// 一次完整抓取的结果
///
/// 序列化为裸 JSON 数组
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapeResult {
    pub wines: Vec<WineRecord>,
}

impl ScrapeResult {
    pub fn new(wines: Vec<WineRecord>) -> Self {
        Self { wines }
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }

    /// 所有酒款的评论总数
    pub fn review_count(&self) -> usize {
        self.wines.iter().map(|w| w.reviews.len()).sum()
    }
}
