// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 目录提取（catalog_extractor）：解析酒庄列表页中的酒卡
/// - 提取规则（extraction_service）：选择器到字段的声明式映射
/// - 评论提取（review_extractor）：抓取详情页并按评分过滤评论
/// - 抓取服务（scrape_service）：按顺序编排一次完整抓取
pub mod catalog_extractor;
pub mod extraction_service;
pub mod review_extractor;
pub mod scrape_service;
