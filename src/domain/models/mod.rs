// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 抓取结果标签（outcome）：区分成功、不可达和解析失败
/// - 酒款（wine）：酒卡记录、评论记录和完整抓取结果
pub mod outcome;
pub mod wine;
