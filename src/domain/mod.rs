// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：酒款、评论和抓取结果标签
/// - 仓库接口（repositories）：快照存储抽象接口
/// - 服务（services）：目录提取、评论提取和抓取编排
///
/// 领域层不依赖于具体的网络或存储实现。
pub mod models;
pub mod repositories;
pub mod services;
