// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含评论刷新用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含酒款与评论模型、提取服务和存储接口
pub mod domain;

/// 引擎模块
///
/// 实现页面抓取引擎和可用性检查
pub mod engines;

/// 基础设施模块
///
/// 提供存储实现和指标导出
pub mod infrastructure;

/// 队列模块
///
/// 实现定时刷新调度
pub mod queue;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
