// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus 指标导出
/// - 存储（storage）：本地文件存储和内存存储
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod metrics;
pub mod storage;
