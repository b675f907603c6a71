// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括HTML文档查询、URL处理、输入校验和遥测初始化
pub mod document;
pub mod errors;
pub mod telemetry;
pub mod url_utils;
pub mod validators;
