// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 响应体无法解码
    #[error("Failed to decode body: {0}")]
    Body(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl EngineError {
    /// 判断错误是否发生在传输层（连接、超时）
    pub fn is_transport(&self) -> bool {
        match self {
            EngineError::RequestFailed(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            EngineError::Timeout => true,
            _ => false,
        }
    }
}

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 最终URL（跟随重定向之后）
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型
    pub content_type: String,
    /// 响应内容
    pub content: String,
}

impl FetchedPage {
    /// 状态码是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// 内容类型是否可按 HTML 解析
    ///
    /// 缺失的内容类型按 HTML 处理
    pub fn is_html(&self) -> bool {
        let ct = self.content_type.to_ascii_lowercase();
        ct.trim().is_empty() || ct.contains("html") || ct.starts_with("text/plain")
    }
}

/// 页面抓取特质
///
/// 所有访问网络的组件都通过该接口发起请求，测试中可替换为模拟实现
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 发送 GET 请求并读取响应体
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError>;

    /// 发送 HEAD 请求，仅返回状态码
    async fn head(&self, url: &str) -> Result<u16, EngineError>;
}
