// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将详情页相对链接解析为绝对URL
///
/// 绝对链接和协议相对链接会被 `join` 原样采用，调用方需用 [`same_origin`] 检查
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path.trim())
}

/// 协议、主机和端口是否都相同
pub fn same_origin(url: &Url, base_url: &Url) -> bool {
    url.origin() == base_url.origin()
}

/// 去掉主机名前的 `www.`
pub fn site_domain(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// 判断主机是否属于站点（同域或子域）
pub fn is_same_site(host: &str, site_host: &str) -> bool {
    let domain = site_domain(site_host);
    host == domain || host.ends_with(&format!(".{}", domain))
}
