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

use crate::utils::url_utils::{is_same_site, site_domain};
use thiserror::Error;
use url::Url;

/// 列表页URL校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingUrlError {
    /// 无法解析
    #[error("URL is malformed: {0}")]
    Malformed(String),
    /// 不属于目标站点
    #[error("URL must be directed at {0}")]
    ForeignHost(String),
    /// 不是酒庄页面
    #[error("URL must be pointed at a winery (e.g. https://www.vivino.com/wineries/mywineco/wines/)")]
    NotAWinery,
    /// 不是酒庄的酒款列表页
    #[error("URL must be pointed at a winery's wines page (e.g. https://www.vivino.com/wineries/mywineco/wines/)")]
    NotAWinesPage,
}

/// 校验酒庄列表页URL
///
/// # 参数
///
/// * `listing_url` - 用户填写的列表页地址
/// * `base_url` - 目标站点根地址
///
/// # 返回值
///
/// * `Ok(Url)` - 解析后的URL
/// * `Err(ListingUrlError)` - 主机不属于站点、路径不是 `/wineries/.../wines`
pub fn validate_listing_url(listing_url: &str, base_url: &Url) -> Result<Url, ListingUrlError> {
    let parsed =
        Url::parse(listing_url).map_err(|_| ListingUrlError::Malformed(listing_url.to_string()))?;

    let site_host = base_url.host_str().unwrap_or_default();
    let host = parsed
        .host_str()
        .ok_or_else(|| ListingUrlError::Malformed(listing_url.to_string()))?;
    if !is_same_site(host, site_host) {
        return Err(ListingUrlError::ForeignHost(site_domain(site_host).to_string()));
    }

    let path = parsed.path();
    if !path.starts_with("/wineries/") {
        return Err(ListingUrlError::NotAWinery);
    }
    if !path.ends_with("wines/") && !path.ends_with("/wines") {
        return Err(ListingUrlError::NotAWinesPage);
    }

    Ok(parsed)
}
