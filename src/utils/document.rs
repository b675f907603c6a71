// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 结构化文档模块
//!
//! 对 `scraper` 的薄封装，只暴露抓取逻辑需要的能力：
//! - `find_all` / `find`：按 CSS 选择器查找节点
//! - `text`：节点的纯文本（空白折叠、首尾去空）
//! - `attr`：属性值，缺失时返回 `None`

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// 文档错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// 选择器无法解析
    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// 编译CSS选择器
pub fn compile(selector: &str) -> Result<Selector, DocumentError> {
    Selector::parse(selector).map_err(|e| DocumentError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// 已解析的HTML文档
pub struct Document {
    html: Html,
}

impl Document {
    /// 解析HTML文档
    ///
    /// html5ever 对任意输入都会给出一棵树，因此解析本身不会失败
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    /// 按文档顺序返回所有匹配节点
    pub fn find_all<'a>(&'a self, selector: &Selector) -> Vec<Node<'a>> {
        self.html.select(selector).map(Node::from).collect()
    }

    /// 返回第一个匹配节点
    pub fn find<'a>(&'a self, selector: &Selector) -> Option<Node<'a>> {
        self.html.select(selector).next().map(Node::from)
    }
}

/// 文档中的一个元素节点
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Node<'a> {
    /// 在子树中按文档顺序返回所有匹配节点
    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'a>> {
        self.element.select(selector).map(Node::from).collect()
    }

    /// 在子树中返回第一个匹配节点
    pub fn find(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element.select(selector).next().map(Node::from)
    }

    /// 节点纯文本
    pub fn text(&self) -> String {
        normalize_whitespace(&self.element.text().collect::<String>())
    }

    /// 属性值
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

/// 折叠连续空白并去除首尾空白
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
