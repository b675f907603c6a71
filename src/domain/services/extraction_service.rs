// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::document::{compile, DocumentError, Node};
use scraper::Selector;

/// 字段取值方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// 节点纯文本
    Text,
    /// 指定属性
    Attr(&'static str),
}

/// 提取规则声明
///
/// (输出字段, 选择器, 取值方式, 默认值) 四元组
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<F> {
    pub field: F,
    pub selector: &'static str,
    pub accessor: Accessor,
    pub default: &'static str,
}

impl<F> FieldRule<F> {
    /// 使用空字符串作为默认值的规则
    pub const fn new(field: F, selector: &'static str, accessor: Accessor) -> Self {
        Self {
            field,
            selector,
            accessor,
            default: "",
        }
    }
}

/// 编译后的提取规则
#[derive(Debug, Clone)]
pub struct ExtractionRule<F> {
    pub field: F,
    selector: Selector,
    accessor: Accessor,
    default: &'static str,
}

impl<F: Copy> ExtractionRule<F> {
    /// 在节点子树中查找并取值
    ///
    /// 找不到节点或属性时返回 `None`
    pub fn lookup(&self, node: &Node<'_>) -> Option<String> {
        let target = node.find(&self.selector)?;
        match self.accessor {
            Accessor::Text => Some(target.text()),
            Accessor::Attr(name) => target.attr(name).map(|v| v.trim().to_string()),
        }
    }

    /// 取值，缺失时使用默认值
    pub fn extract(&self, node: &Node<'_>) -> String {
        self.lookup(node)
            .unwrap_or_else(|| self.default.to_string())
    }
}

/// 提取服务
///
/// 负责把声明式规则表编译为可执行规则
pub struct ExtractionService;

impl ExtractionService {
    /// 编译规则表
    pub fn compile<F: Copy>(rules: &[FieldRule<F>]) -> Result<Vec<ExtractionRule<F>>, DocumentError> {
        rules
            .iter()
            .map(|rule| {
                Ok(ExtractionRule {
                    field: rule.field,
                    selector: compile(rule.selector)?,
                    accessor: rule.accessor,
                    default: rule.default,
                })
            })
            .collect()
    }

    /// 编译单条规则
    pub fn compile_one<F: Copy>(rule: FieldRule<F>) -> Result<ExtractionRule<F>, DocumentError> {
        Ok(Self::compile(&[rule])?.remove(0))
    }
}
