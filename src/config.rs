//! 算法配置
//!
//! 顶点越界和源点等于汇点始终检查（O(1)），最大流的 BFS 还会逐条确认
//! 出边起点与所在顶点一致、总流量不溢出。需要扫描全部边的检查
//! （负权、负容量、边下标越界、反向边配对、出边归属）由 [`Validation`]
//! 控制；关闭后这些条件仍在 debug 构建的主循环中以 `debug_assert!` 检查。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 输入校验级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// 运行前扫描所有边
    #[default]
    Full,
    /// 调用方已保证输入合法，跳过 O(E) 扫描
    Trusted,
}

/// 算法配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmConfig {
    pub validation: Validation,
}

impl AlgorithmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// 从 JSON 解析配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn scans_edges(&self) -> bool {
        self.validation == Validation::Full
    }
}
