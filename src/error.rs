//! 错误类型定义

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("前置条件不满足: {0}")]
    PreconditionViolated(#[from] Precondition),

    #[error("配置错误: {0}")]
    Config(String),
}

impl Error {
    /// 是否为调用方违反前置条件
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Error::PreconditionViolated(_))
    }
}

/// 被违反的前置条件
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    #[error("顶点越界: {vertex} (顶点数 {vertex_count})")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("边越界: {edge} (边数 {edge_count})")]
    EdgeOutOfRange { edge: EdgeId, edge_count: usize },

    #[error("源点与汇点相同: {0}")]
    SourceIsTarget(VertexId),

    #[error("负权边: {from} -> {to}")]
    NegativeWeight { from: VertexId, to: VertexId },

    #[error("负容量边: {0}")]
    NegativeCapacity(EdgeId),

    #[error("反向边不配对: {0}")]
    UnpairedReverseEdge(EdgeId),

    #[error("出边起点与所在顶点不符: {edge} 挂在顶点 {listed_under} 下")]
    MisplacedEdge { edge: EdgeId, listed_under: VertexId },

    #[error("流量超出数值类型的表示范围")]
    FlowOverflow,
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
