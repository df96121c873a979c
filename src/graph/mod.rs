//! 图契约模块
//!
//! 定义算法依赖的图接口、边接口和数值约束

mod edge;
mod traits;
mod value;

#[cfg(test)]
pub(crate) mod fixtures;

pub use edge::{EdgeId, FlowEdge, ResidualEdge, WeightedArc, WeightedEdge};
pub use traits::{FlowNetwork, Graph, WeightedGraph};
pub use value::{FlowValue, Weight};

/// 顶点 ID：`[0, V)` 内的稠密下标
pub type VertexId = usize;
