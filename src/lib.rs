//! FlowGraph - 可嵌入的图算法引擎
//!
//! 在调用方已有的图表示上直接运行，不拥有任何存储：
//! - 单源最短路（Dijkstra，非负边权）
//! - 最大流（Edmonds-Karp），附带最小割
//! - 构造大容量/边权时使用的整数安全运算
//!
//! 调用方为自己的图类型实现 [`graph::WeightedGraph`] 或
//! [`graph::FlowNetwork`]，然后调用 [`shortest_paths`] 或 [`max_flow`]。

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod numeric;

// 重导出常用类型
pub use algorithm::{
    max_flow, min_cut_edges, shortest_paths, Dijkstra, EdmondsKarp, MaxFlow, ShortestPathTree,
};
pub use config::{AlgorithmConfig, Validation};
pub use error::{Error, Precondition, Result};
pub use graph::{
    EdgeId, FlowEdge, FlowNetwork, FlowValue, Graph, ResidualEdge, VertexId, Weight, WeightedArc,
    WeightedEdge, WeightedGraph,
};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
