//! 图契约
//!
//! 引擎对图的全部要求：稠密顶点编号 `[0, V)`、边数，以及按顶点取出边。
//! 邻接表、邻接矩阵等具体表示由调用方实现这些 trait，算法不感知存储方式。

use crate::graph::edge::{EdgeId, FlowEdge, WeightedEdge};
use crate::graph::value::{FlowValue, Weight};
use crate::graph::VertexId;

/// 所有图共有的规模信息
pub trait Graph {
    /// 顶点数 V，顶点编号为 `0..V`
    fn num_vertices(&self) -> usize;

    /// 边数 E
    fn num_edges(&self) -> usize;

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.num_vertices()
    }
}

/// 带非负边权的有向图（最短路输入）
///
/// 出边顺序不影响正确性，稳定的顺序便于复现结果。
pub trait WeightedGraph: Graph {
    type Weight: Weight;
    type Edge: WeightedEdge<Weight = Self::Weight>;

    /// 顶点的出边，可能为空
    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Self::Edge> + '_;
}

/// 流网络（最大流输入）
///
/// 边存放在调用方的边数组中，编号稠密地落在 `0..num_edges()`；
/// 反向边通过 [`FlowEdge::reverse`] 返回的下标查找。
pub trait FlowNetwork: Graph {
    type Flow: FlowValue;
    type Edge: FlowEdge<Flow = Self::Flow>;

    /// 顶点出边的下标（包括容量为 0 的反向边）
    fn out_edge_ids(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_;

    fn edge(&self, id: EdgeId) -> &Self::Edge;

    fn edge_mut(&mut self, id: EdgeId) -> &mut Self::Edge;
}
