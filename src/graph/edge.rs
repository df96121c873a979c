//! 边定义
//!
//! 算法只通过 trait 读取边的字段；`WeightedArc` 和 `ResidualEdge` 是可直接
//! 放进调用方容器的边记录，本 crate 不提供图的存储。

use crate::graph::value::{FlowValue, Weight};
use crate::graph::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID：调用方边数组中的下标（非拥有引用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 最短路使用的带权边
pub trait WeightedEdge {
    type Weight: Weight;

    /// 目标顶点
    fn target(&self) -> VertexId;

    /// 边权（必须非负）
    fn weight(&self) -> Self::Weight;
}

/// 最大流使用的残量网络边
///
/// 每条边都有唯一的反向边与之配对；原网络中不存在的反向弧以容量 0 补齐。
/// 算法运行期间始终满足 `flow(e) == -flow(reverse(e))`。
pub trait FlowEdge {
    type Flow: FlowValue;

    /// 起点
    fn source(&self) -> VertexId;

    /// 终点
    fn target(&self) -> VertexId;

    /// 容量（必须非负）
    fn capacity(&self) -> Self::Flow;

    /// 当前流量
    fn flow(&self) -> Self::Flow;

    /// 写入流量
    fn set_flow(&mut self, flow: Self::Flow);

    /// 配对反向边在边数组中的下标
    fn reverse(&self) -> EdgeId;

    /// 残余容量 `capacity - flow`
    fn residual(&self) -> Self::Flow {
        self.capacity() - self.flow()
    }
}

/// 带权有向弧
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedArc<W> {
    pub target: VertexId,
    pub weight: W,
}

impl<W> WeightedArc<W> {
    pub fn new(target: VertexId, weight: W) -> Self {
        Self { target, weight }
    }
}

impl<W: Weight> WeightedEdge for WeightedArc<W> {
    type Weight = W;

    fn target(&self) -> VertexId {
        self.target
    }

    fn weight(&self) -> W {
        self.weight
    }
}

impl<W: Weight> WeightedEdge for (VertexId, W) {
    type Weight = W;

    fn target(&self) -> VertexId {
        self.0
    }

    fn weight(&self) -> W {
        self.1
    }
}

/// 残量网络边记录
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualEdge<F> {
    pub source: VertexId,
    pub target: VertexId,
    pub capacity: F,
    pub flow: F,
    pub reverse: EdgeId,
}

impl<F: FlowValue> ResidualEdge<F> {
    /// 创建流量为 0 的边
    pub fn new(source: VertexId, target: VertexId, capacity: F, reverse: EdgeId) -> Self {
        Self {
            source,
            target,
            capacity,
            flow: F::zero(),
            reverse,
        }
    }

    /// 创建一对互为反向的边，下标分别为 `at` 与 `at + 1`
    ///
    /// 反向边容量为 0，调用方按返回顺序追加到边数组即可。
    pub fn pair(source: VertexId, target: VertexId, capacity: F, at: usize) -> [Self; 2] {
        [
            Self::new(source, target, capacity, EdgeId(at + 1)),
            Self::new(target, source, F::zero(), EdgeId(at)),
        ]
    }
}

impl<F: FlowValue> FlowEdge for ResidualEdge<F> {
    type Flow = F;

    fn source(&self) -> VertexId {
        self.source
    }

    fn target(&self) -> VertexId {
        self.target
    }

    fn capacity(&self) -> F {
        self.capacity
    }

    fn flow(&self) -> F {
        self.flow
    }

    fn set_flow(&mut self, flow: F) {
        self.flow = flow;
    }

    fn reverse(&self) -> EdgeId {
        self.reverse
    }
}
