//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//! 每轮在残量网络中用 BFS 找最短增广路径，沿路径推送瓶颈流量，
//! 直到源点无法到达汇点。总复杂度 O(V * E^2)。

use crate::config::AlgorithmConfig;
use crate::error::{Precondition, Result};
use crate::graph::{EdgeId, FlowEdge, FlowNetwork, FlowValue, VertexId};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// 最大流结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxFlow<F> {
    /// 最大流量值
    pub value: F,
    /// 增广次数
    pub augmentations: usize,
    /// 最小割的源侧：最终残量网络中源点可达的顶点
    pub source_side: Vec<bool>,
}

impl<F> MaxFlow<F> {
    pub fn is_source_side(&self, vertex: VertexId) -> bool {
        self.source_side.get(vertex).copied().unwrap_or(false)
    }

    /// 源侧顶点
    pub fn source_vertices(&self) -> Vec<VertexId> {
        (0..self.source_side.len())
            .filter(|&v| self.source_side[v])
            .collect()
    }

    /// 汇侧顶点
    pub fn target_vertices(&self) -> Vec<VertexId> {
        (0..self.source_side.len())
            .filter(|&v| !self.source_side[v])
            .collect()
    }
}

/// Edmonds-Karp 最大流算法
///
/// 运行时会把每条边的 `flow` 改写为一个可行流；需要保留原网络的调用方
/// 应事先复制。
pub struct EdmondsKarp<'a, N> {
    network: &'a mut N,
    config: AlgorithmConfig,
}

impl<'a, N: FlowNetwork> EdmondsKarp<'a, N> {
    /// 创建算法实例
    pub fn new(network: &'a mut N) -> Self {
        Self {
            network,
            config: AlgorithmConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AlgorithmConfig) -> Self {
        self.config = config;
        self
    }

    /// 计算从 source 到 target 的最大流
    pub fn run(&mut self, source: VertexId, target: VertexId) -> Result<MaxFlow<N::Flow>> {
        self.validate(source, target)?;

        let n = self.network.num_vertices();
        let m = self.network.num_edges();
        debug!(source, target, vertices = n, edges = m, "开始计算最大流");

        for id in 0..m {
            self.network.edge_mut(EdgeId(id)).set_flow(N::Flow::zero());
        }

        let mut parent: Vec<Option<EdgeId>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut value = N::Flow::zero();
        let mut augmentations = 0usize;

        // Edmonds-Karp: 重复 BFS 找增广路径
        while self.find_path(source, target, &mut parent, &mut visited)? {
            let path = self.augmenting_path(source, target, &parent)?;

            // 瓶颈 = 路径上残余容量的最小值
            let mut bottleneck = self.residual(path[0])?;
            for &id in &path[1..] {
                let residual = self.residual(id)?;
                if residual < bottleneck {
                    bottleneck = residual;
                }
            }

            // 总流量溢出时在改写任何边之前返回
            value = value
                .add_checked(bottleneck)
                .ok_or(Precondition::FlowOverflow)?;

            // 沿路径增广
            for &id in &path {
                self.push_flow(id, bottleneck);
            }

            augmentations += 1;
            trace!(
                augmentation = augmentations,
                bottleneck = ?bottleneck,
                length = path.len(),
                "沿增广路径推送流量"
            );
        }

        debug!(value = ?value, augmentations, "最大流计算完成");

        // 最后一次失败的 BFS 恰好标记了源侧顶点
        Ok(MaxFlow {
            value,
            augmentations,
            source_side: visited,
        })
    }

    /// BFS 找增广路径
    ///
    /// 到达 target 立即返回；`parent[v]` 记录到达 v 所用的边。
    /// 出边起点必须是所在顶点，否则 parent 链无法回溯到源点。
    fn find_path(
        &self,
        source: VertexId,
        target: VertexId,
        parent: &mut [Option<EdgeId>],
        visited: &mut [bool],
    ) -> Result<bool> {
        parent.fill(None);
        visited.fill(false);

        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for id in self.network.out_edge_ids(u) {
                let edge = self.network.edge(id);
                debug_assert!(
                    !(edge.capacity() < N::Flow::zero()),
                    "负容量边: {id}"
                );
                if edge.source() != u {
                    return Err(Precondition::MisplacedEdge {
                        edge: id,
                        listed_under: u,
                    }
                    .into());
                }

                let v = edge.target();
                if visited[v] || !(edge.flow() < edge.capacity()) {
                    continue;
                }

                visited[v] = true;
                parent[v] = Some(id);
                if v == target {
                    return Ok(true);
                }
                queue.push_back(v);
            }
        }

        Ok(false)
    }

    /// 沿 parent 表从 target 回溯到 source，返回路径上的边（逆序）
    ///
    /// 简单路径最多 V - 1 条边；超过即说明 parent 链断裂或成环。
    fn augmenting_path(
        &self,
        source: VertexId,
        target: VertexId,
        parent: &[Option<EdgeId>],
    ) -> Result<Vec<EdgeId>> {
        let n = self.network.num_vertices();
        let mut path = Vec::new();
        let mut current = target;
        while current != source {
            let id = parent[current].ok_or(Precondition::MisplacedEdge {
                edge: path.last().copied().unwrap_or(EdgeId(0)),
                listed_under: current,
            })?;
            path.push(id);
            if path.len() >= n {
                return Err(Precondition::MisplacedEdge {
                    edge: id,
                    listed_under: current,
                }
                .into());
            }
            current = self.network.edge(id).source();
        }
        Ok(path)
    }

    fn residual(&self, id: EdgeId) -> Result<N::Flow> {
        let edge = self.network.edge(id);
        edge.capacity()
            .sub_checked(edge.flow())
            .ok_or(Precondition::FlowOverflow.into())
    }

    /// 正向边加流，配对反向边减去同样的量
    fn push_flow(&mut self, id: EdgeId, amount: N::Flow) {
        let edge = self.network.edge_mut(id);
        let flow = edge.flow() + amount;
        edge.set_flow(flow);
        let rev = edge.reverse();

        let reverse = self.network.edge_mut(rev);
        let flow = reverse.flow() - amount;
        reverse.set_flow(flow);

        debug_assert!(
            self.network.edge(rev).reverse() == id,
            "反向边不配对: {id} / {rev}"
        );
        debug_assert!(
            self.network.edge(id).flow() == -self.network.edge(rev).flow(),
            "反对称性被破坏: {id} / {rev}"
        );
    }

    fn validate(&self, source: VertexId, target: VertexId) -> Result<()> {
        let n = self.network.num_vertices();
        for vertex in [source, target] {
            if !self.network.contains_vertex(vertex) {
                return Err(Precondition::VertexOutOfRange {
                    vertex,
                    vertex_count: n,
                }
                .into());
            }
        }
        if source == target {
            return Err(Precondition::SourceIsTarget(source).into());
        }

        if !self.config.scans_edges() {
            return Ok(());
        }

        let m = self.network.num_edges();
        let edge_in_range = |edge: EdgeId| -> Result<()> {
            if edge.index() < m {
                Ok(())
            } else {
                Err(Precondition::EdgeOutOfRange {
                    edge,
                    edge_count: m,
                }
                .into())
            }
        };

        for u in 0..n {
            for id in self.network.out_edge_ids(u) {
                edge_in_range(id)?;
                if self.network.edge(id).source() != u {
                    return Err(Precondition::MisplacedEdge {
                        edge: id,
                        listed_under: u,
                    }
                    .into());
                }
            }
        }

        for index in 0..m {
            let id = EdgeId(index);
            let edge = self.network.edge(id);

            for vertex in [edge.source(), edge.target()] {
                if vertex >= n {
                    return Err(Precondition::VertexOutOfRange {
                        vertex,
                        vertex_count: n,
                    }
                    .into());
                }
            }
            if edge.capacity() < N::Flow::zero() {
                return Err(Precondition::NegativeCapacity(id).into());
            }

            let rev = edge.reverse();
            edge_in_range(rev)?;
            let reverse = self.network.edge(rev);
            if reverse.reverse() != id
                || reverse.source() != edge.target()
                || reverse.target() != edge.source()
            {
                return Err(Precondition::UnpairedReverseEdge(id).into());
            }
        }

        Ok(())
    }
}

/// 计算从 source 到 target 的最大流量
///
/// 副作用：每条边的 `flow` 被改写为对应的可行流。
pub fn max_flow<N: FlowNetwork>(
    network: &mut N,
    source: VertexId,
    target: VertexId,
) -> Result<N::Flow> {
    EdmondsKarp::new(network)
        .run(source, target)
        .map(|result| result.value)
}

/// 最小割上的边：从源侧指向汇侧且容量为正
///
/// 这些边均已饱和，容量之和等于最大流量。
pub fn min_cut_edges<N: FlowNetwork>(network: &N, result: &MaxFlow<N::Flow>) -> Vec<EdgeId> {
    (0..network.num_edges())
        .map(EdgeId)
        .filter(|&id| {
            let edge = network.edge(id);
            result.is_source_side(edge.source())
                && !result.is_source_side(edge.target())
                && edge.capacity() > N::Flow::zero()
        })
        .collect()
}
