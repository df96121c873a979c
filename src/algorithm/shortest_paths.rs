//! 单源最短路算法
//!
//! Dijkstra 标号设定算法：按暂定距离从小到大确定顶点，逐条松弛出边。
//! 优先队列支持 decrease-key，已确定的顶点再次出队时直接丢弃。

use crate::config::AlgorithmConfig;
use crate::error::{Precondition, Result};
use crate::graph::{VertexId, Weight, WeightedEdge, WeightedGraph};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// 最短路树
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTree<W> {
    /// 源点
    pub source: VertexId,
    /// 距离数组，不可达顶点为 `W::infinity()`
    pub distances: Vec<W>,
    /// 最短路上的前驱顶点
    pub parents: Vec<Option<VertexId>>,
}

impl<W: Weight> ShortestPathTree<W> {
    /// 到 `vertex` 的最短距离，不可达时为 `None`
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|d| *d != W::infinity())
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// 重构从源点到 `vertex` 的一条最短路径（含两端）
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.source {
            current = self.parents[current]?;
            path.push(current);
            // 前驱链只可能在负权输入下成环
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();

        Some(path)
    }

    pub fn into_distances(self) -> Vec<W> {
        self.distances
    }
}

/// 最小堆优先级：距离越小优先级越高
///
/// 相等性与 `cmp` 一致，无法比较的值（NaN）视为相等。
#[derive(Debug, Clone, Copy)]
struct MinDistance<W>(W);

impl<W: PartialOrd> PartialEq for MinDistance<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for MinDistance<W> {}

impl<W: PartialOrd> Ord for MinDistance<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}

impl<W: PartialOrd> PartialOrd for MinDistance<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra 最短路算法
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    config: AlgorithmConfig,
}

impl<'a, G: WeightedGraph> Dijkstra<'a, G> {
    /// 创建算法实例
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            config: AlgorithmConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AlgorithmConfig) -> Self {
        self.config = config;
        self
    }

    /// 计算从 `source` 出发的最短路树
    ///
    /// 复杂度 O(E log V)。图不会被修改。
    pub fn run(&self, source: VertexId) -> Result<ShortestPathTree<G::Weight>> {
        self.validate(source)?;

        let n = self.graph.num_vertices();
        debug!(
            source,
            vertices = n,
            edges = self.graph.num_edges(),
            "开始计算单源最短路"
        );

        let mut distances = vec![G::Weight::infinity(); n];
        let mut parents = vec![None; n];
        let mut finalized = vec![false; n];
        let mut queue = PriorityQueue::new();

        distances[source] = G::Weight::zero();
        queue.push(source, MinDistance(G::Weight::zero()));

        let mut settled = 0usize;
        while let Some((u, _)) = queue.pop() {
            if finalized[u] {
                continue;
            }
            finalized[u] = true;
            settled += 1;

            let du = distances[u];
            trace!(vertex = u, distance = ?du, "顶点距离确定");

            for edge in self.graph.out_edges(u) {
                let v = edge.target();
                let w = edge.weight();
                debug_assert!(!(w < G::Weight::zero()), "负权边: {u} -> {v}");

                // 松弛
                let alt = du.accumulate(w);
                if alt < distances[v] {
                    distances[v] = alt;
                    parents[v] = Some(u);
                    queue.push(v, MinDistance(alt));
                }
            }
        }

        debug!(source, settled, "单源最短路计算完成");

        Ok(ShortestPathTree {
            source,
            distances,
            parents,
        })
    }

    fn validate(&self, source: VertexId) -> Result<()> {
        let n = self.graph.num_vertices();
        if !self.graph.contains_vertex(source) {
            return Err(Precondition::VertexOutOfRange {
                vertex: source,
                vertex_count: n,
            }
            .into());
        }

        if !self.config.scans_edges() {
            return Ok(());
        }

        for u in 0..n {
            for edge in self.graph.out_edges(u) {
                let v = edge.target();
                if v >= n {
                    return Err(Precondition::VertexOutOfRange {
                        vertex: v,
                        vertex_count: n,
                    }
                    .into());
                }
                if edge.weight() < G::Weight::zero() {
                    return Err(Precondition::NegativeWeight { from: u, to: v }.into());
                }
            }
        }

        Ok(())
    }
}

/// 计算从 `source` 到所有顶点的最短距离
///
/// 返回长度为 `num_vertices` 的数组，`dist[source] == 0`，
/// 不可达顶点为 `W::infinity()`。
pub fn shortest_paths<G: WeightedGraph>(graph: &G, source: VertexId) -> Result<Vec<G::Weight>> {
    Dijkstra::new(graph).run(source).map(ShortestPathTree::into_distances)
}
