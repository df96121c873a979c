//! 集成测试用的调用方图表示
#![allow(dead_code)]

use flowgraph::{
    EdgeId, FlowNetwork, FlowValue, Graph, ResidualEdge, VertexId, Weight, WeightedArc,
    WeightedGraph,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// 按 RUST_LOG 输出算法日志
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 邻接表
pub struct AdjacencyList<W> {
    adj: Vec<Vec<WeightedArc<W>>>,
    edges: usize,
}

impl<W: Weight> AdjacencyList<W> {
    pub fn new(vertices: usize, edges: &[(VertexId, VertexId, W)]) -> Self {
        let mut adj: Vec<Vec<WeightedArc<W>>> = (0..vertices).map(|_| Vec::new()).collect();
        for &(u, v, w) in edges {
            adj[u].push(WeightedArc::new(v, w));
        }
        Self {
            adj,
            edges: edges.len(),
        }
    }
}

impl<W: Weight> Graph for AdjacencyList<W> {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.edges
    }
}

impl<W: Weight> WeightedGraph for AdjacencyList<W> {
    type Weight = W;
    type Edge = WeightedArc<W>;

    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &WeightedArc<W>> + '_ {
        self.adj[vertex].iter()
    }
}

/// 邻接矩阵，同一对顶点之间只保留最后一条边
pub struct AdjacencyMatrix<W> {
    n: usize,
    cells: Vec<Option<WeightedArc<W>>>,
}

impl<W: Weight> AdjacencyMatrix<W> {
    pub fn new(vertices: usize, edges: &[(VertexId, VertexId, W)]) -> Self {
        let mut cells = vec![None; vertices * vertices];
        for &(u, v, w) in edges {
            cells[u * vertices + v] = Some(WeightedArc::new(v, w));
        }
        Self { n: vertices, cells }
    }
}

impl<W: Weight> Graph for AdjacencyMatrix<W> {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn num_edges(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl<W: Weight> WeightedGraph for AdjacencyMatrix<W> {
    type Weight = W;
    type Edge = WeightedArc<W>;

    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &WeightedArc<W>> + '_ {
        self.cells[vertex * self.n..(vertex + 1) * self.n]
            .iter()
            .filter_map(Option::as_ref)
    }
}

/// 边数组流网络
#[derive(Clone)]
pub struct FlowArena<F> {
    pub out: Vec<Vec<EdgeId>>,
    pub edges: Vec<ResidualEdge<F>>,
}

impl<F: FlowValue> FlowArena<F> {
    pub fn new(vertices: usize, edges: &[(VertexId, VertexId, F)]) -> Self {
        let mut arena = Self {
            out: (0..vertices).map(|_| Vec::new()).collect(),
            edges: Vec::new(),
        };
        for &(u, v, c) in edges {
            arena.add_edge(u, v, c);
        }
        arena
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId, capacity: F) -> EdgeId {
        let at = self.edges.len();
        self.edges.extend(ResidualEdge::pair(u, v, capacity, at));
        self.out[u].push(EdgeId::new(at));
        self.out[v].push(EdgeId::new(at + 1));
        EdgeId::new(at)
    }

    /// 顶点的净流出量
    pub fn net_outflow(&self, vertex: VertexId) -> F {
        self.edges
            .iter()
            .filter(|e| e.source == vertex)
            .fold(F::zero(), |acc, e| acc + e.flow)
    }
}

impl<F: FlowValue> Graph for FlowArena<F> {
    fn num_vertices(&self) -> usize {
        self.out.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<F: FlowValue> FlowNetwork for FlowArena<F> {
    type Flow = F;
    type Edge = ResidualEdge<F>;

    fn out_edge_ids(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out[vertex].iter().copied()
    }

    fn edge(&self, id: EdgeId) -> &ResidualEdge<F> {
        &self.edges[id.index()]
    }

    fn edge_mut(&mut self, id: EdgeId) -> &mut ResidualEdge<F> {
        &mut self.edges[id.index()]
    }
}

/// 随机有向边，权值落在 `0..max_weight`
pub fn random_edges(
    seed: u64,
    vertices: usize,
    edges: usize,
    max_weight: i64,
) -> Vec<(VertexId, VertexId, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edges)
        .map(|_| {
            let u = rng.gen_range(0..vertices);
            let v = rng.gen_range(0..vertices);
            (u, v, rng.gen_range(0..max_weight))
        })
        .collect()
}
