//! 单元测试用的最小图实现

use super::*;

/// 邻接表带权图
pub(crate) struct WeightedList<W> {
    adj: Vec<Vec<WeightedArc<W>>>,
    edges: usize,
}

impl<W: Weight> WeightedList<W> {
    pub(crate) fn new(vertices: usize) -> Self {
        Self {
            adj: (0..vertices).map(|_| Vec::new()).collect(),
            edges: 0,
        }
    }

    pub(crate) fn with_edges(vertices: usize, edges: &[(VertexId, VertexId, W)]) -> Self {
        let mut g = Self::new(vertices);
        for &(u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    pub(crate) fn add_edge(&mut self, u: VertexId, v: VertexId, w: W) {
        self.adj[u].push(WeightedArc::new(v, w));
        self.edges += 1;
    }
}

impl<W: Weight> Graph for WeightedList<W> {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.edges
    }
}

impl<W: Weight> WeightedGraph for WeightedList<W> {
    type Weight = W;
    type Edge = WeightedArc<W>;

    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = &WeightedArc<W>> + '_ {
        self.adj[vertex].iter()
    }
}

/// 边数组 + 出边下标表的流网络
#[derive(Clone)]
pub(crate) struct FlowList<F> {
    pub(crate) out: Vec<Vec<EdgeId>>,
    pub(crate) edges: Vec<ResidualEdge<F>>,
}

impl<F: FlowValue> FlowList<F> {
    pub(crate) fn new(vertices: usize) -> Self {
        Self {
            out: (0..vertices).map(|_| Vec::new()).collect(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn with_edges(vertices: usize, edges: &[(VertexId, VertexId, F)]) -> Self {
        let mut g = Self::new(vertices);
        for &(u, v, c) in edges {
            g.add_edge(u, v, c);
        }
        g
    }

    /// 追加一条边及其容量为 0 的反向边，返回正向边下标
    pub(crate) fn add_edge(&mut self, u: VertexId, v: VertexId, capacity: F) -> EdgeId {
        let at = self.edges.len();
        let [fwd, rev] = ResidualEdge::pair(u, v, capacity, at);
        self.edges.push(fwd);
        self.edges.push(rev);
        self.out[u].push(EdgeId(at));
        self.out[v].push(EdgeId(at + 1));
        EdgeId(at)
    }
}

impl<F: FlowValue> Graph for FlowList<F> {
    fn num_vertices(&self) -> usize {
        self.out.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl<F: FlowValue> FlowNetwork for FlowList<F> {
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
