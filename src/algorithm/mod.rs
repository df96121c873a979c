//! 图算法模块
//!
//! 包含单源最短路和最大流算法，两者互不依赖，只共享图契约

mod max_flow;
mod shortest_paths;

pub use max_flow::{max_flow, min_cut_edges, EdmondsKarp, MaxFlow};
pub use shortest_paths::{shortest_paths, Dijkstra, ShortestPathTree};
