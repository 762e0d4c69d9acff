//! Undirected weighted graphs with shortest path and minimum spanning tree algorithms.

mod dijkstra;
mod edge;
mod error;
mod graph;
mod mst;

pub use self::dijkstra::*;
pub use self::edge::*;
pub use self::error::*;
pub use self::graph::*;
pub use self::mst::*;
