//! Generic state-space search and weighted graph algorithms.
//!
//! The searches in this crate know nothing about the problem being solved: callers describe the
//! state space with a goal test, a successor function and (for A*) a heuristic.
//!
//! ```
//! use mksearch::grid::{manhattan_distance, FourConnected};
//! use mksearch::{a_star_search, node_to_path};
//!
//! let map = FourConnected::open(3, 3);
//! let goal = (2, 2);
//! let solution = a_star_search(
//!     (0, 0),
//!     |&s| s == goal,
//!     |&s| map.successors(s),
//!     |&s| manhattan_distance(s, goal),
//! )
//! .unwrap();
//! assert_eq!(node_to_path(&solution).len(), 5);
//! ```

mod config;
mod search;
mod solution;

pub use mksearch_core::*;
pub use mksearch_graph as graph;
pub use mksearch_grid as grid;

pub use crate::config::*;
pub use crate::search::*;
pub use crate::solution::*;
