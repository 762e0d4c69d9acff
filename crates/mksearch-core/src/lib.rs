#![warn(missing_docs)]
//! Core types and utilities for `mksearch`.
//!
//! This crate provides the ordered containers used as search frontiers and the node arena used to
//! record how each state was reached.

mod containers;
mod node;
mod pqueue;
mod sequence;
/// Traits shared by the search frontiers.
pub mod traits;

pub use crate::containers::*;
pub use crate::node::*;
pub use crate::pqueue::*;
pub use crate::sequence::*;
