use mksearch_core::{Node, NodeArena, NodeId};

/// The goal node of a successful search, together with the arena holding its ancestors.
#[derive(Clone, Debug)]
pub struct Solution<S> {
    arena: NodeArena<S>,
    goal: NodeId,
    expanded: usize,
    discovered: usize,
}

impl<S> Solution<S> {
    pub(crate) fn new(arena: NodeArena<S>, goal: NodeId, expanded: usize, discovered: usize) -> Self {
        Solution {
            arena,
            goal,
            expanded,
            discovered,
        }
    }

    /// The node whose state satisfied the goal test.
    pub fn node(&self) -> &Node<S> {
        self.arena.get(self.goal)
    }

    pub fn state(&self) -> &S {
        self.node().state()
    }

    /// Accumulated path cost of the goal node.
    pub fn cost(&self) -> f64 {
        self.node().cost()
    }

    /// Number of moves from the initial state to the goal.
    pub fn depth(&self) -> usize {
        self.arena.depth(self.goal)
    }

    /// States from the initial state to the goal state, inclusive.
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.arena.path_to(self.goal)
    }

    /// Number of nodes whose successors were generated.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of distinct states added to the explored set, including the initial state.
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    pub fn arena(&self) -> &NodeArena<S> {
        &self.arena
    }

    pub fn goal_id(&self) -> NodeId {
        self.goal
    }
}

/// Reconstructs the sequence of states leading to the solution's goal node.
pub fn node_to_path<S: Clone>(solution: &Solution<S>) -> Vec<S> {
    solution.path()
}
