use std::cmp::Ordering;

use crate::pqueue::Comparator;

/// Handle to a node stored in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// A search node: a state together with how it was reached.
///
/// While a node sits in a frontier it is owned by that frontier. Once popped it is moved into the
/// search's [`NodeArena`], and its children refer to it through the returned [`NodeId`].
#[derive(Clone, Debug)]
pub struct Node<S> {
    state: S,
    parent: Option<NodeId>,
    cost: f64,
    heuristic: f64,
}

/// Growable store for the nodes created during one search.
///
/// Parents are always pushed before their children, so following parent links from any node
/// terminates at the root.
#[derive(Clone, Debug)]
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

/// Orders nodes by `cost + heuristic`, breaking ties towards the lower heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodePriority;

impl NodeId {
    /// Position of the node in its arena.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl<S> Node<S> {
    /// Creates a node with no parent and zero cost.
    pub fn root(state: S, heuristic: f64) -> Self {
        Node {
            state,
            parent: None,
            cost: 0.0,
            heuristic,
        }
    }

    /// Creates a node reached from `parent` at path cost `cost`.
    pub fn new(state: S, parent: Option<NodeId>, cost: f64, heuristic: f64) -> Self {
        Node {
            state,
            parent,
            cost,
            heuristic,
        }
    }

    /// The state this node represents.
    #[inline(always)]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Node this one was reached from.
    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Path cost from the root.
    #[inline(always)]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Estimated remaining cost to a goal.
    #[inline(always)]
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Estimated total cost of a path through this node.
    #[inline(always)]
    pub fn total_cost(&self) -> f64 {
        self.cost + self.heuristic
    }

    /// Returns true if `self` should be expanded strictly before `other` in best-first order.
    pub fn precedes(&self, other: &Node<S>) -> bool {
        self.total_cost() < other.total_cost()
    }

    /// Total ordering by [`Node::total_cost`], ties broken by lower heuristic.
    pub fn cmp_priority(&self, other: &Node<S>) -> Ordering {
        self.total_cost().total_cmp(&other.total_cost())
    }

    /// Consumes the node, returning its state.
    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S> Comparator<Node<S>> for NodePriority {
    fn le(&self, lhs: &Node<S>, rhs: &Node<S>) -> bool {
        match lhs.cmp_priority(rhs) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => lhs.heuristic <= rhs.heuristic,
        }
    }
}

impl<S> NodeArena<S> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena { nodes: vec![] }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Moves `node` into the arena.
    ///
    /// # Panics
    /// Panics if the node's parent is not already in this arena.
    #[track_caller]
    pub fn push(&mut self, node: Node<S>) -> NodeId {
        if let Some(parent) = node.parent {
            assert!(parent.index() < self.nodes.len(), "parent not in arena");
        }
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node arena overflow"));
        self.nodes.push(node);
        id
    }

    /// Node stored under `id`.
    #[track_caller]
    #[inline(always)]
    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.index()]
    }

    /// Parent of node `id`, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Iterates from `id` up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node<S>> + '_ {
        std::iter::successors(Some(self.get(id)), move |node| {
            node.parent.map(|parent| self.get(parent))
        })
    }

    /// Returns the states from the root to `id`, inclusive at both ends.
    pub fn path_to(&self, id: NodeId) -> Vec<S>
    where
        S: Clone,
    {
        let mut path: Vec<S> = self.ancestors(id).map(|node| node.state.clone()).collect();
        path.reverse();
        path
    }

    /// Number of nodes stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node is stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every node, keeping the allocation.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        NodeArena::new()
    }
}
