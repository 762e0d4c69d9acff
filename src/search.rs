use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use mksearch_core::traits::Frontier;
use mksearch_core::{Node, NodeArena, NodePriority, PriorityQueue, Queue, Stack};
use tracing::{debug, trace};

use crate::config::{CancelReason, SearchConfig};
use crate::solution::Solution;

/// Result of a search run by a [`Searcher`].
#[derive(Clone, Debug)]
pub enum SearchOutcome<S> {
    Found(Solution<S>),
    /// The frontier was exhausted without reaching a goal state.
    NoSolution,
    /// A configured limit stopped the search before it finished.
    Cancelled(CancelReason),
}

impl<S> SearchOutcome<S> {
    pub fn found(self) -> Option<Solution<S>> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchOutcome::Cancelled(_))
    }
}

/// Runs state-space searches under a [`SearchConfig`].
///
/// Each call owns its own frontier, explored set and node arena; nothing is shared between
/// calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Searcher { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Depth-first search. Finds a goal if one is reachable, with no guarantee on path length.
    pub fn depth_first<S, I>(
        &self,
        initial: S,
        goal_test: impl FnMut(&S) -> bool,
        successors: impl FnMut(&S) -> I,
    ) -> SearchOutcome<S>
    where
        S: Hash + Eq + Clone,
        I: IntoIterator<Item = S>,
    {
        self.uninformed("dfs", Stack::new(), initial, goal_test, successors)
    }

    /// Breadth-first search. The returned path has the fewest possible moves.
    pub fn breadth_first<S, I>(
        &self,
        initial: S,
        goal_test: impl FnMut(&S) -> bool,
        successors: impl FnMut(&S) -> I,
    ) -> SearchOutcome<S>
    where
        S: Hash + Eq + Clone,
        I: IntoIterator<Item = S>,
    {
        self.uninformed("bfs", Queue::new(), initial, goal_test, successors)
    }

    /// A* search where every move costs 1.
    ///
    /// The returned path is optimal if `heuristic` never overestimates the remaining number of
    /// moves.
    pub fn a_star<S, I>(
        &self,
        initial: S,
        goal_test: impl FnMut(&S) -> bool,
        successors: impl FnMut(&S) -> I,
        heuristic: impl FnMut(&S) -> f64,
    ) -> SearchOutcome<S>
    where
        S: Hash + Eq + Clone,
        I: IntoIterator<Item = S>,
    {
        self.a_star_with_cost(initial, goal_test, successors, |_, _| 1.0, heuristic)
    }

    /// A* search where moving from `parent` to `child` costs `step_cost(parent, child)`.
    ///
    /// Step costs must be non-negative. The returned path is optimal if `heuristic` never
    /// overestimates the remaining cost.
    pub fn a_star_with_cost<S, I>(
        &self,
        initial: S,
        mut goal_test: impl FnMut(&S) -> bool,
        mut successors: impl FnMut(&S) -> I,
        mut step_cost: impl FnMut(&S, &S) -> f64,
        mut heuristic: impl FnMut(&S) -> f64,
    ) -> SearchOutcome<S>
    where
        S: Hash + Eq + Clone,
        I: IntoIterator<Item = S>,
    {
        let budget = self.config.start();
        let mut arena = NodeArena::new();
        let mut frontier = PriorityQueue::new(NodePriority);
        // best known cost to reach each discovered state
        let mut best_cost = AHashMap::new();
        let mut expanded = 0;

        best_cost.insert(initial.clone(), 0.0);
        let h = heuristic(&initial);
        frontier.push(Node::root(initial, h));

        while let Some(node) = frontier.pop() {
            let id = arena.push(node);
            let current = arena.get(id);

            if goal_test(current.state()) {
                return finish("a*", Solution::new(arena, id, expanded, best_cost.len()));
            }

            if best_cost
                .get(current.state())
                .is_some_and(|&best| best < current.cost())
            {
                // superseded by a cheaper path pushed after this one
                continue;
            }

            if let Some(reason) = budget.exhausted(expanded) {
                return cancel("a*", reason, expanded);
            }
            expanded += 1;
            trace!(expanded, frontier = frontier.len(), g = current.cost(), "expand");

            for child in successors(current.state()) {
                let new_cost = current.cost() + step_cost(current.state(), &child);
                let improved = match best_cost.get(&child) {
                    None => true,
                    Some(&old_cost) => old_cost > new_cost,
                };
                if improved {
                    best_cost.insert(child.clone(), new_cost);
                    let h = heuristic(&child);
                    frontier.push(Node::new(child, Some(id), new_cost, h));
                }
            }
        }

        exhausted("a*", expanded, best_cost.len())
    }

    fn uninformed<S, I>(
        &self,
        algorithm: &'static str,
        mut frontier: impl Frontier<Node<S>>,
        initial: S,
        mut goal_test: impl FnMut(&S) -> bool,
        mut successors: impl FnMut(&S) -> I,
    ) -> SearchOutcome<S>
    where
        S: Hash + Eq + Clone,
        I: IntoIterator<Item = S>,
    {
        let budget = self.config.start();
        let mut arena = NodeArena::new();
        let mut explored = AHashSet::new();
        let mut expanded = 0;

        explored.insert(initial.clone());
        frontier.push(Node::root(initial, 0.0));

        while let Some(node) = frontier.pop() {
            let id = arena.push(node);
            let current = arena.get(id);

            if goal_test(current.state()) {
                return finish(algorithm, Solution::new(arena, id, expanded, explored.len()));
            }

            if let Some(reason) = budget.exhausted(expanded) {
                return cancel(algorithm, reason, expanded);
            }
            expanded += 1;
            trace!(expanded, frontier = frontier.len(), "expand");

            for child in successors(current.state()) {
                if explored.contains(&child) {
                    continue;
                }
                explored.insert(child.clone());
                frontier.push(Node::new(child, Some(id), current.cost() + 1.0, 0.0));
            }
        }

        exhausted(algorithm, expanded, explored.len())
    }
}

fn finish<S>(algorithm: &'static str, solution: Solution<S>) -> SearchOutcome<S> {
    debug!(
        algorithm,
        expanded = solution.expanded(),
        discovered = solution.discovered(),
        depth = solution.depth(),
        cost = solution.cost(),
        "goal found"
    );
    SearchOutcome::Found(solution)
}

fn exhausted<S>(algorithm: &'static str, expanded: usize, discovered: usize) -> SearchOutcome<S> {
    debug!(algorithm, expanded, discovered, "frontier exhausted without reaching a goal");
    SearchOutcome::NoSolution
}

fn cancel<S>(algorithm: &'static str, reason: CancelReason, expanded: usize) -> SearchOutcome<S> {
    debug!(algorithm, ?reason, expanded, "search cancelled");
    SearchOutcome::Cancelled(reason)
}

/// Depth-first search from `initial`, returning the first node found whose state satisfies
/// `goal_test`.
pub fn depth_first_search<S, I>(
    initial: S,
    goal_test: impl FnMut(&S) -> bool,
    successors: impl FnMut(&S) -> I,
) -> Option<Solution<S>>
where
    S: Hash + Eq + Clone,
    I: IntoIterator<Item = S>,
{
    Searcher::default()
        .depth_first(initial, goal_test, successors)
        .found()
}

/// Breadth-first search from `initial`. The returned node is at minimum depth.
pub fn breadth_first_search<S, I>(
    initial: S,
    goal_test: impl FnMut(&S) -> bool,
    successors: impl FnMut(&S) -> I,
) -> Option<Solution<S>>
where
    S: Hash + Eq + Clone,
    I: IntoIterator<Item = S>,
{
    Searcher::default()
        .breadth_first(initial, goal_test, successors)
        .found()
}

/// A* search from `initial` with unit move costs.
pub fn a_star_search<S, I>(
    initial: S,
    goal_test: impl FnMut(&S) -> bool,
    successors: impl FnMut(&S) -> I,
    heuristic: impl FnMut(&S) -> f64,
) -> Option<Solution<S>>
where
    S: Hash + Eq + Clone,
    I: IntoIterator<Item = S>,
{
    Searcher::default()
        .a_star(initial, goal_test, successors, heuristic)
        .found()
}

/// A* search from `initial` with caller-supplied move costs.
pub fn a_star_search_with_cost<S, I>(
    initial: S,
    goal_test: impl FnMut(&S) -> bool,
    successors: impl FnMut(&S) -> I,
    step_cost: impl FnMut(&S, &S) -> f64,
    heuristic: impl FnMut(&S) -> f64,
) -> Option<Solution<S>>
where
    S: Hash + Eq + Clone,
    I: IntoIterator<Item = S>,
{
    Searcher::default()
        .a_star_with_cost(initial, goal_test, successors, step_cost, heuristic)
        .found()
}
