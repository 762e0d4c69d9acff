use std::collections::{HashMap, HashSet, VecDeque};

use mksearch::grid::{manhattan_distance, FourConnected, Grid};
use mksearch::{
    a_star_search, a_star_search_with_cost, breadth_first_search, depth_first_search,
    node_to_path, Searcher,
};
use proptest::prelude::*;
use rand::Rng;
use rand_pcg::Pcg64;

/// Directed graph with non-negative integer weights, small enough to brute force.
#[derive(Clone, Debug)]
struct StateGraph {
    adjacency: Vec<Vec<(usize, u32)>>,
}

impl StateGraph {
    fn successors(&self, s: usize) -> Vec<usize> {
        self.adjacency[s].iter().map(|&(t, _)| t).collect()
    }

    /// Cheapest edge from `u` to `v`; parallel edges may exist.
    fn cost(&self, u: usize, v: usize) -> u32 {
        self.adjacency[u]
            .iter()
            .filter(|&&(t, _)| t == v)
            .map(|&(_, w)| w)
            .min()
            .expect("no such edge")
    }

    /// Minimum (edge count, total weight) over all simple paths, by exhaustive enumeration.
    fn brute_force(&self, from: usize, to: usize) -> Option<(usize, u32)> {
        fn walk(
            graph: &StateGraph,
            at: usize,
            to: usize,
            visited: &mut Vec<bool>,
            depth: usize,
            weight: u32,
            best: &mut (Option<usize>, Option<u32>),
        ) {
            if at == to {
                best.0 = Some(best.0.map_or(depth, |d| d.min(depth)));
                best.1 = Some(best.1.map_or(weight, |w| w.min(weight)));
                return;
            }
            for &(next, w) in &graph.adjacency[at] {
                if !visited[next] {
                    visited[next] = true;
                    walk(graph, next, to, visited, depth + 1, weight + w, best);
                    visited[next] = false;
                }
            }
        }

        let mut visited = vec![false; self.adjacency.len()];
        visited[from] = true;
        let mut best = (None, None);
        walk(self, from, to, &mut visited, 0, 0, &mut best);
        Some((best.0?, best.1?))
    }

    /// Fewest moves from `from` to every reachable state.
    fn depths(&self, from: usize) -> HashMap<usize, usize> {
        let mut depths = HashMap::from([(from, 0)]);
        let mut queue = VecDeque::from([from]);
        while let Some(s) = queue.pop_front() {
            let next = depths[&s] + 1;
            for t in self.successors(s) {
                depths.entry(t).or_insert_with(|| {
                    queue.push_back(t);
                    next
                });
            }
        }
        depths
    }

    fn reachable(&self, from: usize) -> usize {
        let mut seen = HashSet::from([from]);
        let mut stack = vec![from];
        while let Some(s) = stack.pop() {
            for t in self.successors(s) {
                if seen.insert(t) {
                    stack.push(t);
                }
            }
        }
        seen.len()
    }
}

#[derive(Clone, Copy, Debug)]
enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

/// Runs `algorithm` and counts how many times each state had its successors generated.
fn expansions(
    graph: &StateGraph,
    start: usize,
    goal: impl Fn(usize) -> bool,
    algorithm: Algorithm,
) -> (bool, HashMap<usize, usize>) {
    let mut expansions: HashMap<usize, usize> = HashMap::new();
    let successors = |&s: &usize| {
        *expansions.entry(s).or_default() += 1;
        graph.successors(s)
    };
    let goal_test = |&s: &usize| goal(s);
    let searcher = Searcher::default();
    let outcome = match algorithm {
        Algorithm::DepthFirst => searcher.depth_first(start, goal_test, successors),
        Algorithm::BreadthFirst => searcher.breadth_first(start, goal_test, successors),
        Algorithm::AStar => searcher.a_star(start, goal_test, successors, |_| 0.0),
    };
    (outcome.is_found(), expansions)
}

fn state_graph() -> impl Strategy<Value = (StateGraph, usize, usize)> {
    (2usize..=8).prop_flat_map(|n| {
        (
            proptest::collection::vec(
                proptest::collection::vec((0..n, 0u32..10), 0..4),
                n,
            ),
            0..n,
            0..n,
        )
            .prop_map(|(adjacency, start, goal)| (StateGraph { adjacency }, start, goal))
    })
}

fn assert_path_is_walk(graph: &StateGraph, path: &[usize], start: usize, goal: usize) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for step in path.windows(2) {
        assert!(graph.successors(step[0]).contains(&step[1]));
    }
}

proptest! {
    #[test]
    fn bfs_finds_fewest_moves((graph, start, goal) in state_graph()) {
        let expected = graph.brute_force(start, goal);
        let solution = breadth_first_search(start, |&s| s == goal, |&s| graph.successors(s));
        prop_assert_eq!(solution.is_some(), expected.is_some());
        if let (Some(solution), Some((moves, _))) = (solution, expected) {
            let path = node_to_path(&solution);
            assert_path_is_walk(&graph, &path, start, goal);
            prop_assert_eq!(path.len(), moves + 1);
            prop_assert_eq!(path.len(), solution.depth() + 1);
        }
    }

    #[test]
    fn dfs_finds_some_walk((graph, start, goal) in state_graph()) {
        let expected = graph.brute_force(start, goal);
        let solution = depth_first_search(start, |&s| s == goal, |&s| graph.successors(s));
        prop_assert_eq!(solution.is_some(), expected.is_some());
        if let (Some(solution), Some((moves, _))) = (solution, expected) {
            let path = node_to_path(&solution);
            assert_path_is_walk(&graph, &path, start, goal);
            prop_assert!(path.len() > moves);
        }
    }

    #[test]
    fn a_star_with_zero_heuristic_matches_bfs((graph, start, goal) in state_graph()) {
        let expected = graph.brute_force(start, goal);
        let solution = a_star_search(start, |&s| s == goal, |&s| graph.successors(s), |_| 0.0);
        prop_assert_eq!(solution.is_some(), expected.is_some());
        if let (Some(solution), Some((moves, _))) = (solution, expected) {
            let path = node_to_path(&solution);
            assert_path_is_walk(&graph, &path, start, goal);
            prop_assert_eq!(path.len(), moves + 1);
            prop_assert_eq!(solution.cost(), moves as f64);
        }
    }

    #[test]
    fn a_star_with_admissible_heuristic_is_optimal((graph, start, goal) in state_graph()) {
        // half of the true remaining cost never overestimates
        let remaining: Vec<f64> = (0..graph.adjacency.len())
            .map(|s| graph.brute_force(s, goal).map_or(0.0, |(_, w)| (w / 2) as f64))
            .collect();
        let expected = graph.brute_force(start, goal);
        let solution = a_star_search_with_cost(
            start,
            |&s| s == goal,
            |&s| graph.successors(s),
            |&u, &v| graph.cost(u, v) as f64,
            |&s| remaining[s],
        );
        prop_assert_eq!(solution.is_some(), expected.is_some());
        if let (Some(solution), Some((_, weight))) = (solution, expected) {
            let path = node_to_path(&solution);
            assert_path_is_walk(&graph, &path, start, goal);
            prop_assert_eq!(solution.cost(), weight as f64);
            let walked: u32 = path.windows(2).map(|s| graph.cost(s[0], s[1])).sum();
            prop_assert_eq!(walked, weight);
        }
    }

    #[test]
    fn searches_expand_each_state_once((graph, start, _goal) in state_graph()) {
        let reachable = graph.reachable(start);
        for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst, Algorithm::AStar] {
            // the goal is never satisfied, so the whole reachable space is explored
            let (found, expansions) = expansions(&graph, start, |_| false, algorithm);
            prop_assert!(!found);
            prop_assert_eq!(expansions.len(), reachable);
            prop_assert!(expansions.values().all(|&n| n == 1));
        }
    }

    #[test]
    fn a_star_with_zero_heuristic_expands_what_bfs_must((graph, start, goal) in state_graph()) {
        let (bfs_found, bfs) = expansions(&graph, start, |s| s == goal, Algorithm::BreadthFirst);
        let (a_star_found, a_star) = expansions(&graph, start, |s| s == goal, Algorithm::AStar);
        prop_assert_eq!(bfs_found, a_star_found);

        // every state strictly closer than the goal is expanded by both before the goal is popped
        let depths = graph.depths(start);
        let limit = if bfs_found { depths[&goal] } else { usize::MAX };
        for (&state, &depth) in &depths {
            if depth < limit {
                prop_assert!(bfs.contains_key(&state));
                prop_assert!(a_star.contains_key(&state));
            }
        }
        prop_assert!(a_star.keys().all(|s| depths[s] <= limit));
    }
}

#[test]
fn random_mazes_agree_across_algorithms() {
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    for _ in 0..50 {
        let width = rng.gen_range(2..12);
        let height = rng.gen_range(2..12);
        let mut map =
            FourConnected::from_grid(Grid::new(width, height, |_, _| rng.gen_bool(0.75)));
        let start = (0, 0);
        let goal = (width - 1, height - 1);
        map.set_traversable(start, true);
        map.set_traversable(goal, true);

        let bfs = breadth_first_search(start, |&s| s == goal, |&s| map.successors(s));
        let dfs = depth_first_search(start, |&s| s == goal, |&s| map.successors(s));
        let astar = a_star_search(
            start,
            |&s| s == goal,
            |&s| map.successors(s),
            |&s| manhattan_distance(s, goal),
        );

        assert_eq!(bfs.is_some(), dfs.is_some());
        assert_eq!(bfs.is_some(), astar.is_some());
        if let (Some(bfs), Some(dfs), Some(astar)) = (bfs, dfs, astar) {
            assert_eq!(bfs.depth(), astar.depth());
            assert!(dfs.depth() >= bfs.depth());
            assert!(bfs.depth() as f64 >= manhattan_distance(start, goal));
            assert!(astar.discovered() <= (width * height) as usize);
        }
    }
}
