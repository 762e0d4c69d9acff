use ahash::AHashMap;
use mksearch_core::{ByKey, PriorityQueue};
use tracing::debug;

use crate::edge::WeightedEdge;
use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;

/// Single-source shortest path information computed by [`dijkstra`].
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    /// Distance from the root for each vertex index, or `None` if the vertex is unreachable.
    pub distances: Vec<Option<f64>>,
    /// For each reached vertex other than the root, the edge through which it was last improved.
    pub path_edges: AHashMap<usize, WeightedEdge>,
}

#[derive(Clone, Copy, Debug)]
struct DijkstraNode {
    vertex: usize,
    distance: f64,
}

/// Computes shortest distances from `root` to every vertex of `graph`.
///
/// Edge weights must be non-negative, which [`WeightedGraph`] enforces on insertion.
pub fn dijkstra<V: PartialEq>(graph: &WeightedGraph<V>, root: &V) -> Result<ShortestPaths> {
    let first = graph.index_of(root).ok_or(GraphError::UnknownVertex)?;
    dijkstra_from_index(graph, first)
}

pub fn dijkstra_from_index<V>(graph: &WeightedGraph<V>, first: usize) -> Result<ShortestPaths> {
    graph.vertex_at(first)?;

    let mut distances: Vec<Option<f64>> = vec![None; graph.vertex_count()];
    let mut path_edges = AHashMap::new();
    let mut queue = PriorityQueue::new(ByKey(|node: &DijkstraNode| node.distance));

    distances[first] = Some(0.0);
    queue.push(DijkstraNode {
        vertex: first,
        distance: 0.0,
    });

    let mut settled = 0;
    while let Some(DijkstraNode { vertex: u, distance }) = queue.pop() {
        let Some(dist_u) = distances[u] else {
            continue;
        };
        if distance > dist_u {
            // stale entry; u was improved after this was pushed
            continue;
        }
        settled += 1;

        for &edge in graph.edges_for_index(u)? {
            let candidate = dist_u + edge.weight;
            let improved = match distances[edge.v] {
                None => true,
                Some(dist_v) => dist_v > candidate,
            };
            if improved {
                distances[edge.v] = Some(candidate);
                path_edges.insert(edge.v, edge);
                queue.push(DijkstraNode {
                    vertex: edge.v,
                    distance: candidate,
                });
            }
        }
    }

    debug!(
        root = first,
        settled,
        reached = distances.iter().filter(|d| d.is_some()).count(),
        vertices = graph.vertex_count(),
        "dijkstra finished"
    );

    Ok(ShortestPaths {
        distances,
        path_edges,
    })
}

/// Reconstructs the edge path from `start` to `end` out of a predecessor map.
///
/// Returns an empty path if `path_edges` is empty or `start == end`. If `end` was never reached
/// from `start`, the walk runs into a vertex without a predecessor and
/// [`GraphError::MissingPredecessor`] is returned. A map whose edges loop back without ever
/// reaching `start` gives [`GraphError::PredecessorCycle`].
pub fn path_dict_to_path(
    start: usize,
    end: usize,
    path_edges: &AHashMap<usize, WeightedEdge>,
) -> Result<Vec<WeightedEdge>> {
    if path_edges.is_empty() || start == end {
        return Ok(vec![]);
    }

    let mut path = vec![];
    let mut vertex = end;
    while vertex != start {
        let edge = *path_edges
            .get(&vertex)
            .ok_or(GraphError::MissingPredecessor(vertex))?;
        path.push(edge);
        // A predecessor map has at most one edge per vertex, so a longer walk must be a cycle.
        if path.len() > path_edges.len() {
            return Err(GraphError::PredecessorCycle(vertex));
        }
        vertex = edge.u;
    }
    path.reverse();
    Ok(path)
}

impl ShortestPaths {
    pub fn distance(&self, index: usize) -> Option<f64> {
        self.distances.get(index).copied().flatten()
    }

    /// Pairs each vertex value with its distance.
    pub fn distances_by_vertex<'g, V>(&self, graph: &'g WeightedGraph<V>) -> Vec<(&'g V, Option<f64>)> {
        graph
            .vertices()
            .iter()
            .zip(self.distances.iter().copied())
            .collect()
    }

    pub fn path_to(&self, start: usize, end: usize) -> Result<Vec<WeightedEdge>> {
        path_dict_to_path(start, end, &self.path_edges)
    }
}
