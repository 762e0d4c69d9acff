use mksearch_core::{ByKey, Comparator, PriorityQueue};
use tracing::debug;

use crate::edge::{WeightedEdge, WeightedPath};
use crate::graph::WeightedGraph;

/// Computes a minimum spanning tree with Prim's algorithm, starting from vertex `start`.
///
/// Returns `None` if `start` is not a vertex index. If the graph is not connected, the result
/// only spans the component containing `start`.
pub fn minimum_spanning_tree<V>(graph: &WeightedGraph<V>, start: usize) -> Option<WeightedPath> {
    if start >= graph.vertex_count() {
        return None;
    }

    let mut result = vec![];
    let mut queue = PriorityQueue::new(ByKey(WeightedEdge::weight));
    let mut visited = vec![false; graph.vertex_count()];

    visit(graph, start, &mut visited, &mut queue);

    while let Some(edge) = queue.pop() {
        if visited[edge.v] {
            continue;
        }
        result.push(edge);
        visit(graph, edge.v, &mut visited, &mut queue);
    }

    debug!(
        start,
        edges = result.len(),
        vertices = graph.vertex_count(),
        "spanning tree finished"
    );

    Some(result)
}

/// Marks `index` visited and queues every edge leading out of the visited set.
fn visit<V, C: Comparator<WeightedEdge>>(
    graph: &WeightedGraph<V>,
    index: usize,
    visited: &mut [bool],
    queue: &mut PriorityQueue<WeightedEdge, C>,
) {
    visited[index] = true;
    for &edge in graph.adjacent(index) {
        if !visited[edge.v] {
            queue.push(edge);
        }
    }
}
