use std::fmt;

use crate::edge::WeightedEdge;
use crate::error::{GraphError, Result};

/// Undirected, edge-weighted graph with vertices addressed by dense indices.
///
/// Every edge `(u, v, w)` is stored twice: as given in the adjacency list of `u`, and reversed in
/// the adjacency list of `v`. Vertices and edges can only be appended.
#[derive(Clone, Debug)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    edges: Vec<Vec<WeightedEdge>>,
}

impl<V> WeightedGraph<V> {
    pub fn new() -> Self {
        WeightedGraph {
            vertices: vec![],
            edges: vec![],
        }
    }

    pub fn from_vertices(vertices: impl IntoIterator<Item = V>) -> Self {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let edges = vertices.iter().map(|_| vec![]).collect();
        WeightedGraph { vertices, edges }
    }

    /// Appends a vertex and returns its index.
    ///
    /// Duplicate values are permitted; [`WeightedGraph::index_of`] finds the first.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.edges.push(vec![]);
        self.vertices.len() - 1
    }

    pub fn add_edge(&mut self, edge: WeightedEdge) -> Result<()> {
        self.check_index(edge.u)?;
        self.check_index(edge.v)?;
        if !(edge.weight >= 0.0) {
            return Err(GraphError::InvalidWeight(edge.weight));
        }
        self.edges[edge.u].push(edge);
        self.edges[edge.v].push(edge.reversed());
        Ok(())
    }

    pub fn add_edge_by_indices(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        self.add_edge(WeightedEdge::new(u, v, weight))
    }

    pub fn add_edge_by_vertices(&mut self, first: &V, second: &V, weight: f64) -> Result<()>
    where
        V: PartialEq,
    {
        let u = self.index_of(first).ok_or(GraphError::UnknownVertex)?;
        let v = self.index_of(second).ok_or(GraphError::UnknownVertex)?;
        self.add_edge_by_indices(u, v, weight)
    }

    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_at(&self, index: usize) -> Result<&V> {
        self.check_index(index)?;
        Ok(&self.vertices[index])
    }

    pub fn index_of(&self, vertex: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// Edges leaving `index`, in insertion order. Each edge has `u == index`.
    pub fn edges_for_index(&self, index: usize) -> Result<&[WeightedEdge]> {
        self.check_index(index)?;
        Ok(&self.edges[index])
    }

    /// Edges leaving `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub(crate) fn adjacent(&self, index: usize) -> &[WeightedEdge] {
        &self.edges[index]
    }

    pub fn edges_for_vertex(&self, vertex: &V) -> Result<&[WeightedEdge]>
    where
        V: PartialEq,
    {
        let index = self.index_of(vertex).ok_or(GraphError::UnknownVertex)?;
        self.edges_for_index(index)
    }

    /// Neighbouring vertex values of `index` paired with the connecting edge weight.
    pub fn neighbors_for_index(&self, index: usize) -> Result<Vec<(&V, f64)>> {
        Ok(self
            .edges_for_index(index)?
            .iter()
            .map(|edge| (&self.vertices[edge.v], edge.weight))
            .collect())
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
        }
    }
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        WeightedGraph::new()
    }
}

impl<V: fmt::Display> fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.edges) {
            write!(f, "{vertex} -> [")?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {})", self.vertices[edge.v], edge.weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
