use std::fmt;

/// One direction of an undirected weighted connection between two vertex indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// A sequence of edges, as produced by shortest-path reconstruction and spanning tree search.
pub type WeightedPath = Vec<WeightedEdge>;

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        WeightedEdge { u, v, weight }
    }

    /// The same connection viewed from the other endpoint.
    pub fn reversed(self) -> Self {
        WeightedEdge {
            u: self.v,
            v: self.u,
            weight: self.weight,
        }
    }

    #[inline(always)]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}> {}", self.u, self.weight, self.v)
    }
}

/// Sum of the weights of `path`.
pub fn total_weight(path: &[WeightedEdge]) -> f64 {
    path.iter().map(WeightedEdge::weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = WeightedEdge::new(1, 4, 2.5);
        assert_eq!(edge.reversed(), WeightedEdge::new(4, 1, 2.5));
        assert_eq!(edge.reversed().reversed(), edge);
        assert_eq!(edge.to_string(), "1 2.5> 4");
    }

    #[test]
    fn total_weight_sums_edges() {
        let path = [WeightedEdge::new(0, 1, 1.0), WeightedEdge::new(1, 2, 2.5)];
        assert_eq!(total_weight(&path), 3.5);
        assert_eq!(total_weight(&[]), 0.0);
    }
}
