/// Contract violations reported by graph operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex index {index} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { index: usize, vertex_count: usize },

    #[error("vertex not found in graph")]
    UnknownVertex,

    #[error("invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("no predecessor edge recorded for vertex {0}")]
    MissingPredecessor(usize),

    #[error("predecessor edges form a cycle through vertex {0}")]
    PredecessorCycle(usize),
}

pub type Result<T> = std::result::Result<T, GraphError>;
