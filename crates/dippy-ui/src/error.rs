use crate::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeError {
    Missing { id: NodeId },
    EmptyComposition,
    InvalidViewport { width: f32, height: f32 },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id} missing"),
            NodeError::EmptyComposition => write!(f, "composition emitted no nodes"),
            NodeError::InvalidViewport { width, height } => {
                write!(f, "viewport {width}x{height} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for NodeError {}
