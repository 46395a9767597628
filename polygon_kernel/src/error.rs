use thiserror::Error;

/// Errors reported by polygon operations.
///
/// Degenerate numeric cases (parallel edges, zero length edges) are not errors, they resolve to
/// "no intersect" style results. Errors are reserved for input that cannot be processed and
/// results the single ring [Polygon](crate::polygon::Polygon) cannot represent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolygonError {
    #[error("polygon has no vertexes")]
    EmptyPolygon,

    #[error("polygon requires at least 3 vertexes, got {vertex_count}")]
    InvalidPolygon { vertex_count: usize },

    #[error("insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("vertex count mismatch: expected {expected}, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("unsupported topology: {reason}")]
    UnsupportedTopology { reason: &'static str },
}

pub type PolygonResult<T> = Result<T, PolygonError>;
