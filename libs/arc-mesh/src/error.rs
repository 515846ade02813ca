//! # Arc Mesh Errors
//!
//! Error types for the arc mesh crate.
//!
//! Geometry parameters never fail: out-of-range values are clamped at the
//! setter. Errors exist only for parsing host-supplied names and for
//! validating a finished mesh.

use thiserror::Error;

/// Errors that can occur around arc mesh generation.
#[derive(Debug, Error, PartialEq)]
pub enum ArcMeshError {
    /// Origin name not one of top/right/bottom/left
    #[error("Unknown origin: '{name}' (expected top, right, bottom or left)")]
    UnknownOrigin {
        /// Name as supplied by the host
        name: String,
    },

    /// Triangle references a vertex outside the buffer
    #[error("Triangle {triangle} references vertex {index} (vertex count: {vertex_count})")]
    IndexOutOfBounds {
        /// Position of the offending triangle
        triangle: usize,
        /// Vertex index that is out of range
        index: u32,
        /// Vertex count at validation time
        vertex_count: usize,
    },

    /// Buffer sizes disagree with the sweep that produced them
    #[error("Count mismatch: {message}")]
    CountMismatch {
        /// Which count disagreed
        message: String,
    },
}

impl ArcMeshError {
    /// Creates an unknown origin error.
    pub fn unknown_origin(name: impl Into<String>) -> Self {
        Self::UnknownOrigin { name: name.into() }
    }

    /// Creates a count mismatch error.
    pub fn count_mismatch(message: impl Into<String>) -> Self {
        Self::CountMismatch {
            message: message.into(),
        }
    }
}

/// Result type alias for arc mesh operations.
pub type ArcMeshResult<T> = Result<T, ArcMeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArcMeshError::unknown_origin("north");
        assert!(err.to_string().contains("north"));

        let err = ArcMeshError::IndexOutOfBounds {
            triangle: 3,
            index: 12,
            vertex_count: 10,
        };
        assert!(err.to_string().contains("vertex 12"));
        assert!(err.to_string().contains("10"));
    }

    /// Errors cross thread boundaries in host render loops.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArcMeshError>();
    }
}
