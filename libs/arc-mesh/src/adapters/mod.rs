//! # Host Adapters
//!
//! Thin wrappers binding [`ArcMeshGenerator`](crate::ArcMeshGenerator) to the
//! two kinds of host it serves:
//!
//! - [`overlay`] - UI overlay graphic laid out in a rect, fed through the
//!   host's vertex stream.
//! - [`standalone`] - free-standing mesh with explicit radii and a free
//!   angle offset, handed to the host as upload-ready buffers.

pub mod overlay;
pub mod standalone;

pub use overlay::{OverlayCircle, VertexSink};
pub use standalone::StandaloneArcMesh;
