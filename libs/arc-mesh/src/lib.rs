//! # Arc Mesh
//!
//! Procedural 2D mesh generation for filled discs, rings and partial arcs.
//! Turns a small parameter set into a vertex buffer (position, UV, color)
//! and a triangle list, recomputed only when a parameter actually changes.
//!
//! ## Architecture
//!
//! ```text
//! ArcParams → RegenerationGate (stale?) → Sweep → solid fan | annulus strip → ArcMesh
//!                                                                              ↓
//!                                            OverlayCircle (VertexSink) | StandaloneArcMesh (MeshBuffers)
//! ```
//!
//! ## Conventions
//!
//! - Positions are `(extent.x * sin(a), extent.y * cos(a), 0)`: angle 0 is +Y.
//! - Clockwise sweeps step by `+2π / outer_edges`, counter-clockwise by the
//!   negative; triangle winding flips together with the sweep.
//! - Free start angles are radians.
//!
//! ## Usage
//!
//! ```rust
//! use arc_mesh::{ArcMeshGenerator, ArcParams};
//!
//! let mut params = ArcParams::default();
//! params.set_outer_edges(4);
//! params.set_hole_rate(0.5);
//!
//! let mut arc = ArcMeshGenerator::new(params);
//! arc.poll();
//! assert_eq!(arc.vertex_count(), 10);
//! assert_eq!(arc.triangles().len(), 8);
//! ```

pub mod adapters;
pub mod angle;
pub mod arc;
pub mod error;
pub mod gate;
pub mod generator;
pub mod mesh;
pub mod params;

pub use adapters::{OverlayCircle, StandaloneArcMesh, VertexSink};
pub use angle::Sweep;
pub use arc::ArcMeshGenerator;
pub use error::{ArcMeshError, ArcMeshResult};
pub use gate::{ParamSnapshot, RegenerationGate};
pub use mesh::{ArcMesh, ArcVertex, MeshBuffers};
pub use params::{ArcParams, Origin, StartAngle, UvMapping, UvRect};
