//! # Arc Mesh Generator
//!
//! Builds the vertex and triangle buffers for one parameter set. The solid
//! variant is a triangle fan around a center vertex; the annulus variant is
//! a strip of (inner, outer) vertex pairs.
//!
//! ## Counts
//!
//! With `n = visible_edges`:
//!
//! | variant | vertices      | triangles |
//! |---------|---------------|-----------|
//! | solid   | `n + 2`       | `n`       |
//! | annulus | `2 * (n + 1)` | `2 * n`   |
//!
//! Both are empty when `n == 0`.

mod annulus;
mod solid;


use crate::angle::Sweep;
use crate::error::{ArcMeshError, ArcMeshResult};
use crate::mesh::ArcMesh;
use crate::params::ArcParams;

/// Largest vertex count the current edge count and variant can produce.
///
/// Used to reserve buffer capacity so that animating `visible_rate` never
/// reallocates.
pub fn vertex_capacity(params: &ArcParams) -> usize {
    vertex_count_for(params, params.outer_edges())
}

/// Largest triangle count the current edge count and variant can produce.
pub fn triangle_capacity(params: &ArcParams) -> usize {
    triangle_count_for(params, params.outer_edges())
}

/// Vertex and triangle counts the current parameters produce.
///
/// # Example
///
/// ```rust
/// use arc_mesh::{generator, ArcParams};
///
/// let mut params = ArcParams::new();
/// params.set_outer_edges(4);
/// assert_eq!(generator::expected_counts(&params), (6, 4));
/// params.set_hole_rate(0.5);
/// assert_eq!(generator::expected_counts(&params), (10, 8));
/// ```
pub fn expected_counts(params: &ArcParams) -> (usize, usize) {
    let edges = params.visible_edges();
    (
        vertex_count_for(params, edges),
        triangle_count_for(params, edges),
    )
}

fn vertex_count_for(params: &ArcParams, edges: u32) -> usize {
    let edges = edges as usize;
    match (edges, params.is_annulus()) {
        (0, _) => 0,
        (_, true) => 2 * (edges + 1),
        (_, false) => edges + 2,
    }
}

fn triangle_count_for(params: &ArcParams, edges: u32) -> usize {
    let edges = edges as usize;
    if params.is_annulus() {
        2 * edges
    } else {
        edges
    }
}

/// Rebuilds `mesh` from scratch for `params`.
///
/// Existing contents are cleared; the allocation is kept and grown to the
/// capacity of the current edge count.
pub fn build_into(params: &ArcParams, mesh: &mut ArcMesh) {
    mesh.clear();
    mesh.reserve(vertex_capacity(params), triangle_capacity(params));

    let sweep = Sweep::resolve(params);
    if sweep.visible_edges == 0 {
        return;
    }

    if params.is_annulus() {
        annulus::emit(params, &sweep, mesh);
    } else {
        solid::emit(params, &sweep, mesh);
    }
}

/// Builds a fresh mesh for `params`.
///
/// # Example
///
/// ```rust
/// use arc_mesh::{generator, ArcParams};
///
/// let mesh = generator::build(&ArcParams::default());
/// assert_eq!(mesh.triangle_count(), 36);
/// assert!(mesh.validate().is_ok());
/// ```
pub fn build(params: &ArcParams) -> ArcMesh {
    let mut mesh = ArcMesh::new();
    build_into(params, &mut mesh);
    mesh
}

/// Checks a built mesh against the counts `params` must produce and against
/// out-of-range indices.
pub fn verify(params: &ArcParams, mesh: &ArcMesh) -> ArcMeshResult<()> {
    let (vertices, triangles) = expected_counts(params);
    if mesh.vertex_count() != vertices {
        return Err(ArcMeshError::count_mismatch(format!(
            "expected {} vertices, found {}",
            vertices,
            mesh.vertex_count()
        )));
    }
    if mesh.triangle_count() != triangles {
        return Err(ArcMeshError::count_mismatch(format!(
            "expected {} triangles, found {}",
            triangles,
            mesh.triangle_count()
        )));
    }
    mesh.validate()
}

/// Orders a triangle given in clockwise-sweep order for the actual sweep.
///
/// Counter-clockwise sweeps swap the second and third index so the visible
/// face tracks the sweep direction.
#[inline]
fn wind(clockwise: bool, [a, b, c]: [u32; 3]) -> [u32; 3] {
    if clockwise {
        [a, b, c]
    } else {
        [a, c, b]
    }
}
