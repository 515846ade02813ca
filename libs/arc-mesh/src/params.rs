//! # Geometry Parameters
//!
//! Caller-owned parameters read by the generator on every regeneration.
//! Every setter clamps its input, so any `ArcParams` value describes valid
//! (possibly empty) geometry.

use std::f32::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

use config::constants::{
    DEFAULT_COLOR, DEFAULT_OUTER_EDGES, DEFAULT_UV_CENTER, DEFAULT_UV_HALF_EXTENT,
    MAX_OUTER_EDGES, MIN_OUTER_EDGES,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::angle;
use crate::error::ArcMeshError;

// =============================================================================
// ORIGIN
// =============================================================================

/// Canonical start direction of the sweep.
///
/// Angles follow the `(sin, cos)` position convention, so `Top` (0 rad)
/// points along +Y and `Right` (π/2) along +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Start at +Y.
    #[default]
    Top,
    /// Start at +X.
    Right,
    /// Start at -Y.
    Bottom,
    /// Start at -X.
    Left,
}

impl Origin {
    /// All origins in sweep order.
    pub const ALL: [Origin; 4] = [Origin::Top, Origin::Right, Origin::Bottom, Origin::Left];

    /// Start angle in radians.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arc_mesh::Origin;
    ///
    /// assert_eq!(Origin::Top.radians(), 0.0);
    /// assert_eq!(Origin::Bottom.radians(), std::f32::consts::PI);
    /// ```
    pub fn radians(self) -> f32 {
        match self {
            Origin::Top => 0.0,
            Origin::Right => FRAC_PI_2,
            Origin::Bottom => PI,
            Origin::Left => 3.0 * FRAC_PI_2,
        }
    }
}

impl FromStr for Origin {
    type Err = ArcMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Origin::ALL
            .into_iter()
            .find(|origin| {
                let candidate = match origin {
                    Origin::Top => "top",
                    Origin::Right => "right",
                    Origin::Bottom => "bottom",
                    Origin::Left => "left",
                };
                candidate.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ArcMeshError::unknown_origin(s))
    }
}

// =============================================================================
// START ANGLE
// =============================================================================

/// Where the sweep begins: an enumerated origin or a free angle.
///
/// Free angles are always radians. Hosts working in degrees convert once
/// with [`StartAngle::from_degrees`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartAngle {
    /// One of the four canonical directions.
    Origin(Origin),
    /// Arbitrary offset in radians.
    Free(f32),
}

impl StartAngle {
    /// Free start angle from a value in degrees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arc_mesh::StartAngle;
    ///
    /// let angle = StartAngle::from_degrees(90.0);
    /// assert!((angle.radians() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    /// ```
    pub fn from_degrees(degrees: f32) -> Self {
        StartAngle::Free(degrees.to_radians())
    }

    /// Resolved start angle in radians.
    pub fn radians(self) -> f32 {
        match self {
            StartAngle::Origin(origin) => origin.radians(),
            StartAngle::Free(radians) => radians,
        }
    }
}

impl Default for StartAngle {
    fn default() -> Self {
        StartAngle::Origin(Origin::Top)
    }
}

impl From<Origin> for StartAngle {
    fn from(origin: Origin) -> Self {
        StartAngle::Origin(origin)
    }
}

// =============================================================================
// UV MAPPING
// =============================================================================

/// UV rectangle of a bound image region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    /// Lower-left UV corner.
    pub min: Vec2,
    /// Upper-right UV corner.
    pub max: Vec2,
}

impl UvRect {
    /// Creates a rect from its corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
}

/// Maps unit-circle directions into texture space.
///
/// A direction `d` lands at `center + half_extent * d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvMapping {
    /// UV of the disc center.
    pub center: Vec2,
    /// UV distance from center to rim along each axis.
    pub half_extent: Vec2,
}

impl UvMapping {
    /// Derives the mapping from a bound image's UV rectangle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arc_mesh::{UvMapping, UvRect};
    /// use glam::Vec2;
    ///
    /// let uv = UvMapping::from_rect(UvRect::new(Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.5)));
    /// assert_eq!(uv.center, Vec2::new(0.75, 0.25));
    /// assert_eq!(uv.half_extent, Vec2::new(0.25, 0.25));
    /// ```
    pub fn from_rect(rect: UvRect) -> Self {
        Self {
            center: (rect.min + rect.max) * 0.5,
            half_extent: (rect.max - rect.min) * 0.5,
        }
    }

    /// Mapping for an optional image; no image spans the full unit square.
    pub fn for_image(rect: Option<UvRect>) -> Self {
        rect.map(Self::from_rect).unwrap_or_default()
    }

    /// UV coordinate for a direction scaled by `radius_fraction`.
    #[inline]
    pub fn project(&self, direction: Vec2, radius_fraction: f32) -> Vec2 {
        self.center + self.half_extent * direction * radius_fraction
    }
}

impl Default for UvMapping {
    fn default() -> Self {
        Self {
            center: Vec2::from_array(DEFAULT_UV_CENTER),
            half_extent: Vec2::from_array(DEFAULT_UV_HALF_EXTENT),
        }
    }
}

// =============================================================================
// ARC PARAMS
// =============================================================================

/// Full parameter set for one disc, ring or arc.
///
/// # Example
///
/// ```rust
/// use arc_mesh::ArcParams;
///
/// let mut params = ArcParams::default();
/// params.set_outer_edges(1000);
/// params.set_visible_rate(0.5);
/// assert_eq!(params.outer_edges(), 200);
/// assert_eq!(params.visible_edges(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawParams")]
pub struct ArcParams {
    outer_edges: u32,
    visible_rate: f32,
    hole_rate: f32,
    start: StartAngle,
    clockwise: bool,
    extent: Vec2,
    uv: UvMapping,
    color: [f32; 4],
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            outer_edges: DEFAULT_OUTER_EDGES,
            visible_rate: 1.0,
            hole_rate: 0.0,
            start: StartAngle::default(),
            clockwise: true,
            extent: Vec2::ONE,
            uv: UvMapping::default(),
            color: DEFAULT_COLOR,
        }
    }
}

impl ArcParams {
    /// Creates default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Sample points around the full circle.
    #[inline]
    pub fn outer_edges(&self) -> u32 {
        self.outer_edges
    }

    /// Fraction of the circumference to emit.
    #[inline]
    pub fn visible_rate(&self) -> f32 {
        self.visible_rate
    }

    /// Inner radius as a fraction of the outer radius.
    #[inline]
    pub fn hole_rate(&self) -> f32 {
        self.hole_rate
    }

    /// Start of the sweep.
    #[inline]
    pub fn start(&self) -> StartAngle {
        self.start
    }

    /// Sweep direction.
    #[inline]
    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Horizontal and vertical radii.
    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Texture mapping.
    #[inline]
    pub fn uv(&self) -> UvMapping {
        self.uv
    }

    /// Uniform vertex tint.
    #[inline]
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Number of emitted angular segments, `floor(visible_rate * outer_edges)`.
    #[inline]
    pub fn visible_edges(&self) -> u32 {
        angle::visible_edges(self.visible_rate, self.outer_edges)
    }

    /// True when a hole is cut out of the disc.
    #[inline]
    pub fn is_annulus(&self) -> bool {
        self.hole_rate > 0.0
    }

    // =========================================================================
    // SETTERS
    // =========================================================================

    /// Sets the edge count, clamped to `[MIN_OUTER_EDGES, MAX_OUTER_EDGES]`.
    pub fn set_outer_edges(&mut self, edges: u32) {
        let clamped = edges.clamp(MIN_OUTER_EDGES, MAX_OUTER_EDGES);
        if clamped != edges {
            log::debug!("outer_edges {} clamped to {}", edges, clamped);
        }
        self.outer_edges = clamped;
    }

    /// Sets the visible fraction, clamped to `[0, 1]`.
    pub fn set_visible_rate(&mut self, rate: f32) {
        self.visible_rate = clamp_unit("visible_rate", rate);
    }

    /// Sets the hole fraction, clamped to `[0, 1]`.
    pub fn set_hole_rate(&mut self, rate: f32) {
        self.hole_rate = clamp_unit("hole_rate", rate);
    }

    /// Sets the start of the sweep. A non-finite free angle collapses to 0.
    pub fn set_start(&mut self, start: impl Into<StartAngle>) {
        self.start = match start.into() {
            StartAngle::Free(angle) if !angle.is_finite() => {
                log::debug!("start angle {} replaced with 0", angle);
                StartAngle::Free(0.0)
            }
            start => start,
        };
    }

    /// Sets the sweep direction.
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    /// Sets horizontal and vertical radii.
    pub fn set_extent(&mut self, extent: Vec2) {
        self.extent = extent;
    }

    /// Sets the texture mapping.
    pub fn set_uv(&mut self, uv: UvMapping) {
        self.uv = uv;
    }

    /// Sets the uniform vertex tint.
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }
}

/// Clamps into `[0, 1]`; NaN collapses to 0.
fn clamp_unit(name: &str, value: f32) -> f32 {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    if clamped != value {
        log::debug!("{} {} clamped to {}", name, value, clamped);
    }
    clamped
}

// =============================================================================
// DESERIALIZATION
// =============================================================================

/// Unvalidated wire form; converted through the clamping setters.
#[derive(Deserialize)]
#[serde(default)]
struct RawParams {
    outer_edges: u32,
    visible_rate: f32,
    hole_rate: f32,
    start: StartAngle,
    clockwise: bool,
    extent: Vec2,
    uv: UvMapping,
    color: [f32; 4],
}

impl Default for RawParams {
    fn default() -> Self {
        let params = ArcParams::default();
        Self {
            outer_edges: params.outer_edges,
            visible_rate: params.visible_rate,
            hole_rate: params.hole_rate,
            start: params.start,
            clockwise: params.clockwise,
            extent: params.extent,
            uv: params.uv,
            color: params.color,
        }
    }
}

impl From<RawParams> for ArcParams {
    fn from(raw: RawParams) -> Self {
        let mut params = ArcParams::default();
        params.set_outer_edges(raw.outer_edges);
        params.set_visible_rate(raw.visible_rate);
        params.set_hole_rate(raw.hole_rate);
        params.set_start(raw.start);
        params.set_clockwise(raw.clockwise);
        params.set_extent(raw.extent);
        params.set_uv(raw.uv);
        params.set_color(raw.color);
        params
    }
}
