//! Centralized configuration values shared by the arc mesh crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// EDGE COUNT LIMITS
// =============================================================================

/// Smallest number of sample points around the full circle.
///
/// Three samples is the smallest closed polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_OUTER_EDGES;
/// assert_eq!(MIN_OUTER_EDGES, 3);
/// ```
pub const MIN_OUTER_EDGES: u32 = 3;

/// Largest number of sample points around the full circle.
///
/// Bounds the per-regeneration work and the preallocated buffer sizes.
///
/// # Examples
/// ```
/// use config::constants::MAX_OUTER_EDGES;
/// let requested = 10_000u32;
/// assert_eq!(requested.min(MAX_OUTER_EDGES), 200);
/// ```
pub const MAX_OUTER_EDGES: u32 = 200;

/// Edge count used when the host does not pick one.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_OUTER_EDGES, MAX_OUTER_EDGES, MIN_OUTER_EDGES};
/// assert!((MIN_OUTER_EDGES..=MAX_OUTER_EDGES).contains(&DEFAULT_OUTER_EDGES));
/// ```
pub const DEFAULT_OUTER_EDGES: u32 = 36;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when comparing a parameter against its last-seen value.
///
/// Differences at or below this value do not trigger a regeneration, which
/// keeps binary-representation noise from rebuilding the buffers every frame.
///
/// # Examples
/// ```
/// use config::constants::PARAM_EPSILON;
///
/// fn differs(a: f32, b: f32) -> bool {
///     (a - b).abs() > PARAM_EPSILON
/// }
///
/// assert!(!differs(0.25, 0.25 + 1e-7));
/// assert!(differs(0.25, 0.26));
/// ```
pub const PARAM_EPSILON: f32 = 1.0e-5;

/// Tolerance for comparing emitted vertex positions and UVs.
///
/// Positions are single precision, so closing the loop after a full sweep
/// accumulates a few ulps of error.
///
/// # Examples
/// ```
/// use config::constants::GEOMETRY_EPSILON;
/// let closing = (std::f32::consts::TAU).sin();
/// assert!(closing.abs() < GEOMETRY_EPSILON);
/// ```
pub const GEOMETRY_EPSILON: f32 = 1.0e-4;

// =============================================================================
// DEFAULT MAPPING
// =============================================================================

/// UV center used when no image region is bound.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_UV_CENTER;
/// assert_eq!(DEFAULT_UV_CENTER, [0.5, 0.5]);
/// ```
pub const DEFAULT_UV_CENTER: [f32; 2] = [0.5, 0.5];

/// UV half extent used when no image region is bound.
///
/// Together with [`DEFAULT_UV_CENTER`] this spans the full `[0,1]x[0,1]` square.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_UV_CENTER, DEFAULT_UV_HALF_EXTENT};
/// let min = DEFAULT_UV_CENTER[0] - DEFAULT_UV_HALF_EXTENT[0];
/// let max = DEFAULT_UV_CENTER[0] + DEFAULT_UV_HALF_EXTENT[0];
/// assert_eq!((min, max), (0.0, 1.0));
/// ```
pub const DEFAULT_UV_HALF_EXTENT: [f32; 2] = [0.5, 0.5];

/// Default vertex tint (opaque white, RGBA in `[0, 1]`).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COLOR;
/// assert_eq!(DEFAULT_COLOR[3], 1.0);
/// ```
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// =============================================================================
// GENERATOR CONFIG
// =============================================================================

/// Immutable snapshot of generator-wide settings that can be shared between
/// crates and host adapters.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Tolerance the regeneration gate uses when diffing parameters.
    pub tolerance: f32,
    /// Edge count given to freshly created generators.
    pub default_outer_edges: u32,
}

impl GeneratorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default edge count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(1.0e-4, 64).expect("valid config");
    /// assert_eq!(cfg.default_outer_edges, 64);
    /// assert!(GeneratorConfig::new(1.0e-4, 2).is_err());
    /// ```
    pub fn new(tolerance: f32, default_outer_edges: u32) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_OUTER_EDGES..=MAX_OUTER_EDGES).contains(&default_outer_edges) {
            return Err(ConfigError::InvalidEdgeCount(default_outer_edges));
        }
        Ok(Self {
            tolerance,
            default_outer_edges,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: PARAM_EPSILON,
            default_outer_edges: DEFAULT_OUTER_EDGES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f32),
    /// Raised when the default edge count falls outside the supported range.
    InvalidEdgeCount(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidEdgeCount(value) => {
                write!(
                    f,
                    "default_outer_edges must be in {MIN_OUTER_EDGES}..={MAX_OUTER_EDGES}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
