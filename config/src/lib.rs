//! # Config Crate
//!
//! Centralized configuration constants for the arc mesh generator.
//! Edge-count limits, comparison tolerances, and default mapping values are
//! defined here so the generator and its adapters agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_OUTER_EDGES, MIN_OUTER_EDGES, PARAM_EPSILON};
//!
//! // Clamp a requested edge count into the supported range
//! let requested = 500u32;
//! let edges = requested.clamp(MIN_OUTER_EDGES, MAX_OUTER_EDGES);
//! assert_eq!(edges, MAX_OUTER_EDGES);
//!
//! // Use PARAM_EPSILON when deciding whether a parameter really changed
//! let changed = (0.5f32 - 0.500_000_1).abs() > PARAM_EPSILON;
//! assert!(!changed);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Usable from any host without pulling in a stack
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
