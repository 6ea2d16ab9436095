//! Error type for chart, bundle, and tree construction.

use thiserror::Error;

/// Errors reported by fallible chart/bundle/tree operations.
///
/// Every variant indicates a caller contract violation (bad level, bad shape,
/// out-of-domain query). Nothing here is retryable; operations are pure and
/// deterministic. Out-of-range direct indexing panics with the container's
/// own bounds check instead of returning a variant; use the checked `get_*`
/// accessors for a fallible path.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GridError {
  /// Tree node constructed below the refinement ceiling.
  #[error("tree level {level} exceeds max_level {max_level}")]
  InvalidLevel { level: u32, max_level: u32 },

  /// Supplied field data does not match the chart's lattice shape.
  #[error("field data has {found} values, lattice shape expects {expected}")]
  ShapeMismatch { expected: usize, found: usize },

  /// Interpolation query outside the source domain. Extrapolation is not
  /// supported; clamping silently would corrupt refined field values.
  #[error("query coordinate {coord} on axis {axis} outside domain [{min}, {max}]")]
  OutOfDomain {
    axis: usize,
    coord: f64,
    min: f64,
    max: f64,
  },
}
