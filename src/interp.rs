//! Regular-grid trilinear interpolation.
//!
//! [`RegularGridInterp`] evaluates a scalar field known at the points of a
//! regular 3D lattice: constant-time cell lookup from the uniform spacing,
//! then an 8-corner multilinear blend. Queries outside the source domain are
//! rejected rather than extrapolated; the error propagates to the caller.
//!
//! Sampling is exact for fields that are degree-1 (multilinear) in the
//! coordinates, which is what makes chart refinement lossless for such
//! fields.

use glam::DVec3;

use crate::error::GridError;
use crate::lattice::Lattice;

/// One interpolation axis: its coordinate sequence plus the derived uniform
/// spacing for O(1) cell lookup.
#[derive(Clone, Debug)]
struct Axis {
  coords: Vec<f64>,
  step: f64,
}

impl Axis {
  fn new(coords: Vec<f64>) -> Self {
    debug_assert!(!coords.is_empty(), "interpolation axis needs at least one coordinate");
    debug_assert!(
      coords.windows(2).all(|w| w[0] <= w[1]),
      "interpolation axis coordinates must be ascending"
    );
    let step = if coords.len() > 1 {
      (coords[coords.len() - 1] - coords[0]) / (coords.len() - 1) as f64
    } else {
      0.0
    };
    Self { coords, step }
  }

  #[inline]
  fn min(&self) -> f64 {
    self.coords[0]
  }

  #[inline]
  fn max(&self) -> f64 {
    self.coords[self.coords.len() - 1]
  }

  /// Locate the cell containing `q` and the fractional position inside it.
  ///
  /// The upper domain boundary is inclusive: a query at `max` lands in the
  /// last cell with fraction 1. A collapsed axis (single coordinate, zero
  /// extent) always yields cell 0 with fraction 0.
  fn locate(&self, axis: usize, q: f64) -> Result<(usize, f64), GridError> {
    if q < self.min() || q > self.max() {
      return Err(GridError::OutOfDomain {
        axis,
        coord: q,
        min: self.min(),
        max: self.max(),
      });
    }
    if self.coords.len() == 1 || self.step == 0.0 {
      return Ok((0, 0.0));
    }
    let cell = (((q - self.min()) / self.step) as usize).min(self.coords.len() - 2);
    let lo = self.coords[cell];
    let hi = self.coords[cell + 1];
    let frac = if hi > lo { (q - lo) / (hi - lo) } else { 0.0 };
    Ok((cell, frac.clamp(0.0, 1.0)))
  }
}

/// Trilinear interpolator over a regular 3D grid.
///
/// Holds the three per-axis coordinate sequences and one scalar value per
/// lattice point (flat, axis-major per [`Lattice`]). Evaluation is a pure
/// function of these read-only inputs and the query point, so concurrent
/// sampling needs no synchronization.
#[derive(Clone, Debug)]
pub struct RegularGridInterp {
  axes: [Axis; 3],
  shape: Lattice,
  values: Vec<f64>,
}

impl RegularGridInterp {
  /// Create an interpolator from per-axis coordinates and lattice values.
  ///
  /// `values` is flat and axis-major; its length must equal
  /// `xs.len() * ys.len() * zs.len()`.
  pub fn new(
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
    values: Vec<f64>,
  ) -> Result<Self, GridError> {
    let shape = Lattice::new(xs.len(), ys.len(), zs.len());
    if values.len() != shape.len() {
      return Err(GridError::ShapeMismatch {
        expected: shape.len(),
        found: values.len(),
      });
    }
    Ok(Self {
      axes: [Axis::new(xs), Axis::new(ys), Axis::new(zs)],
      shape,
      values,
    })
  }

  /// Interpolate the field at a physical coordinate.
  ///
  /// Fails with [`GridError::OutOfDomain`] if any component of `p` lies
  /// outside its axis range.
  pub fn sample(&self, p: DVec3) -> Result<f64, GridError> {
    let (ix, fx) = self.axes[0].locate(0, p.x)?;
    let (iy, fy) = self.axes[1].locate(1, p.y)?;
    let (iz, fz) = self.axes[2].locate(2, p.z)?;

    // 8-corner blend. Zero-weight corners are skipped, which also keeps a
    // collapsed axis from indexing past its single coordinate.
    let mut value = 0.0;
    for corner in 0..8usize {
      let (di, dj, dk) = (corner >> 2 & 1, corner >> 1 & 1, corner & 1);
      let weight = pick(fx, di) * pick(fy, dj) * pick(fz, dk);
      if weight == 0.0 {
        continue;
      }
      value += weight * self.values[self.shape.index(ix + di, iy + dj, iz + dk)];
    }
    Ok(value)
  }
}

#[inline]
fn pick(frac: f64, side: usize) -> f64 {
  if side == 1 {
    frac
  } else {
    1.0 - frac
  }
}

#[cfg(test)]
#[path = "interp_test.rs"]
mod interp_test;
