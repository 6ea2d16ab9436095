//! Lattice shape and flat strided indexing.
//!
//! All point data in this crate (chart coordinates, fibre values,
//! interpolator sources) lives in a single flat buffer addressed through
//! [`Lattice`] rather than nested containers.
//!
//! # Memory layout
//!
//! Row-major with axis 0 (X) as the major axis and axis 2 (Z) as the minor:
//!
//! ```text
//! index = (x * ny + y) * nz + z
//! ```
//!
//! Iteration order is therefore X-outer, Z-inner, and every sweep in the
//! crate (lattice construction, refinement, decomposition) walks memory in
//! this order. Decomposition ordering downstream depends on it.

use glam::UVec3;

/// Point-lattice shape: number of lattice points per axis.
///
/// A chart with `(cx, cy, cz)` cells has `(cx+1, cy+1, cz+1)` points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
  /// Points along axis 0.
  pub nx: usize,
  /// Points along axis 1.
  pub ny: usize,
  /// Points along axis 2.
  pub nz: usize,
}

impl Lattice {
  /// Create a lattice shape from per-axis point counts.
  pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
    Self { nx, ny, nz }
  }

  /// Lattice shape covering `cells` grid cells per axis (points = cells + 1).
  pub fn from_cells(cells: UVec3) -> Self {
    Self {
      nx: cells.x as usize + 1,
      ny: cells.y as usize + 1,
      nz: cells.z as usize + 1,
    }
  }

  /// Total number of lattice points.
  #[inline]
  pub fn len(&self) -> usize {
    self.nx * self.ny * self.nz
  }

  /// True if the lattice holds no points.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Convert 3D point coordinates to the flat buffer index.
  ///
  /// # Panics
  /// Panics if any coordinate is outside the lattice extents; aliasing an
  /// out-of-range coordinate into a valid flat index would silently read the
  /// wrong point.
  #[inline]
  pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
    assert!(
      i < self.nx && j < self.ny && k < self.nz,
      "lattice index ({i}, {j}, {k}) out of bounds for shape ({}, {}, {})",
      self.nx,
      self.ny,
      self.nz
    );
    (i * self.ny + j) * self.nz + k
  }

  /// Checked variant of [`index`](Self::index).
  #[inline]
  pub fn checked_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
    if i < self.nx && j < self.ny && k < self.nz {
      Some((i * self.ny + j) * self.nz + k)
    } else {
      None
    }
  }

  /// Convert a flat buffer index back to 3D point coordinates.
  #[inline]
  pub fn coord(&self, index: usize) -> (usize, usize, usize) {
    let k = index % self.nz;
    let j = (index / self.nz) % self.ny;
    let i = index / (self.nz * self.ny);
    (i, j, k)
  }

  /// Iterate all point coordinates in flat-buffer (axis-major) order.
  pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    (0..self.len()).map(|idx| self.coord(idx))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_cells() {
    let shape = Lattice::from_cells(UVec3::new(2, 3, 4));
    assert_eq!(shape, Lattice::new(3, 4, 5));
    assert_eq!(shape.len(), 60);
  }

  #[test]
  fn test_index_layout() {
    let shape = Lattice::new(3, 4, 5);
    assert_eq!(shape.index(0, 0, 0), 0);
    assert_eq!(shape.index(0, 0, 1), 1); // Z is minor
    assert_eq!(shape.index(0, 1, 0), 5); // Y stride = nz
    assert_eq!(shape.index(1, 0, 0), 20); // X stride = ny * nz
    assert_eq!(shape.index(2, 3, 4), shape.len() - 1);
  }

  #[test]
  fn test_index_coord_roundtrip() {
    let shape = Lattice::new(3, 4, 5);
    for idx in 0..shape.len() {
      let (i, j, k) = shape.coord(idx);
      assert_eq!(shape.index(i, j, k), idx);
    }
  }

  #[test]
  fn test_iter_is_axis_major() {
    let shape = Lattice::new(2, 2, 2);
    let order: Vec<_> = shape.iter().collect();
    assert_eq!(
      order,
      vec![
        (0, 0, 0),
        (0, 0, 1),
        (0, 1, 0),
        (0, 1, 1),
        (1, 0, 0),
        (1, 0, 1),
        (1, 1, 0),
        (1, 1, 1),
      ]
    );
  }

  #[test]
  fn test_checked_index() {
    let shape = Lattice::new(2, 2, 2);
    assert_eq!(shape.checked_index(1, 1, 1), Some(7));
    assert_eq!(shape.checked_index(2, 0, 0), None);
    assert_eq!(shape.checked_index(0, 0, 2), None);
  }

  #[test]
  #[should_panic(expected = "out of bounds")]
  fn test_index_out_of_bounds_panics() {
    Lattice::new(2, 2, 2).index(0, 2, 0);
  }
}
