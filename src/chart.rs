//! Chart - uniform coordinate lattice over a box domain.
//!
//! A [`Chart`] maps integer `(i, j, k)` lattice indices to physical
//! coordinates inside a [`Domain`]. It is the leaf building block: a
//! [`Bundle`](crate::Bundle) attaches field data to its points and a
//! [`TreeNode`](crate::TreeNode) hangs bundles off a refinement hierarchy.
//!
//! A chart's shape never changes after construction. `refine` and
//! `decompose` return new charts.

use glam::{DVec3, UVec3};

use crate::bounds::Domain;
use crate::lattice::Lattice;

/// Per-axis refinement factor.
///
/// Converts from a scalar (uniform factor on all axes) or a per-axis triple.
/// All components must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefineFactor(pub UVec3);

impl From<u32> for RefineFactor {
  fn from(factor: u32) -> Self {
    Self(UVec3::splat(factor))
  }
}

impl From<[u32; 3]> for RefineFactor {
  fn from(factor: [u32; 3]) -> Self {
    Self(UVec3::from_array(factor))
  }
}

impl From<UVec3> for RefineFactor {
  fn from(factor: UVec3) -> Self {
    Self(factor)
  }
}

/// Evenly spaced coordinates from `lo` to `hi` covering `cells` grid cells
/// (`cells + 1` fencepost values). The final value is written as exactly
/// `hi`; accumulating `lo + step * n` can land an ulp off and the domain
/// corners must survive refinement bit-exact.
pub(crate) fn linspace(lo: f64, hi: f64, cells: u32) -> Vec<f64> {
  debug_assert!(cells > 0, "axis cell count must be positive");
  let n = cells as usize;
  let step = (hi - lo) / n as f64;
  let mut coords: Vec<f64> = (0..=n).map(|i| lo + step * i as f64).collect();
  coords[n] = hi;
  coords
}

/// Uniform structured grid over a 3D box.
///
/// Stores one physical coordinate per lattice point in a flat buffer,
/// axis-major (X outer, Z inner) per [`Lattice`]. Point `(0, 0, 0)` is the
/// domain's small end and point `(nx, ny, nz)` its big end, exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
  domain: Domain,
  cells: UVec3,
  lattice: Lattice,
  grid: Vec<DVec3>,
}

impl Chart {
  /// Build the coordinate lattice for `cells` grid cells per axis.
  ///
  /// Each axis gets `cells + 1` evenly spaced coordinates between the
  /// corresponding components of `small_end` and `big_end` inclusive; the
  /// full lattice is their outer product in axis-major order.
  ///
  /// # Panics
  /// Debug-asserts `small_end <= big_end` componentwise and positive cell
  /// counts.
  pub fn new(small_end: DVec3, big_end: DVec3, cells: UVec3) -> Self {
    debug_assert!(
      cells.x > 0 && cells.y > 0 && cells.z > 0,
      "cell counts must be positive, given {cells}"
    );
    let domain = Domain::new(small_end, big_end);
    let lattice = Lattice::from_cells(cells);

    let xs = linspace(small_end.x, big_end.x, cells.x);
    let ys = linspace(small_end.y, big_end.y, cells.y);
    let zs = linspace(small_end.z, big_end.z, cells.z);

    let mut grid = Vec::with_capacity(lattice.len());
    for &x in &xs {
      for &y in &ys {
        for &z in &zs {
          grid.push(DVec3::new(x, y, z));
        }
      }
    }

    Self {
      domain,
      cells,
      lattice,
      grid,
    }
  }

  /// Chart with a single cell per axis (2×2×2 points). The resolution
  /// `decompose` gives its sub-charts.
  pub fn unit(small_end: DVec3, big_end: DVec3) -> Self {
    Self::new(small_end, big_end, UVec3::ONE)
  }

  /// The physical domain this chart covers.
  #[inline]
  pub fn domain(&self) -> Domain {
    self.domain
  }

  /// Small-end corner of the domain.
  #[inline]
  pub fn small_end(&self) -> DVec3 {
    self.domain.min
  }

  /// Big-end corner of the domain.
  #[inline]
  pub fn big_end(&self) -> DVec3 {
    self.domain.max
  }

  /// Grid cell count per axis.
  #[inline]
  pub fn cells(&self) -> UVec3 {
    self.cells
  }

  /// Point-lattice shape (cells + 1 per axis).
  #[inline]
  pub fn lattice(&self) -> Lattice {
    self.lattice
  }

  /// Flat view of all lattice point coordinates, axis-major order.
  #[inline]
  pub fn grid(&self) -> &[DVec3] {
    &self.grid
  }

  /// Physical coordinate of lattice point `(i, j, k)`.
  ///
  /// # Panics
  /// Panics if the index is outside the lattice extents.
  #[inline]
  pub fn point(&self, i: usize, j: usize, k: usize) -> DVec3 {
    self.grid[self.lattice.index(i, j, k)]
  }

  /// Checked variant of [`point`](Self::point).
  #[inline]
  pub fn get_point(&self, i: usize, j: usize, k: usize) -> Option<DVec3> {
    self.lattice.checked_index(i, j, k).map(|idx| self.grid[idx])
  }

  /// Overwrite a lattice point coordinate in place.
  ///
  /// The rest of the crate never does this; refinement and decomposition
  /// derive their geometry from the domain corners, not from stored points.
  ///
  /// # Panics
  /// Panics if the index is outside the lattice extents.
  #[inline]
  pub fn set_point(&mut self, i: usize, j: usize, k: usize, coordinate: DVec3) {
    let idx = self.lattice.index(i, j, k);
    self.grid[idx] = coordinate;
  }

  /// The per-axis coordinate sequence of the lattice (axis 0, 1, or 2).
  ///
  /// These are the interpolation abscissae for any field sampled on this
  /// chart.
  pub fn axis_coords(&self, axis: usize) -> Vec<f64> {
    match axis {
      0 => linspace(self.domain.min.x, self.domain.max.x, self.cells.x),
      1 => linspace(self.domain.min.y, self.domain.max.y, self.cells.y),
      2 => linspace(self.domain.min.z, self.domain.max.z, self.cells.z),
      _ => panic!("axis {axis} out of range for a 3D chart"),
    }
  }

  /// Reconstruct an independent chart with the same bounds and cell counts.
  ///
  /// Unlike `clone`, this rebuilds the lattice from the domain corners and
  /// drops any coordinates overwritten with [`set_point`](Self::set_point).
  pub fn rebuild(&self) -> Chart {
    Chart::new(self.domain.min, self.domain.max, self.cells)
  }

  /// New chart over the same domain with cell counts multiplied per axis.
  pub fn refine(&self, factor: impl Into<RefineFactor>) -> Chart {
    let RefineFactor(factor) = factor.into();
    debug_assert!(
      factor.x > 0 && factor.y > 0 && factor.z > 0,
      "refinement factor must be positive, given {factor}"
    );
    Chart::new(self.domain.min, self.domain.max, self.cells * factor)
  }

  /// Split into one unit-resolution chart per interior cell.
  ///
  /// A cell is addressed by its upper-corner point index `(i, j, k)` with
  /// `i` in `1..nx`, `j` in `1..ny`, `k` in `1..nz` for cell counts
  /// `(nx, ny, nz)`; its chart spans the adjacent lattice points
  /// `(i-1, j-1, k-1)` and `(i, j, k)`. Result order is axis-major (axis 0
  /// outermost, axis 2 innermost) and pairs one-to-one with
  /// [`Bundle::decompose`](crate::Bundle::decompose).
  pub fn decompose(&self) -> Vec<Chart> {
    let (nx, ny, nz) = (
      self.cells.x as usize,
      self.cells.y as usize,
      self.cells.z as usize,
    );
    let mut charts = Vec::with_capacity((nx - 1) * (ny - 1) * (nz - 1));
    for i in 1..nx {
      for j in 1..ny {
        for k in 1..nz {
          charts.push(Chart::unit(
            self.point(i - 1, j - 1, k - 1),
            self.point(i, j, k),
          ));
        }
      }
    }
    charts
  }
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;
