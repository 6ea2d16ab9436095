//! Axis-aligned box domain in double precision.

use glam::DVec3;

/// Double-precision axis-aligned box.
///
/// The physical domain a chart covers: `min` is the small-end corner, `max`
/// the big-end corner. Zero extent along an axis is allowed (a degenerate
/// slab); inverted corners are not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
  /// Small-end corner (inclusive).
  pub min: DVec3,
  /// Big-end corner (inclusive).
  pub max: DVec3,
}

impl Domain {
  /// Create a domain from its two corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: DVec3, max: DVec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "domain min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Extent of the domain (max - min).
  #[inline]
  pub fn size(&self) -> DVec3 {
    self.max - self.min
  }

  /// Center of the domain.
  #[inline]
  pub fn center(&self) -> DVec3 {
    (self.min + self.max) * 0.5
  }

  /// Check if a point lies inside the domain (boundary inclusive).
  #[inline]
  pub fn contains_point(&self, point: DVec3) -> bool {
    point.x >= self.min.x
      && point.x <= self.max.x
      && point.y >= self.min.y
      && point.y <= self.max.y
      && point.z >= self.min.z
      && point.z <= self.max.z
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new() {
    let domain = Domain::new(DVec3::new(-1.0, -2.0, -3.0), DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(domain.min, DVec3::new(-1.0, -2.0, -3.0));
    assert_eq!(domain.max, DVec3::new(1.0, 2.0, 3.0));
  }

  #[test]
  fn test_size_and_center() {
    let domain = Domain::new(DVec3::new(-1.0, -2.0, -3.0), DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(domain.size(), DVec3::new(2.0, 4.0, 6.0));
    assert_eq!(domain.center(), DVec3::ZERO);
  }

  #[test]
  fn test_contains_point() {
    let domain = Domain::new(DVec3::ZERO, DVec3::splat(10.0));

    // Inside
    assert!(domain.contains_point(DVec3::splat(5.0)));

    // On boundary
    assert!(domain.contains_point(DVec3::ZERO));
    assert!(domain.contains_point(DVec3::splat(10.0)));

    // Outside
    assert!(!domain.contains_point(DVec3::splat(-1.0)));
    assert!(!domain.contains_point(DVec3::splat(11.0)));
  }

  #[test]
  fn test_degenerate_axis() {
    let domain = Domain::new(DVec3::new(0.0, 0.0, 5.0), DVec3::new(1.0, 1.0, 5.0));
    assert_eq!(domain.size().z, 0.0);
    assert!(domain.contains_point(DVec3::new(0.5, 0.5, 5.0)));
    assert!(!domain.contains_point(DVec3::new(0.5, 0.5, 5.1)));
  }
}
