//! TreeConfig - refinement ceiling configuration for a tree root.

/// Default refinement ceiling.
pub const DEFAULT_MAX_LEVEL: u32 = 4;

/// Configuration applied to a refinement tree at its root.
///
/// The ceiling lives on the root (and is inherited by every node built under
/// it), not in any process-wide state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeConfig {
  /// Deepest level `refine` may create. Nodes at this level stay leaves.
  pub max_level: u32,
}

impl Default for TreeConfig {
  fn default() -> Self {
    Self {
      max_level: DEFAULT_MAX_LEVEL,
    }
  }
}

impl TreeConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_level(mut self, max_level: u32) -> Self {
    self.max_level = max_level;
    self
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
