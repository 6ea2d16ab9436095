//! TreeNode - one level of a bundle refinement hierarchy.

use crate::bundle::Bundle;
use crate::chart::RefineFactor;
use crate::error::GridError;

use super::TreeConfig;

/// A node of the refinement tree.
///
/// Owns its bundle and its children exclusively; a node at `max_level` is
/// always a leaf. Children are created by [`refine`](Self::refine), one tree
/// level per call, each child wrapping one decomposed sub-bundle of this
/// node's refined bundle.
#[derive(Clone, Debug)]
pub struct TreeNode {
  bundle: Bundle,
  level: u32,
  max_level: u32,
  children: Vec<TreeNode>,
}

impl TreeNode {
  /// Create a node at `level` under a ceiling of `max_level`.
  ///
  /// Fails with [`GridError::InvalidLevel`] if `level > max_level`.
  pub fn new(bundle: Bundle, level: u32, max_level: u32) -> Result<Self, GridError> {
    if level > max_level {
      return Err(GridError::InvalidLevel { level, max_level });
    }
    Ok(Self {
      bundle,
      level,
      max_level,
      children: Vec::new(),
    })
  }

  /// Create a root node (level 0) with the configured ceiling.
  pub fn root(bundle: Bundle, config: TreeConfig) -> Self {
    Self {
      bundle,
      level: 0,
      max_level: config.max_level,
      children: Vec::new(),
    }
  }

  /// The bundle this node wraps.
  #[inline]
  pub fn bundle(&self) -> &Bundle {
    &self.bundle
  }

  /// Depth from the root (0 at the root).
  #[inline]
  pub fn level(&self) -> u32 {
    self.level
  }

  /// Refinement ceiling inherited from the root.
  #[inline]
  pub fn max_level(&self) -> u32 {
    self.max_level
  }

  /// This node's children, in decomposition order.
  #[inline]
  pub fn children(&self) -> &[TreeNode] {
    &self.children
  }

  /// Mutable access to the children, for driving deeper refinement.
  #[inline]
  pub fn children_mut(&mut self) -> &mut [TreeNode] {
    &mut self.children
  }

  /// Append one child. No consistency check against this node's level or
  /// bundle; that is the caller's responsibility.
  pub fn add_child(&mut self, child: TreeNode) {
    self.children.push(child);
  }

  /// Append several children, preserving their order.
  pub fn add_children(&mut self, children: impl IntoIterator<Item = TreeNode>) {
    self.children.extend(children);
  }

  /// True iff this node has no children.
  #[inline]
  pub fn is_childless(&self) -> bool {
    self.children.is_empty()
  }

  /// Refine this node by one tree level.
  ///
  /// No-op when the node sits at the ceiling, or when it already has
  /// children and at least one of them has refined further: an existing
  /// deepened subtree is never discarded. A node that is unrefined, or whose
  /// children are all still flat, gets a fresh child set: the bundle is
  /// refined by `factor`, decomposed, and each sub-bundle becomes a child at
  /// `level + 1` in decomposition order.
  ///
  /// Each call builds exactly one level; refining the new children is up to
  /// the caller.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "tree::refine", fields(level = self.level))
  )]
  pub fn refine(&mut self, factor: impl Into<RefineFactor>) -> Result<(), GridError> {
    if self.level >= self.max_level {
      return Ok(());
    }
    if !self.children.is_empty() && self.children.iter().any(|child| !child.is_childless()) {
      return Ok(());
    }

    let refined = self.bundle.refine(factor)?;
    let mut children = Vec::new();
    for sub_bundle in refined.decompose() {
      children.push(TreeNode::new(sub_bundle, self.level + 1, self.max_level)?);
    }
    self.children = children;
    Ok(())
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
