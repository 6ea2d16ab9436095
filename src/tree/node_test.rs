use glam::{DVec3, UVec3};

use super::*;
use crate::bundle::Bundle;
use crate::chart::Chart;

/// Root-scenario bundle: 2x2x2 cells over the unit cube, 8 components.
fn scenario_bundle() -> Bundle {
  let chart = Chart::new(DVec3::ZERO, DVec3::ONE, UVec3::new(2, 2, 2));
  Bundle::zeroed(chart, 8)
}

#[test]
fn test_level_above_ceiling_is_rejected() {
  let err = TreeNode::new(scenario_bundle(), 5, 4).unwrap_err();
  assert_eq!(
    err,
    GridError::InvalidLevel {
      level: 5,
      max_level: 4
    }
  );
}

#[test]
fn test_level_at_ceiling_is_allowed() {
  let node = TreeNode::new(scenario_bundle(), 4, 4).unwrap();
  assert_eq!(node.level(), 4);
  assert_eq!(node.max_level(), 4);
  assert!(node.is_childless());
}

#[test]
fn test_root_uses_config_ceiling() {
  let root = TreeNode::root(scenario_bundle(), TreeConfig::default());
  assert_eq!(root.level(), 0);
  assert_eq!(root.max_level(), 4);

  let shallow = TreeNode::root(scenario_bundle(), TreeConfig::new().with_max_level(1));
  assert_eq!(shallow.max_level(), 1);
}

#[test]
fn test_add_child_and_children() {
  let mut root = TreeNode::root(scenario_bundle(), TreeConfig::default());
  assert!(root.is_childless());

  let child = TreeNode::new(scenario_bundle(), 1, 4).unwrap();
  root.add_child(child);
  assert!(!root.is_childless());
  assert_eq!(root.children().len(), 1);

  let more = vec![
    TreeNode::new(scenario_bundle(), 1, 4).unwrap(),
    TreeNode::new(scenario_bundle(), 1, 4).unwrap(),
  ];
  root.add_children(more);
  assert_eq!(root.children().len(), 3);
}

#[test]
fn test_refine_builds_one_level_of_children() {
  let mut root = TreeNode::root(scenario_bundle(), TreeConfig::default());
  root.refine(2).unwrap();

  // Refined chart has 4x4x4 cells, so (4-1)^3 = 27 interior cells.
  assert_eq!(root.children().len(), 27);
  for child in root.children() {
    assert_eq!(child.level(), 1);
    assert_eq!(child.max_level(), 4);
    assert!(child.is_childless());
    assert_eq!(child.bundle().ncomp(), 8);
    assert_eq!(child.bundle().chart().cells(), UVec3::ONE);
  }

  // One level per call: the root's own bundle is untouched.
  assert_eq!(root.bundle().chart().cells(), UVec3::splat(2));
}

#[test]
fn test_refine_at_ceiling_is_a_noop() {
  let mut root = TreeNode::root(scenario_bundle(), TreeConfig::new().with_max_level(0));
  root.refine(2).unwrap();
  assert!(root.is_childless());
}

#[test]
fn test_refine_rebuilds_a_flat_child_set() {
  let mut root = TreeNode::root(scenario_bundle(), TreeConfig::default());
  root.refine(2).unwrap();
  root.refine(2).unwrap();

  // All existing children were still leaves, so the level is rebuilt to the
  // same flat shape.
  assert_eq!(root.children().len(), 27);
  assert!(root.children().iter().all(TreeNode::is_childless));
}

#[test]
fn test_refine_never_clobbers_a_deepened_subtree() {
  let mut root = TreeNode::root(scenario_bundle(), TreeConfig::default());
  root.refine(2).unwrap();

  // Deepen one child: its 1x1x1-cell bundle refines to 2x2x2 cells, which
  // decomposes into a single interior cell.
  root.children_mut()[0].refine(2).unwrap();
  assert_eq!(root.children()[0].children().len(), 1);
  assert_eq!(root.children()[0].children()[0].level(), 2);

  // Refining the root again must not discard the deepened subtree.
  root.refine(2).unwrap();
  assert_eq!(root.children().len(), 27);
  assert!(!root.children()[0].is_childless());
  assert_eq!(root.children()[0].children().len(), 1);
}

#[test]
fn test_refine_stops_at_ceiling_when_driven_top_down() {
  let mut root = TreeNode::root(scenario_bundle(), TreeConfig::new().with_max_level(2));
  root.refine(2).unwrap();

  // Drive refinement down the tree manually, breadth-first per level.
  for child in root.children_mut() {
    child.refine(2).unwrap();
    for grandchild in child.children_mut() {
      assert_eq!(grandchild.level(), 2);
      grandchild.refine(2).unwrap();
      assert!(grandchild.is_childless()); // at the ceiling
    }
  }
}
