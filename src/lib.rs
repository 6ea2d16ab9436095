//! fibretree - hierarchical charts, fibre bundles, and refinement trees
//!
//! This crate builds adaptively refinable 3D grids for AMR-style simulation
//! setups: a coarse box domain is covered by a uniform coordinate lattice,
//! multi-component field data is attached to its points, and refinement
//! resamples that data onto finer lattices which decompose into a tree of
//! per-cell sub-blocks.
//!
//! # Components
//!
//! - **[`Chart`]**: uniform coordinate lattice over a box domain, mapping
//!   `(i, j, k)` indices to physical coordinates
//! - **[`Bundle`]**: a chart plus a fixed-width field vector (the "fibre")
//!   at every lattice point, with trilinear refinement and per-cell
//!   decomposition
//! - **[`TreeNode`]**: one level of a refinement hierarchy wrapping a
//!   bundle; `refine` builds exactly one level of children per call
//!
//! # Example
//!
//! ```
//! use fibretree::{Bundle, Chart, TreeConfig, TreeNode};
//! use glam::{DVec3, UVec3};
//!
//! // 2x2x2 cells over the unit cube, 8 field components per point.
//! let chart = Chart::new(DVec3::ZERO, DVec3::ONE, UVec3::new(2, 2, 2));
//! let bundle = Bundle::zeroed(chart, 8);
//!
//! let mut root = TreeNode::root(bundle, TreeConfig::default());
//! root.refine(2).unwrap();
//!
//! // One child per interior cell of the refined (4x4x4-cell) chart.
//! assert_eq!(root.children().len(), 27);
//! assert!(root.children().iter().all(|child| child.level() == 1));
//! ```

pub mod bounds;
pub mod chart;
pub mod error;
pub mod interp;
pub mod lattice;

// Re-export commonly used items
pub use bounds::Domain;
pub use chart::{Chart, RefineFactor};
pub use error::GridError;
pub use interp::RegularGridInterp;
pub use lattice::Lattice;

// Fibre bundles over charts
pub mod bundle;
pub use bundle::Bundle;

// Refinement hierarchy
pub mod tree;
pub use tree::{TreeConfig, TreeNode, DEFAULT_MAX_LEVEL};
