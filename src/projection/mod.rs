//! Read-side projections over the active ontology.
//!
//! Every projection is a pure function of an ontology snapshot: the
//! force-directed node/edge graph, the rooted class hierarchy, and the
//! per-entity detail record, plus the identifier sanitizer shared by their
//! structural keys.

pub mod detail;
pub mod graph;
pub mod sanitize;
pub mod tree;

pub use detail::{readable, readable_restriction, resolve, DetailError, DetailRecord};
pub use graph::{project, EdgeKind, NetworkEdge, NetworkGraph, NetworkNode, NodeGroup};
pub use sanitize::sanitize;
pub use tree::{class_tree, render_html, top_level_classes, HierarchyError, TreeNode};
