//! Grouping engine: transitive overlap components and their colors.
//!
//! - `DisjointSets`: union by rank, path-compressing find.
//! - `find_components`: brute-force all-pairs overlap tests feeding the sets.
//! - `assign_group_colors`: palette color per component of size >= 2.

mod components;
mod union_find;

pub use components::{assign_group_colors, find_components, group_shapes, OverlapGroup};
pub use union_find::DisjointSets;
