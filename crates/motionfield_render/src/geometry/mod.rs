//! Mesh generators
//!
//! All meshes are unindexed triangle lists in the shape's local space.

pub mod primitives;

pub use primitives::{axes, cuboid, cylinder, plane, AxisSegment, MeshVertex};
