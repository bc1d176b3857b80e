//! Parametric shapes
//!
//! A Shape stores the construction parameters of a mesh. The renderer turns
//! each variant into triangles (or lines, for axes) in local space; the owning
//! transform places it in the world.

use serde::{Serialize, Deserialize};

/// Parametric mesh description, always centered on the local origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned cube
    Cube {
        /// Edge length
        size: f32,
    },
    /// Double-sided rectangle in the local XY plane
    Plane {
        width: f32,
        height: f32,
    },
    /// Capped cylinder along local Y (a cone frustum when the radii differ)
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        /// Number of faces around the circumference
        segments: u32,
    },
    /// Three colored line segments along +X, +Y, +Z
    Axes {
        length: f32,
    },
}

impl Shape {
    /// Create a cube shape
    pub fn cube(size: f32) -> Self {
        Shape::Cube { size }
    }

    /// Create a plane shape
    pub fn plane(width: f32, height: f32) -> Self {
        Shape::Plane { width, height }
    }

    /// Create a cylinder shape
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Self {
        Shape::Cylinder { radius_top, radius_bottom, height, segments }
    }

    /// Create an axes marker
    pub fn axes(length: f32) -> Self {
        Shape::Axes { length }
    }

    /// True for shapes drawn as lines rather than lit triangles
    pub fn is_wireframe(&self) -> bool {
        matches!(self, Shape::Axes { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wireframe_flag() {
        assert!(Shape::axes(5.0).is_wireframe());
        assert!(!Shape::cube(0.7).is_wireframe());
        assert!(!Shape::cylinder(0.1, 0.2, 3.0, 5).is_wireframe());
    }
}
