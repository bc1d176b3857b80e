//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D places an object in world space. Rotation is stored as Euler
//! angles (radians) applied in XYZ order, which is what the motion policies
//! increment directly.

use motionfield_math::{mat4, Mat4, Vec3};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, Euler rotation, and per-axis scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position in world space
    pub position: Vec3,
    /// Euler angles in radians (XYZ order)
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Model matrix (translate * rotate * scale)
    pub fn to_matrix(&self) -> Mat4 {
        mat4::from_translation_rotation_scale(self.position, self.rotation, self.scale)
    }

    /// Apply this transform to a point
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        mat4::transform_point(self.to_matrix(), point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let t = Transform3D::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(t.transform_point(p), p);
    }

    #[test]
    fn test_position_rotation() {
        let t = Transform3D::from_position_rotation(
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(0.0, 0.0, FRAC_PI_2),
        );
        let p = t.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!((p.x + 1.0).abs() < 0.0001);
        assert!((p.y - 1.5).abs() < 0.0001);
    }
}
