//! Animated entities
//!
//! An Entity is one animated object in the scene. Its transform changes every
//! frame; its motion kind and seed are fixed at construction and can only be
//! read afterwards.

use motionfield_math::Vec3;
use serde::{Serialize, Deserialize};
use crate::{SceneError, Transform3D};

/// Motion behavior tag, assigned once per entity
///
/// The set is closed: a new behavior is a new variant here plus a new arm in
/// [`MotionPolicy`](crate::MotionPolicy), and the compiler flags every match
/// that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// Constant spin about Y, direction and speed taken from the seed
    Rotation,
    /// Vertical drift driven by `sin(seed * clock)`
    Vertical,
}

impl MotionKind {
    /// Every motion kind, in declaration order
    pub const ALL: [MotionKind; 2] = [MotionKind::Rotation, MotionKind::Vertical];

    /// Lowercase name, matching the config spelling
    pub fn name(&self) -> &'static str {
        match self {
            MotionKind::Rotation => "rotation",
            MotionKind::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for MotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An animated object in the scene
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// World-space position
    pub position: Vec3,
    /// Euler angles in radians (XYZ order)
    pub rotation: Vec3,
    kind: MotionKind,
    seed: f32,
}

impl Entity {
    /// Create an entity at rest (zero rotation)
    ///
    /// Fails with [`SceneError::InvariantViolation`] if `seed` is not a finite
    /// value in `[0, 1)`.
    pub fn new(position: Vec3, kind: MotionKind, seed: f32) -> Result<Self, SceneError> {
        if !(seed.is_finite() && (0.0..1.0).contains(&seed)) {
            return Err(SceneError::InvariantViolation(format!(
                "entity seed {} outside [0, 1)",
                seed
            )));
        }

        Ok(Self {
            position,
            rotation: Vec3::ZERO,
            kind,
            seed,
        })
    }

    /// Builder: set the initial rotation
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// The entity's motion behavior
    #[inline]
    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    /// The entity's per-instance random scalar in `[0, 1)`
    #[inline]
    pub fn seed(&self) -> f32 {
        self.seed
    }

    /// Current transform (unit scale)
    pub fn transform(&self) -> Transform3D {
        Transform3D::from_position_rotation(self.position, self.rotation)
    }
}
