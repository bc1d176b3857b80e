//! Core types for the motionfield scene
//!
//! This crate owns the animated part of the system:
//!
//! - [`Transform3D`] - Position, Euler rotation, and scale
//! - [`Shape`] - Parametric description of a mesh (cube, plane, cylinder, axes)
//! - [`Entity`] / [`MotionKind`] - An animated object and its behavior tag
//! - [`MotionPolicy`] - Per-frame transform update for each motion kind
//! - [`AnimationClock`] - Monotonic per-frame time accumulator
//! - [`SceneObjectFactory`] - Randomized entity generation
//! - [`Scene`] - Entities plus static props and spinning groups
//! - [`FrameScheduler`] - Drives one frame across the camera, motion, and render collaborators

mod transform;
mod shapes;
mod entity;
mod motion;
mod clock;
mod factory;
mod scene;
mod error;
pub mod layout;
pub mod scheduler;

pub use transform::Transform3D;
pub use shapes::Shape;
pub use entity::{Entity, MotionKind};
pub use motion::{MotionPolicy, TransformDelta};
pub use clock::AnimationClock;
pub use factory::SceneObjectFactory;
pub use scene::{Prop, Scene, SpinningGroup};
pub use error::SceneError;
pub use scheduler::{CameraRig, FrameRenderer, FrameRequester, FrameScheduler};

// Re-export commonly used types from motionfield_math for convenience
pub use motionfield_math::{Mat4, Vec3};
