//! wgpu rendering for motionfield scenes
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - Perspective camera orbiting a target point
//! - [`geometry`] - Mesh generators for the scene's primitive shapes
//! - [`pipeline::MeshPipeline`] - Lit triangle pass plus unlit line pass
//! - [`renderable::SceneGeometry`] - Converts a Scene to world-space vertices

pub mod context;
pub mod camera;
pub mod geometry;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use motionfield_core::{Scene, Shape, Transform3D};

pub use camera::OrbitCamera;
pub use renderable::{hex_to_rgba, SceneGeometry};
