//! Render pipeline components

pub mod types;
pub mod mesh_pipeline;

pub use types::{RenderUniforms, Vertex3D};
pub use mesh_pipeline::MeshPipeline;
