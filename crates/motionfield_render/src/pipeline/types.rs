//! GPU-compatible data types for the mesh pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use motionfield_math::mat4;

/// A world-space vertex
///
/// Line vertices carry a zero normal, which the shader treats as unlit.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in world space
    pub position: [f32; 3],
    /// Surface normal for lighting (zero for unlit)
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex3D {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal, color }
    }

    /// Vertex that skips lighting
    pub fn unlit(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal: [0.0; 3], color }
    }
}

/// Render uniforms for the mesh pass
/// Layout: 176 bytes total (must match mesh.wgsl RenderUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RenderUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Direction toward the light (normalized) + padding (16 bytes)
    pub light_dir: [f32; 3],
    pub _padding: f32,
    /// Directional light (16 bytes)
    pub light_color: [f32; 3],
    pub light_intensity: f32,
    /// Ambient light (16 bytes)
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
}

impl Default for RenderUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            light_dir: [0.577_350_3; 3],
            _padding: 0.0,
            light_color: [1.0; 3],
            light_intensity: 0.2,
            ambient_color: [1.0; 3],
            ambient_intensity: 0.98,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex3d_size() {
        // 3 floats position + 3 floats normal + 4 floats color = 40 bytes
        assert_eq!(size_of::<Vertex3D>(), 40);
    }

    #[test]
    fn test_render_uniforms_size() {
        // 2 matrices (128 bytes) + 3 vec3/f32 pairs (48 bytes)
        assert_eq!(size_of::<RenderUniforms>(), 176);
    }

    #[test]
    fn test_unlit_has_zero_normal() {
        let v = Vertex3D::unlit([1.0, 2.0, 3.0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(v.normal, [0.0; 3]);
    }
}
