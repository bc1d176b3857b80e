//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Mesh pipeline and per-frame geometry
//! - Frame rendering and surface error recovery

use std::sync::Arc;
use motionfield_core::{FrameRenderer, Scene, Vec3};
use motionfield_render::{
    context::{ContextError, RenderContext},
    hex_to_rgba,
    pipeline::{MeshPipeline, RenderUniforms},
    OrbitCamera, SceneGeometry,
};
use thiserror::Error;
use winit::window::Window;

use crate::config::RenderingConfig;
use super::ViewRig;

/// Render error types
///
/// Recoverable surface conditions (lost, outdated, timeout) never surface
/// here; the frame is skipped instead.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("GPU initialization failed: {0}")]
    Context(#[from] ContextError),
    /// GPU out of memory
    #[error("Out of memory")]
    OutOfMemory,
    /// Other surface error
    #[error("Render error: {0}")]
    Other(String),
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: MeshPipeline,
    geometry: SceneGeometry,
    config: RenderingConfig,
    material_color: [f32; 4],
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, config: RenderingConfig, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;

        let mut pipeline = MeshPipeline::new(&context.device, context.format());
        pipeline.ensure_depth_texture(&context.device, context.config.width, context.config.height);

        let bg = hex_to_rgba(config.background_color);
        Ok(Self {
            context,
            pipeline,
            geometry: SceneGeometry::new(),
            material_color: hex_to_rgba(config.material_color),
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
            config,
        })
    }

    /// Handle window resize
    ///
    /// A zero-sized (minimized) window keeps the previous surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(&self.context.device, width, height);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, scene: &Scene, camera: &OrbitCamera) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.context.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(e.to_string())),
        };

        self.pipeline
            .update_uniforms(&self.context.queue, &frame_uniforms(camera, &self.config));

        self.geometry.rebuild(scene, self.material_color);
        self.pipeline.upload(&self.context.device, &self.context.queue, &self.geometry);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

impl FrameRenderer<ViewRig> for RenderSystem {
    type Error = RenderError;

    fn render(&mut self, scene: &Scene, rig: &ViewRig) -> Result<(), RenderError> {
        self.render_frame(scene, &rig.camera)
    }

    fn resize(&mut self, width: u32, height: u32) {
        RenderSystem::resize(self, width, height);
    }
}

/// Camera matrices and lighting for one frame
fn frame_uniforms(camera: &OrbitCamera, config: &RenderingConfig) -> RenderUniforms {
    let light = hex_to_rgba(config.light_color);
    let ambient = hex_to_rgba(config.ambient_color);

    RenderUniforms {
        view_matrix: camera.view_matrix(),
        projection_matrix: camera.projection_matrix(),
        light_dir: Vec3::from(config.light_dir).normalized().to_array(),
        _padding: 0.0,
        light_color: [light[0], light[1], light[2]],
        light_intensity: config.light_intensity,
        ambient_color: [ambient[0], ambient[1], ambient[2]],
        ambient_intensity: config.ambient_intensity,
    }
}
