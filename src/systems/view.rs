//! Camera rig
//!
//! Pairs the orbit camera with the mouse controller that drives it.

use motionfield_core::{CameraRig, Vec3};
use motionfield_input::OrbitController;
use motionfield_render::OrbitCamera;

use crate::config::{CameraConfig, InputConfig};

/// Orbit camera plus its input controller
pub struct ViewRig {
    pub camera: OrbitCamera,
    pub controller: OrbitController,
}

impl ViewRig {
    /// Build a rig looking from `position` at the configured target
    pub fn new(position: Vec3, camera_config: &CameraConfig, input_config: &InputConfig) -> Self {
        let camera = OrbitCamera::from_position_target(position, Vec3::from(camera_config.target))
            .with_projection(camera_config.fov, camera_config.near, camera_config.far);

        let controller = OrbitController::new()
            .with_rotate_speed(input_config.rotate_speed)
            .with_zoom_speed(input_config.zoom_speed)
            .with_pan_speed(input_config.pan_speed);

        Self { camera, controller }
    }

    /// Return the camera to its starting pose and drop pending input
    pub fn reset(&mut self) {
        self.camera.reset();
        self.controller.reset();
        log::info!("Camera reset to starting position");
    }
}

impl CameraRig for ViewRig {
    fn update(&mut self) {
        self.controller.update(&mut self.camera);
    }

    fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }
}
