//! Orbit camera controller
//!
//! Controls:
//! - Left-click + drag: orbit around the target
//! - Right-click + drag: pan the target
//! - Mouse wheel: zoom toward / away from the target

use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels of trackpad scroll treated as one wheel line
const PIXELS_PER_LINE: f32 = 50.0;

/// Accumulates mouse input between frames and applies it to an orbit camera
pub struct OrbitController {
    // Drag state
    rotating: bool,
    panning: bool,
    pending_dx: f32,
    pending_dy: f32,
    pending_pan_x: f32,
    pending_pan_y: f32,
    pending_scroll: f32,

    // Configuration
    /// Radians of orbit per pixel of drag
    pub rotate_speed: f32,
    /// Fraction of distance removed per wheel line
    pub zoom_speed: f32,
    /// Target displacement per pixel, relative to the camera distance
    pub pan_speed: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            rotating: false,
            panning: false,
            pending_dx: 0.0,
            pending_dy: 0.0,
            pending_pan_x: 0.0,
            pending_pan_y: 0.0,
            pending_scroll: 0.0,

            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pan_speed: 0.002,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.rotating = pressed,
            MouseButton::Right => self.panning = pressed,
            _ => {}
        }
    }

    /// Process raw mouse movement
    ///
    /// Movement only counts while a drag button is held.
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.rotating {
            self.pending_dx += delta_x as f32;
            self.pending_dy += delta_y as f32;
        } else if self.panning {
            self.pending_pan_x += delta_x as f32;
            self.pending_pan_y += delta_y as f32;
        }
    }

    /// Process mouse wheel input
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        self.pending_scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.rotating || self.panning
    }

    /// Apply accumulated input to the camera and clear it
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C) {
        if self.pending_dx != 0.0 || self.pending_dy != 0.0 {
            // Dragging right swings the camera left around the target
            camera.rotate(
                -self.pending_dx * self.rotate_speed,
                self.pending_dy * self.rotate_speed,
            );
        }

        if self.pending_pan_x != 0.0 || self.pending_pan_y != 0.0 {
            camera.pan(
                -self.pending_pan_x * self.pan_speed,
                self.pending_pan_y * self.pan_speed,
            );
        }

        if self.pending_scroll != 0.0 {
            // Scrolling up (positive) moves closer
            let factor = (1.0 - self.zoom_speed).max(0.01).powf(self.pending_scroll);
            camera.zoom(factor);
        }

        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        self.pending_pan_x = 0.0;
        self.pending_pan_y = 0.0;
        self.pending_scroll = 0.0;
    }

    /// Drop any held buttons and pending input
    pub fn reset(&mut self) {
        *self = Self {
            rotate_speed: self.rotate_speed,
            zoom_speed: self.zoom_speed,
            pan_speed: self.pan_speed,
            ..Self::new()
        };
    }

    /// Builder: set orbit speed
    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }

    /// Builder: set zoom speed
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Builder: set pan speed
    pub fn with_pan_speed(mut self, speed: f32) -> Self {
        self.pan_speed = speed;
        self
    }
}

/// Trait for orbit camera control
/// Allows the controller to work with different camera implementations
pub trait OrbitControl {
    /// Orbit around the target by yaw / pitch deltas (radians)
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Multiply the distance to the target by `factor`
    fn zoom(&mut self, factor: f32);
    /// Move the target in the view plane, scaled by distance
    fn pan(&mut self, delta_right: f32, delta_up: f32);
}
