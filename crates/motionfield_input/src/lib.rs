//! Orbit camera input handling
//!
//! Turns winit mouse events into orbit, zoom, and pan commands for any camera
//! implementing [`OrbitControl`].

mod orbit_controller;

pub use orbit_controller::{OrbitController, OrbitControl};
