//! Motionfield - procedural animated 3D scenes
//!
//! Library half of the `motionfield` binary, split out so configuration and
//! scene construction can be exercised from integration tests.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
