//! Scene construction utilities
//!
//! This module turns configuration into a populated [`motionfield_core::Scene`].

mod scene_builder;

pub use scene_builder::{build_scene, create_scheduler, scene_rng, BuiltScene, SceneBuilder};
