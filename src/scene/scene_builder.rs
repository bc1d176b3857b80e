//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling scenes, plus [`build_scene`] which
//! builds one of the configured layouts.

use motionfield_core::layout::{pinwheel, pinwheel_pole, PinwheelParams};
use motionfield_core::{
    AnimationClock, FrameScheduler, MotionPolicy, Prop, Scene, SceneError, SceneObjectFactory,
    Shape, Transform3D, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{AppConfig, SceneLayout};

/// Builder for constructing scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(Shape::cube(0.7))
///     .add_entities(&factory, 100, &mut rng)?
///     .add_axes(5.0)
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create a new scene builder whose entities use `entity_shape`
    pub fn new(entity_shape: Shape) -> Self {
        Self {
            scene: Scene::new(entity_shape),
        }
    }

    /// Generate `count` randomized entities
    pub fn add_entities<R: Rng + ?Sized>(
        mut self,
        factory: &SceneObjectFactory,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        self.scene.extend_entities(factory.create(count, rng)?);
        Ok(self)
    }

    /// Add an axes helper at the origin
    pub fn add_axes(mut self, length: f32) -> Self {
        self.scene.add_prop(Prop::new(Shape::axes(length), Transform3D::identity()));
        self
    }

    /// Add the spinning pinwheel and its pole
    pub fn add_pinwheel(mut self, params: &PinwheelParams) -> Self {
        self.scene.add_group(pinwheel(params));
        self.scene.add_prop(pinwheel_pole());
        self
    }

    /// Add a custom static prop
    pub fn add_prop(mut self, prop: Prop) -> Self {
        self.scene.add_prop(prop);
        self
    }

    /// Build the scene
    pub fn build(self) -> Scene {
        self.scene
    }
}

/// A scene plus the camera position it is meant to be viewed from
pub struct BuiltScene {
    pub scene: Scene,
    pub camera_position: Vec3,
}

/// Random source for scene generation, fixed when a seed is configured
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Build the configured layout
///
/// `config.camera.position` overrides the layout's default camera position.
pub fn build_scene<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Result<BuiltScene, SceneError> {
    let scene_config = &config.scene;
    let entity_shape = Shape::cube(scene_config.entity_size);

    let (scene, default_camera) = match scene_config.layout {
        SceneLayout::CubeField => {
            let factory = SceneObjectFactory::new(scene_config.bounds, &scene_config.motion_kinds)?;
            let scene = SceneBuilder::new(entity_shape)
                .add_entities(&factory, scene_config.entity_count, rng)?
                .add_axes(scene_config.axes_length.unwrap_or(5.0))
                .build();
            (scene, Vec3::new(0.0, 2.0, 10.0))
        }
        SceneLayout::Pinwheel => {
            let params = PinwheelParams {
                spin_rate: config.animation.spin_rate,
                ..PinwheelParams::default()
            };
            let scene = SceneBuilder::new(entity_shape)
                .add_pinwheel(&params)
                .add_axes(scene_config.axes_length.unwrap_or(1.0))
                .build();
            (scene, Vec3::new(0.0, 0.0, 10.0))
        }
    };

    log::info!("Built {:?} scene with {} entities", scene_config.layout, scene.entity_count());
    let mut counts: Vec<_> = scene.kind_counts().into_iter().collect();
    counts.sort_by_key(|(kind, _)| kind.name());
    for (kind, count) in counts {
        log::info!("  {}: {}", kind, count);
    }

    Ok(BuiltScene {
        scene,
        camera_position: config.camera.position.map(Vec3::from).unwrap_or(default_camera),
    })
}

/// Wrap a scene in a scheduler driven by the animation settings
pub fn create_scheduler(config: &AppConfig, scene: Scene) -> Result<FrameScheduler, SceneError> {
    let animation = &config.animation;
    Ok(FrameScheduler::new(
        scene,
        AnimationClock::new(animation.clock_increment)?,
        MotionPolicy::new(animation.rotation_gain, animation.vertical_gain),
    ))
}
