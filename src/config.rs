//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`MF_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use motionfield_core::MotionKind;
use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Mouse orbit configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Scene layout and generation
    #[serde(default)]
    pub scene: SceneConfig,
    /// Motion law parameters
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`MF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // MF_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("MF_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the scene or the motion laws meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scene = &self.scene;
        if !(scene.bounds.is_finite() && scene.bounds > 0.0) {
            return Err(ConfigError::Invalid(format!("scene.bounds must be positive, got {}", scene.bounds)));
        }
        if !(scene.entity_size.is_finite() && scene.entity_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "scene.entity_size must be positive, got {}",
                scene.entity_size
            )));
        }
        if scene.layout == SceneLayout::CubeField && scene.motion_kinds.is_empty() {
            return Err(ConfigError::Invalid("scene.motion_kinds must not be empty".to_string()));
        }

        let increment = self.animation.clock_increment;
        if !(increment.is_finite() && increment > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "animation.clock_increment must be positive, got {}",
                increment
            )));
        }

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(ConfigError::Invalid(format!(
                "camera clip range {}..{} is invalid",
                camera.near, camera.far
            )));
        }
        if !(camera.fov > 0.0 && camera.fov < 180.0) {
            return Err(ConfigError::Invalid(format!("camera.fov must be in (0, 180), got {}", camera.fov)));
        }

        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Motionfield".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]; each layout has its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    /// Orbit target [x, y, z]
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: None,
            target: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Mouse orbit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Radians of orbit per pixel of drag
    pub rotate_speed: f32,
    /// Fraction of distance removed per wheel line
    pub zoom_speed: f32,
    /// Pan distance per pixel, relative to camera distance
    pub pan_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pan_speed: 0.002,
        }
    }
}

/// Which procedural scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneLayout {
    /// Randomized animated cubes
    #[default]
    CubeField,
    /// Spinning five-blade pinwheel on a pole
    Pinwheel,
}

/// Scene generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub layout: SceneLayout,
    /// Number of animated entities (cube field only)
    pub entity_count: usize,
    /// Half-extent of the placement cube
    pub bounds: f32,
    /// Cube edge length
    pub entity_size: f32,
    /// Motion kinds drawn from when creating entities
    pub motion_kinds: Vec<MotionKind>,
    /// Fixed RNG seed; a fresh scene every run when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
    /// Axes helper length; each layout has its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes_length: Option<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: SceneLayout::CubeField,
            entity_count: 100,
            bounds: 8.0,
            entity_size: 0.7,
            motion_kinds: MotionKind::ALL.to_vec(),
            rng_seed: None,
            axes_length: None,
        }
    }
}

/// Motion law parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Added to the animation clock every frame
    pub clock_increment: f32,
    /// Yaw change per frame at the extreme seeds
    pub rotation_gain: f32,
    /// Vertical oscillation amplitude factor
    pub vertical_gain: f32,
    /// Pinwheel hub spin per frame (radians)
    pub spin_rate: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            clock_increment: 0.015,
            rotation_gain: 0.1,
            vertical_gain: 0.1,
            spin_rate: 0.1,
        }
    }
}

/// Rendering configuration
///
/// Colors are `0xRRGGBB` integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    pub background_color: u32,
    /// Surface color of every solid
    pub material_color: u32,
    /// Direction toward the directional light [x, y, z]
    pub light_dir: [f32; 3],
    pub light_color: u32,
    pub light_intensity: f32,
    pub ambient_color: u32,
    pub ambient_intensity: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: 0xd8eaea,
            material_color: 0xffffff,
            light_dir: [1.0, 1.0, 1.0],
            light_color: 0xf5fcfc,
            light_intensity: 0.2,
            ambient_color: 0xf5fcfc,
            ambient_intensity: 0.98,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.scene.entity_count, 100);
        assert_eq!(config.scene.layout, SceneLayout::CubeField);
        assert_eq!(config.animation.clock_increment, 0.015);
        assert_eq!(config.rendering.background_color, 0xd8eaea);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("clock_increment"));
        assert!(toml.contains("motion_kinds = [\"rotation\", \"vertical\"]"));
        // Absent optionals are left out
        assert!(!toml.contains("rng_seed"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scene]
            layout = "pinwheel"
            entity_count = 0
            bounds = 8.0
            entity_size = 0.7
            motion_kinds = []
            "#,
        )
        .unwrap();
        assert_eq!(config.scene.layout, SceneLayout::Pinwheel);
        assert_eq!(config.window.height, 720);
        // An empty kind set is fine when no entities are generated
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hex_colors_parse() {
        let config: AppConfig = toml::from_str(
            r#"
            [rendering]
            background_color = 0x112233
            material_color = 0xffffff
            light_dir = [0.0, 1.0, 0.0]
            light_color = 0xffffff
            light_intensity = 0.5
            ambient_color = 0x000000
            ambient_intensity = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(config.rendering.background_color, 0x112233);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.scene.bounds = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.animation.clock_increment = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.scene.motion_kinds.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.camera.far = 0.05;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_count_fails_to_parse() {
        let result: Result<SceneConfig, _> = toml::from_str(
            r#"
            layout = "cube_field"
            entity_count = -5
            bounds = 8.0
            entity_size = 0.7
            motion_kinds = ["rotation"]
            "#,
        );
        assert!(result.is_err());
    }
}
