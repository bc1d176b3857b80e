//! Orbit camera
//!
//! The camera sits on a sphere around a target point, described by distance,
//! yaw (about +Y, zero looking down -Z), and pitch. Input arrives through
//! [`OrbitControl`]; [`OrbitCamera::reset`] returns to the pose the camera was
//! created with.

use motionfield_input::OrbitControl;
use motionfield_math::{mat4, Mat4, Vec3};

/// Pitch stays just short of straight up/down so `look_at` keeps a valid basis
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
}

/// Perspective camera orbiting a target
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pose: Pose,
    initial: Pose,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    /// Place the camera at `position`, looking at `target`
    pub fn from_position_target(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length();

        let pose = if distance < 1e-6 {
            Pose { target, distance: MIN_DISTANCE, yaw: 0.0, pitch: 0.0 }
        } else {
            Pose {
                target,
                distance,
                yaw: offset.x.atan2(offset.z),
                pitch: (offset.y / distance).clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT),
            }
        };

        Self {
            pose,
            initial: pose,
            fov_y_degrees: 60.0,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Builder: set projection parameters
    pub fn with_projection(mut self, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self.near = near;
        self.far = far;
        self
    }

    /// World-space eye position
    pub fn eye(&self) -> Vec3 {
        let Pose { target, distance, yaw, pitch } = self.pose;
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        target + Vec3::new(cp * sy, sp, cp * cy) * distance
    }

    pub fn target(&self) -> Vec3 {
        self.pose.target
    }

    pub fn distance(&self) -> f32 {
        self.pose.distance
    }

    pub fn yaw(&self) -> f32 {
        self.pose.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pose.pitch
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.eye(), self.pose.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Return to the initial pose (projection is left alone)
    pub fn reset(&mut self) {
        self.pose = self.initial;
    }

    /// Camera right and up vectors in world space
    fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.pose.target - self.eye()).normalized();
        let right = forward.cross(Vec3::Y).normalized();
        let up = right.cross(forward);
        (right, up)
    }
}

impl OrbitControl for OrbitCamera {
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.pose.yaw += delta_yaw;
        self.pose.pitch = (self.pose.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.pose.distance = (self.pose.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }

    fn pan(&mut self, delta_right: f32, delta_up: f32) {
        let (right, up) = self.basis();
        self.pose.target += (right * delta_right + up * delta_up) * self.pose.distance;
    }
}
