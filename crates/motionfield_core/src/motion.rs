//! Per-entity motion laws
//!
//! The policy maps `(entity, clock)` to a transform delta. It never reads the
//! clock itself; the caller passes the current value so the laws can be tested
//! in isolation.

use motionfield_math::Vec3;
use crate::{Entity, MotionKind};

/// Change applied to an entity's transform in one step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformDelta {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Motion laws for every [`MotionKind`]
///
/// - `Rotation`: `rotation.y += (seed * 2 - 1) * rotation_gain`
/// - `Vertical`: `position.y += sin(seed * clock) * (seed * 2 - 1) * vertical_gain`
///
/// The vertical law multiplies the seed by the unbounded clock, so both the
/// phase rate and the accumulated drift grow over a session. Keep it that way;
/// it is the motion the scene was tuned for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPolicy {
    rotation_gain: f32,
    vertical_gain: f32,
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROTATION_GAIN, Self::DEFAULT_VERTICAL_GAIN)
    }
}

impl MotionPolicy {
    /// Radians per frame at the extreme seeds
    pub const DEFAULT_ROTATION_GAIN: f32 = 0.1;
    /// Vertical amplitude factor at the extreme seeds
    pub const DEFAULT_VERTICAL_GAIN: f32 = 0.1;

    pub fn new(rotation_gain: f32, vertical_gain: f32) -> Self {
        Self { rotation_gain, vertical_gain }
    }

    pub fn rotation_gain(&self) -> f32 {
        self.rotation_gain
    }

    pub fn vertical_gain(&self) -> f32 {
        self.vertical_gain
    }

    /// Compute the delta for `entity` at `clock` without applying it
    pub fn delta(&self, entity: &Entity, clock: f32) -> TransformDelta {
        // Maps [0, 1) to [-1, 1) so both directions occur
        let signed = entity.seed() * 2.0 - 1.0;

        match entity.kind() {
            MotionKind::Rotation => TransformDelta {
                position: Vec3::ZERO,
                rotation: Vec3::new(0.0, signed * self.rotation_gain, 0.0),
            },
            MotionKind::Vertical => {
                let phase = entity.seed() * clock;
                TransformDelta {
                    position: Vec3::new(0.0, phase.sin() * signed * self.vertical_gain, 0.0),
                    rotation: Vec3::ZERO,
                }
            }
        }
    }

    /// Compute the delta and add it to the entity's transform
    pub fn apply(&self, entity: &mut Entity, clock: f32) -> TransformDelta {
        let delta = self.delta(entity, clock);
        entity.position += delta.position;
        entity.rotation += delta.rotation;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn entity(kind: MotionKind, seed: f32) -> Entity {
        Entity::new(Vec3::new(1.0, 2.0, 3.0), kind, seed).unwrap()
    }

    #[test]
    fn test_rotation_half_seed_is_still() {
        let policy = MotionPolicy::new(0.1, 0.1);
        let mut e = entity(MotionKind::Rotation, 0.5);
        policy.apply(&mut e, 0.0);
        assert!(e.rotation.y.abs() < EPSILON);
    }

    #[test]
    fn test_rotation_direction_follows_seed() {
        let policy = MotionPolicy::default();

        let mut slow_left = entity(MotionKind::Rotation, 0.0);
        policy.apply(&mut slow_left, 0.0);
        assert!((slow_left.rotation.y + 0.1).abs() < EPSILON);

        let mut right = entity(MotionKind::Rotation, 0.75);
        policy.apply(&mut right, 0.0);
        assert!((right.rotation.y - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_ignores_clock_and_position() {
        let policy = MotionPolicy::default();
        let e = entity(MotionKind::Rotation, 0.3);
        assert_eq!(policy.delta(&e, 0.0), policy.delta(&e, 123.0));
        assert_eq!(policy.delta(&e, 5.0).position, Vec3::ZERO);
    }

    #[test]
    fn test_rotation_accumulates_linearly() {
        let policy = MotionPolicy::new(0.1, 0.1);
        let seed = 0.9;
        let mut e = entity(MotionKind::Rotation, seed);
        let n = 100;
        for frame in 1..=n {
            policy.apply(&mut e, frame as f32 * 0.015);
        }
        let expected = n as f32 * (seed * 2.0 - 1.0) * 0.1;
        assert!((e.rotation.y - expected).abs() < 1e-4, "{} vs {}", e.rotation.y, expected);
        assert_eq!(e.rotation.x, 0.0);
        assert_eq!(e.rotation.z, 0.0);
    }

    #[test]
    fn test_vertical_matches_law() {
        let policy = MotionPolicy::default();
        let seed = 0.8;
        let clock = 2.5;
        let mut e = entity(MotionKind::Vertical, seed);
        let delta = policy.apply(&mut e, clock);

        let expected = (seed * clock).sin() * (seed * 0.2 - 0.1);
        assert!((delta.position.y - expected).abs() < EPSILON);
        assert!((e.position.y - (2.0 + expected)).abs() < EPSILON);
        assert_eq!(e.position.x, 1.0);
        assert_eq!(e.position.z, 3.0);
        assert_eq!(e.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_vertical_is_deterministic() {
        let policy = MotionPolicy::default();
        let e = entity(MotionKind::Vertical, 0.37);
        let first = policy.delta(&e, 7.25);
        for _ in 0..10 {
            assert_eq!(policy.delta(&e, 7.25), first);
        }

        let mut a = e.clone();
        let mut b = e.clone();
        assert_eq!(policy.apply(&mut a, 7.25), policy.apply(&mut b, 7.25));
        assert_eq!(a, b);
    }

    #[test]
    fn test_vertical_at_clock_zero_is_still() {
        let policy = MotionPolicy::default();
        let e = entity(MotionKind::Vertical, 0.9);
        assert_eq!(policy.delta(&e, 0.0).position.y, 0.0);
    }

    #[test]
    fn test_vertical_rate_grows_with_clock() {
        // Same seed, later clock: the phase advances faster per unit clock
        let policy = MotionPolicy::default();
        let e = entity(MotionKind::Vertical, 0.95);
        let early = policy.delta(&e, 1.0).position.y;
        let late = policy.delta(&e, 1000.0).position.y;
        assert_ne!(early, late);
    }

    #[test]
    fn test_apply_preserves_kind_and_seed() {
        let policy = MotionPolicy::default();
        let mut e = entity(MotionKind::Vertical, 0.42);
        for frame in 0..50 {
            policy.apply(&mut e, frame as f32);
        }
        assert_eq!(e.kind(), MotionKind::Vertical);
        assert_eq!(e.seed(), 0.42);
    }
}
