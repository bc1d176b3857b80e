//! Randomized entity generation
//!
//! The factory scatters entities uniformly inside a cube centered on the origin
//! and gives each one a random motion kind and seed. The RNG is passed in, so a
//! seeded generator reproduces a scene exactly.

use motionfield_math::Vec3;
use rand::Rng;
use crate::{Entity, MotionKind, SceneError};

/// Generates batches of randomized [`Entity`] values
#[derive(Clone, Debug)]
pub struct SceneObjectFactory {
    bounds: f32,
    kinds: Vec<MotionKind>,
}

impl SceneObjectFactory {
    /// Half-extent of the placement cube used by the default scene
    pub const DEFAULT_BOUNDS: f32 = 8.0;
    /// Entity count used by the default scene
    pub const DEFAULT_COUNT: usize = 100;

    /// Create a factory
    ///
    /// # Arguments
    /// * `bounds` - Half-extent of the placement cube; must be finite and positive
    /// * `kinds` - Motion kinds to draw from; must not be empty
    pub fn new(bounds: f32, kinds: &[MotionKind]) -> Result<Self, SceneError> {
        if !(bounds.is_finite() && bounds > 0.0) {
            return Err(SceneError::InvalidArgument(format!(
                "placement bounds must be positive and finite, got {}",
                bounds
            )));
        }
        if kinds.is_empty() {
            return Err(SceneError::InvalidArgument(
                "at least one motion kind is required".to_string(),
            ));
        }

        Ok(Self {
            bounds,
            kinds: kinds.to_vec(),
        })
    }

    pub fn bounds(&self) -> f32 {
        self.bounds
    }

    pub fn kinds(&self) -> &[MotionKind] {
        &self.kinds
    }

    /// Generate `count` entities
    ///
    /// Each position component is drawn from `[-bounds, bounds)`, the kind
    /// uniformly from the configured set, and the seed from `[0, 1)`.
    pub fn create<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Entity>, SceneError> {
        let mut entities = Vec::with_capacity(count);

        for _ in 0..count {
            let position = Vec3::new(
                self.coordinate(rng),
                self.coordinate(rng),
                self.coordinate(rng),
            );
            let kind = self.kinds[rng.random_range(0..self.kinds.len())];
            let seed: f32 = rng.random();

            log::debug!("entity {}: {} seed={:.3}", entities.len(), kind, seed);
            entities.push(Entity::new(position, kind, seed)?);
        }

        Ok(entities)
    }

    // Range sampling overflows its width for bounds above f32::MAX / 2
    fn coordinate<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        (rng.random::<f32>() * 2.0 - 1.0) * self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_count_is_empty() {
        let factory = SceneObjectFactory::new(8.0, &MotionKind::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(factory.create(0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_exact_count() {
        let factory = SceneObjectFactory::new(8.0, &MotionKind::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for k in [1, 7, 100] {
            assert_eq!(factory.create(k, &mut rng).unwrap().len(), k);
        }
    }

    #[test]
    fn test_positions_within_bounds() {
        let factory = SceneObjectFactory::new(8.0, &MotionKind::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for e in factory.create(100, &mut rng).unwrap() {
            for c in e.position.to_array() {
                assert!((-8.0..=8.0).contains(&c), "component {} out of bounds", c);
            }
        }
    }

    #[test]
    fn test_seed_and_kind_ranges() {
        let factory = SceneObjectFactory::new(8.0, &MotionKind::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let entities = factory.create(500, &mut rng).unwrap();
        for e in &entities {
            assert!((0.0..1.0).contains(&e.seed()));
            assert!(MotionKind::ALL.contains(&e.kind()));
            assert_eq!(e.rotation, Vec3::ZERO);
        }
        // Both kinds turn up in a batch this size
        assert!(entities.iter().any(|e| e.kind() == MotionKind::Rotation));
        assert!(entities.iter().any(|e| e.kind() == MotionKind::Vertical));
    }

    #[test]
    fn test_single_kind_set() {
        let factory = SceneObjectFactory::new(1.0, &[MotionKind::Vertical]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(factory
            .create(50, &mut rng)
            .unwrap()
            .iter()
            .all(|e| e.kind() == MotionKind::Vertical));
    }

    #[test]
    fn test_same_seed_same_scene() {
        let factory = SceneObjectFactory::new(8.0, &MotionKind::ALL).unwrap();
        let a = factory.create(20, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = factory.create(20, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_batches_differ() {
        let factory = SceneObjectFactory::new(8.0, &MotionKind::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let a = factory.create(10, &mut rng).unwrap();
        let b = factory.create(10, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            SceneObjectFactory::new(8.0, &[]),
            Err(SceneError::InvalidArgument(_))
        ));
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                SceneObjectFactory::new(bad, &MotionKind::ALL),
                Err(SceneError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_huge_bounds_stay_finite() {
        let bounds = 3.0e38;
        let factory = SceneObjectFactory::new(bounds, &MotionKind::ALL).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let entities = factory.create(3, &mut rng).unwrap();
        assert_eq!(entities.len(), 3);
        for e in entities {
            for c in e.position.to_array() {
                assert!(c.is_finite());
                assert!((-bounds..=bounds).contains(&c));
            }
        }
    }
}
