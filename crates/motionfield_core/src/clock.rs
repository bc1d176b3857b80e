//! Animation clock
//!
//! A scalar that advances by a fixed increment once per rendered frame. It has a
//! single running state: no pause, reset, or upper bound. At very large values
//! f32 addition stops changing it; that degradation is accepted.

use crate::SceneError;

/// Monotonic per-frame time accumulator
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClock {
    value: f32,
    increment: f32,
    ticks: u64,
}

impl AnimationClock {
    /// Per-frame increment used by the default scene
    pub const DEFAULT_INCREMENT: f32 = 0.015;

    /// Create a clock at zero
    ///
    /// Fails with [`SceneError::InvalidArgument`] unless `increment` is finite
    /// and strictly positive.
    pub fn new(increment: f32) -> Result<Self, SceneError> {
        if !(increment.is_finite() && increment > 0.0) {
            return Err(SceneError::InvalidArgument(format!(
                "clock increment must be positive and finite, got {}",
                increment
            )));
        }

        Ok(Self {
            value: 0.0,
            increment,
            ticks: 0,
        })
    }

    /// Advance by one increment and return the new value
    pub fn tick(&mut self) -> f32 {
        self.value += self.increment;
        self.ticks += 1;
        self.value
    }

    /// Current value
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Fixed per-tick increment
    #[inline]
    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Number of ticks taken so far
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            value: 0.0,
            increment: Self::DEFAULT_INCREMENT,
            ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = AnimationClock::default();
        assert_eq!(clock.value(), 0.0);
        assert_eq!(clock.ticks(), 0);
        assert_eq!(clock.increment(), 0.015);
    }

    #[test]
    fn test_tick_is_strictly_monotonic() {
        let mut clock = AnimationClock::new(0.015).unwrap();
        let mut previous = clock.value();
        for _ in 0..1000 {
            let next = clock.tick();
            assert!(next > previous);
            previous = next;
        }
        assert_eq!(clock.ticks(), 1000);
    }

    #[test]
    fn test_ten_ticks() {
        let mut clock = AnimationClock::new(0.015).unwrap();
        for _ in 0..10 {
            clock.tick();
        }
        assert!((clock.value() - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_bad_increment() {
        for bad in [0.0, -0.015, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(AnimationClock::new(bad), Err(SceneError::InvalidArgument(_))),
                "increment {}",
                bad
            );
        }
    }
}
