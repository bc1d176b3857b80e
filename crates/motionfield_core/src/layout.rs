//! Fixed procedural layouts
//!
//! The pinwheel is a five-blade flower on a pole. Blades sit on the hub like
//! the sides of a regular pentagon, pushed out from the center so their inner
//! edges just meet, and the hub turns about Z at a fixed rate.

use std::f32::consts::{PI, TAU};
use motionfield_math::Vec3;
use crate::{Prop, Shape, SpinningGroup, Transform3D};

/// Parameters for [`pinwheel`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinwheelParams {
    pub blade_count: u32,
    pub blade_width: f32,
    pub blade_height: f32,
    /// Hub center
    pub hub_position: Vec3,
    /// Radians subtracted from the hub's Z rotation each frame
    pub spin_rate: f32,
}

impl Default for PinwheelParams {
    fn default() -> Self {
        Self {
            blade_count: 5,
            blade_width: 0.5,
            blade_height: 1.2,
            hub_position: Vec3::new(0.0, 1.5, 0.0),
            spin_rate: 0.1,
        }
    }
}

impl PinwheelParams {
    /// Distance from the hub center to each blade center
    ///
    /// The apothem of a regular polygon with side `blade_width` plus half a
    /// blade. For five blades the interior angle is 108°, so this is
    /// `tan(54°) * width / 2 + height / 2`.
    pub fn blade_offset(&self) -> f32 {
        let n = self.blade_count as f32;
        let interior = PI * (n - 2.0) / n;
        (interior / 2.0).tan() * self.blade_width / 2.0 + self.blade_height / 2.0
    }
}

/// Build the spinning blade group
pub fn pinwheel(params: &PinwheelParams) -> SpinningGroup {
    let offset = params.blade_offset();
    let mut group = SpinningGroup::new(
        Transform3D::from_position(params.hub_position),
        Vec3::new(0.0, 0.0, -params.spin_rate),
    );

    for i in 0..params.blade_count {
        let angle = TAU / params.blade_count as f32 * i as f32;
        // Rotate about Z, then push out along the rotated +Y
        let position = Vec3::new(-angle.sin() * offset, angle.cos() * offset, 0.0);
        group = group.with_part(Prop::new(
            Shape::plane(params.blade_width, params.blade_height),
            Transform3D::from_position_rotation(position, Vec3::new(0.0, 0.0, angle)),
        ));
    }

    group
}

/// The static pole the pinwheel is mounted on
pub fn pinwheel_pole() -> Prop {
    Prop::new(
        Shape::cylinder(0.1, 0.2, 3.0, 5),
        Transform3D::from_position(Vec3::new(0.0, 0.0, -0.3)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionfield_math::mat4;

    #[test]
    fn test_blade_offset_for_five_blades() {
        let params = PinwheelParams::default();
        let expected = 54.0f32.to_radians().tan() * 0.5 / 2.0 + 1.2 / 2.0;
        assert!((params.blade_offset() - expected).abs() < 1e-5);
        assert!((params.blade_offset() - 0.944_095).abs() < 1e-4);
    }

    #[test]
    fn test_pinwheel_has_evenly_spaced_blades() {
        let params = PinwheelParams::default();
        let group = pinwheel(&params);
        assert_eq!(group.parts.len(), 5);

        for (i, part) in group.parts.iter().enumerate() {
            let expected_angle = TAU / 5.0 * i as f32;
            assert!((part.transform.rotation.z - expected_angle).abs() < 1e-5);
            let radius = part.transform.position.length();
            assert!((radius - params.blade_offset()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_blade_matches_rotate_then_offset() {
        // A blade equals "offset along local Y inside a group rotated by angle"
        let params = PinwheelParams::default();
        let group = pinwheel(&params);
        let part = &group.parts[2];
        let angle = TAU / 5.0 * 2.0;

        let nested = mat4::mul(
            mat4::rotation_z(angle),
            mat4::translation(Vec3::new(0.0, params.blade_offset(), 0.0)),
        );
        let corner = Vec3::new(0.25, 0.6, 0.0);
        let a = mat4::transform_point(nested, corner);
        let b = part.transform.transform_point(corner);
        assert!((a - b).length() < 1e-5, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn test_hub_spins_clockwise() {
        let mut group = pinwheel(&PinwheelParams::default());
        assert_eq!(group.transform.position, Vec3::new(0.0, 1.5, 0.0));
        group.advance();
        assert!((group.transform.rotation.z + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_pole() {
        let pole = pinwheel_pole();
        assert_eq!(pole.shape, Shape::cylinder(0.1, 0.2, 3.0, 5));
        assert_eq!(pole.transform.position.z, -0.3);
    }
}
