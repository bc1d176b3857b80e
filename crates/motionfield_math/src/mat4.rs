//! 4x4 Matrix utilities for 3D transformations
//!
//! Matrices are column-major `[[f32; 4]; 4]` arrays, so `m[col][row]`. This is the
//! layout WGSL expects for `mat4x4<f32>` uniforms, so matrices can be written to
//! GPU buffers without transposing.
//!
//! Conventions:
//! - Right-handed world space, +Y up
//! - Euler rotations are applied in XYZ order (`Rx * Ry * Rz`)
//! - Projection maps view-space depth into wgpu's `0..1` clip range

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Non-uniform scale matrix
pub fn scale(s: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = s.x;
    m[1][1] = s.y;
    m[2][2] = s.z;
    m
}

/// Rotation about the X axis (Y rotates toward Z)
pub fn rotation_x(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[1][1] = cs;
    m[1][2] = sn;
    m[2][1] = -sn;
    m[2][2] = cs;
    m
}

/// Rotation about the Y axis (Z rotates toward X)
pub fn rotation_y(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][2] = -sn;
    m[2][0] = sn;
    m[2][2] = cs;
    m
}

/// Rotation about the Z axis (X rotates toward Y)
pub fn rotation_z(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Rotation from Euler angles applied in XYZ order
pub fn from_euler_xyz(angles: Vec3) -> Mat4 {
    mul(mul(rotation_x(angles.x), rotation_y(angles.y)), rotation_z(angles.z))
}

/// Model matrix: translate * rotate (Euler XYZ) * scale
pub fn from_translation_rotation_scale(position: Vec3, rotation: Vec3, s: Vec3) -> Mat4 {
    mul(translation(position), mul(from_euler_xyz(rotation), scale(s)))
}

/// Right-handed perspective projection with a `0..1` depth range
///
/// # Arguments
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Viewport width / height
/// * `near`, `far` - Positive clip distances
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, far * near * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// Transform a point (w = 1), dropping the resulting w
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0), ignoring translation
pub fn transform_vector(m: Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
    )
}

/// Transform a homogeneous vector: result = M * v
pub fn transform4(m: Mat4, v: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * v[0] + m[1][row] * v[1] + m[2][row] * v[2] + m[3][row] * v[3];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation_z(0.5);
        assert_eq!(mul(IDENTITY, a), a);
        assert_eq!(mul(a, IDENTITY), a);
    }

    #[test]
    fn test_axis_rotations() {
        let r = transform_vector(rotation_x(FRAC_PI_2), Vec3::Y);
        assert!(vec_approx_eq(r, Vec3::Z), "Y should become Z, got {:?}", r);

        let r = transform_vector(rotation_y(FRAC_PI_2), Vec3::Z);
        assert!(vec_approx_eq(r, Vec3::X), "Z should become X, got {:?}", r);

        let r = transform_vector(rotation_z(FRAC_PI_2), Vec3::X);
        assert!(vec_approx_eq(r, Vec3::Y), "X should become Y, got {:?}", r);
    }

    #[test]
    fn test_euler_order_applies_z_first() {
        // Z then X: X -> Y -> Z
        let m = from_euler_xyz(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        let r = transform_vector(m, Vec3::X);
        assert!(vec_approx_eq(r, Vec3::Z), "got {:?}", r);
    }

    #[test]
    fn test_model_matrix() {
        let m = from_translation_rotation_scale(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, FRAC_PI_2),
            Vec3::new(2.0, 2.0, 2.0),
        );
        // Scale to (2,0,0), rotate to (0,2,0), translate
        let p = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 4.0, 3.0)), "got {:?}", p);
    }

    #[test]
    fn test_look_at_moves_target_in_front() {
        let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let p = transform_point(view, Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, -5.0)), "got {:?}", p);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(FRAC_PI_2, 1.0, 0.1, 100.0);

        let near = transform4(proj, [0.0, 0.0, -0.1, 1.0]);
        assert!(approx_eq(near[2] / near[3], 0.0));

        let far = transform4(proj, [0.0, 0.0, -100.0, 1.0]);
        assert!(approx_eq(far[2] / far[3], 1.0));
    }

    #[test]
    fn test_perspective_aspect() {
        let proj = perspective(FRAC_PI_2, 2.0, 0.1, 100.0);
        assert!(approx_eq(proj[1][1], 1.0));
        assert!(approx_eq(proj[0][0], 0.5));
    }
}
