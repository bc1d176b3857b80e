//! Primitive shape meshes
//!
//! Conventions follow the usual scene-graph primitives: boxes and cylinders are
//! centered on the origin, cylinders run along Y, planes lie in XY facing +Z.

use std::f32::consts::TAU;
use motionfield_math::Vec3;

/// Local-space vertex with a face normal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// One colored axis of an axes helper, drawn from `start` to `end`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 4],
}

/// Push a quad as two CCW triangles (a, b, c) and (a, c, d)
fn push_quad(out: &mut Vec<MeshVertex>, corners: [Vec3; 4], normal: Vec3) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(MeshVertex::new(p, normal));
    }
}

/// Axis-aligned cube with edge length `size` (36 vertices)
pub fn cuboid(size: f32) -> Vec<MeshVertex> {
    let h = size / 2.0;
    let mut out = Vec::with_capacity(36);

    // Each face: normal, then corners counter-clockwise seen from outside
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (Vec3::X, [Vec3::new(h, -h, h), Vec3::new(h, -h, -h), Vec3::new(h, h, -h), Vec3::new(h, h, h)]),
        (-Vec3::X, [Vec3::new(-h, -h, -h), Vec3::new(-h, -h, h), Vec3::new(-h, h, h), Vec3::new(-h, h, -h)]),
        (Vec3::Y, [Vec3::new(-h, h, h), Vec3::new(h, h, h), Vec3::new(h, h, -h), Vec3::new(-h, h, -h)]),
        (-Vec3::Y, [Vec3::new(-h, -h, -h), Vec3::new(h, -h, -h), Vec3::new(h, -h, h), Vec3::new(-h, -h, h)]),
        (Vec3::Z, [Vec3::new(-h, -h, h), Vec3::new(h, -h, h), Vec3::new(h, h, h), Vec3::new(-h, h, h)]),
        (-Vec3::Z, [Vec3::new(h, -h, -h), Vec3::new(-h, -h, -h), Vec3::new(-h, h, -h), Vec3::new(h, h, -h)]),
    ];

    for (normal, corners) in faces {
        push_quad(&mut out, corners, normal);
    }
    out
}

/// Rectangle in the XY plane facing +Z (6 vertices)
///
/// Rendered double-sided; the shader flips the normal for back faces.
pub fn plane(width: f32, height: f32) -> Vec<MeshVertex> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let mut out = Vec::with_capacity(6);
    push_quad(
        &mut out,
        [
            Vec3::new(-hw, -hh, 0.0),
            Vec3::new(hw, -hh, 0.0),
            Vec3::new(hw, hh, 0.0),
            Vec3::new(-hw, hh, 0.0),
        ],
        Vec3::Z,
    );
    out
}

/// Capped, possibly tapered cylinder along Y
///
/// `segments` below 3 is raised to 3.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Vec<MeshVertex> {
    let segments = segments.max(3);
    let half = height / 2.0;
    let mut out = Vec::with_capacity(segments as usize * 12);

    // Side normals tilt outward by the taper
    let slope = if height > 0.0 { (radius_bottom - radius_top) / height } else { 0.0 };
    let ring = |i: u32| {
        let theta = TAU * i as f32 / segments as f32;
        let (s, c) = theta.sin_cos();
        (s, c)
    };

    for i in 0..segments {
        let (s0, c0) = ring(i);
        let (s1, c1) = ring(i + 1);

        let n0 = Vec3::new(s0, slope, c0).normalized();
        let n1 = Vec3::new(s1, slope, c1).normalized();
        let top0 = Vec3::new(radius_top * s0, half, radius_top * c0);
        let top1 = Vec3::new(radius_top * s1, half, radius_top * c1);
        let bot0 = Vec3::new(radius_bottom * s0, -half, radius_bottom * c0);
        let bot1 = Vec3::new(radius_bottom * s1, -half, radius_bottom * c1);

        // Side, smooth shaded
        for (p, n) in [(bot0, n0), (bot1, n1), (top1, n1), (bot0, n0), (top1, n1), (top0, n0)] {
            out.push(MeshVertex::new(p, n));
        }

        // Caps
        for p in [Vec3::new(0.0, half, 0.0), top0, top1] {
            out.push(MeshVertex::new(p, Vec3::Y));
        }
        for p in [Vec3::new(0.0, -half, 0.0), bot1, bot0] {
            out.push(MeshVertex::new(p, -Vec3::Y));
        }
    }

    out
}

/// X (red), Y (green), and Z (blue) axes from the origin
pub fn axes(length: f32) -> [AxisSegment; 3] {
    [
        AxisSegment { start: Vec3::ZERO, end: Vec3::X * length, color: [1.0, 0.0, 0.0, 1.0] },
        AxisSegment { start: Vec3::ZERO, end: Vec3::Y * length, color: [0.0, 1.0, 0.0, 1.0] },
        AxisSegment { start: Vec3::ZERO, end: Vec3::Z * length, color: [0.0, 0.0, 1.0, 1.0] },
    ]
}
