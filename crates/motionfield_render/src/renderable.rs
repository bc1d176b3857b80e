//! Renderable geometry - bridges Scene to GPU buffers
//!
//! Every frame the scene is flattened into world-space vertices: shaded
//! triangles for solid shapes and unlit line segments for axes helpers.

use motionfield_core::{Scene, Shape};
use motionfield_math::{mat4, Mat4};
use crate::geometry::{self, MeshVertex};
use crate::pipeline::Vertex3D;

/// Convert a `0xRRGGBB` color to opaque RGBA
pub fn hex_to_rgba(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// World-space vertices for one frame
#[derive(Clone, Debug, Default)]
pub struct SceneGeometry {
    pub triangles: Vec<Vertex3D>,
    pub lines: Vec<Vertex3D>,
}

impl SceneGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect everything in `scene`, shading solids with `material_color`
    pub fn build(scene: &Scene, material_color: [f32; 4]) -> Self {
        let mut result = Self::new();
        result.rebuild(scene, material_color);
        result
    }

    /// Refill from `scene`, reusing allocations
    pub fn rebuild(&mut self, scene: &Scene, material_color: [f32; 4]) {
        self.clear();

        // Entities share a shape, so generate its mesh once
        let entity_mesh = local_mesh(scene.entity_shape());
        for entity in scene.entities() {
            self.add_shape_mesh(scene.entity_shape(), &entity_mesh, entity.transform().to_matrix(), material_color);
        }

        for prop in scene.props() {
            self.add_shape(prop.shape, prop.transform.to_matrix(), material_color);
        }

        for group in scene.groups() {
            for part in &group.parts {
                self.add_shape(part.shape, group.part_matrix(part), material_color);
            }
        }
    }

    /// Add one shape under a model matrix
    pub fn add_shape(&mut self, shape: Shape, model: Mat4, color: [f32; 4]) {
        let mesh = local_mesh(shape);
        self.add_shape_mesh(shape, &mesh, model, color);
    }

    fn add_shape_mesh(&mut self, shape: Shape, mesh: &[MeshVertex], model: Mat4, color: [f32; 4]) {
        if let Shape::Axes { length } = shape {
            for axis in geometry::axes(length) {
                for p in [axis.start, axis.end] {
                    let world = mat4::transform_point(model, p);
                    self.lines.push(Vertex3D::unlit(world.to_array(), axis.color));
                }
            }
            return;
        }

        for v in mesh {
            let position = mat4::transform_point(model, v.position);
            let normal = mat4::transform_vector(model, v.normal).normalized();
            self.triangles.push(Vertex3D::new(position.to_array(), normal.to_array(), color));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    pub fn triangle_vertex_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn line_vertex_count(&self) -> usize {
        self.lines.len()
    }
}

/// Local-space triangles for a solid shape (empty for axes)
fn local_mesh(shape: Shape) -> Vec<MeshVertex> {
    match shape {
        Shape::Cube { size } => geometry::cuboid(size),
        Shape::Plane { width, height } => geometry::plane(width, height),
        Shape::Cylinder { radius_top, radius_bottom, height, segments } => {
            geometry::cylinder(radius_top, radius_bottom, height, segments)
        }
        Shape::Axes { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionfield_core::layout::{pinwheel, pinwheel_pole, PinwheelParams};
    use motionfield_core::{Entity, MotionKind, Prop, Transform3D, Vec3};

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba(0xffffff), [1.0; 4]);
        let bg = hex_to_rgba(0xd8eaea);
        assert!((bg[0] - 216.0 / 255.0).abs() < 1e-6);
        assert!((bg[1] - 234.0 / 255.0).abs() < 1e-6);
        assert!((bg[2] - 234.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_scene() {
        let geometry = SceneGeometry::build(&Scene::new(Shape::cube(0.7)), WHITE);
        assert_eq!(geometry.triangle_vertex_count(), 0);
        assert_eq!(geometry.line_vertex_count(), 0);
    }

    #[test]
    fn test_entities_are_placed_in_world_space() {
        let mut scene = Scene::new(Shape::cube(1.0));
        scene.extend_entities([
            Entity::new(Vec3::new(5.0, 0.0, 0.0), MotionKind::Rotation, 0.3).unwrap(),
            Entity::new(Vec3::new(-5.0, 0.0, 0.0), MotionKind::Vertical, 0.6).unwrap(),
        ]);
        let geometry = SceneGeometry::build(&scene, WHITE);
        assert_eq!(geometry.triangle_vertex_count(), 72);

        let first = &geometry.triangles[..36];
        assert!(first.iter().all(|v| (4.5..=5.5).contains(&v.position[0])));
        let second = &geometry.triangles[36..];
        assert!(second.iter().all(|v| (-5.5..=-4.5).contains(&v.position[0])));
    }

    #[test]
    fn test_rotation_turns_normals() {
        let mut scene = Scene::new(Shape::plane(1.0, 1.0));
        let entity = Entity::new(Vec3::ZERO, MotionKind::Rotation, 0.5)
            .unwrap()
            .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        scene.extend_entities([entity]);
        let geometry = SceneGeometry::build(&scene, WHITE);
        // +Z turned a quarter about Y points along +X
        let n = geometry.triangles[0].normal;
        assert!((n[0] - 1.0).abs() < 1e-5);
        assert!(n[2].abs() < 1e-5);
    }

    #[test]
    fn test_axes_become_colored_lines() {
        let mut scene = Scene::new(Shape::cube(0.7));
        scene.add_prop(Prop::new(Shape::axes(5.0), Transform3D::identity()));
        let geometry = SceneGeometry::build(&scene, WHITE);
        assert_eq!(geometry.triangle_vertex_count(), 0);
        assert_eq!(geometry.line_vertex_count(), 6);
        assert_eq!(geometry.lines[1].position, [5.0, 0.0, 0.0]);
        assert_eq!(geometry.lines[1].color, [1.0, 0.0, 0.0, 1.0]);
        assert!(geometry.lines.iter().all(|v| v.normal == [0.0; 3]));
    }

    #[test]
    fn test_pinwheel_geometry() {
        let mut scene = Scene::new(Shape::cube(0.7));
        scene.add_group(pinwheel(&PinwheelParams::default()));
        scene.add_prop(pinwheel_pole());
        let geometry = SceneGeometry::build(&scene, WHITE);
        // Pole: 5 segments * 12, blades: 5 * 6
        assert_eq!(geometry.triangle_vertex_count(), 60 + 30);
    }

    #[test]
    fn test_rebuild_reuses_buffers() {
        let mut scene = Scene::new(Shape::cube(0.7));
        scene.extend_entities([Entity::new(Vec3::ZERO, MotionKind::Rotation, 0.1).unwrap()]);
        let mut geometry = SceneGeometry::build(&scene, WHITE);
        geometry.rebuild(&scene, WHITE);
        assert_eq!(geometry.triangle_vertex_count(), 36);
    }
}
