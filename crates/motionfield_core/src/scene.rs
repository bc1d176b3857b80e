//! Scene container
//!
//! A Scene holds everything that gets drawn:
//! - animated entities, all sharing one shape
//! - static props (pole, axis markers) with no motion
//! - spinning groups, rigid sets of parts that turn at a fixed rate

use std::collections::HashMap;
use motionfield_math::{mat4, Mat4, Vec3};
use crate::{Entity, MotionKind, Shape, Transform3D};

/// A static piece of scenery
#[derive(Clone, Debug, PartialEq)]
pub struct Prop {
    pub shape: Shape,
    pub transform: Transform3D,
}

impl Prop {
    pub fn new(shape: Shape, transform: Transform3D) -> Self {
        Self { shape, transform }
    }
}

/// A rigid group of parts that rotates by a constant Euler increment each frame
///
/// Parts are positioned relative to the group transform.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinningGroup {
    pub transform: Transform3D,
    /// Euler increment (radians) added per frame
    pub spin: Vec3,
    pub parts: Vec<Prop>,
}

impl SpinningGroup {
    pub fn new(transform: Transform3D, spin: Vec3) -> Self {
        Self {
            transform,
            spin,
            parts: Vec::new(),
        }
    }

    /// Builder: add a part in group-local space
    pub fn with_part(mut self, part: Prop) -> Self {
        self.parts.push(part);
        self
    }

    /// Advance the group by one frame of spin
    pub fn advance(&mut self) {
        self.transform.rotation += self.spin;
    }

    /// World matrix of a part (group * part)
    pub fn part_matrix(&self, part: &Prop) -> Mat4 {
        mat4::mul(self.transform.to_matrix(), part.transform.to_matrix())
    }
}

/// The animated scene
#[derive(Clone, Debug)]
pub struct Scene {
    entity_shape: Shape,
    entities: Vec<Entity>,
    props: Vec<Prop>,
    groups: Vec<SpinningGroup>,
}

impl Scene {
    /// Create an empty scene whose entities are drawn with `entity_shape`
    pub fn new(entity_shape: Shape) -> Self {
        Self {
            entity_shape,
            entities: Vec::new(),
            props: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Shape shared by every entity
    pub fn entity_shape(&self) -> Shape {
        self.entity_shape
    }

    /// Add entities, keeping their order
    pub fn extend_entities(&mut self, entities: impl IntoIterator<Item = Entity>) {
        self.entities.extend(entities);
    }

    pub fn add_prop(&mut self, prop: Prop) {
        self.props.push(prop);
    }

    pub fn add_group(&mut self, group: SpinningGroup) {
        self.groups.push(group);
    }

    /// Entities in scene order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable entities in scene order
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn groups(&self) -> &[SpinningGroup] {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut [SpinningGroup] {
        &mut self.groups
    }

    /// Number of animated entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Count of entities per motion kind
    pub fn kind_counts(&self) -> HashMap<MotionKind, usize> {
        let mut counts = HashMap::new();
        for entity in &self.entities {
            *counts.entry(entity.kind()).or_insert(0) += 1;
        }
        counts
    }
}
