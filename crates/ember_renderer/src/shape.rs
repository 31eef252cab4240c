//! Shape trait and Intersection record for ray-scene queries.

use crate::{Material, Ray};
use ember_math::Vec3;

/// Record of a single ray-surface hit.
///
/// The material is borrowed from the shape that produced the hit, so
/// intersections live no longer than the scene.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
    /// Direction of the ray that produced the hit
    pub ray_direction: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> Intersection<'a> {
    pub fn new(position: Vec3, normal: Vec3, ray_direction: Vec3, material: &'a Material) -> Self {
        Self {
            position,
            normal,
            ray_direction,
            material,
        }
    }
}

/// Trait for anything a ray can hit.
pub trait Shape: Send + Sync {
    /// Returns the hit this shape reports for `ray`, if any.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;
}

/// An ordered collection of shapes.
///
/// Queries scan the children in insertion order and return the first hit,
/// not the nearest one. Shapes listed earlier occlude shapes listed later
/// regardless of distance.
#[derive(Default)]
pub struct Group {
    shapes: Vec<Box<dyn Shape>>,
}

impl Group {
    /// Create a new empty group.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Builder-style add.
    pub fn with(mut self, shape: impl Shape + 'static) -> Self {
        self.add(Box::new(shape));
        self
    }

    /// Add a shape after the existing children.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    /// Get the number of children.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl From<Vec<Box<dyn Shape>>> for Group {
    fn from(shapes: Vec<Box<dyn Shape>>) -> Self {
        Self { shapes }
    }
}

impl Shape for Group {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.shapes.iter().find_map(|shape| shape.intersect(ray))
    }
}
