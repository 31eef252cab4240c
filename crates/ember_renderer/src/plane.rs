//! Infinite plane primitive.

use crate::{
    shape::{Intersection, Shape},
    Material, Ray,
};
use ember_math::{Interval, Vec3};
use std::sync::Arc;

/// An infinite plane through `position` with a fixed `normal`.
///
/// The facing test is taken against the stored position vector, not the
/// normal: a ray is culled when `dot(direction, position) > 0`, and the hit
/// distance divides by that same product. Scenes place planes so that their
/// position vector points along the side they are seen from.
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. `normal` is expected to be unit length.
    pub fn new(position: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            position,
            normal,
            material,
        }
    }

    /// Ray parameter of the hit, if the ray is accepted.
    fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let dn = ray.direction.dot(self.position);
        if dn > 0.0 {
            return None;
        }

        let vn = (ray.origin - self.position).dot(self.normal);
        let t = -(vn / dn);
        Interval::FORWARD.contains(t).then_some(t)
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let t = self.hit_distance(ray)?;
        Some(Intersection::new(
            ray.at(t),
            self.normal,
            ray.direction,
            &self.material,
        ))
    }
}
