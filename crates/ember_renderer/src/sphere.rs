//! Sphere primitive.

use crate::{
    shape::{Intersection, Shape},
    Material, Ray,
};
use ember_math::{Interval, Vec3};
use std::sync::Arc;

/// Roots closer than this are treated as the surface the ray started on.
const SELF_HIT_EPSILON: f64 = 1e-9;

/// A sphere given by its center and diameter.
pub struct Sphere {
    position: Vec3,
    diameter: f64,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(position: Vec3, diameter: f64, material: Arc<Material>) -> Self {
        Self {
            position,
            diameter,
            material,
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Nearest root of `|o + t*d - c|^2 = r^2` past the epsilon.
    ///
    /// From inside the sphere only the far root qualifies, so that is the
    /// one returned.
    fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let radius = self.radius();
        let oc = self.position - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - radius * radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let range = Interval::new(SELF_HIT_EPSILON, f64::INFINITY);

        [(h - sqrtd) / a, (h + sqrtd) / a]
            .into_iter()
            .find(|&root| range.surrounds(root))
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let t = self.hit_distance(ray)?;
        let position = ray.at(t);
        let normal = (position - self.position) / self.radius();

        Some(Intersection::new(
            position,
            normal,
            ray.direction,
            &self.material,
        ))
    }
}
