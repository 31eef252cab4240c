//! Built-in scenes.

use crate::{Camera, Color, Group, Material, Plane, Sphere};
use ember_math::{axis, Vec3};
use std::sync::Arc;

/// Ground plane, a white sphere at the origin and a small, very bright
/// emitter above it, seen by the default 300x150 camera.
pub fn reference_scene() -> (Group, Camera) {
    let ground = Arc::new(Material::new(Color::splat(0.5), 0.0, 1.0, Color::ZERO));
    let white = Arc::new(Material::new(Color::ONE, 0.0, 1.0, Color::ZERO));
    let emitter = Arc::new(Material::new(
        Color::ZERO,
        0.0,
        1.0,
        Color::ONE * 10_000.0,
    ));

    let scene = Group::new()
        .with(Plane::new(axis::DOWN, axis::UP, ground))
        .with(Sphere::new(Vec3::ZERO, 0.1, white))
        .with(Sphere::new(axis::UP, 0.1, emitter));

    (scene, Camera::default())
}
