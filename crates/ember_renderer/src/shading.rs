//! Direct lighting model.
//!
//! A Lambertian diffuse lobe and a Blinn-Phong style specular lobe, blended
//! by the surface roughness. The specular exponent is derived from the
//! light's inverse-square falloff rather than from roughness.

use crate::{shape::Intersection, Color};
use ember_math::{Vec3, Vec3Ext};
use std::f64::consts::PI;

/// Light arriving at a surface point from one path vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, direction: Vec3, color: Color) -> Self {
        Self {
            position,
            direction,
            color,
        }
    }

    /// Light leaving a hit back along the ray that found it.
    pub fn from_intersection(intersection: &Intersection<'_>, color: Color) -> Self {
        Self::new(intersection.position, -intersection.ray_direction, color)
    }
}

/// Radiance leaving `intersection` when lit by `light`.
///
/// No light, or a light of exactly zero color, contributes nothing; not even
/// the surface's own emission. `n . l` is not clamped, so light from below
/// the surface subtracts.
pub fn shade(intersection: &Intersection<'_>, light: Option<&Light>) -> Color {
    let Some(light) = light else {
        return Color::ZERO;
    };
    if light.color.is_exact_zero() {
        return Color::ZERO;
    }
    let material = intersection.material;

    let l = light.direction;
    let n = intersection.normal;
    let v = intersection.ray_direction;

    let mut color = material.emission;

    // Zero-weight lobes are not evaluated: NaN * 0 is still NaN.
    if material.roughness != 0.0 {
        let n_dot_l = n.dot(l);
        let diffuse = material.base_color * (light.color * n_dot_l) / PI;
        color += diffuse * material.roughness;
    }

    if material.roughness != 1.0 {
        let h = (l + v).normalize();
        let light_power = light.color.length();
        let light_tint = light.color.normalize();
        let distance_squared = (light.position - intersection.position).length_squared();
        let m = 1.0 / (light_power * distance_squared);

        let spec_color =
            material.base_color * material.metalness + Color::ONE * (1.0 - material.metalness);
        let specular =
            spec_color * h.dot(v).powf(m) * light_tint * ((m + 2.0) / (2.0 * PI));
        color += specular * (1.0 - material.roughness);
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use ember_math::axis;

    fn hit(material: &Material) -> Intersection<'_> {
        Intersection::new(Vec3::ZERO, axis::UP, axis::DOWN, material)
    }

    #[test]
    fn test_no_light_is_black() {
        let material = Material::emissive(Color::splat(100.0));
        assert_eq!(shade(&hit(&material), None), Color::ZERO);
    }

    #[test]
    fn test_zero_light_is_black() {
        let material = Material::emissive(Color::splat(100.0));
        let light = Light::new(axis::UP, axis::UP, Color::ZERO);
        assert_eq!(shade(&hit(&material), Some(&light)), Color::ZERO);
    }

    #[test]
    fn test_rough_surface_is_lambertian() {
        let material = Material::new(Color::new(0.5, 0.25, 1.0), 0.0, 1.0, Color::ZERO);
        let light = Light::new(Vec3::new(0.0, 0.0, 2.0), axis::UP, Color::splat(2.0));

        let color = shade(&hit(&material), Some(&light));
        let expected = Color::new(0.5, 0.25, 1.0) * 2.0 / PI;
        assert!((color - expected).length() < 1e-12);
    }

    #[test]
    fn test_light_below_surface_darkens() {
        let material = Material::diffuse(Color::ONE);
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0), axis::DOWN, Color::ONE);

        let color = shade(&hit(&material), Some(&light));
        assert!(color.x < 0.0);
    }

    #[test]
    fn test_emission_is_added() {
        let material = Material::new(Color::ONE, 0.0, 1.0, Color::new(3.0, 0.0, 0.0));
        let light = Light::new(Vec3::new(0.0, 0.0, 1.0), axis::UP, Color::ONE);

        let color = shade(&hit(&material), Some(&light));
        assert!((color - (Color::new(3.0, 0.0, 0.0) + Color::ONE / PI)).length() < 1e-12);
    }

    #[test]
    fn test_smooth_surface_is_specular() {
        // Metal tints the highlight with the base color
        let material = Material::new(Color::new(1.0, 0.5, 0.0), 1.0, 0.0, Color::ZERO);
        let intersection = Intersection::new(Vec3::ZERO, axis::UP, axis::UP, &material);
        let light = Light::new(Vec3::new(0.0, 0.0, 1.0), axis::UP, Color::ONE);

        // h = v, so the lobe is at its peak of 1 before normalization
        let m = 1.0 / 3f64.sqrt();
        let tint = Color::ONE.normalize();
        let expected = Color::new(1.0, 0.5, 0.0) * tint * ((m + 2.0) / (2.0 * PI));

        let color = shade(&intersection, Some(&light));
        assert!((color - expected).length() < 1e-12);
    }

    #[test]
    fn test_zero_weight_lobe_is_skipped() {
        // l = -v makes the half vector NaN, but a fully rough surface never
        // evaluates it
        let material = Material::diffuse(Color::ONE);
        let light = Light::new(Vec3::new(0.0, 0.0, 1.0), axis::UP, Color::ONE);

        let color = shade(&hit(&material), Some(&light));
        assert!(color.is_finite());

        let glossy = Material::new(Color::ONE, 0.0, 0.5, Color::ZERO);
        assert!(shade(&hit(&glossy), Some(&light)).is_nan());
    }

    #[test]
    fn test_light_from_intersection() {
        let material = Material::default();
        let intersection =
            Intersection::new(Vec3::ONE, axis::UP, Vec3::new(0.0, 0.6, -0.8), &material);

        let light = Light::from_intersection(&intersection, Color::splat(4.0));
        assert_eq!(light.position, Vec3::ONE);
        assert_eq!(light.direction, Vec3::new(-0.0, -0.6, 0.8));
        assert_eq!(light.color, Color::splat(4.0));
    }
}
