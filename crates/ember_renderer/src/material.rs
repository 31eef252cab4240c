//! Surface reflectance description.

use ember_math::Vec3;

/// Color type alias (linear RGB, unbounded for emitters)
pub type Color = Vec3;

/// A metal/roughness surface description.
///
/// Materials are plain data. Shapes hold them behind an `Arc` so one material
/// can be shared by any number of shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Albedo for dielectrics, specular tint for metals
    pub base_color: Color,
    /// 0 = dielectric, 1 = metal
    pub metalness: f64,
    /// 0 = smooth/specular, 1 = rough/diffuse. Also the probability of a
    /// diffuse bounce in the integrator.
    pub roughness: f64,
    /// Emitted radiance (zero for non-emitters)
    pub emission: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Color::splat(0.5),
            metalness: 0.0,
            roughness: 1.0,
            emission: Color::ZERO,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(base_color: Color, metalness: f64, roughness: f64, emission: Color) -> Self {
        Self {
            base_color,
            metalness,
            roughness,
            emission,
        }
    }

    /// A fully rough, non-metallic material.
    pub fn diffuse(base_color: Color) -> Self {
        Self {
            base_color,
            ..Default::default()
        }
    }

    /// A black, fully rough emitter.
    pub fn emissive(emission: Color) -> Self {
        Self {
            base_color: Color::ZERO,
            emission,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuse() {
        let material = Material::diffuse(Color::new(0.2, 0.4, 0.6));
        assert_eq!(material.roughness, 1.0);
        assert_eq!(material.metalness, 0.0);
        assert_eq!(material.emission, Color::ZERO);
    }

    #[test]
    fn test_emissive() {
        let material = Material::emissive(Color::splat(10_000.0));
        assert_eq!(material.base_color, Color::ZERO);
        assert_eq!(material.emission, Color::splat(10_000.0));
    }
}
