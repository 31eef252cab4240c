//! Pinhole camera for primary ray generation.

use crate::Ray;
use ember_math::{axis, Vec3};

/// A pinhole camera looking along the world's up axis.
///
/// Film dimensions are derived from the pixel resolution and the physical
/// size of one pixel (`dots_per_unit`) when the camera is built, and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    width: u32,
    height: u32,
    dots_per_unit: f64,
    focal_length: f64,
    exposure: f64,

    // Derived at construction
    film_width: f64,
    film_height: f64,
}

impl Camera {
    /// Create a new camera.
    ///
    /// `direction` is recorded for scene descriptions but primary rays are
    /// always generated around the fixed film axis, see [`Camera::ray_for_pixel`].
    pub fn new(
        position: Vec3,
        direction: Vec3,
        width: u32,
        height: u32,
        dots_per_unit: f64,
        focal_length: f64,
        exposure: f64,
    ) -> Self {
        Self {
            position,
            direction,
            width,
            height,
            dots_per_unit,
            focal_length,
            exposure,
            film_width: width as f64 * dots_per_unit,
            film_height: height as f64 * dots_per_unit,
        }
    }

    /// Same camera at a different resolution. The film is re-derived, so the
    /// field of view scales with the pixel count.
    pub fn with_resolution(self, width: u32, height: u32) -> Self {
        Self::new(
            self.position,
            self.direction,
            width,
            height,
            self.dots_per_unit,
            self.focal_length,
            self.exposure,
        )
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn exposure(&self) -> f64 {
        self.exposure
    }

    pub fn film_width(&self) -> f64 {
        self.film_width
    }

    pub fn film_height(&self) -> f64 {
        self.film_height
    }

    /// Number of bytes in an RGB8 image for this camera.
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    /// Generate the primary ray through pixel (x, y).
    ///
    /// Pixels map to normalized device coordinates in [-1, 1) with +y up,
    /// then onto the film plane at `focal_length` along the film axis.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let nx = (x as f64 / self.width as f64) * 2.0 - 1.0;
        let ny = -((y as f64 / self.height as f64) * 2.0 - 1.0);

        let direction = Vec3::new(
            nx * self.film_width,
            ny * self.film_height,
            self.focal_length,
        )
        .normalize();

        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    /// The 300x150 camera of the reference scene.
    fn default() -> Self {
        Self::new(axis::BACK, axis::FORWARD, 300, 150, 0.001, 0.028, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_is_derived() {
        let camera = Camera::default();
        assert!((camera.film_width() - 0.3).abs() < 1e-12);
        assert!((camera.film_height() - 0.15).abs() < 1e-12);
        assert_eq!(camera.buffer_len(), 300 * 150 * 3);
    }

    #[test]
    fn test_with_resolution_rederives_film() {
        let camera = Camera::default().with_resolution(4, 4);
        assert_eq!((camera.width(), camera.height()), (4, 4));
        assert!((camera.film_width() - 0.004).abs() < 1e-12);
        assert_eq!(camera.focal_length(), 0.028);
        assert_eq!(camera.position(), axis::BACK);
    }

    #[test]
    fn test_center_ray_along_film_axis() {
        let camera = Camera::new(Vec3::ZERO, axis::FORWARD, 100, 50, 0.01, 1.0, 1.0);

        let ray = camera.ray_for_pixel(50, 25);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_corner_ray() {
        let camera = Camera::new(Vec3::ONE, axis::FORWARD, 10, 20, 0.1, 2.0, 1.0);

        // Top-left pixel maps to (-1, 1)
        let ray = camera.ray_for_pixel(0, 0);
        let expected = Vec3::new(-1.0, 2.0, 2.0).normalize();
        assert!((ray.direction - expected).length() < 1e-12);
        assert_eq!(ray.origin, Vec3::ONE);
    }

    #[test]
    fn test_vertical_flip() {
        let camera = Camera::new(Vec3::ZERO, axis::FORWARD, 8, 8, 0.1, 1.0, 1.0);

        assert!(camera.ray_for_pixel(4, 0).direction.y > 0.0);
        assert!(camera.ray_for_pixel(4, 7).direction.y < 0.0);
    }

    #[test]
    fn test_ray_direction_is_unit() {
        let camera = Camera::default();
        for (x, y) in [(0, 0), (299, 149), (17, 88)] {
            let ray = camera.ray_for_pixel(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        }
    }
}
