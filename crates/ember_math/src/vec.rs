//! Path tracing helpers on top of glam's vector type.

use crate::Vec3;

/// Named world axes. The scene convention is Z-up with +Y pointing forward.
pub mod axis {
    use crate::Vec3;

    pub const UP: Vec3 = Vec3::Z;
    pub const DOWN: Vec3 = Vec3::NEG_Z;
    pub const FORWARD: Vec3 = Vec3::Y;
    pub const BACK: Vec3 = Vec3::NEG_Y;
    pub const RIGHT: Vec3 = Vec3::X;
    pub const LEFT: Vec3 = Vec3::NEG_X;
}

/// Extra vector operations used by the integrator and the shading model.
pub trait Vec3Ext {
    /// Reflect `self` about `normal` as `self - normal * dot(self, normal)`.
    ///
    /// This removes the normal component once instead of twice, so for a
    /// unit normal the result lies in the tangent plane rather than being a
    /// mirror image. Use glam's `reflect` for a true mirror direction.
    fn reflect_about(self, normal: Vec3) -> Vec3;

    /// Exact comparison against the zero vector (no tolerance).
    fn is_exact_zero(self) -> bool;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn reflect_about(self, normal: Vec3) -> Vec3 {
        self - normal * self.dot(normal)
    }

    #[inline]
    fn is_exact_zero(self) -> bool {
        self == Vec3::ZERO
    }
}
