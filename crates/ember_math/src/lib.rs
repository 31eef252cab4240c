//! Ember math - vector algebra shared by the renderer.
//!
//! Vectors are glam's double precision `DVec3`, re-exported as [`Vec3`].
//! Path tracing specific operations live on the [`Vec3Ext`] extension trait.

pub use glam::DVec3 as Vec3;

mod interval;
mod ray;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use vec::{axis, Vec3Ext};
