//! Ember renderer - CPU path tracing core.
//!
//! Given a tree of shapes and a pinhole camera, traces one stochastic path
//! per pixel and writes a gamma encoded RGB8 buffer.
//!
//! ```ignore
//! use ember_renderer::{reference_scene, render, RenderConfig, ShadingMode};
//!
//! let (scene, camera) = reference_scene();
//! let config = RenderConfig::default().with_seed(7).with_shading(ShadingMode::Accumulate);
//! let rgb = render(&scene, &camera, &config)?;
//! assert_eq!(rgb.len(), camera.buffer_len());
//! ```

mod camera;
mod error;
mod material;
mod plane;
mod renderer;
mod sampler;
mod scene;
mod shading;
mod shape;
mod sphere;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use material::{Color, Material};
pub use plane::Plane;
pub use renderer::{
    bounce_direction, color_to_rgb, render, render_into, render_pixel, resolve_radiance,
    tone_map, trace_path, ParseShadingModeError, RenderConfig, RussianRoulette, ShadingMode,
    GAMMA,
};
pub use sampler::pixel_rng;
pub use scene::reference_scene;
pub use shading::{shade, Light};
pub use shape::{Group, Intersection, Shape};
pub use sphere::Sphere;

/// Re-export the math types shapes and cameras are built from
pub use ember_math::{axis, Interval, Ray, Vec3, Vec3Ext};
