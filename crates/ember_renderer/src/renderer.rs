//! Path tracing integrator.
//!
//! For every pixel:
//! - trace one stochastic path from the camera, ended by Russian roulette
//! - walk the recorded hits backward to get a radiance
//! - gamma encode and add the result into the RGB8 output buffer

use crate::{
    error::{RenderError, RenderResult},
    sampler,
    shading::{shade, Light},
    shape::{Intersection, Shape},
    Camera, Color, Ray,
};
use ember_math::{Interval, Vec3, Vec3Ext};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Display gamma used when encoding channels.
///
/// Encoded channels are scaled to the full 0..=255 range, so a linear 1.0
/// writes 255 rather than truncating to 1.
pub const GAMMA: f64 = 2.2;

/// How a traced path is turned into a pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Every vertex is shaded without a light and scaled by the trace depth;
    /// the last vertex's light is the pixel. The result is always black.
    #[default]
    Reference,
    /// Radiance is carried from the farthest bounce back to the camera, each
    /// vertex lit by the one after it, then scaled by the camera exposure.
    Accumulate,
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadingMode::Reference => f.write_str("reference"),
            ShadingMode::Accumulate => f.write_str("accumulate"),
        }
    }
}

/// Error returned when parsing an unknown shading mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shading mode '{0}' (expected 'reference' or 'accumulate')")]
pub struct ParseShadingModeError(String);

impl FromStr for ShadingMode {
    type Err = ParseShadingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(ShadingMode::Reference),
            "accumulate" => Ok(ShadingMode::Accumulate),
            _ => Err(ParseShadingModeError(s.to_string())),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Trace depth. Paths stop at each hit with probability 1 / depth.
    pub depth: u32,
    /// Render seed. `None` draws a new one for every render.
    pub seed: Option<u64>,
    /// Backward shading pass
    pub shading: ShadingMode,
    /// Trace rows on the rayon thread pool
    pub parallel: bool,
    /// Hard cap on recorded hits per path
    pub max_path_length: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            seed: None,
            shading: ShadingMode::Reference,
            parallel: true,
            max_path_length: 256,
        }
    }
}

impl RenderConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shading(mut self, shading: ShadingMode) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_path_length(mut self, max_path_length: u32) -> Self {
        self.max_path_length = max_path_length;
        self
    }

    /// Check the settings that the integrator cannot work without.
    pub fn validate(&self) -> RenderResult<()> {
        if self.depth == 0 {
            return Err(RenderError::ZeroDepth);
        }
        if self.max_path_length == 0 {
            return Err(RenderError::ZeroPathLength);
        }
        Ok(())
    }
}

/// Fixed-probability path termination.
///
/// Surviving paths are not reweighted by `1 / (1 - p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RussianRoulette {
    termination_probability: f64,
}

impl RussianRoulette {
    /// Roulette for a trace depth: each hit ends the path with
    /// probability `1 / depth`.
    pub fn for_depth(depth: u32) -> Self {
        Self {
            termination_probability: 1.0 / depth as f64,
        }
    }

    pub fn termination_probability(&self) -> f64 {
        self.termination_probability
    }

    /// Draw once; true means stop here.
    pub fn terminate<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen::<f64>() < self.termination_probability
    }
}

/// Pick the direction a path leaves `intersection` in.
///
/// With probability `roughness` a direction `(x, 1, z)`, x and z uniform in
/// [-1, 1], is normalized and projected onto the normal. Otherwise the
/// incoming direction is reflected about the normal.
pub fn bounce_direction<R: Rng + ?Sized>(intersection: &Intersection<'_>, rng: &mut R) -> Vec3 {
    if rng.gen::<f64>() < intersection.material.roughness {
        let x = rng.gen_range(-1.0..=1.0);
        let z = rng.gen_range(-1.0..=1.0);
        Vec3::new(x, 1.0, z).normalize().project_onto(intersection.normal)
    } else {
        intersection.ray_direction.reflect_about(intersection.normal)
    }
}

/// Follow `ray` through `scene`, recording every hit.
///
/// The most recent hit is at the front of the returned sequence. A hit that
/// ends the path (roulette or the length cap) is still recorded; a miss
/// records nothing.
pub fn trace_path<'s, R: Rng + ?Sized>(
    scene: &'s dyn Shape,
    ray: Ray,
    config: &RenderConfig,
    rng: &mut R,
) -> VecDeque<Intersection<'s>> {
    let roulette = RussianRoulette::for_depth(config.depth);
    let max_len = config.max_path_length as usize;

    let mut path = VecDeque::new();
    let mut ray = ray;

    while let Some(intersection) = scene.intersect(&ray) {
        let terminate = roulette.terminate(rng) || path.len() + 1 >= max_len;
        if !terminate {
            ray = Ray::new(intersection.position, bounce_direction(&intersection, rng));
        }
        path.push_front(intersection);
        if terminate {
            break;
        }
    }

    path
}

/// Radiance carried to the camera by a recorded path.
///
/// Returns `None` for an empty path, which leaves the pixel untouched.
pub fn resolve_radiance(
    path: &VecDeque<Intersection<'_>>,
    mode: ShadingMode,
    depth: u32,
    exposure: f64,
) -> Option<Color> {
    match mode {
        ShadingMode::Reference => {
            let mut light = None;
            for intersection in path {
                let color = shade(intersection, None) * depth as f64;
                light = Some(Light::from_intersection(intersection, color));
            }
            light.map(|light| light.color)
        }
        ShadingMode::Accumulate => {
            let mut light: Option<Light> = None;
            for intersection in path {
                let color = match light.filter(|light| !light.color.is_exact_zero()) {
                    Some(light) => shade(intersection, Some(&light)),
                    None => intersection.material.emission,
                };
                // Seen from the next vertex toward the camera, this one lies
                // along the ray that found it.
                light = Some(Light::new(
                    intersection.position,
                    intersection.ray_direction.normalize(),
                    color,
                ));
            }
            light.map(|light| light.color * exposure)
        }
    }
}

/// Gamma encode a linear channel to 8 bits.
///
/// Negative and NaN inputs map to 0, anything at or above 1 to 255.
#[inline]
pub fn tone_map(channel: f64) -> u8 {
    let encoded = channel.max(0.0).powf(1.0 / GAMMA);
    (255.0 * Interval::UNIT.clamp(encoded)) as u8
}

/// Gamma encode a color to RGB8.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [tone_map(color.x), tone_map(color.y), tone_map(color.z)]
}

/// Trace pixel (x, y). `None` when the camera ray hits nothing.
pub fn render_pixel(
    scene: &dyn Shape,
    camera: &Camera,
    config: &RenderConfig,
    seed: u64,
    x: u32,
    y: u32,
) -> Option<[u8; 3]> {
    let mut rng = sampler::pixel_rng(seed, x, y);
    let path = trace_path(scene, camera.ray_for_pixel(x, y), config, &mut rng);
    log::trace!("pixel ({x}, {y}): {} hits", path.len());

    resolve_radiance(&path, config.shading, config.depth, camera.exposure()).map(color_to_rgb)
}

/// Render the scene, adding every traced pixel into `buffer`.
///
/// `buffer` is row-major RGB8 of exactly `width * height * 3` bytes. Values
/// add with saturation, so calling this repeatedly accumulates passes.
pub fn render_into(
    buffer: &mut [u8],
    scene: &dyn Shape,
    camera: &Camera,
    config: &RenderConfig,
) -> RenderResult<()> {
    config.validate()?;
    let (width, height) = (camera.width(), camera.height());
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }
    if buffer.len() != camera.buffer_len() {
        return Err(RenderError::BufferSize {
            expected: camera.buffer_len(),
            actual: buffer.len(),
        });
    }

    let seed = config.seed.unwrap_or_else(sampler::random_seed);
    log::debug!(
        "Rendering {width}x{height} at depth {} ({} shading, seed {seed})",
        config.depth,
        config.shading
    );
    let start = Instant::now();

    let row_stride = width as usize * 3;
    let render_row = |(y, row): (usize, &mut [u8])| {
        for x in 0..width {
            let Some(rgb) = render_pixel(scene, camera, config, seed, x, y as u32) else {
                continue;
            };
            let i = x as usize * 3;
            for (dst, src) in row[i..i + 3].iter_mut().zip(rgb) {
                *dst = dst.saturating_add(src);
            }
        }
    };

    if config.parallel {
        buffer.par_chunks_mut(row_stride).enumerate().for_each(render_row);
    } else {
        buffer.chunks_mut(row_stride).enumerate().for_each(render_row);
    }

    log::debug!("Rendered {width}x{height} in {:?}", start.elapsed());
    Ok(())
}

/// Render the scene into a new zeroed RGB8 buffer.
pub fn render(
    scene: &dyn Shape,
    camera: &Camera,
    config: &RenderConfig,
) -> RenderResult<Vec<u8>> {
    let mut buffer = vec![0u8; camera.buffer_len()];
    render_into(&mut buffer, scene, camera, config)?;
    Ok(buffer)
}
