mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ember_renderer::{reference_scene, render, Camera, RenderConfig, ShadingMode};

#[derive(Parser, Debug)]
#[command(version, about = "Render the reference scene with the Ember path tracer")]
pub struct Args {
    #[arg(short, long, default_value = "ember.png")]
    /// Output image. The format follows the extension.
    output: PathBuf,

    #[arg(long)]
    /// JSON render settings, applied before the flags below
    config: Option<PathBuf>,

    #[arg(long)]
    /// Image width in pixels (defaults to the scene camera)
    width: Option<u32>,

    #[arg(long)]
    /// Image height in pixels (defaults to the scene camera)
    height: Option<u32>,

    #[arg(short, long)]
    /// Trace depth; every hit ends the path with probability 1/depth
    depth: Option<u32>,

    #[arg(short, long)]
    /// Seed for a reproducible render
    seed: Option<u64>,

    #[arg(long)]
    /// Backward shading pass: "reference" or "accumulate" [default: accumulate]
    shading: Option<ShadingMode>,

    #[arg(long)]
    /// Trace on the calling thread only
    sequential: bool,
}

impl Args {
    /// Settings file (if any) with the command line applied on top.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => RenderConfig::default().with_shading(ShadingMode::Accumulate),
        };

        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(shading) = self.shading {
            config.shading = shading;
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}

/// Render the reference scene at the requested resolution.
fn render_reference(args: &Args, config: &RenderConfig) -> Result<(Camera, Vec<u8>)> {
    let start = Instant::now();
    let (scene, camera) = reference_scene();
    let camera = match (args.width, args.height) {
        (None, None) => camera,
        (width, height) => {
            let width = width.unwrap_or(camera.width());
            let height = height.unwrap_or(camera.height());
            camera.with_resolution(width, height)
        }
    };
    log::info!("Scene built in {:?}", start.elapsed());

    log::info!(
        "Rendering {}x{} at depth {} with {} shading...",
        camera.width(),
        camera.height(),
        config.depth,
        config.shading
    );
    let start = Instant::now();
    let rgb = render(&scene, &camera, config)?;
    log::info!("Rendered in {:?}", start.elapsed());
    Ok((camera, rgb))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = args.render_config()?;

    let (camera, rgb) = render_reference(&args, &config)?;
    output::save_rgb(&args.output, camera.width(), camera.height(), rgb)?;
    log::info!("Saved to {}", args.output.display());
    Ok(())
}
