use std::path::PathBuf;

use anyhow::{Context, Result};
use donut_tracer::{reference_scene, CancelToken, RayTracer, RenderConfig};
use structopt::StructOpt;

/// Render the torus-over-checkerboard scene to a PNG.
#[derive(Debug, StructOpt)]
#[structopt(name = "donut", rename_all = "kebab-case")]
struct Opt {
    /// JSON render config; missing fields use the defaults
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    #[structopt(short, long, parse(from_os_str), default_value = "donut.png")]
    output: PathBuf,
    #[structopt(long)]
    width: Option<u32>,
    #[structopt(long)]
    height: Option<u32>,
    /// Seed light sampling for a repeatable image
    #[structopt(long)]
    seed: Option<u64>,
    #[structopt(long)]
    single_threaded: bool,
    #[structopt(long, default_value = "info")]
    log_level: String,
}

fn load_config(opts: &Opt) -> Result<RenderConfig> {
    let mut config = match &opts.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(width) = opts.width {
        config.width = width;
    }
    if let Some(height) = opts.height {
        config.height = height;
    }
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }

    Ok(config)
}

fn main() -> Result<()> {
    let opts = Opt::from_args();

    let env = env_logger::Env::default().default_filter_or(&opts.log_level);
    env_logger::Builder::from_env(env).init();

    let config = load_config(&opts)?;
    log::info!(
        "Initializing ray tracer ({}x{}, seed {:?})",
        config.width,
        config.height,
        config.seed
    );
    let tracer = RayTracer::new(reference_scene(), config);

    let image = if opts.single_threaded {
        tracer.render()
    } else {
        tracer.render_parallel(&CancelToken::new())?
    };

    image
        .save_png(&opts.output)
        .with_context(|| format!("Failed to write {}", opts.output.display()))?;
    log::info!("Saved to {}", opts.output.display());

    Ok(())
}
