use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use sketchify::{config::Config, render::RenderEngine, styles::StyleKind};

#[derive(Parser)]
#[command(
    name = "sketchify",
    version,
    about = "Turn photographs into pencil, charcoal, or ink sketch renderings",
    long_about = "Sketchify converts a photograph into a stylized grayscale sketch using a \
                  small set of deterministic blur, contrast, and edge operations."
)]
struct Cli {
    /// Input photograph (JPEG, PNG)
    input: PathBuf,

    /// Output file path (default: <output_dir>/<style>_<input name>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sketch style to apply (pencil, charcoal, ink)
    #[arg(short, long)]
    style: Option<String>,

    /// Effect intensity, suggested range 0.5-3.0
    #[arg(long)]
    intensity: Option<f32>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Sketchify v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };
    config.validate()?;

    // Resolve style at the boundary; unknown names fail here, before any
    // image bytes are touched.
    let kind = match cli.style.as_deref() {
        Some(name) => name
            .parse::<StyleKind>()
            .map_err(sketchify::SketchError::from)?,
        None => config.render.default_style,
    };

    if let Some(intensity) = cli.intensity {
        config.style.intensity = intensity;
    }

    // Default output: <style>_<input stem>.png under the configured output dir
    let output = cli.output.unwrap_or_else(|| {
        let stem = cli
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sketch".to_string());
        config
            .render
            .output_dir
            .join(format!("{}_{}.png", kind, stem))
    });

    info!("Style: {} (intensity {})", kind, config.style.intensity);

    let engine = RenderEngine::with_kind(config, kind);
    engine.render_file(&cli.input, &output)?;

    Ok(())
}
