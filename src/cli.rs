use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use log::LevelFilter;
use sphere_tracer::tracer::{ReflectionMode, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Log level names as accepted by `--debug-level`, mapped onto the log crate's filter.
fn level_parser() -> impl clap::builder::TypedValueParser<Value = LevelFilter> {
    PossibleValuesParser::new(LOG_LEVELS).map(|level| level.parse().unwrap_or(LevelFilter::Info))
}

/// Field of view in degrees, strictly between 0 and 180.
fn parse_fov(value: &str) -> Result<f32, String> {
    let fov: f32 = value.parse().map_err(|e| format!("{e}"))?;
    if fov > 0.0 && fov < 180.0 {
        Ok(fov)
    } else {
        Err(format!("{fov} is not between 0 and 180 degrees"))
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "sphere_tracer")]
#[command(about = "Recursive sphere ray tracer with Phong shading and shadows")]
pub struct Args {
    /// Scene description (YAML); the built-in five-sphere scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", value_parser = level_parser())]
    pub debug_level: LevelFilter,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 30.0, value_parser = parse_fov)]
    pub fov: f32,

    /// Recursion bound (2 = primary hit plus one reflection)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH,
          value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH_LIMIT as i64))]
    pub max_depth: u32,

    /// How reflection rays are built
    #[arg(long, value_enum, default_value_t = ReflectionMode::Primary)]
    pub reflection: ReflectionMode,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "render.ppm")]
    pub output: PathBuf,
}
