use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Context;
use isogrid::input::{load_options, load_sample_set};
use isogrid::util::io::atomic_write;
use isogrid::{OutputKind, init_logging, render};
use isogrid_core::BuildOptions;

#[derive(Parser, Debug)]
#[command(name = "isogrid")]
#[command(about = "Build isocline heatmap data from a parameter space exploration")]
struct Args {
    /// Exploration results (YAML, or JSON with a .json extension)
    input: PathBuf,

    /// Metric to color by (default: first metric of the first result)
    #[arg(short, long)]
    metric: Option<String>,

    /// Build options file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit per-result hover details instead of the metric payload
    #[arg(long)]
    nodes: bool,

    /// Path to the data directory (default: ~/.isogrid/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".isogrid")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let options = match &args.config {
        Some(path) => load_options(path)?,
        None => BuildOptions::default(),
    };
    let set = load_sample_set(&args.input)?;
    let kind = if args.nodes {
        OutputKind::Nodes
    } else {
        OutputKind::Payload
    };

    let json = render(&set, args.metric.as_deref(), &options, kind)
        .wrap_err_with(|| format!("cannot display {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            atomic_write(path, &json)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "payload written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
