use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use vecpath::{init_logging, Config, PathDocument, Pen};

/// Build a path from a JSON document, flatten it and print its bounds and
/// SVG path data.
#[derive(Parser, Debug)]
#[command(name = "vecpath", version, about)]
struct Cli {
    /// Path document (JSON)
    document: PathBuf,

    /// Settings file (.json or .toml); defaults to the platform config file
    /// when it exists
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured flatness
    #[arg(short, long)]
    flatness: Option<f64>,

    /// Inflate bounds for a pen of this width
    #[arg(short, long)]
    pen_width: Option<f64>,

    /// Keep curves instead of flattening them
    #[arg(long)]
    no_flatten: bool,
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match Config::default_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        _ => Ok(Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(flatness) = cli.flatness {
        config.flatten.flatness = flatness;
    }
    config.validate()?;

    let document = PathDocument::load(&cli.document)?;
    let mut path = document.build_path(&config)?;
    info!(
        "Loaded {} commands into {} points",
        document.commands.len(),
        path.point_count()
    );

    if !cli.no_flatten {
        let outcome = path.flatten(None, config.flatten.flatness);
        info!("Flatten: {:?}, {} points", outcome, path.point_count());
    }

    let pen = cli.pen_width.map(Pen::new);
    let bounds = path.bounds_with_flatness(None, pen.as_ref(), config.flatten.bounds_flatness);
    println!(
        "bounds: x={} y={} width={} height={}",
        bounds.x, bounds.y, bounds.width, bounds.height
    );
    println!("{}", path.to_svg_path_data());

    Ok(())
}
