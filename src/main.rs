use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod boundary;
mod config;
mod geometry;
mod grid;
mod render;

use boundary::load_boundary;
use config::FileConfig;
use geometry::{Viewport, radius_px_for_km, simplify_boundary};
use render::{OutputFormat, write_json, write_svg};

/// Tile a country outline with a selectable hexagonal region grid
///
/// Examples:
///   # Tile India's outline into an SVG map
///   hexcover -i india.geojson -o india.svg
///
///   # Wider canvas, hexagons sized to roughly 120km across
///   hexcover -i india.geojson -o india.svg -w 1200 --hex-km 120
///
///   # Emit the raw hexagon records for a custom renderer
///   hexcover -i india.geojson -o india.json -f json
///
///   # Thin a dense coastline before tiling
///   hexcover -i india.geojson -o india.svg --simplify 2
#[derive(Parser, Debug)]
#[command(name = "hexcover")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches hexcover.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input boundary GeoJSON (Polygon, MultiPolygon, Feature or FeatureCollection)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output file path (defaults to {input stem}.svg or tiling.svg)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: svg or json
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Canvas width in pixels; height follows the boundary's aspect ratio
    #[arg(short = 'w', long, default_value = "900.0")]
    width: f64,

    /// Hexagon radius in pixels
    #[arg(short = 'r', long, default_value = "40.0")]
    hex_radius: f64,

    /// Hexagon size in km (corner to corner); overrides --hex-radius
    #[arg(long)]
    hex_km: Option<f64>,

    /// Boundary simplification level: 0=off (default), 1=light, 2=medium, 3=aggressive
    /// Higher values tile faster but lose coastline detail
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
    simplify: u8,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let input = args
        .input
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let format = args
        .format
        .or_else(|| file_config.as_ref().and_then(|c| c.format));
    let width = if (args.width - 900.0).abs() > f64::EPSILON {
        args.width
    } else {
        file_config.as_ref().map(|c| c.width).unwrap_or(900.0)
    };
    let hex_radius = if (args.hex_radius - 40.0).abs() > f64::EPSILON {
        args.hex_radius
    } else {
        file_config.as_ref().map(|c| c.hex_radius).unwrap_or(40.0)
    };
    let hex_km = args
        .hex_km
        .or_else(|| file_config.as_ref().and_then(|c| c.hex_km));
    let simplify = if args.simplify != 0 {
        args.simplify
    } else {
        file_config.as_ref().map(|c| c.simplify).unwrap_or(0)
    };
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let Some(input) = input else {
        bail!("Must provide an input boundary with --input/-i or a config file");
    };

    let output_path = output.unwrap_or_else(|| default_output_path(&input, format));
    let format = format.unwrap_or_else(|| infer_format(&output_path));

    println!("hexcover - Hexagonal Region Tiler");
    println!("=================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input.display());
        println!("  Output: {}", output_path.display());
        println!("  Format: {:?}", format);
        println!("  Canvas width: {}px", width);
        if let Some(km) = hex_km {
            println!("  Hexagon size: {}km", km);
        } else {
            println!("  Hexagon radius: {}px", hex_radius);
        }
        println!("  Simplify level: {}", simplify);
        println!();
    }

    let spinner = create_spinner("Loading boundary...");
    let start = Instant::now();
    let boundary = load_boundary(&input)
        .with_context(|| format!("Failed to load boundary from {}", input.display()))?;
    spinner.finish_with_message(format!(
        "Loaded {} ring(s), {} vertices [{:.1}s]",
        boundary.rings().len(),
        boundary.coord_count(),
        start.elapsed().as_secs_f32()
    ));
    if boundary.is_empty() {
        eprintln!("Warning: boundary contains no usable rings; the map will be empty");
    }

    let boundary = if simplify > 0 {
        let spinner = create_spinner("Simplifying boundary...");
        let before = boundary.coord_count();
        let simplified = simplify_boundary(&boundary, simplify);
        spinner.finish_with_message(format!(
            "Simplified {} -> {} vertices",
            before,
            simplified.coord_count()
        ));
        simplified
    } else {
        boundary
    };

    let spinner = create_spinner("Fitting viewport...");
    let viewport = Viewport::fit(&boundary, width);
    spinner.finish_with_message(format!(
        "Viewport: {:.0}x{:.0}px over ({:.2}..{:.2}, {:.2}..{:.2})",
        viewport.width_px,
        viewport.height_px,
        viewport.min_lon,
        viewport.max_lon,
        viewport.min_lat,
        viewport.max_lat
    ));

    let radius_px = match hex_km {
        Some(km) => {
            let r = radius_px_for_km(&viewport, km);
            if verbose {
                println!("  {}km hexagons -> {:.1}px radius", km, r);
            }
            r
        }
        None => hex_radius,
    };

    let spinner = create_spinner("Tiling hexagonal grid...");
    let start = Instant::now();
    let hexagons = grid::tile(&viewport, &boundary, radius_px);
    spinner.finish_with_message(format!(
        "Tiled {} hexagons [{:.1}s]",
        hexagons.len(),
        start.elapsed().as_secs_f32()
    ));
    if hexagons.is_empty() {
        eprintln!("Warning: no hexagon centers fell inside the boundary");
    }

    let spinner = create_spinner("Writing output...");
    match format {
        OutputFormat::Svg => write_svg(&output_path, &viewport, &boundary, &hexagons)
            .context("Failed to write SVG output")?,
        OutputFormat::Json => write_json(&output_path, &viewport, &hexagons)
            .context("Failed to write JSON output")?,
    }
    spinner.finish_with_message(format!("Wrote {}", output_path.display()));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn default_output_path(input: &std::path::Path, format: Option<OutputFormat>) -> PathBuf {
    let extension = match format {
        Some(OutputFormat::Json) => "json",
        _ => "svg",
    };
    match input.file_stem() {
        Some(stem) => PathBuf::from(format!("{}.{}", stem.to_string_lossy(), extension)),
        None => PathBuf::from(format!("tiling.{}", extension)),
    }
}

fn infer_format(output: &std::path::Path) -> OutputFormat {
    match output.extension().and_then(|e| e.to_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Svg,
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
