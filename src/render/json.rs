use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::geometry::Viewport;
use crate::grid::Hexagon;

/// JSON export document: the fitted viewport plus the surviving hexagons,
/// for consumers that do their own rendering.
#[derive(Debug, Serialize)]
struct TilingDocument<'a> {
    viewport: &'a Viewport,
    hexagon_count: usize,
    hexagons: &'a [Hexagon],
}

pub fn write_json(path: &Path, viewport: &Viewport, hexagons: &[Hexagon]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    let document = TilingDocument {
        viewport,
        hexagon_count: hexagons.len(),
        hexagons,
    };

    serde_json::to_writer_pretty(writer, &document).context("Failed to serialize tiling")?;
    Ok(())
}
