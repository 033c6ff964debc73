use serde::Serialize;

use crate::boundary::Boundary;
use crate::geometry::Viewport;

/// One selectable region of the tiled map.
///
/// Regenerated wholesale on every tiling pass; `id` is positional and only
/// stable within one pass, `sequence_number` is 1-based in row-major scan
/// order with no gaps. Corner and center coordinates are in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hexagon {
    pub id: String,
    pub sequence_number: u32,
    pub corners: [(f64, f64); 6],
    pub center_x: f64,
    pub center_y: f64,
}

/// Lay a pointy-top hexagonal grid over the viewport and keep only the
/// hexagons whose geographic center falls inside the boundary.
///
/// # Algorithm
/// 1. Column spacing is `r * sqrt(3)`, row spacing `r * 1.5`; odd rows are
///    offset half a column (brick-offset tiling).
/// 2. The scan starts one spacing unit outside the canvas on both axes and
///    overshoots by two, so partial hexagons at the edges are not clipped.
/// 3. Each candidate center is inverse-mapped to (lon, lat) through the
///    viewport and tested for containment; outside cells are discarded
///    entirely, giving a sparse tiling that follows the outline.
/// 4. Survivors get their six corners (first vertex at -30 degrees) and a
///    consecutive sequence number.
///
/// Deterministic for fixed inputs. A non-finite or non-positive radius
/// aborts the pass and returns an empty list: a partial grid would read as
/// sparse data rather than a rendering fault, so it is all or nothing.
pub fn tile(viewport: &Viewport, boundary: &Boundary, hex_radius_px: f64) -> Vec<Hexagon> {
    if !hex_radius_px.is_finite() || hex_radius_px <= 0.0 {
        eprintln!(
            "Warning: invalid hex radius {}, skipping tiling pass",
            hex_radius_px
        );
        return Vec::new();
    }

    let horizontal_spacing = hex_radius_px * 3.0_f64.sqrt();
    let vertical_spacing = hex_radius_px * 1.5;

    let cols = (viewport.width_px / horizontal_spacing).ceil() as i64 + 2;
    let rows = (viewport.height_px / vertical_spacing).ceil() as i64 + 2;

    let start_x = -horizontal_spacing;
    let start_y = -vertical_spacing;

    let mut hexagons = Vec::new();
    let mut sequence_number = 0u32;

    for row in 0..rows {
        let row_offset = if row % 2 == 1 {
            horizontal_spacing / 2.0
        } else {
            0.0
        };
        let y = start_y + row as f64 * vertical_spacing;

        for col in 0..cols {
            let x = start_x + col as f64 * horizontal_spacing + row_offset;

            let lon = viewport.lon_at(x);
            let lat = viewport.lat_at(y);
            if !boundary.contains(lon, lat) {
                continue;
            }

            sequence_number += 1;
            hexagons.push(Hexagon {
                id: format!("hex-{}-{}", row, col),
                sequence_number,
                corners: hex_corners(x, y, hex_radius_px),
                center_x: x,
                center_y: y,
            });
        }
    }

    hexagons
}

/// The six corners of a pointy-top hexagon in pixel space, in angle order
/// starting from the vertex at -30 degrees.
pub fn hex_corners(center_x: f64, center_y: f64, radius: f64) -> [(f64, f64); 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        (
            center_x + radius * angle.cos(),
            center_y + radius * angle.sin(),
        )
    })
}
