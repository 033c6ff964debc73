use geo::{LineString, Simplify};

use crate::boundary::Boundary;

/// Map a simplification level (0..=3) to a Douglas-Peucker tolerance in
/// degrees. Country outlines at typical canvas widths resolve to roughly
/// 0.03 degrees per pixel, so level 1 stays sub-pixel and level 3 trades
/// visible coastline detail for speed.
pub fn epsilon_for_level(level: u8) -> f64 {
    match level {
        0 => 0.0,
        1 => 0.01,
        2 => 0.03,
        _ => 0.08,
    }
}

/// Simplify every ring of a boundary at the given level.
///
/// Level 0 is the identity. The containment test is O(cells x vertices), so
/// thinning a dense outline before tiling cuts the dominant cost; a ring
/// that collapses below 4 points keeps its original shape instead.
pub fn simplify_boundary(boundary: &Boundary, level: u8) -> Boundary {
    if level == 0 {
        return boundary.clone();
    }
    let epsilon = epsilon_for_level(level);
    let rings = boundary
        .rings()
        .iter()
        .map(|ring| simplify_ring(ring, epsilon))
        .collect();
    Boundary::new(rings)
}

pub fn simplify_ring(ring: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if ring.len() < 5 || epsilon <= 0.0 {
        return ring.to_vec();
    }

    let line: LineString<f64> = ring
        .iter()
        .map(|&(lon, lat)| geo::coord! { x: lon, y: lat })
        .collect();

    let simplified = line.simplify(&epsilon);

    if simplified.0.len() < 4 {
        return ring.to_vec();
    }

    simplified.0.into_iter().map(|c| (c.x, c.y)).collect()
}
