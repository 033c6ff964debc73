pub mod parser;

pub use parser::{BoundaryError, load_boundary, parse_boundary};

use crate::geometry::containment::ring_contains;

/// A country outline: one or more simple exterior rings of (lon, lat) pairs.
///
/// Holes are not modeled. Containment treats the boundary as the union of
/// its rings, which matches the country-outline use case (mainland plus
/// islands/exclaves as disjoint polygons).
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    rings: Vec<Vec<(f64, f64)>>,
}

impl Boundary {
    pub fn new(rings: Vec<Vec<(f64, f64)>>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Vec<(f64, f64)>] {
        &self.rings
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total number of vertices across all rings
    pub fn coord_count(&self) -> usize {
        self.rings.iter().map(|r| r.len()).sum()
    }

    /// Ray-casting containment test against the union of all rings.
    ///
    /// Non-finite query points are excluded rather than guessed at.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        if !lon.is_finite() || !lat.is_finite() {
            return false;
        }
        self.rings.iter().any(|ring| ring_contains(ring, lon, lat))
    }
}
