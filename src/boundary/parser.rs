use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

use super::Boundary;

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("failed to read boundary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
    #[error("no Polygon or MultiPolygon geometry found in document")]
    MissingGeometry,
}

/// Raw GeoJSON document node. One struct covers geometries, Features and
/// FeatureCollections; `type_` decides which fields are meaningful.
#[derive(Debug, Deserialize)]
struct GeoDocument {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    coordinates: Option<Value>,
    #[serde(default)]
    geometry: Option<Box<GeoDocument>>,
    #[serde(default)]
    features: Option<Vec<GeoDocument>>,
}

/// Load a boundary from a GeoJSON file.
///
/// Accepts a bare Polygon/MultiPolygon geometry, a Feature wrapping one, or a
/// FeatureCollection (the first polygonal feature wins).
pub fn load_boundary(path: &Path) -> Result<Boundary, BoundaryError> {
    let contents = std::fs::read_to_string(path)?;
    parse_boundary(&contents)
}

/// Parse a boundary from GeoJSON text.
///
/// Structural problems (bad JSON, no polygonal geometry) are errors; problems
/// inside an otherwise valid geometry (a malformed coordinate pair, a ring
/// with too few points) are skipped in place with a warning so that one bad
/// vertex never takes down the whole map.
pub fn parse_boundary(contents: &str) -> Result<Boundary, BoundaryError> {
    let doc: GeoDocument = serde_json::from_str(contents)?;
    let geometry = resolve_geometry(&doc)?;

    let coordinates = geometry
        .coordinates
        .as_ref()
        .ok_or(BoundaryError::MissingGeometry)?;

    let rings = match geometry.type_.as_str() {
        "Polygon" => extract_polygon_rings(coordinates),
        "MultiPolygon" => match coordinates {
            Value::Array(polygons) => polygons
                .iter()
                .flat_map(extract_polygon_rings)
                .collect(),
            _ => Vec::new(),
        },
        other => return Err(BoundaryError::UnsupportedGeometry(other.to_string())),
    };

    if rings.is_empty() {
        eprintln!("Warning: boundary geometry contained no usable rings");
    }

    Ok(Boundary::new(rings))
}

/// Walk the document down to the first Polygon/MultiPolygon geometry.
fn resolve_geometry(doc: &GeoDocument) -> Result<&GeoDocument, BoundaryError> {
    match doc.type_.as_str() {
        "Polygon" | "MultiPolygon" => Ok(doc),
        "Feature" => doc
            .geometry
            .as_deref()
            .ok_or(BoundaryError::MissingGeometry)
            .and_then(resolve_geometry),
        "FeatureCollection" => doc
            .features
            .iter()
            .flatten()
            .find_map(|f| resolve_geometry(f).ok())
            .ok_or(BoundaryError::MissingGeometry),
        other => Err(BoundaryError::UnsupportedGeometry(other.to_string())),
    }
}

/// Extract exterior rings from a Polygon coordinates array.
///
/// Only the outer ring (index 0) is kept; interior rings describe holes,
/// which the containment model does not handle.
fn extract_polygon_rings(coordinates: &Value) -> Vec<Vec<(f64, f64)>> {
    let Value::Array(rings) = coordinates else {
        return Vec::new();
    };

    if rings.len() > 1 {
        eprintln!(
            "Warning: discarding {} interior ring(s); holes are not supported",
            rings.len() - 1
        );
    }

    rings
        .first()
        .and_then(|outer| extract_ring(outer))
        .into_iter()
        .collect()
}

/// Extract one ring, skipping malformed coordinate positions.
fn extract_ring(ring: &Value) -> Option<Vec<(f64, f64)>> {
    let Value::Array(positions) = ring else {
        return None;
    };

    let mut points = Vec::with_capacity(positions.len());
    let mut skipped = 0usize;

    for position in positions {
        match parse_position(position) {
            Some(pair) => points.push(pair),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        eprintln!("Warning: skipped {} malformed coordinate position(s)", skipped);
    }

    // A ring needs at least a triangle to enclose anything
    if points.len() < 3 {
        if !points.is_empty() {
            eprintln!(
                "Warning: dropped ring with only {} valid point(s)",
                points.len()
            );
        }
        return None;
    }

    Some(points)
}

/// A valid position is an array of at least two finite numbers, (lon, lat)
/// first per the GeoJSON axis order. Extra elements (altitude) are ignored.
fn parse_position(position: &Value) -> Option<(f64, f64)> {
    let Value::Array(values) = position else {
        return None;
    };
    let lon = values.first()?.as_f64()?;
    let lat = values.get(1)?.as_f64()?;
    if !lon.is_finite() || !lat.is_finite() {
        return None;
    }
    Some((lon, lat))
}
