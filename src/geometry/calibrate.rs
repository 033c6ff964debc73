use crate::geometry::Viewport;

/// Approximate kilometers per degree of latitude (and of longitude at the
/// equator). The same flat-earth approximation the rest of the pipeline
/// uses; fine for sizing hexagons, not for surveying.
pub const KM_PER_DEGREE: f64 = 111.32;

const DEFAULT_RADIUS_PX: f64 = 40.0;

/// Convert a real-world hexagon size in km to a pixel radius for a viewport.
///
/// `hex_km` is the corner-to-corner diameter of the hexagon. Longitude
/// degrees shrink with the cosine of latitude, evaluated at the viewport's
/// mid latitude, so the result drifts for viewports spanning many degrees
/// of latitude. A nonsensical input degrades to the 40px default.
pub fn radius_px_for_km(viewport: &Viewport, hex_km: f64) -> f64 {
    if !hex_km.is_finite() || hex_km <= 0.0 {
        eprintln!(
            "Warning: invalid hexagon size {}km, using {}px radius",
            hex_km, DEFAULT_RADIUS_PX
        );
        return DEFAULT_RADIUS_PX;
    }

    let mid_lat = (viewport.min_lat + viewport.max_lat) / 2.0;
    let km_per_degree_lon = KM_PER_DEGREE * mid_lat.to_radians().cos();
    let span_km = viewport.lon_span() * km_per_degree_lon;

    if !span_km.is_finite() || span_km <= 0.0 {
        eprintln!("Warning: degenerate viewport span, using {}px radius", DEFAULT_RADIUS_PX);
        return DEFAULT_RADIUS_PX;
    }

    let px_per_km = viewport.width_px / span_km;
    (hex_km / 2.0) * px_per_km
}
