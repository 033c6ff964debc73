use serde::Serialize;

use crate::boundary::Boundary;

/// Fallback geographic box used when a boundary yields no usable extent.
/// Covers India, the outline the product was built around; a broken boundary
/// still renders an empty-but-sane canvas instead of blocking the map.
pub const FALLBACK_MIN_LON: f64 = 68.0;
pub const FALLBACK_MAX_LON: f64 = 98.0;
pub const FALLBACK_MIN_LAT: f64 = 6.0;
pub const FALLBACK_MAX_LAT: f64 = 38.0;

/// Fraction of each axis span added as padding on both sides, so hexagons
/// and the outline never touch the canvas edge.
const PADDING_FRACTION: f64 = 0.05;

const DEFAULT_WIDTH_PX: f64 = 900.0;

/// A rectangular geographic window mapped onto a pixel canvas.
///
/// Built once per boundary load and read-only afterward. The pixel height is
/// derived from the width and the padded lon/lat span, so the geographic
/// aspect ratio is preserved by construction.
#[derive(Debug, Clone, Serialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Viewport {
    /// Fit a viewport around a boundary at the given canvas width.
    ///
    /// Scans every ring vertex for the bounding box, pads it by 5% per side,
    /// and derives the pixel height from the span ratio. Total function: a
    /// boundary with no vertices, or one that collapses to a point or line,
    /// degrades to the hard-coded fallback box with a warning rather than
    /// failing, so a bad boundary never blocks rendering.
    pub fn fit(boundary: &Boundary, target_width_px: f64) -> Self {
        let width_px = if target_width_px.is_finite() && target_width_px > 0.0 {
            target_width_px
        } else {
            eprintln!(
                "Warning: invalid target width {}, using {}",
                target_width_px, DEFAULT_WIDTH_PX
            );
            DEFAULT_WIDTH_PX
        };

        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut seen = 0usize;

        for ring in boundary.rings() {
            for &(lon, lat) in ring {
                min_lon = min_lon.min(lon);
                max_lon = max_lon.max(lon);
                min_lat = min_lat.min(lat);
                max_lat = max_lat.max(lat);
                seen += 1;
            }
        }

        if seen == 0 || max_lon <= min_lon || max_lat <= min_lat {
            eprintln!("Warning: boundary has no usable extent, using fallback viewport");
            return Self::fallback(width_px);
        }

        let lon_pad = (max_lon - min_lon) * PADDING_FRACTION;
        let lat_pad = (max_lat - min_lat) * PADDING_FRACTION;
        min_lon -= lon_pad;
        max_lon += lon_pad;
        min_lat -= lat_pad;
        max_lat += lat_pad;

        let height_px = width_px * (max_lat - min_lat) / (max_lon - min_lon);

        Self {
            width_px,
            height_px,
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    fn fallback(width_px: f64) -> Self {
        let lon_span = FALLBACK_MAX_LON - FALLBACK_MIN_LON;
        let lat_span = FALLBACK_MAX_LAT - FALLBACK_MIN_LAT;
        Self {
            width_px,
            height_px: width_px * lat_span / lon_span,
            min_lon: FALLBACK_MIN_LON,
            max_lon: FALLBACK_MAX_LON,
            min_lat: FALLBACK_MIN_LAT,
            max_lat: FALLBACK_MAX_LAT,
        }
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Inverse-map a pixel x to longitude.
    pub fn lon_at(&self, x: f64) -> f64 {
        self.min_lon + (x / self.width_px) * self.lon_span()
    }

    /// Inverse-map a pixel y to latitude. Pixel y grows downward while
    /// latitude grows upward, so the axis is flipped.
    pub fn lat_at(&self, y: f64) -> f64 {
        self.max_lat - (y / self.height_px) * self.lat_span()
    }

    /// Forward-map a longitude to pixel x.
    pub fn x_of(&self, lon: f64) -> f64 {
        (lon - self.min_lon) / self.lon_span() * self.width_px
    }

    /// Forward-map a latitude to pixel y.
    pub fn y_of(&self, lat: f64) -> f64 {
        (self.max_lat - lat) / self.lat_span() * self.height_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Boundary {
        Boundary::new(vec![vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
            (0.0, 0.0),
        ]])
    }

    #[test]
    fn test_fit_square() {
        let vp = Viewport::fit(&square(), 900.0);
        assert_eq!(vp.width_px, 900.0);
        // 1:1 span keeps a square canvas
        assert!((vp.height_px - 900.0).abs() < 1e-9);
        // 5% of span 10 is 0.5 per side
        assert!((vp.min_lon - -0.5).abs() < 1e-9);
        assert!((vp.max_lon - 10.5).abs() < 1e-9);
        assert!((vp.min_lat - -0.5).abs() < 1e-9);
        assert!((vp.max_lat - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        // 20 wide, 10 tall -> canvas half as tall as wide
        let b = Boundary::new(vec![vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (20.0, 10.0),
            (20.0, 0.0),
            (0.0, 0.0),
        ]]);
        let vp = Viewport::fit(&b, 800.0);
        let geo_ratio = vp.lat_span() / vp.lon_span();
        let px_ratio = vp.height_px / vp.width_px;
        assert!((geo_ratio - px_ratio).abs() < 1e-12);
        assert!((vp.height_px - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_empty_boundary_falls_back() {
        let vp = Viewport::fit(&Boundary::default(), 900.0);
        assert_eq!(vp.min_lon, FALLBACK_MIN_LON);
        assert_eq!(vp.max_lon, FALLBACK_MAX_LON);
        assert_eq!(vp.min_lat, FALLBACK_MIN_LAT);
        assert_eq!(vp.max_lat, FALLBACK_MAX_LAT);
        assert_eq!(vp.width_px, 900.0);
        assert!((vp.height_px - 900.0 * 32.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_degenerate_extent_falls_back() {
        // All points identical: zero span on both axes
        let b = Boundary::new(vec![vec![(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]]);
        let vp = Viewport::fit(&b, 900.0);
        assert_eq!(vp.min_lon, FALLBACK_MIN_LON);
    }

    #[test]
    fn test_fit_invalid_width_uses_default() {
        let vp = Viewport::fit(&square(), f64::NAN);
        assert_eq!(vp.width_px, 900.0);
        let vp = Viewport::fit(&square(), -5.0);
        assert_eq!(vp.width_px, 900.0);
    }

    #[test]
    fn test_pixel_geo_round_trip() {
        let vp = Viewport::fit(&square(), 900.0);
        let lon = vp.lon_at(450.0);
        let lat = vp.lat_at(225.0);
        assert!((vp.x_of(lon) - 450.0).abs() < 1e-9);
        assert!((vp.y_of(lat) - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_orientation() {
        let vp = Viewport::fit(&square(), 900.0);
        // y = 0 is the top of the canvas, which is max latitude
        assert!((vp.lat_at(0.0) - vp.max_lat).abs() < 1e-12);
        assert!((vp.lat_at(vp.height_px) - vp.min_lat).abs() < 1e-12);
        assert!((vp.lon_at(0.0) - vp.min_lon).abs() < 1e-12);
    }
}
