/// Ray-casting point-in-ring test.
///
/// Casts a horizontal ray from the query point toward +lon and toggles on
/// every edge that straddles the query latitude and crosses to the right of
/// the point. Works for any simple ring, convex or not; rings with fewer
/// than 3 points enclose nothing.
pub fn ring_contains(ring: &[(f64, f64)], lon: f64, lat: f64) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];

        if (yi > lat) != (yj > lat) {
            let crossing_x = (xj - xi) * (lat - yi) / (yj - yi) + xi;
            if lon < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [(f64, f64); 5] = [
        (0.0, 0.0),
        (0.0, 10.0),
        (10.0, 10.0),
        (10.0, 0.0),
        (0.0, 0.0),
    ];

    #[test]
    fn test_center_inside() {
        assert!(ring_contains(&SQUARE, 5.0, 5.0));
    }

    #[test]
    fn test_far_outside() {
        assert!(!ring_contains(&SQUARE, 50.0, 50.0));
    }

    #[test]
    fn test_just_outside_each_side() {
        assert!(!ring_contains(&SQUARE, -0.01, 5.0));
        assert!(!ring_contains(&SQUARE, 10.01, 5.0));
        assert!(!ring_contains(&SQUARE, 5.0, -0.01));
        assert!(!ring_contains(&SQUARE, 5.0, 10.01));
    }

    #[test]
    fn test_concave_ring() {
        // L-shape: the notch at the top right is outside
        let ring = [
            (0.0, 0.0),
            (0.0, 10.0),
            (5.0, 10.0),
            (5.0, 5.0),
            (10.0, 5.0),
            (10.0, 0.0),
            (0.0, 0.0),
        ];
        assert!(ring_contains(&ring, 2.0, 8.0));
        assert!(!ring_contains(&ring, 8.0, 8.0));
        assert!(ring_contains(&ring, 8.0, 2.0));
    }

    #[test]
    fn test_degenerate_ring() {
        assert!(!ring_contains(&[], 0.0, 0.0));
        assert!(!ring_contains(&[(0.0, 0.0), (1.0, 1.0)], 0.5, 0.5));
    }

    #[test]
    fn test_unclosed_ring_still_works() {
        // Last-to-first edge is implied by the wraparound in the scan
        let ring = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        assert!(ring_contains(&ring, 5.0, 5.0));
        assert!(!ring_contains(&ring, 15.0, 5.0));
    }
}
