use crate::position::Position;

/// Mean earth radius in meters, same value leaflet uses for `distanceTo`.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two positions.
pub fn haversine_distance(p1: &Position, p2: &Position) -> f64 {
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();

    let a = f64::sin(d_lat / 2.).powi(2)
        + f64::cos(lat1) * f64::cos(lat2) * f64::sin(d_lon / 2.).powi(2);
    let c = 2. * f64::asin(f64::sqrt(a).min(1.));

    EARTH_RADIUS_M * c
}

/// Sum of the segment distances between consecutive positions.
pub fn polyline_distance<'a>(positions: impl IntoIterator<Item = &'a Position>) -> f64 {
    let mut positions = positions.into_iter();
    let Some(mut prev) = positions.next() else {
        return 0.;
    };

    let mut total = 0.;
    for next in positions {
        total += haversine_distance(prev, next);
        prev = next;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Position::new(56.175188, 10.196123);
        assert_eq!(haversine_distance(&p, &p), 0.);
    }

    #[test]
    fn hundredth_degree_of_longitude_at_equator() {
        let d = haversine_distance(&Position::new(0., 0.), &Position::new(0., 0.01));
        assert!((d - 1111.95).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Position::new(40.3833, 71.7833);
        let b = Position::new(40.3901, 71.7702);
        assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let d = haversine_distance(&Position::new(0., 0.), &Position::new(0., 180.));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-6);
    }

    #[test]
    fn polyline_sums_segments() {
        let points = [
            Position::new(0., 0.),
            Position::new(0., 0.01),
            Position::new(0.01, 0.01),
        ];
        let expected = haversine_distance(&points[0], &points[1]) + haversine_distance(&points[1], &points[2]);
        assert!((polyline_distance(&points) - expected).abs() < 1e-9);
    }

    #[test]
    fn polyline_of_fewer_than_two_points_is_zero() {
        assert_eq!(polyline_distance(&[]), 0.);
        assert_eq!(polyline_distance(&[Position::new(1., 1.)]), 0.);
    }
}
