//! Great-circle distance helpers for path summaries.
//!
//! Uses a spherical earth model. Positions are never modified here; these
//! functions only measure what was observed.

use std::f64::consts::PI;

use crate::tracking::Position;

/// Mean earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Great-circle distance between two positions in kilometres (haversine).
pub fn great_circle_distance_km(from: &Position, to: &Position) -> f64 {
    let lat1 = from.latitude() * DEG_TO_RAD;
    let lat2 = to.latitude() * DEG_TO_RAD;
    let dlat = lat2 - lat1;
    let dlon = (to.longitude() - from.longitude()) * DEG_TO_RAD;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Total length of a path in kilometres, following consecutive fixes.
pub fn path_length_km(path: &[Position]) -> f64 {
    path.windows(2)
        .map(|pair| great_circle_distance_km(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(latitude: f64, longitude: f64) -> Position {
        Position::new(latitude, longitude, 0).unwrap()
    }

    #[test]
    fn test_zero_distance() {
        let p = fix(51.5074, -0.1278);
        assert_eq!(great_circle_distance_km(&p, &p), 0.0);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = great_circle_distance_km(&fix(0.0, 0.0), &fix(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.01, "d = {d}");
    }

    #[test]
    fn test_london_to_paris() {
        let london = fix(51.5074, -0.1278);
        let paris = fix(48.8566, 2.3522);
        let d = great_circle_distance_km(&london, &paris);
        assert!((d - 343.5).abs() < 1.0, "d = {d}");
    }

    #[test]
    fn test_crossing_antimeridian_takes_short_way() {
        let d = great_circle_distance_km(&fix(0.0, 179.5), &fix(0.0, -179.5));
        assert!((d - 111.195).abs() < 0.01, "d = {d}");
    }

    #[test]
    fn test_antipodes() {
        let d = great_circle_distance_km(&fix(0.0, 0.0), &fix(0.0, 180.0));
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[fix(10.0, 10.0)]), 0.0);

        let path = [fix(0.0, 0.0), fix(0.0, 1.0), fix(0.0, 2.0)];
        assert!((path_length_km(&path) - 2.0 * 111.195).abs() < 0.02);
    }
}
