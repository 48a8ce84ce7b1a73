//! Great-circle geometry for provider distances.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance between two points, in kilometers.
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOL: Coordinates = Coordinates::new(40.4168, -3.7038);
    const RETIRO: Coordinates = Coordinates::new(40.4110, -3.6760);

    #[test]
    fn test_distance_is_zero_at_same_point() {
        assert_eq!(distance_km(SOL, SOL), 0.0);
    }

    #[test]
    fn test_distance_is_non_negative_and_symmetric() {
        let there = distance_km(SOL, RETIRO);
        let back = distance_km(RETIRO, SOL);
        assert!(there > 0.0);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_distance_matches_known_pair() {
        // Sol to Retiro park is roughly two and a half kilometers.
        let d = distance_km(SOL, RETIRO);
        assert!(d > 2.0 && d < 3.0, "got {d}");
    }
}
