//! Universal Polar Stereographic projection for the regions above 84N and
//! below 80S where UTM zones collapse.

use crate::core::constants::{UPS_FALSE_ORIGIN, UPS_K0, WGS84_A};
use crate::core::tm::{eccentricity, tauf};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// sqrt((1+e)^(1+e) * (1-e)^(1-e)), the scale constant tying the isometric
/// colatitude to the stereographic radius.
fn conformal_factor(es: f64) -> f64 {
    ((1.0 + es).powf(1.0 + es) * (1.0 - es).powf(1.0 - es)).sqrt()
}

/// Projects geodetic lat/lon (degrees) to UPS easting/northing in meters.
/// The hemisphere is taken from the sign of `lat`; both aspects place the
/// pole at (2,000,000, 2,000,000).
pub(crate) fn geo_to_ups(lat: f64, lon: f64) -> (f64, f64) {
    let es = eccentricity();
    let phi = lat.abs().to_radians();
    let lam = lon.to_radians();

    let s = es * phi.sin();
    let t = (FRAC_PI_4 - phi / 2.0).tan() * ((1.0 + s) / (1.0 - s)).powf(es / 2.0);
    let rho = 2.0 * WGS84_A * UPS_K0 * t / conformal_factor(es);

    let x = UPS_FALSE_ORIGIN + rho * lam.sin();
    let y = if lat >= 0.0 {
        UPS_FALSE_ORIGIN - rho * lam.cos()
    } else {
        UPS_FALSE_ORIGIN + rho * lam.cos()
    };
    (x, y)
}

/// Inverse UPS projection back to geodetic lat/lon in degrees.
pub(crate) fn ups_to_geo(easting: f64, northing: f64, north: bool) -> (f64, f64) {
    let es = eccentricity();
    let dx = easting - UPS_FALSE_ORIGIN;
    let dy = northing - UPS_FALSE_ORIGIN;
    let rho = dx.hypot(dy);

    let t = rho * conformal_factor(es) / (2.0 * WGS84_A * UPS_K0);
    let chi = FRAC_PI_2 - 2.0 * t.atan();
    let lat = tauf(chi.tan(), es).atan().to_degrees();

    let lon = if rho == 0.0 {
        0.0
    } else if north {
        dx.atan2(-dy).to_degrees()
    } else {
        dx.atan2(dy).to_degrees()
    };

    (if north { lat } else { -lat }, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poles_project_to_grid_origin() {
        let (x, y) = geo_to_ups(90.0, 0.0);
        assert!((x - 2_000_000.0).abs() < 1e-6);
        assert!((y - 2_000_000.0).abs() < 1e-6);

        let (x, y) = geo_to_ups(-90.0, 123.0);
        assert!((x - 2_000_000.0).abs() < 1e-6);
        assert!((y - 2_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_north_longitude_zero_decreases_northing() {
        // Grid north points along the 180th meridian in the north aspect.
        let (x, y) = geo_to_ups(87.0, 0.0);
        assert!((x - 2_000_000.0).abs() < 1e-6);
        assert!(y < 2_000_000.0);
    }

    #[test]
    fn test_forward_inverse_roundtrip() {
        for &(lat, lon) in &[
            (87.5, 45.0),
            (84.1, -179.0),
            (89.999, 10.0),
            (-85.0, -120.0),
            (-80.01, 0.0),
            (-89.999, 179.0),
        ] {
            let (x, y) = geo_to_ups(lat, lon);
            let (lat2, lon2) = ups_to_geo(x, y, lat > 0.0);
            assert!((lat - lat2).abs() < 1e-9, "lat {} -> {}", lat, lat2);
            assert!((lon - lon2).abs() < 1e-8, "lon {} -> {}", lon, lon2);
        }
    }

    #[test]
    fn test_pole_inverse() {
        let (lat, lon) = ups_to_geo(2_000_000.0, 2_000_000.0, true);
        assert!((lat - 90.0).abs() < 1e-6);
        assert_eq!(lon, 0.0);
    }
}
