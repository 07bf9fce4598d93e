//! Ellipsoidal transverse Mercator projection on WGS84.
//!
//! Uses the Krüger series in the formulation of Karney (2011), accurate to
//! well under a millimeter across the extent of a UTM zone. The conversion
//! between geodetic and conformal latitude goes through the tangent
//! quantities `tau`/`tau'` so the polar stereographic code can reuse the
//! same Newton inversion.

use crate::core::constants::{FALSE_EASTING, FALSE_NORTHING_SOUTH, UTM_K0, WGS84_A, WGS84_F};

struct Series {
    /// Rectifying radius
    a1: f64,
    /// First eccentricity
    es: f64,
    alpha: [f64; 4],
    beta: [f64; 4],
}

fn wgs84_series() -> Series {
    let n = WGS84_F / (2.0 - WGS84_F);
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    Series {
        a1: WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0),
        es: eccentricity(),
        alpha: [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0,
            49561.0 * n4 / 161280.0,
        ],
        beta: [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0,
            n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0,
            17.0 * n3 / 480.0 - 37.0 * n4 / 840.0,
            4397.0 * n4 / 161280.0,
        ],
    }
}

pub(crate) fn eccentricity() -> f64 {
    (WGS84_F * (2.0 - WGS84_F)).sqrt()
}

/// Geodetic tan(latitude) to conformal tan(latitude).
pub(crate) fn taupf(tau: f64, es: f64) -> f64 {
    let tau1 = tau.hypot(1.0);
    let sig = (es * (es * tau / tau1).atanh()).sinh();
    sig.hypot(1.0) * tau - sig * tau1
}

/// Conformal tan(latitude) back to geodetic, by Newton iteration on `taupf`.
pub(crate) fn tauf(taup: f64, es: f64) -> f64 {
    let e2m = 1.0 - es * es;
    let mut tau = taup / e2m;
    let stol = f64::EPSILON.sqrt() * taup.abs().max(1.0) * 0.1;
    for _ in 0..5 {
        let taupa = taupf(tau, es);
        let dtau =
            (taup - taupa) * (1.0 + e2m * tau * tau) / (e2m * tau.hypot(1.0) * taupa.hypot(1.0));
        tau += dtau;
        if dtau.abs() < stol {
            break;
        }
    }
    tau
}

/// Projects geodetic lat/lon (degrees) to UTM easting/northing in meters,
/// relative to the zone with central meridian `lon0`.
///
/// Callers validate ranges; within them the projection cannot fail.
pub(crate) fn geo_to_utm(lat: f64, lon: f64, lon0: f64) -> (f64, f64) {
    let s = wgs84_series();
    let phi = lat.to_radians();
    let lam = (lon - lon0).to_radians();

    let taup = taupf(phi.tan(), s.es);
    let xip = taup.atan2(lam.cos());
    let etap = (lam.sin() / taup.hypot(lam.cos())).asinh();

    let mut xi = xip;
    let mut eta = etap;
    for (j, a) in s.alpha.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xi += a * (k * xip).sin() * (k * etap).cosh();
        eta += a * (k * xip).cos() * (k * etap).sinh();
    }

    let x = FALSE_EASTING + UTM_K0 * s.a1 * eta;
    let mut y = UTM_K0 * s.a1 * xi;
    if lat < 0.0 {
        y += FALSE_NORTHING_SOUTH;
    }
    (x, y)
}

/// Inverse projection: UTM easting/northing in meters back to geodetic
/// lat/lon in degrees.
pub(crate) fn utm_to_geo(easting: f64, northing: f64, lon0: f64, south: bool) -> (f64, f64) {
    let s = wgs84_series();
    let y = if south {
        northing - FALSE_NORTHING_SOUTH
    } else {
        northing
    };

    let xi = y / (UTM_K0 * s.a1);
    let eta = (easting - FALSE_EASTING) / (UTM_K0 * s.a1);

    let mut xip = xi;
    let mut etap = eta;
    for (j, b) in s.beta.iter().enumerate() {
        let k = 2.0 * (j + 1) as f64;
        xip -= b * (k * xi).sin() * (k * eta).cosh();
        etap -= b * (k * xi).cos() * (k * eta).sinh();
    }

    let taup = xip.sin() / etap.sinh().hypot(xip.cos());
    let lam = etap.sinh().atan2(xip.cos());
    let tau = tauf(taup, s.es);
    (tau.atan().to_degrees(), lon0 + lam.to_degrees())
}
