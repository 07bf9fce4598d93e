//! Grid zone derivation: zone numbers with the Norway/Svalbard width
//! exceptions, latitude band letters, and the per-band minimum-northing
//! table used to resolve row letters on decode.

use crate::core::constants::BAND_LETTERS;

/// One latitude band of the MGRS scheme.
pub(crate) struct LatBand {
    pub(crate) letter: u8,
    /// Smallest UTM northing occurring inside the band.
    pub(crate) min_northing: f64,
    pub(crate) lat_min: f64,
    pub(crate) lat_max: f64,
}

/// Bands C through X, bottom to top. Minimum northings follow the
/// NGA/GEOTRANS latitude band table; southern bands use the
/// 10,000,000 m false-northing convention.
pub(crate) const LAT_BANDS: [LatBand; 20] = [
    LatBand { letter: b'C', min_northing: 1_100_000.0, lat_min: -80.0, lat_max: -72.0 },
    LatBand { letter: b'D', min_northing: 2_000_000.0, lat_min: -72.0, lat_max: -64.0 },
    LatBand { letter: b'E', min_northing: 2_800_000.0, lat_min: -64.0, lat_max: -56.0 },
    LatBand { letter: b'F', min_northing: 3_700_000.0, lat_min: -56.0, lat_max: -48.0 },
    LatBand { letter: b'G', min_northing: 4_600_000.0, lat_min: -48.0, lat_max: -40.0 },
    LatBand { letter: b'H', min_northing: 5_500_000.0, lat_min: -40.0, lat_max: -32.0 },
    LatBand { letter: b'J', min_northing: 6_400_000.0, lat_min: -32.0, lat_max: -24.0 },
    LatBand { letter: b'K', min_northing: 7_300_000.0, lat_min: -24.0, lat_max: -16.0 },
    LatBand { letter: b'L', min_northing: 8_200_000.0, lat_min: -16.0, lat_max: -8.0 },
    LatBand { letter: b'M', min_northing: 9_100_000.0, lat_min: -8.0, lat_max: 0.0 },
    LatBand { letter: b'N', min_northing: 0.0, lat_min: 0.0, lat_max: 8.0 },
    LatBand { letter: b'P', min_northing: 800_000.0, lat_min: 8.0, lat_max: 16.0 },
    LatBand { letter: b'Q', min_northing: 1_700_000.0, lat_min: 16.0, lat_max: 24.0 },
    LatBand { letter: b'R', min_northing: 2_600_000.0, lat_min: 24.0, lat_max: 32.0 },
    LatBand { letter: b'S', min_northing: 3_500_000.0, lat_min: 32.0, lat_max: 40.0 },
    LatBand { letter: b'T', min_northing: 4_400_000.0, lat_min: 40.0, lat_max: 48.0 },
    LatBand { letter: b'U', min_northing: 5_300_000.0, lat_min: 48.0, lat_max: 56.0 },
    LatBand { letter: b'V', min_northing: 6_200_000.0, lat_min: 56.0, lat_max: 64.0 },
    LatBand { letter: b'W', min_northing: 7_000_000.0, lat_min: 64.0, lat_max: 72.0 },
    LatBand { letter: b'X', min_northing: 7_900_000.0, lat_min: 72.0, lat_max: 84.0 },
];

pub(crate) fn band_info(letter: char) -> Option<&'static LatBand> {
    LAT_BANDS.iter().find(|b| b.letter == letter as u8)
}

/// Returns the UTM zone number (1-60) for a point, applying the widened
/// Norway zone (32V) and the widened Svalbard zones (31X/33X/35X/37X).
///
/// `lon` must already be normalized to [-180, 180).
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    let zone = (((lon + 180.0) / 6.0).floor() as i32).rem_euclid(60) as u8 + 1;

    // Norway: band V, zone 32 stretches west to 3E.
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }
    // Svalbard: band X (including its 84N top edge) drops zones 32/34/36.
    if (72.0..=84.0).contains(&lat) {
        if (0.0..9.0).contains(&lon) {
            return 31;
        }
        if (9.0..21.0).contains(&lon) {
            return 33;
        }
        if (21.0..33.0).contains(&lon) {
            return 35;
        }
        if (33.0..42.0).contains(&lon) {
            return 37;
        }
    }
    zone
}

/// Central meridian of a UTM zone in degrees.
pub fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 177.0
}

/// Latitude band letter for a UTM latitude in [-80, 84].
pub fn band_letter(lat: f64) -> char {
    let idx = (((lat + 80.0) / 8.0).floor() as i32).clamp(0, 19);
    BAND_LETTERS[idx as usize] as char
}
