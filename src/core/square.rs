//! 100 km square identifier letters.
//!
//! UTM squares use the repeating 24-letter column cycle (offset by zone
//! number mod 3) and 20-letter row cycle (offset half a cycle for even
//! zones). UPS squares use the fixed per-quadrant letter tables of the
//! NGA specification, which additionally skip D, E, M, N, V and W in the
//! column direction so no square can be mistaken for a UTM one.

use crate::core::constants::{COLUMN_LETTERS, ROW_CYCLE, ROW_LETTERS, SQUARE_SIZE};
use crate::core::zone::band_info;

/// Column letter for a UTM easting in meters.
pub(crate) fn column_letter(zone: u8, easting: f64) -> char {
    let col = (easting / SQUARE_SIZE).floor() as usize;
    let start = ((zone - 1) % 3) as usize * 8;
    COLUMN_LETTERS[start + col - 1] as char
}

/// Row letter for a UTM northing in meters.
pub(crate) fn row_letter(zone: u8, northing: f64) -> char {
    let row = ((northing / SQUARE_SIZE).floor() as i64).rem_euclid(20) as usize;
    let offset = if zone % 2 == 0 { 5 } else { 0 };
    ROW_LETTERS[(row + offset) % 20] as char
}

/// Column index (1-8) within the zone for a column letter, or `None` when
/// the letter does not belong to the zone's 8-letter window.
pub(crate) fn column_index(zone: u8, letter: char) -> Option<u32> {
    let pos = COLUMN_LETTERS.iter().position(|&b| b == letter as u8)?;
    let start = ((zone - 1) % 3) as usize * 8;
    if (start..start + 8).contains(&pos) {
        Some((pos - start + 1) as u32)
    } else {
        None
    }
}

/// Absolute northing (meters, multiple of 100 km) of a row letter's square
/// edge, resolved against the latitude band's minimum northing to pick the
/// right 2,000,000 m cycle.
pub(crate) fn row_northing(zone: u8, letter: char, band: char) -> Option<f64> {
    let pos = ROW_LETTERS.iter().position(|&b| b == letter as u8)?;
    let offset = if zone % 2 == 0 { 5 } else { 0 };
    let row = (pos + 20 - offset) % 20;

    let min_northing = band_info(band)?.min_northing;
    let mut northing = row as f64 * SQUARE_SIZE;
    while northing < min_northing {
        northing += ROW_CYCLE;
    }
    Some(northing)
}

/// One of the four UPS quadrants, keyed by its polar band letter.
pub(crate) struct UpsQuadrant {
    pub(crate) band: char,
    pub(crate) north: bool,
    pub(crate) east: bool,
    /// Alphabet index of the first column letter, before skips.
    col_low: u8,
    /// Highest valid row index (rows count from the false northing).
    pub(crate) max_row: u32,
    pub(crate) false_easting: f64,
    pub(crate) false_northing: f64,
}

pub(crate) const UPS_QUADRANTS: [UpsQuadrant; 4] = [
    UpsQuadrant { band: 'A', north: false, east: false, col_low: 9, max_row: 23, false_easting: 800_000.0, false_northing: 800_000.0 },
    UpsQuadrant { band: 'B', north: false, east: true, col_low: 0, max_row: 23, false_easting: 2_000_000.0, false_northing: 800_000.0 },
    UpsQuadrant { band: 'Y', north: true, east: false, col_low: 9, max_row: 13, false_easting: 800_000.0, false_northing: 1_300_000.0 },
    UpsQuadrant { band: 'Z', north: true, east: true, col_low: 0, max_row: 13, false_easting: 2_000_000.0, false_northing: 1_300_000.0 },
];

pub(crate) fn ups_quadrant(band: char) -> Option<&'static UpsQuadrant> {
    UPS_QUADRANTS.iter().find(|q| q.band == band)
}

/// Polar band letter for a hemisphere and UPS easting.
pub(crate) fn ups_band(north: bool, easting: f64) -> char {
    let east = easting >= 2_000_000.0;
    match (north, east) {
        (true, true) => 'Z',
        (true, false) => 'Y',
        (false, true) => 'B',
        (false, false) => 'A',
    }
}

/// Column letter for a 0-based UPS column index (each quadrant spans 12
/// columns of 100 km).
pub(crate) fn ups_column_letter(quad: &UpsQuadrant, col: u32) -> char {
    let mut v = quad.col_low as u32 + col;
    if quad.east {
        if v > 2 {
            v += 2; // skip D, E
        }
        if v > 7 {
            v += 1; // skip I
        }
        if v > 11 {
            v += 3; // skip M, N, O
        }
    } else {
        if v > 11 {
            v += 3; // skip M, N, O
        }
        if v > 20 {
            v += 2; // skip V, W
        }
    }
    (b'A' + v as u8) as char
}

/// Inverse of `ups_column_letter`: 0-based column index, or `None` when the
/// letter is not a column of this quadrant.
pub(crate) fn ups_column_index(quad: &UpsQuadrant, letter: char) -> Option<u32> {
    (0..12).find(|&col| ups_column_letter(quad, col) == letter)
}

/// Row letter for a 0-based UPS row index.
pub(crate) fn ups_row_letter(row: u32) -> char {
    let mut v = row;
    if v > 7 {
        v += 1; // skip I
    }
    if v > 13 {
        v += 1; // skip O
    }
    (b'A' + v as u8) as char
}

/// Inverse of `ups_row_letter`. Rejects I and O; quadrant row limits are
/// checked by the caller.
pub(crate) fn ups_row_index(letter: char) -> Option<u32> {
    if !letter.is_ascii_uppercase() || letter == 'I' || letter == 'O' {
        return None;
    }
    let v = letter as u32 - 'A' as u32;
    if v > 14 {
        Some(v - 2)
    } else if v > 8 {
        Some(v - 1)
    } else {
        Some(v)
    }
}
