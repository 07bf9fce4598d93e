use crate::api::gzd::zone_extent;
use crate::core::constants::{
    BAND_LETTERS, BAND_TOLERANCE, MAX_PRECISION, SQUARE_SIZE, UTM_NORTH_LIMIT, UTM_SOUTH_LIMIT,
};
use crate::core::polar::{geo_to_ups, ups_to_geo};
use crate::core::square::{
    column_index, column_letter, row_letter, row_northing, ups_band, ups_column_index,
    ups_column_letter, ups_quadrant, ups_row_index, ups_row_letter,
};
use crate::core::tm::{geo_to_utm, utm_to_geo};
use crate::core::zone::{band_info, band_letter, central_meridian, zone_number};
use crate::util::coord::LonLat;
use crate::util::error::MgrsError;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed MGRS grid reference.
///
/// Polar (UPS) references carry `zone` 0 and one of the bands A, B, Y, Z.
/// `easting`/`northing` are meters east/north of the 100 km square's
/// southwest corner, already truncated to the stored precision; a reference
/// without square letters (a bare grid zone designator) has `square: None`.
///
/// # Example
///
/// ```
/// use mgrs_rs::Mgrs;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let mgrs = Mgrs::from_latlon(38.8895, -77.0352, 5)?;
/// assert_eq!(mgrs.to_string(), "18SUJ2348606483");
///
/// let back: Mgrs = "18S UJ 23486 06483".parse()?;
/// assert_eq!(back, mgrs);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mgrs {
    /// UTM zone number (1-60), or 0 for polar references
    pub zone: u8,
    /// Latitude band letter C-X, or polar band A/B/Y/Z
    pub band: char,
    /// 100 km square column/row letters, absent for a bare zone designator
    pub square: Option<[char; 2]>,
    /// Meters east of the square's western edge, truncated to `precision`
    pub easting: u32,
    /// Meters north of the square's southern edge, truncated to `precision`
    pub northing: u32,
    /// Number of digit pairs (0-5)
    pub precision: u8,
}

/// Converts a latitude/longitude to an MGRS string.
///
/// # Example
///
/// ```
/// use mgrs_rs::to_mgrs;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// assert_eq!(to_mgrs(0.0, 0.0, 5)?, "31NAA6602100000");
/// assert_eq!(to_mgrs(61.0, 5.0, 3)?, "32VKN837693");
/// # Ok(())
/// # }
/// ```
pub fn to_mgrs(lat: f64, lon: f64, precision: u8) -> Result<String, MgrsError> {
    Ok(Mgrs::from_latlon(lat, lon, precision)?.to_string())
}

/// Converts an MGRS string to the latitude/longitude at the center of the
/// cell it names. Embedded whitespace and lowercase input are tolerated.
///
/// # Example
///
/// ```
/// use mgrs_rs::to_wgs;
///
/// # fn main() -> Result<(), mgrs_rs::MgrsError> {
/// let (lat, lon) = to_wgs("18s uj 23486 06483")?;
/// assert!((lat - 38.8895).abs() < 0.0001);
/// assert!((lon + 77.0352).abs() < 0.0001);
/// # Ok(())
/// # }
/// ```
pub fn to_wgs(s: &str) -> Result<(f64, f64), MgrsError> {
    s.parse::<Mgrs>()?.to_latlon()
}

impl Mgrs {
    /// Encodes a WGS84 latitude/longitude at the given precision level
    /// (0 = 100 km squares, 5 = 1 m).
    ///
    /// Latitudes above 84N or below 80S use the polar stereographic grid;
    /// longitude is normalized to [-180, 180) first.
    pub fn from_latlon(lat: f64, lon: f64, precision: u8) -> Result<Self, MgrsError> {
        if precision > MAX_PRECISION {
            return Err(MgrsError::InvalidPrecision(precision));
        }
        if !lat.is_finite() || !lon.is_finite() {
            return Err(MgrsError::InvalidCoordinate(format!(
                "non-finite input ({}, {})",
                lat, lon
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(MgrsError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;

        if lat > UTM_NORTH_LIMIT || lat < UTM_SOUTH_LIMIT {
            Self::encode_ups(lat, lon, precision)
        } else {
            Self::encode_utm(lat, lon, precision)
        }
    }

    /// Like [`Mgrs::from_latlon`] for anything implementing [`LonLat`].
    pub fn from_point(coord: &impl LonLat, precision: u8) -> Result<Self, MgrsError> {
        Self::from_latlon(coord.lat(), coord.lon(), precision)
    }

    fn encode_utm(lat: f64, lon: f64, precision: u8) -> Result<Self, MgrsError> {
        let zone = zone_number(lat, lon);
        let (x, y) = geo_to_utm(lat, lon, central_meridian(zone));

        let col = column_letter(zone, x);
        let row = row_letter(zone, y);
        let div = cell_size(precision);
        Ok(Self {
            zone,
            band: band_letter(lat),
            square: Some([col, row]),
            easting: truncate(x, div),
            northing: truncate(y, div),
            precision,
        })
    }

    fn encode_ups(lat: f64, lon: f64, precision: u8) -> Result<Self, MgrsError> {
        let (x, y) = geo_to_ups(lat, lon);
        let band = ups_band(lat > 0.0, x);
        let quad = ups_quadrant(band).ok_or_else(|| {
            MgrsError::InvalidCoordinate(format!("no UPS quadrant for band {}", band))
        })?;

        let col = ((x - quad.false_easting) / SQUARE_SIZE).floor() as u32;
        let row = ((y - quad.false_northing) / SQUARE_SIZE).floor() as u32;
        let div = cell_size(precision);
        Ok(Self {
            zone: 0,
            band,
            square: Some([ups_column_letter(quad, col), ups_row_letter(row)]),
            easting: truncate(x, div),
            northing: truncate(y, div),
            precision,
        })
    }

    /// Decodes this reference to the WGS84 latitude/longitude at the center
    /// of the cell it names. A bare zone designator resolves to the center
    /// of the grid zone polygon.
    pub fn to_latlon(&self) -> Result<(f64, f64), MgrsError> {
        let Some([col, row]) = self.square else {
            let extent = zone_extent(self.zone, self.band)?;
            return Ok((extent.center().y, extent.center().x));
        };

        if self.zone == 0 {
            self.decode_ups(col, row)
        } else {
            self.decode_utm(col, row)
        }
    }

    /// Like [`Mgrs::to_latlon`] but packaged as a `geo_types` point
    /// (x = longitude, y = latitude).
    pub fn to_point(&self) -> Result<Point<f64>, MgrsError> {
        let (lat, lon) = self.to_latlon()?;
        Ok(Point::new(lon, lat))
    }

    fn decode_utm(&self, col: char, row: char) -> Result<(f64, f64), MgrsError> {
        let band = band_info(self.band).ok_or_else(|| {
            MgrsError::MalformedMgrsString(format!("unknown latitude band '{}'", self.band))
        })?;
        let e100k = column_index(self.zone, col).ok_or_else(|| {
            MgrsError::MalformedMgrsString(format!(
                "column letter '{}' is not valid in zone {}",
                col, self.zone
            ))
        })?;
        let n_base = row_northing(self.zone, row, self.band).ok_or_else(|| {
            MgrsError::MalformedMgrsString(format!("invalid row letter '{}'", row))
        })?;

        let half = cell_size(self.precision) as f64 / 2.0;
        let x = e100k as f64 * SQUARE_SIZE + self.easting as f64 + half;
        let y = n_base + self.northing as f64 + half;

        let south = band.lat_max <= 0.0;
        let (lat, lon) = utm_to_geo(x, y, central_meridian(self.zone), south);

        if lat < band.lat_min - BAND_TOLERANCE || lat > band.lat_max + BAND_TOLERANCE {
            return Err(MgrsError::InvalidCoordinate(format!(
                "decoded latitude {:.4} lies outside band {}",
                lat, self.band
            )));
        }
        Ok((lat, lon))
    }

    fn decode_ups(&self, col: char, row: char) -> Result<(f64, f64), MgrsError> {
        let quad = ups_quadrant(self.band).ok_or_else(|| {
            MgrsError::MalformedMgrsString(format!("unknown polar band '{}'", self.band))
        })?;
        let col_idx = ups_column_index(quad, col).ok_or_else(|| {
            MgrsError::MalformedMgrsString(format!(
                "column letter '{}' is not valid in band {}",
                col, self.band
            ))
        })?;
        let row_idx = ups_row_index(row)
            .filter(|&r| r <= quad.max_row)
            .ok_or_else(|| {
                MgrsError::MalformedMgrsString(format!(
                    "row letter '{}' is not valid in band {}",
                    row, self.band
                ))
            })?;

        let half = cell_size(self.precision) as f64 / 2.0;
        let x = quad.false_easting + col_idx as f64 * SQUARE_SIZE + self.easting as f64 + half;
        let y = quad.false_northing + row_idx as f64 * SQUARE_SIZE + self.northing as f64 + half;

        let (lat, lon) = ups_to_geo(x, y, quad.north);
        let ok = if quad.north {
            lat >= UTM_NORTH_LIMIT - BAND_TOLERANCE
        } else {
            lat <= UTM_SOUTH_LIMIT + BAND_TOLERANCE
        };
        if !ok {
            return Err(MgrsError::InvalidCoordinate(format!(
                "decoded latitude {:.4} lies outside polar band {}",
                lat, self.band
            )));
        }
        Ok((lat, lon))
    }

    /// True for UPS references (bands A, B, Y, Z).
    pub fn is_polar(&self) -> bool {
        self.zone == 0
    }
}

/// Meters covered by one cell at a precision level.
fn cell_size(precision: u8) -> u32 {
    10u32.pow((MAX_PRECISION - precision) as u32)
}

fn truncate(meters: f64, div: u32) -> u32 {
    (meters.rem_euclid(SQUARE_SIZE) / div as f64).floor() as u32 * div
}

impl fmt::Display for Mgrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.zone > 0 {
            write!(f, "{:02}", self.zone)?;
        }
        write!(f, "{}", self.band)?;
        if let Some([col, row]) = self.square {
            write!(f, "{}{}", col, row)?;
            if self.precision > 0 {
                let div = cell_size(self.precision);
                write!(
                    f,
                    "{:0width$}{:0width$}",
                    self.easting / div,
                    self.northing / div,
                    width = self.precision as usize
                )?;
            }
        }
        Ok(())
    }
}

impl FromStr for Mgrs {
    type Err = MgrsError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        if s.is_empty() {
            return Err(MgrsError::MalformedMgrsString("empty string".to_string()));
        }
        if !s.is_ascii() {
            return Err(MgrsError::MalformedMgrsString(format!(
                "unexpected characters in '{}'",
                input.trim()
            )));
        }

        let bytes = s.as_bytes();
        let zone_digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if zone_digits > 2 {
            return Err(MgrsError::MalformedMgrsString(format!(
                "zone number '{}' out of range 1-60",
                &s[..zone_digits]
            )));
        }
        let zone: u8 = if zone_digits > 0 {
            let zone = s[..zone_digits]
                .parse()
                .map_err(|_| MgrsError::MalformedMgrsString("invalid zone number".to_string()))?;
            if !(1..=60).contains(&zone) {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "zone number '{}' out of range 1-60",
                    zone
                )));
            }
            zone
        } else {
            0
        };

        let rest = &s[zone_digits..];
        let band = rest.chars().next().ok_or_else(|| {
            MgrsError::MalformedMgrsString("missing latitude band letter".to_string())
        })?;
        if zone > 0 {
            if !BAND_LETTERS.contains(&(band as u8)) {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "unknown latitude band '{}'",
                    band
                )));
            }
            // Zones swallowed by the Svalbard exception do not exist.
            if band == 'X' && matches!(zone, 32 | 34 | 36) {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "grid zone {}X does not exist",
                    zone
                )));
            }
        } else if !matches!(band, 'A' | 'B' | 'Y' | 'Z') {
            return Err(MgrsError::MalformedMgrsString(format!(
                "'{}' is not a polar band letter",
                band
            )));
        }

        let rest = &rest[1..];
        if rest.is_empty() {
            return Ok(Self {
                zone,
                band,
                square: None,
                easting: 0,
                northing: 0,
                precision: 0,
            });
        }
        if rest.len() < 2 {
            return Err(MgrsError::MalformedMgrsString(
                "incomplete 100km square identifier".to_string(),
            ));
        }

        let square = &rest[..2];
        let (col, row) = {
            let mut chars = square.chars();
            (chars.next().unwrap_or(' '), chars.next().unwrap_or(' '))
        };
        for c in [col, row] {
            if !c.is_ascii_uppercase() || c == 'I' || c == 'O' {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "invalid 100km square letter '{}'",
                    c
                )));
            }
        }
        if zone > 0 {
            if column_index(zone, col).is_none() {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "column letter '{}' is not valid in zone {}",
                    col, zone
                )));
            }
            if row_northing(zone, row, band).is_none() {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "invalid row letter '{}'",
                    row
                )));
            }
        } else {
            let quad = ups_quadrant(band).ok_or_else(|| {
                MgrsError::MalformedMgrsString(format!("unknown polar band '{}'", band))
            })?;
            if ups_column_index(quad, col).is_none() {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "column letter '{}' is not valid in band {}",
                    col, band
                )));
            }
            if ups_row_index(row).filter(|&r| r <= quad.max_row).is_none() {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "row letter '{}' is not valid in band {}",
                    row, band
                )));
            }
        }

        let digits = &rest[2..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MgrsError::MalformedMgrsString(format!(
                "unexpected characters after square identifier in '{}'",
                input.trim()
            )));
        }
        if digits.len() % 2 != 0 {
            return Err(MgrsError::MalformedMgrsString(format!(
                "odd number of position digits ({})",
                digits.len()
            )));
        }
        if digits.len() > 10 {
            return Err(MgrsError::MalformedMgrsString(format!(
                "too many position digits ({})",
                digits.len()
            )));
        }

        let precision = (digits.len() / 2) as u8;
        let div = cell_size(precision);
        let (easting, northing) = if precision > 0 {
            let p = precision as usize;
            let e: u32 = digits[..p].parse().map_err(|_| {
                MgrsError::MalformedMgrsString("invalid easting digits".to_string())
            })?;
            let n: u32 = digits[p..].parse().map_err(|_| {
                MgrsError::MalformedMgrsString("invalid northing digits".to_string())
            })?;
            (e * div, n * div)
        } else {
            (0, 0)
        };

        Ok(Self {
            zone,
            band,
            square: Some([col, row]),
            easting,
            northing,
            precision,
        })
    }
}
