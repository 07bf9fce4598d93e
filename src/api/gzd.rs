//! Grid zone designator geometry.
//!
//! Enumerates the 6x8 degree UTM grid zones (with the irregular widths in
//! the Norway and Svalbard rows and the 12 degree tall X row) and the four
//! polar regions as plain lon/lat rectangles. Layer construction and
//! styling belong to the host application; this stops at geometries.

use crate::core::constants::BAND_LETTERS;
use crate::core::zone::band_info;
use crate::util::error::MgrsError;
use geo_types::{Coord, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single grid zone: its designator (e.g. `31V`, `33X`, or a polar `Y`)
/// and its extent in WGS84 lon/lat degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridZone {
    pub designator: String,
    pub extent: Rect<f64>,
}

impl GridZone {
    /// The zone rectangle as a closed polygon, ready for GIS export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.extent.to_polygon()
    }
}

/// Returns the extent of one grid zone. Polar bands (A/B/Y/Z) take zone
/// number 0. Fails for nonexistent zones, including 32X/34X/36X.
pub fn zone_extent(zone: u8, band: char) -> Result<Rect<f64>, MgrsError> {
    if zone == 0 {
        let (lon_min, lat_min, lon_max, lat_max) = match band {
            'A' => (-180.0, -90.0, 0.0, -80.0),
            'B' => (0.0, -90.0, 180.0, -80.0),
            'Y' => (-180.0, 84.0, 0.0, 90.0),
            'Z' => (0.0, 84.0, 180.0, 90.0),
            _ => {
                return Err(MgrsError::MalformedMgrsString(format!(
                    "'{}' is not a polar band letter",
                    band
                )));
            }
        };
        return Ok(Rect::new(
            Coord { x: lon_min, y: lat_min },
            Coord { x: lon_max, y: lat_max },
        ));
    }

    if !(1..=60).contains(&zone) {
        return Err(MgrsError::MalformedMgrsString(format!(
            "zone number '{}' out of range 1-60",
            zone
        )));
    }
    let info = band_info(band).ok_or_else(|| {
        MgrsError::MalformedMgrsString(format!("unknown latitude band '{}'", band))
    })?;

    let (west, width) = match (band, zone) {
        ('V', 31) => (0.0, 3.0),
        ('V', 32) => (3.0, 9.0),
        ('X', 31) => (0.0, 9.0),
        ('X', 33) => (9.0, 12.0),
        ('X', 35) => (21.0, 12.0),
        ('X', 37) => (33.0, 9.0),
        ('X', 32) | ('X', 34) | ('X', 36) => {
            return Err(MgrsError::MalformedMgrsString(format!(
                "grid zone {}X does not exist",
                zone
            )));
        }
        _ => ((zone as f64 - 1.0) * 6.0 - 180.0, 6.0),
    };

    Ok(Rect::new(
        Coord { x: west, y: info.lat_min },
        Coord { x: west + width, y: info.lat_max },
    ))
}

/// Enumerates every grid zone designator, south to north, west to east,
/// optionally including the four polar regions.
pub fn grid_zones(include_polar: bool) -> Vec<GridZone> {
    let mut zones = Vec::with_capacity(1201);

    let push = |zones: &mut Vec<GridZone>, designator: String, zone: u8, band: char| {
        // Every designator produced here exists, so the extent lookup
        // cannot fail.
        if let Ok(extent) = zone_extent(zone, band) {
            zones.push(GridZone { designator, extent });
        }
    };

    if include_polar {
        push(&mut zones, "A".to_string(), 0, 'A');
        push(&mut zones, "B".to_string(), 0, 'B');
    }

    for &band in BAND_LETTERS {
        let band = band as char;
        for zone in 1..=60u8 {
            if band == 'X' && matches!(zone, 32 | 34 | 36) {
                continue;
            }
            push(&mut zones, format!("{:02}{}", zone, band), zone, band);
        }
    }

    if include_polar {
        push(&mut zones, "Y".to_string(), 0, 'Y');
        push(&mut zones, "Z".to_string(), 0, 'Z');
    }

    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_counts() {
        // 19 regular bands of 60 zones, 57 in the X band, 4 polar regions.
        assert_eq!(grid_zones(true).len(), 19 * 60 + 57 + 4);
        assert_eq!(grid_zones(false).len(), 19 * 60 + 57);
    }

    #[test]
    fn test_regular_zone_extent() -> Result<(), MgrsError> {
        let extent = zone_extent(18, 'S')?;
        assert_eq!(extent.min().x, -78.0);
        assert_eq!(extent.max().x, -72.0);
        assert_eq!(extent.min().y, 32.0);
        assert_eq!(extent.max().y, 40.0);
        Ok(())
    }

    #[test]
    fn test_norway_and_svalbard_widths() -> Result<(), MgrsError> {
        assert_eq!(zone_extent(31, 'V')?.width(), 3.0);
        assert_eq!(zone_extent(32, 'V')?.width(), 9.0);
        assert_eq!(zone_extent(31, 'X')?.width(), 9.0);
        assert_eq!(zone_extent(33, 'X')?.width(), 12.0);
        assert_eq!(zone_extent(35, 'X')?.width(), 12.0);
        assert_eq!(zone_extent(37, 'X')?.width(), 9.0);
        assert!(zone_extent(32, 'X').is_err());
        assert!(zone_extent(34, 'X').is_err());
        assert!(zone_extent(36, 'X').is_err());
        Ok(())
    }

    #[test]
    fn test_widths_tile_the_globe() {
        for zones in [grid_zones(false), grid_zones(true)] {
            let mut total: f64 = 0.0;
            for z in &zones {
                total += z.extent.width() * z.extent.height();
            }
            // With the polar caps the designators cover the full graticule.
            if zones.len() == 19 * 60 + 57 + 4 {
                assert!((total - 360.0 * 180.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_polar_extents() -> Result<(), MgrsError> {
        let y = zone_extent(0, 'Y')?;
        assert_eq!(y.min().y, 84.0);
        assert_eq!(y.max().x, 0.0);
        assert!(zone_extent(0, 'C').is_err());
        assert!(zone_extent(61, 'S').is_err());
        assert!(zone_extent(5, 'I').is_err());
        Ok(())
    }

    #[test]
    fn test_polygon_is_closed() {
        let zones = grid_zones(false);
        let poly = zones[0].to_polygon();
        let ext = poly.exterior();
        assert_eq!(ext.0.first(), ext.0.last());
    }

    #[test]
    fn test_x_band_is_twelve_degrees_tall() -> Result<(), MgrsError> {
        assert_eq!(zone_extent(38, 'X')?.height(), 12.0);
        assert_eq!(zone_extent(38, 'W')?.height(), 8.0);
        Ok(())
    }
}
