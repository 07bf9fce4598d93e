//! A Rust implementation of the MGRS (Military Grid Reference System)
//! coordinate codec, with built-in UTM and UPS projection math.
//!
//! MGRS references name square cells on the WGS84 ellipsoid at precisions
//! from 100 km down to 1 m. Encoding truncates a position to the cell that
//! contains it; decoding returns the centre of the named cell.
//!
//! The main entry points are:
//!
//! - [`to_mgrs`] / [`to_wgs`]: string-level conversion
//! - [`Mgrs`]: the parsed reference type, with [`Mgrs::from_latlon`],
//!   [`Mgrs::to_latlon`] and [`std::str::FromStr`]
//! - [`MgrsFormat`]: display options (spacing, prefix/suffix)
//! - [`zone_extent`] / [`grid_zones`]: grid zone designator polygons
//! - [`csv_to_mgrs_csv`]: batch conversion of CSV files
//!
//! # Example
//!
//! ```
//! use mgrs_rs::{to_mgrs, to_wgs};
//!
//! let reference = to_mgrs(38.8895, -77.0352, 5).unwrap();
//! assert_eq!(reference, "18SUJ2348606483");
//!
//! let (lat, lon) = to_wgs("18SUJ2348606483").unwrap();
//! assert!((lat - 38.8895).abs() < 0.0001);
//! assert!((lon - (-77.0352)).abs() < 0.0001);
//! ```
//!
//! # Example: parsed references
//!
//! ```
//! use mgrs_rs::{Mgrs, MgrsFormat};
//!
//! let mgrs: Mgrs = "18s uj 23486 06483".parse().unwrap();
//! assert_eq!(mgrs.zone, 18);
//! assert_eq!(mgrs.precision, 5);
//! assert_eq!(mgrs.format(&MgrsFormat::new().with_spaces()), "18S UJ 23486 06483");
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::format::{MgrsFormat, format_mgrs};
pub use crate::api::gzd::{GridZone, grid_zones, zone_extent};
pub use crate::api::mgrs::{Mgrs, to_mgrs, to_wgs};
pub use crate::api::mgrs_csv::{
    CoordinateSource, CsvMgrsConfig, CsvToMgrs, GeometryFormat, csv_to_mgrs_csv,
};
pub use crate::core::{BAND_LETTERS, MAX_PRECISION, band_letter, central_meridian, zone_number};
pub use crate::util::coord::LonLat;
pub use crate::util::error::MgrsError;

// Re-export so callers can use geometry types without a separate dependency
pub use geo_types;
