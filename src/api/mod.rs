pub mod format;
pub mod gzd;
pub mod mgrs;
pub mod mgrs_csv;

pub use format::{MgrsFormat, format_mgrs};
pub use gzd::{GridZone, grid_zones, zone_extent};
pub use mgrs::{Mgrs, to_mgrs, to_wgs};
pub use mgrs_csv::{CoordinateSource, CsvMgrsConfig, CsvToMgrs, GeometryFormat, csv_to_mgrs_csv};
