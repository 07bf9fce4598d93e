use crate::api::format::MgrsFormat;
use crate::api::mgrs::Mgrs;
use crate::util::error::MgrsError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use wkt::Wkt;

/// Resolved header indices for the configured source.
enum SourceIndices {
    Mgrs(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
    Geometry(usize),
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A column of MGRS strings to decode into latitude/longitude
    MgrsColumn(String),
    /// Separate longitude and latitude columns to encode
    LonLatColumns { lon_column: String, lat_column: String },
    /// A single column containing WKT or GeoJSON geometry to encode
    /// (non-point geometries are reduced to their centroid)
    GeometryColumn(String),
}

/// Output format for generated point geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POINT(...)")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Configuration for CSV to MGRS conversion.
#[derive(Debug, Clone)]
pub struct CsvMgrsConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    /// Precision level for encoded references (ignored when decoding)
    pub precision: u8,
    /// Display options for encoded references
    pub format: MgrsFormat,
    /// Emit a point geometry column when decoding an MGRS column
    pub include_point_geometry: Option<GeometryFormat>,
}

impl CsvMgrsConfig {
    /// Create config that decodes a column of MGRS strings into
    /// latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use mgrs_rs::CsvMgrsConfig;
    ///
    /// let config = CsvMgrsConfig::from_mgrs("mgrs");
    /// ```
    pub fn from_mgrs(column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::MgrsColumn(column.into()),
            exclude_columns: Vec::new(),
            precision: 5,
            format: MgrsFormat::default(),
            include_point_geometry: None,
        }
    }

    /// Create config that encodes separate lon/lat columns into an MGRS
    /// column.
    ///
    /// # Example
    /// ```
    /// use mgrs_rs::CsvMgrsConfig;
    ///
    /// let config = CsvMgrsConfig::from_lonlat("Longitude", "Latitude", 5);
    /// ```
    pub fn from_lonlat(
        lon_column: impl Into<String>,
        lat_column: impl Into<String>,
        precision: u8,
    ) -> Self {
        Self {
            source: CoordinateSource::LonLatColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            precision,
            format: MgrsFormat::default(),
            include_point_geometry: None,
        }
    }

    /// Create config that encodes a WKT or GeoJSON geometry column into an
    /// MGRS column.
    pub fn from_geometry(column: impl Into<String>, precision: u8) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(column.into()),
            exclude_columns: Vec::new(),
            precision,
            format: MgrsFormat::default(),
            include_point_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Display options for encoded references.
    pub fn format(mut self, format: MgrsFormat) -> Self {
        self.format = format;
        self
    }

    /// Include a point geometry column when decoding.
    pub fn with_point_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_point_geometry = Some(format);
        self
    }
}

pub trait CsvToMgrs {
    fn to_mgrs_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvMgrsConfig,
    ) -> Result<(), MgrsError>;
}

impl<P: AsRef<Path>> CsvToMgrs for P {
    fn to_mgrs_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvMgrsConfig,
    ) -> Result<(), MgrsError> {
        csv_to_mgrs_csv(self, output_path, config)
    }
}

fn parse_geometry(s: &str) -> Result<Geometry<f64>, MgrsError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, MgrsError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| MgrsError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| MgrsError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| MgrsError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| MgrsError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(MgrsError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, MgrsError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| MgrsError::GeometryParseError(e.to_string()))?;

    wkt.try_into()
        .map_err(|_| MgrsError::GeometryParseError("Failed to convert WKT to geometry".to_string()))
}

/// One representative point per row: points pass through, everything else
/// contributes its centroid.
fn geometry_point(geom: &Geometry<f64>) -> Result<Point<f64>, MgrsError> {
    match geom {
        Geometry::Point(pt) => Ok(*pt),
        other => other
            .centroid()
            .ok_or_else(|| MgrsError::GeometryParseError("geometry has no centroid".to_string())),
    }
}

fn point_to_wkt(point: &Point<f64>) -> String {
    use wkt::ToWkt;
    point.wkt_string()
}

fn point_to_geojson(point: &Point<f64>) -> String {
    let geom = geojson::Geometry::new(geojson::Value::from(point));
    geom.to_string()
}

/// Converts a CSV file to a CSV file annotated with MGRS references, or
/// decodes an MGRS column into latitude/longitude columns, depending on the
/// configured source. Streams row by row to keep memory flat.
///
/// # Example: encode coordinate columns
///
/// ```no_run
/// use mgrs_rs::{CsvMgrsConfig, csv_to_mgrs_csv};
///
/// let config = CsvMgrsConfig::from_lonlat("Longitude", "Latitude", 4);
/// csv_to_mgrs_csv("stations.csv", "stations_mgrs.csv", &config).unwrap();
/// ```
///
/// # Example: decode an MGRS column
///
/// ```no_run
/// use mgrs_rs::{CsvMgrsConfig, GeometryFormat, csv_to_mgrs_csv};
///
/// let config = CsvMgrsConfig::from_mgrs("grid_ref")
///     .with_point_geometry(GeometryFormat::Wkt);
/// csv_to_mgrs_csv("reports.csv", "reports_latlon.csv", &config).unwrap();
/// ```
pub fn csv_to_mgrs_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvMgrsConfig,
) -> Result<(), MgrsError> {
    let file = File::open(csv_path).map_err(|e| MgrsError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| MgrsError::CsvError(e.to_string()))?
        .clone();

    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| MgrsError::CsvError(format!("Column '{}' not found", name)))
    };

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::MgrsColumn(col) => {
            let idx = find(col)?;
            (SourceIndices::Mgrs(idx), HashSet::from([idx]))
        }
        CoordinateSource::LonLatColumns { lon_column, lat_column } => {
            let lon_idx = find(lon_column)?;
            let lat_idx = find(lat_column)?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
        CoordinateSource::GeometryColumn(col) => {
            let idx = find(col)?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| MgrsError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let decoding = matches!(source_indices, SourceIndices::Mgrs(_));

    let mut header_row: Vec<&str> = if decoding {
        let mut row = vec!["latitude", "longitude"];
        if config.include_point_geometry.is_some() {
            row.push("geometry");
        }
        row
    } else {
        vec!["mgrs"]
    };
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| MgrsError::CsvError(e.to_string()))?;

    for result in reader.records() {
        let record = result.map_err(|e| MgrsError::CsvError(e.to_string()))?;

        let field = |idx: usize| {
            record
                .get(idx)
                .ok_or_else(|| MgrsError::CsvError(format!("Missing column at index {}", idx)))
        };

        let mut row: Vec<String> = match &source_indices {
            SourceIndices::Mgrs(idx) => {
                let mgrs: Mgrs = field(*idx)?.parse()?;
                let (lat, lon) = mgrs.to_latlon()?;
                let mut row = vec![lat.to_string(), lon.to_string()];
                if let Some(format) = config.include_point_geometry {
                    let point = Point::new(lon, lat);
                    row.push(match format {
                        GeometryFormat::Wkt => point_to_wkt(&point),
                        GeometryFormat::GeoJson => point_to_geojson(&point),
                    });
                }
                row
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon_str = field(*lon_idx)?.trim();
                let lat_str = field(*lat_idx)?.trim();
                let lon: f64 = lon_str.parse().map_err(|_| {
                    MgrsError::CsvError(format!("Invalid longitude: '{}'", lon_str))
                })?;
                let lat: f64 = lat_str.parse().map_err(|_| {
                    MgrsError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;
                let mgrs = Mgrs::from_latlon(lat, lon, config.precision)?;
                vec![mgrs.format(&config.format)]
            }
            SourceIndices::Geometry(idx) => {
                let geom = parse_geometry(field(*idx)?)?;
                let point = geometry_point(&geom)?;
                let mgrs = Mgrs::from_point(&point, config.precision)?;
                vec![mgrs.format(&config.format)]
            }
        };

        for (i, value) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(value.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| MgrsError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| MgrsError::CsvError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(path: &Path, lines: &[&str]) -> Result<(), MgrsError> {
        let mut file = File::create(path).map_err(|e| MgrsError::IoError(e.to_string()))?;
        for line in lines {
            writeln!(file, "{}", line).map_err(|e| MgrsError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_point() -> Result<(), MgrsError> {
        let json = r#"{"type":"Point","coordinates":[-77.0352,38.8895]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-77.0352)).abs() < 1e-9);
                assert!((pt.y() - 38.8895).abs() < 1e-9);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), MgrsError> {
        let geom = parse_geometry("POINT(5.0 61.0)")?;
        let pt = geometry_point(&geom)?;
        assert_eq!(pt.x(), 5.0);
        assert_eq!(pt.y(), 61.0);
        Ok(())
    }

    #[test]
    fn test_non_point_geometry_uses_centroid() -> Result<(), MgrsError> {
        let geom = parse_geometry("LINESTRING(4.0 61.0, 6.0 61.0)")?;
        let pt = geometry_point(&geom)?;
        assert!((pt.x() - 5.0).abs() < 1e-9);
        assert!((pt.y() - 61.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_encode_lonlat_columns() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");

        write_file(
            &input,
            &[
                "ID,Longitude,Latitude,Description",
                "1,-77.0352,38.8895,Washington Monument",
                "2,5.0,61.0,Norway",
            ],
        )?;

        let config = CsvMgrsConfig::from_lonlat("Longitude", "Latitude", 5);
        csv_to_mgrs_csv(&input, &output, &config)?;

        let out = std::fs::read_to_string(&output).map_err(|e| MgrsError::IoError(e.to_string()))?;
        assert!(out.starts_with("mgrs,ID,Description"));
        assert!(out.contains("18SUJ2348606483,1,Washington Monument"));
        assert!(out.contains("32VKN8374969393,2,Norway"));
        assert!(!out.contains("Longitude"));
        Ok(())
    }

    #[test]
    fn test_encode_geometry_column_with_display_format() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");

        write_file(
            &input,
            &[
                "name,geometry",
                "monument,POINT(-77.0352 38.8895)",
            ],
        )?;

        let config = CsvMgrsConfig::from_geometry("geometry", 5)
            .format(MgrsFormat::new().with_spaces());
        csv_to_mgrs_csv(&input, &output, &config)?;

        let out = std::fs::read_to_string(&output).map_err(|e| MgrsError::IoError(e.to_string()))?;
        assert!(out.contains("18S UJ 23486 06483"));
        Ok(())
    }

    #[test]
    fn test_decode_mgrs_column() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");

        write_file(
            &input,
            &[
                "report,grid_ref",
                "alpha,18SUJ2348606483",
                "bravo,32VKN8374969393",
            ],
        )?;

        let config = CsvMgrsConfig::from_mgrs("grid_ref")
            .with_point_geometry(GeometryFormat::Wkt);
        csv_to_mgrs_csv(&input, &output, &config)?;

        let out = std::fs::read_to_string(&output).map_err(|e| MgrsError::IoError(e.to_string()))?;
        assert!(out.starts_with("latitude,longitude,geometry,report"));
        assert!(out.contains("POINT("));
        assert!(out.contains("alpha"));
        assert!(!out.contains("grid_ref"));
        Ok(())
    }

    #[test]
    fn test_decode_propagates_malformed_strings() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");

        write_file(&input, &["grid_ref", "18SIO12345678"])?;

        let config = CsvMgrsConfig::from_mgrs("grid_ref");
        let result = csv_to_mgrs_csv(&input, &output, &config);
        assert!(matches!(result, Err(MgrsError::MalformedMgrsString(_))));
        Ok(())
    }

    #[test]
    fn test_filesystem_failures_are_io_errors() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let config = CsvMgrsConfig::from_lonlat("lon", "lat", 5);

        let missing_input = dir.path().join("nope.csv");
        let result = csv_to_mgrs_csv(&missing_input, dir.path().join("out.csv"), &config);
        assert!(matches!(result, Err(MgrsError::IoError(_))));

        let input = dir.path().join("input.csv");
        write_file(&input, &["lon,lat", "5.0,61.0"])?;
        let unwritable = dir.path().join("no_such_dir").join("out.csv");
        let result = csv_to_mgrs_csv(&input, &unwritable, &config);
        assert!(matches!(result, Err(MgrsError::IoError(_))));
        Ok(())
    }

    #[test]
    fn test_missing_column_is_a_csv_error() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let input = dir.path().join("input.csv");
        write_file(&input, &["a,b", "1,2"])?;

        let config = CsvMgrsConfig::from_lonlat("lon", "lat", 5);
        let result = csv_to_mgrs_csv(&input, dir.path().join("out.csv"), &config);
        assert!(matches!(result, Err(MgrsError::CsvError(_))));
        Ok(())
    }

    #[test]
    fn test_excluded_columns_are_dropped() -> Result<(), MgrsError> {
        let dir = tempdir().map_err(|e| MgrsError::IoError(e.to_string()))?;
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");

        write_file(
            &input,
            &["id,lon,lat,secret", "1,5.0,61.0,hidden"],
        )?;

        let config = CsvMgrsConfig::from_lonlat("lon", "lat", 2)
            .exclude(vec!["secret".to_string()]);
        csv_to_mgrs_csv(&input, &output, &config)?;

        let out = std::fs::read_to_string(&output).map_err(|e| MgrsError::IoError(e.to_string()))?;
        assert!(out.contains("32VKN8369"));
        assert!(!out.contains("hidden"));
        Ok(())
    }
}
