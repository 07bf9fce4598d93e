/// Error type for mgrs-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MgrsError {
    /// Latitude/longitude out of range or non-finite, or a decoded point
    /// falling outside its grid zone's latitude envelope.
    InvalidCoordinate(String),
    /// The MGRS string is structurally or lexically invalid.
    MalformedMgrsString(String),
    /// The precision level is outside the valid range (0-5).
    InvalidPrecision(u8),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for MgrsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MgrsError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            MgrsError::MalformedMgrsString(msg) => write!(f, "Malformed MGRS string: {}", msg),
            MgrsError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            MgrsError::IoError(msg) => write!(f, "IO error: {}", msg),
            MgrsError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MgrsError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for MgrsError {}
