/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 flattening
pub const WGS84_F: f64 = 1.0 / 298.257223563;

/// UTM central meridian scale factor
pub const UTM_K0: f64 = 0.9996;

/// UPS central scale factor
pub const UPS_K0: f64 = 0.994;

/// UTM false easting applied to every zone
pub(crate) const FALSE_EASTING: f64 = 500_000.0;

/// False northing applied in the southern hemisphere
pub(crate) const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// UPS false easting/northing (grid origin sits at the pole)
pub(crate) const UPS_FALSE_ORIGIN: f64 = 2_000_000.0;

/// Side length of a 100 km grid square in meters
pub(crate) const SQUARE_SIZE: f64 = 100_000.0;

/// Northing distance covered by one full row-letter cycle
pub(crate) const ROW_CYCLE: f64 = 2_000_000.0;

/// Northernmost latitude handled by UTM; above this UPS takes over
pub(crate) const UTM_NORTH_LIMIT: f64 = 84.0;

/// Southernmost latitude handled by UTM; below this UPS takes over
pub(crate) const UTM_SOUTH_LIMIT: f64 = -80.0;

/// Slack allowed between a decoded latitude and its stated band.
/// A 100 km square may straddle a band boundary, so the cell center can sit
/// a little less than one degree outside the band's nominal range.
pub(crate) const BAND_TOLERANCE: f64 = 1.0;

/// Maximum precision level (five digit pairs, 1 m resolution)
pub const MAX_PRECISION: u8 = 5;

/// Latitude band letters, 8 degrees tall from 80S (I and O omitted,
/// X stretches 12 degrees to cover 72N-84N)
pub const BAND_LETTERS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// 100 km square column letter cycle (I and O omitted)
pub(crate) const COLUMN_LETTERS: &[u8; 24] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

/// 100 km square row letter cycle (I and O omitted)
pub(crate) const ROW_LETTERS: &[u8; 20] = b"ABCDEFGHJKLMNPQRSTUV";
