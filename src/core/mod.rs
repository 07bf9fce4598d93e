pub mod constants;
pub mod polar;
pub mod square;
pub mod tm;
pub mod zone;

pub use constants::{BAND_LETTERS, MAX_PRECISION, UPS_K0, UTM_K0, WGS84_A, WGS84_F};
pub use zone::{band_letter, central_meridian, zone_number};
