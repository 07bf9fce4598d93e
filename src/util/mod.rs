pub mod coord;
pub mod error;

pub use coord::LonLat;
pub use error::MgrsError;
