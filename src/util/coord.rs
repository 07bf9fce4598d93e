use geo_types::{Coord, Point};

/// Anything that carries a WGS84 longitude/latitude pair in decimal degrees.
///
/// Implemented for `(lon, lat)` tuples and the `geo_types` point types so the
/// conversion APIs accept whichever representation the caller already has.
pub trait LonLat {
    fn lon(&self) -> f64;
    fn lat(&self) -> f64;
}

impl LonLat for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl LonLat for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

impl LonLat for Coord<f64> {
    fn lon(&self) -> f64 {
        self.x
    }
    fn lat(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_lonlat_tuple() {
        let c = (-77.0352, 38.8895);
        assert_eq!(c.lon(), -77.0352);
        assert_eq!(c.lat(), 38.8895);
    }

    #[test]
    fn test_lonlat_point() {
        let p = point! { x: -77.0352, y: 38.8895 };
        assert_eq!(p.lon(), -77.0352);
        assert_eq!(p.lat(), 38.8895);
    }

    #[test]
    fn test_lonlat_coord() {
        let c = Coord { x: 5.0, y: 61.0 };
        assert_eq!(c.lon(), 5.0);
        assert_eq!(c.lat(), 61.0);
    }

    #[test]
    fn test_generic_function_accepts_all_types() {
        fn sum<C: LonLat>(c: &C) -> f64 {
            c.lon() + c.lat()
        }

        assert_eq!(sum(&(1.0, 2.0)), 3.0);
        assert_eq!(sum(&Point::new(1.0, 2.0)), 3.0);
    }
}
