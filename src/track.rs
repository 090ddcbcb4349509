use geo::Point;
use std::path::{Path, PathBuf};

/// Factor converting FIT semicircles to decimal degrees (180 / 2^31).
pub const SEMICIRCLES_TO_DEGREES: f64 = 180.0 / 2_147_483_648.0;

pub fn semicircles_to_degrees(raw: f64) -> f64 {
    raw * SEMICIRCLES_TO_DEGREES
}

/// Builds a coordinate from latitude/longitude in decimal degrees.
///
/// Points follow the `geo` convention of `x = longitude`, `y = latitude`.
pub fn coordinate(lat: f64, lon: f64) -> Point {
    Point::new(lon, lat)
}

/// `[lat, lon]`, the order Leaflet expects.
pub fn lat_lon(point: &Point) -> [f64; 2] {
    [point.y(), point.x()]
}

/// Ordered coordinates extracted from one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub source: PathBuf,
    pub points: Vec<Point>,
}

impl Track {
    pub fn new(source: impl Into<PathBuf>, points: Vec<Point>) -> Self {
        Track {
            source: source.into(),
            points,
        }
    }

    pub fn empty(source: &Path) -> Self {
        Track::new(source, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn start(&self) -> Option<&Point> {
        self.points.first()
    }
}
