use super::Parser;
use crate::error::TrackError;
use crate::track::Track;
use gpx::Gpx;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct GpxParser;

impl Parser for GpxParser {
    fn parse(&self, path: &Path) -> Result<Track, TrackError> {
        let file = File::open(path).map_err(|source| TrackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let gpx: Gpx = gpx::read(reader).map_err(|source| TrackError::Gpx {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Track::new(path, extract_track_points(&gpx)))
    }

    fn name(&self) -> &'static str {
        "GPX Parser"
    }
}

/// Track points of every segment of every track, in document order.
/// Waypoints and routes are not part of a recorded track.
fn extract_track_points(gpx: &Gpx) -> Vec<geo::Point> {
    gpx.tracks
        .iter()
        .flat_map(|track| &track.segments)
        .flat_map(|segment| &segment.points)
        .map(|track_point| track_point.point())
        .collect()
}
