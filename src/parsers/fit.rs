use super::Parser;
use crate::error::TrackError;
use crate::track::{Track, coordinate, semicircles_to_degrees};
use fitparser::profile::MesgNum;
use fitparser::{FitDataRecord, Value};
use flate2::read::GzDecoder;
use geo::Point;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/**
 * Parse .fit files as written by devices, and the .fit.gz files Strava exports.
 */
pub struct FitParser {
    /// Inflate the whole file before parsing.
    pub gzipped: bool,
}

impl FitParser {
    pub const PLAIN: FitParser = FitParser { gzipped: false };
    pub const GZIPPED: FitParser = FitParser { gzipped: true };
}

impl Parser for FitParser {
    fn parse(&self, path: &Path) -> Result<Track, TrackError> {
        let records = if self.gzipped {
            read_fit_gz(path)?
        } else {
            read_fit(path)?
        };

        let points = records
            .iter()
            .filter(|record| record.kind() == MesgNum::Record)
            .filter_map(extract_coordinates_from_record)
            .collect();

        Ok(Track::new(path, points))
    }

    fn name(&self) -> &'static str {
        "FIT Parser"
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> TrackError + '_ {
    move |source| TrackError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn fit_error(path: &Path) -> impl FnOnce(fitparser::Error) -> TrackError + '_ {
    move |source| TrackError::Fit {
        path: path.to_path_buf(),
        source,
    }
}

fn read_fit(path: &Path) -> Result<Vec<FitDataRecord>, TrackError> {
    let file = File::open(path).map_err(io_error(path))?;
    let mut reader = BufReader::new(file);
    fitparser::from_reader(&mut reader).map_err(fit_error(path))
}

// the whole file is inflated before parsing
fn read_fit_gz(path: &Path) -> Result<Vec<FitDataRecord>, TrackError> {
    let file = File::open(path).map_err(io_error(path))?;
    let mut decoder = GzDecoder::new(file);
    let mut decompressed_data = Vec::new();
    decoder
        .read_to_end(&mut decompressed_data)
        .map_err(io_error(path))?;

    fitparser::from_bytes(&decompressed_data).map_err(fit_error(path))
}

fn extract_coordinates_from_record(record: &FitDataRecord) -> Option<Point> {
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;

    for field in record.fields() {
        match field.name() {
            "position_lat" => latitude = extract_coordinate_value(field.value()),
            "position_long" => longitude = extract_coordinate_value(field.value()),
            _ => {} // ignore other fields
        }
    }

    // records without a fix are dropped, not interpolated
    let (lat, lon) = (latitude?, longitude?);
    Some(coordinate(
        semicircles_to_degrees(lat),
        semicircles_to_degrees(lon),
    ))
}

fn extract_coordinate_value(value: &Value) -> Option<f64> {
    match value {
        Value::SInt32(v) => Some(*v as f64),
        Value::UInt32(v) => Some(*v as f64),
        Value::SInt16(v) => Some(*v as f64),
        Value::UInt16(v) => Some(*v as f64),
        Value::SInt8(v) => Some(*v as f64),
        Value::UInt8(v) => Some(*v as f64),
        Value::Float32(v) => Some(*v as f64),
        Value::Float64(v) => Some(*v),
        _ => None,
    }
}
