pub mod fit;
pub mod gpx;

use crate::error::TrackError;
use crate::track::Track;
use self::fit::FitParser;
use self::gpx::GpxParser;
use std::path::Path;

// extract a Track from one file of a given type
pub trait Parser {
    fn parse(&self, path: &Path) -> Result<Track, TrackError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Gpx,
    Fit,
    FitGz,
}

impl TrackKind {
    pub fn parser(self) -> &'static dyn Parser {
        match self {
            TrackKind::Gpx => &GpxParser,
            TrackKind::Fit => &FitParser::PLAIN,
            TrackKind::FitGz => &FitParser::GZIPPED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Supported(TrackKind),
    Unsupported,
}

impl FileKind {
    pub fn is_supported(self) -> bool {
        matches!(self, FileKind::Supported(_))
    }
}

/// Picks a parser from the file name suffix, ignoring case.
pub fn classify(path: &Path) -> FileKind {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return FileKind::Unsupported;
    };
    let file_name = file_name.to_ascii_lowercase();

    if file_name.ends_with(".gpx") {
        FileKind::Supported(TrackKind::Gpx)
    } else if file_name.ends_with(".fit.gz") {
        FileKind::Supported(TrackKind::FitGz)
    } else if file_name.ends_with(".fit") {
        FileKind::Supported(TrackKind::Fit)
    } else {
        FileKind::Unsupported
    }
}

/// Extracts the track of a single file. Unsupported files yield an empty track.
pub fn process_file(path: &Path) -> Result<Track, TrackError> {
    match classify(path) {
        FileKind::Supported(kind) => {
            let parser = kind.parser();
            let track = parser.parse(path)?;
            tracing::debug!(
                "{} extracted {} points from {}",
                parser.name(),
                track.len(),
                path.display()
            );
            Ok(track)
        }
        FileKind::Unsupported => {
            tracing::debug!("Ignoring unsupported file {}", path.display());
            Ok(Track::empty(path))
        }
    }
}
