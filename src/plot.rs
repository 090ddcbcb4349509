use crate::error::{PlotError, Result, TrackError};
use crate::parsers::process_file;
use crate::render::MapDocument;
use crate::scan::scan_folder_for_tracks;
use crate::track::Track;
use indicatif::{ParallelProgressIterator, ProgressIterator};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAP_NAME: &str = "tracks_map.html";
pub const DEFAULT_TRACK_COLOR: &str = "blue";
pub const DEFAULT_ZOOM: u8 = 14;

pub const NO_FILES_MESSAGE: &str = "No valid GPX or FIT in the folder.";
pub const NO_TRACKS_MESSAGE: &str = "No valid tracks were extracted.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One file at a time on the calling thread.
    #[default]
    Sequential,
    /// Files spread over a rayon worker pool.
    Parallel,
}

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub map_name: PathBuf,
    pub track_color: String,
    pub mode: ExecutionMode,
    /// Worker count in parallel mode, all cores when unset.
    pub jobs: Option<usize>,
    /// Sort discovered files by path instead of keeping the OS order.
    pub sort_files: bool,
    pub zoom: u8,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            map_name: PathBuf::from(DEFAULT_MAP_NAME),
            track_color: DEFAULT_TRACK_COLOR.to_string(),
            mode: ExecutionMode::default(),
            jobs: None,
            sort_files: true,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl From<TrackError> for SkippedFile {
    fn from(err: TrackError) -> Self {
        SkippedFile {
            path: err.path().to_path_buf(),
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    /// The folder holds no GPX or FIT files.
    NoFiles,
    /// Files were found but none produced a coordinate.
    NoTracks { skipped: Vec<SkippedFile> },
    Saved {
        path: PathBuf,
        tracks: usize,
        points: usize,
        skipped: Vec<SkippedFile>,
    },
}

impl PlotOutcome {
    pub fn skipped(&self) -> &[SkippedFile] {
        match self {
            PlotOutcome::NoFiles => &[],
            PlotOutcome::NoTracks { skipped } | PlotOutcome::Saved { skipped, .. } => skipped,
        }
    }
}

/// Tracks extracted from a batch of files, in the order the files were given.
#[derive(Debug, Default)]
pub struct TrackSet {
    pub tracks: Vec<Track>,
    pub skipped: Vec<SkippedFile>,
}

impl TrackSet {
    fn from_results(results: Vec<std::result::Result<Track, TrackError>>) -> Self {
        let mut set = TrackSet::default();
        for result in results {
            match result {
                Ok(track) if track.is_empty() => {
                    tracing::debug!("No coordinates in {}", track.source.display());
                }
                Ok(track) => set.tracks.push(track),
                Err(err) => {
                    tracing::warn!("Skipping {}", err);
                    set.skipped.push(err.into());
                }
            }
        }
        set
    }

    pub fn total_points(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }
}

/// Extracts every file and keeps the non-empty tracks.
///
/// Both modes return tracks in the order of `files`.
pub fn collect_tracks(
    files: &[PathBuf],
    mode: ExecutionMode,
    jobs: Option<usize>,
) -> Result<TrackSet> {
    let results: Vec<_> = match mode {
        ExecutionMode::Sequential => files
            .iter()
            .progress()
            .map(|path| process_file(path))
            .collect(),
        ExecutionMode::Parallel => {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(jobs) = jobs {
                builder = builder.num_threads(jobs);
            }
            let pool = builder.build()?;

            // indexed collect keeps results in submission order
            pool.install(|| {
                files
                    .par_iter()
                    .progress()
                    .map(|path| process_file(path))
                    .collect()
            })
        }
    };

    Ok(TrackSet::from_results(results))
}

/// Scans `folder`, extracts every track and writes them as polylines on one
/// HTML map.
///
/// Finding no files, or no file with coordinates, is not an error: nothing is
/// written and the outcome says why. Files that fail to parse are skipped and
/// listed in the outcome.
pub fn plot_multiple_tracks(folder: &Path, options: &PlotOptions) -> Result<PlotOutcome> {
    let files = scan_folder_for_tracks(folder, options.sort_files)?;

    if files.is_empty() {
        println!("{NO_FILES_MESSAGE}");
        return Ok(PlotOutcome::NoFiles);
    }

    match options.mode {
        ExecutionMode::Sequential => println!("Single-threaded mode"),
        ExecutionMode::Parallel => println!("Multi-threaded mode"),
    }
    tracing::info!("Processing {} files from {}", files.len(), folder.display());

    let track_set = collect_tracks(&files, options.mode, options.jobs)?;
    let points = track_set.total_points();
    let TrackSet { tracks, skipped } = track_set;

    let Some(document) = MapDocument::from_tracks(&tracks, &options.track_color, options.zoom)
    else {
        println!("{NO_TRACKS_MESSAGE}");
        return Ok(PlotOutcome::NoTracks { skipped });
    };

    tracing::info!("Drawing {} tracks with {} points", tracks.len(), points);

    let html = document.to_html()?;
    fs::write(&options.map_name, html).map_err(|source| PlotError::Write {
        path: options.map_name.clone(),
        source,
    })?;

    println!("Map saved as {}", options.map_name.display());

    Ok(PlotOutcome::Saved {
        path: options.map_name.clone(),
        tracks: tracks.len(),
        points,
        skipped,
    })
}
