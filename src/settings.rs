use crate::plot::{DEFAULT_MAP_NAME, DEFAULT_TRACK_COLOR, DEFAULT_ZOOM, ExecutionMode, PlotOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Draw every GPX, FIT and FIT.GZ track in a folder onto one HTML map
pub struct Settings {
    /// Folder containing the track files (not searched recursively)
    #[clap(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// HTML file to write the map to, replaced if it exists
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_MAP_NAME)]
    pub output: PathBuf,

    /// Line color for all tracks (any CSS color)
    #[clap(short, long, default_value = DEFAULT_TRACK_COLOR)]
    pub color: String,

    /// Parse files in parallel on all cores
    #[clap(short, long, default_value = "false")]
    pub parallel: bool,

    /// Number of worker threads in parallel mode
    #[clap(short, long, requires = "parallel")]
    pub jobs: Option<usize>,

    /// Keep the directory listing order instead of sorting files by name
    #[clap(long, default_value = "false")]
    pub unsorted: bool,

    /// Initial zoom level of the map
    #[clap(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: u8,
}

impl Settings {
    pub fn into_options(self) -> PlotOptions {
        PlotOptions {
            map_name: self.output,
            track_color: self.color,
            mode: if self.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            },
            jobs: self.jobs,
            sort_files: !self.unsorted,
            zoom: self.zoom,
        }
    }
}
