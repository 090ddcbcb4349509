//! Draws every GPX, FIT and gzipped FIT track in a folder as polylines on a
//! single Leaflet map saved as a standalone HTML file.
//!
//! The pipeline is [`scan_folder_for_tracks`] -> [`process_file`] per file ->
//! [`MapDocument`] -> HTML, driven end to end by [`plot_multiple_tracks`].

pub mod error;
pub mod parsers;
pub mod plot;
pub mod render;
pub mod scan;
pub mod settings;
pub mod track;

pub use error::{PlotError, TrackError};
pub use parsers::{FileKind, TrackKind, classify, process_file};
pub use plot::{
    ExecutionMode, PlotOptions, PlotOutcome, SkippedFile, TrackSet, collect_tracks,
    plot_multiple_tracks,
};
pub use render::{MapDocument, Polyline};
pub use scan::scan_folder_for_tracks;
pub use settings::Settings;
pub use track::Track;
