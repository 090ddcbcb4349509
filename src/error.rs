use std::path::{Path, PathBuf};

/// Failure to extract a track from a single file.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GPX in {}: {source}", .path.display())]
    Gpx {
        path: PathBuf,
        #[source]
        source: gpx::errors::GpxError,
    },

    #[error("invalid FIT in {}: {source}", .path.display())]
    Fit {
        path: PathBuf,
        #[source]
        source: fitparser::Error,
    },
}

impl TrackError {
    pub fn path(&self) -> &Path {
        match self {
            TrackError::Io { path, .. }
            | TrackError::Gpx { path, .. }
            | TrackError::Fit { path, .. } => path,
        }
    }
}

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to encode map data: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlotError>;
