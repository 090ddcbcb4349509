use crate::error::{PlotError, Result};
use crate::parsers::classify;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the GPX, FIT and FIT.GZ files directly inside `folder`.
///
/// Subdirectories are not descended into. Without `sort` the paths come back
/// in whatever order the OS enumerates them.
pub fn scan_folder_for_tracks(folder: &Path, sort: bool) -> Result<Vec<PathBuf>> {
    let mut track_files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // only the folder itself failing to open aborts the scan
            Err(source) if source.depth() == 0 => {
                return Err(PlotError::ReadDir {
                    path: folder.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        if entry.file_type().is_file() && classify(entry.path()).is_supported() {
            track_files.push(entry.into_path());
        }
    }

    if sort {
        track_files.sort();
    }

    tracing::debug!(
        "Found {} track files in {}",
        track_files.len(),
        folder.display()
    );
    Ok(track_files)
}
