//! File discovery module for finding video files to inspect.
//!
//! Searches the top level of a directory for common video container
//! extensions (case-insensitive). Subdirectories are not searched.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Extensions treated as inspectable video containers.
const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "mov", "m4v", "avi", "webm"];

/// Checks if the given path is a video file eligible for inspection.
#[must_use]
pub fn is_valid_video_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext_str| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|v| ext_str.eq_ignore_ascii_case(v))
            })
            .unwrap_or(false)
}

/// Finds video files eligible for inspection in the specified directory.
///
/// Scans the top level only and returns the matches sorted by path, so a
/// directory always produces reports in a deterministic order.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths to the discovered video files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoFilesFound)` - If no video files are found
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            is_valid_video_file(&path).then_some(path)
        })
        .collect();

    files.sort();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
