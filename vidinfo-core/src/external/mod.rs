//! Interactions with external media analysis tools.
//!
//! Encapsulates the ffprobe integration behind a small API so the rest of
//! the crate never touches the probing backend directly.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// Contains the ffprobe-backed property extraction
pub mod ffprobe_executor;

pub use ffprobe_executor::probe_video_properties;

/// Checks if a required external command is available and executable.
///
/// Attempts to run the command with `-version` to verify it exists. Used to
/// check for the ffprobe binary before probing a batch of files.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
