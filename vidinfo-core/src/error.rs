use std::process::ExitStatus;

use thiserror::Error;

/// Custom error types for vidinfo
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, std::io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse JSON output: {0}")]
    JsonParseError(String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Video info error: {0}")]
    VideoInfoError(String),

    #[error("No processable video files found")]
    NoFilesFound,
}

/// Result type for vidinfo operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for a command that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Creates a `CommandFailed` error from a non-zero exit status and captured stderr.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}
