//! Core library for media inspection using ffprobe.
//!
//! This crate provides video file discovery, property extraction (resolution,
//! frame rate, frame count, packed FourCC codec tag, bitrate), and fixed-format
//! report rendering.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let mut stdout = std::io::stdout().lock();
//! vidinfo_core::write_report(&mut stdout, Path::new("/path/to/video.mp4")).unwrap();
//! ```

pub mod discovery;
pub mod error;
pub mod external;
pub mod fourcc;
pub mod properties;
pub mod report;

// Re-exports for public API
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::probe_video_properties;
pub use fourcc::FourCc;
pub use properties::VideoProperties;
pub use report::{format_report, inspect, write_report};
