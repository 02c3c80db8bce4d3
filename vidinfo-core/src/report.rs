//! Fixed-format media report rendering.
//!
//! One block per file:
//!
//! ```text
//! Video: <path>
//!   Resolution: <width>x<height>
//!   FPS: <frame rate>
//!   Total Frames: <frame count>
//!   FourCC: <packed codec tag as integer>
//!   Codec: <4-character label>
//! ```
//!
//! A seventh line, `  Bitrate: <Mbps to 2 decimals> Mbps`, is appended only
//! when the reported bitrate is strictly greater than zero.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use crate::external::probe_video_properties;
use crate::fourcc::FourCc;
use crate::properties::VideoProperties;

/// Queries the property set for a file.
///
/// Probe failures are absorbed as the all-zero snapshot: an unopenable file
/// still yields a report, just one full of zeros. This mirrors the
/// permissive convention of the probing backend; diagnostics go to the log
/// facade instead of the report.
pub fn inspect(path: &Path) -> VideoProperties {
    match probe_video_properties(path) {
        Ok(props) => props,
        Err(e) => {
            log::warn!("Could not probe '{}': {}", path.display(), e);
            VideoProperties::default()
        }
    }
}

/// Renders the report block for a file.
///
/// Exactly six lines, or seven when `bitrate > 0`.
pub fn format_report(path: &Path, props: &VideoProperties) -> String {
    let mut out = String::new();
    let fourcc = FourCc::from_raw(props.codec_tag);

    // Infallible: writing to a String cannot fail.
    let _ = writeln!(out, "Video: {}", path.display());
    let _ = writeln!(out, "  Resolution: {}x{}", props.width, props.height);
    let _ = writeln!(out, "  FPS: {}", props.frame_rate);
    let _ = writeln!(out, "  Total Frames: {}", props.frame_count);
    let _ = writeln!(out, "  FourCC: {}", fourcc.raw());
    let _ = writeln!(out, "  Codec: {}", fourcc.label());
    if props.bitrate > 0.0 {
        let _ = writeln!(out, "  Bitrate: {:.2} Mbps", props.bitrate / 1_000_000.0);
    }

    out
}

/// Inspects a file and writes its report block, preceded by a blank
/// separator line.
///
/// The probe handle is scoped to this call; nothing persists between
/// consecutive reports.
pub fn write_report<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    let props = inspect(path);
    writeln!(writer)?;
    writer.write_all(format_report(path, &props).as_bytes())
}
