//! Video property snapshot returned by the probing backend.

/// Read-only snapshot of the properties queried from a media resource.
///
/// Constructed transiently per file and discarded after the report is
/// printed. The all-zero default mirrors the probing backend's convention
/// for unopenable files and unsupported queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VideoProperties {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Frames per second; 0.0 when unknown
    pub frame_rate: f64,
    /// Total number of frames; 0 when the source does not report one
    pub frame_count: u64,
    /// Codec identifier: four 8-bit character codes packed little-endian
    /// (byte 0 is the least significant byte)
    pub codec_tag: u32,
    /// Bitrate in bits per second; 0 or negative means unknown
    pub bitrate: f64,
}
