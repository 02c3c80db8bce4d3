//! FFprobe integration for media analysis and property extraction
//!
//! This module maps ffprobe metadata onto the fixed property set the
//! reporter queries: dimensions, frame rate, frame count, packed codec tag,
//! and bitrate.

use std::path::Path;

use ffprobe::{FfProbe, FfProbeError, Stream, ffprobe};

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::fourcc::FourCc;
use crate::properties::VideoProperties;

/// Gets video properties for a given input file.
///
/// Queries are permissive: a property the source does not report resolves to
/// zero rather than an error. Only a failed probe (missing file, unsupported
/// container, no video stream) produces an error.
pub fn probe_video_properties(input_path: &Path) -> CoreResult<VideoProperties> {
    log::debug!(
        "Running ffprobe (via crate) for video properties on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => properties_from_metadata(&metadata, input_path),
        Err(err) => {
            log::debug!(
                "ffprobe failed for video properties on {}: {:?}",
                input_path.display(),
                err
            );
            Err(map_ffprobe_error(err, "video properties"))
        }
    }
}

/// Extracts the reporter's property set from ffprobe metadata.
fn properties_from_metadata(metadata: &FfProbe, input_path: &Path) -> CoreResult<VideoProperties> {
    let video_stream = metadata
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            CoreError::VideoInfoError(format!(
                "No video stream found in {}",
                input_path.display()
            ))
        })?;

    let codec_tag = FourCc::from_tag_strings(
        &video_stream.codec_tag,
        &video_stream.codec_tag_string,
    );

    Ok(VideoProperties {
        width: dimension(video_stream.width),
        height: dimension(video_stream.height),
        frame_rate: frame_rate_of(video_stream),
        frame_count: frame_count_of(video_stream),
        codec_tag: codec_tag.raw(),
        bitrate: bitrate_of(metadata, video_stream),
    })
}

/// Absent or negative dimensions resolve to 0 per the zero-value convention.
fn dimension(value: Option<i64>) -> u32 {
    match value {
        Some(v) if v > 0 => v as u32,
        _ => 0,
    }
}

/// Prefers `avg_frame_rate` over `r_frame_rate`; container-only streams
/// report "0/0" which parses to nothing and falls through.
fn frame_rate_of(stream: &Stream) -> f64 {
    parse_frame_rate(&stream.avg_frame_rate)
        .or_else(|| parse_frame_rate(&stream.r_frame_rate))
        .unwrap_or(0.0)
}

fn frame_count_of(stream: &Stream) -> u64 {
    stream
        .nb_frames
        .as_deref()
        .and_then(|f| f.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Bitrate in bits per second, as reported by the source. Format-level value
/// first, then the video stream's own, else 0 for "unknown".
fn bitrate_of(metadata: &FfProbe, stream: &Stream) -> f64 {
    metadata
        .format
        .bit_rate
        .as_deref()
        .or(stream.bit_rate.as_deref())
        .and_then(|b| b.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse frame rate string (e.g., "30000/1001" or "29.97")
fn parse_frame_rate(rate_str: &str) -> Option<f64> {
    if let Some((num_str, den_str)) = rate_str.split_once('/') {
        let num: f64 = num_str.parse().ok()?;
        let den: f64 = den_str.parse().ok()?;
        if den != 0.0 && num > 0.0 {
            return Some(num / den);
        }
        return None;
    }
    rate_str.parse().ok().filter(|r| *r > 0.0)
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!(
            "Unknown ffprobe error during {context}: {err:?}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffprobe::{FfProbe, Format};
    use std::path::PathBuf;

    fn video_stream() -> Stream {
        let mut stream = Stream::default();
        stream.codec_type = Some("video".to_string());
        stream
    }

    #[test]
    fn test_frame_rate_parsing() {
        assert_eq!(parse_frame_rate("30"), Some(30.0));
        assert_eq!(parse_frame_rate("29.97"), Some(29.97));
        assert_eq!(parse_frame_rate("30000/1001"), Some(30000.0 / 1001.0));
        assert_eq!(parse_frame_rate("25/1"), Some(25.0));
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("30/0"), None);
        assert_eq!(parse_frame_rate("invalid"), None);
        assert_eq!(parse_frame_rate(""), None);
    }

    #[test]
    fn test_properties_extraction() {
        let mut stream = video_stream();
        stream.width = Some(1920);
        stream.height = Some(1080);
        stream.avg_frame_rate = "30000/1001".to_string();
        stream.nb_frames = Some("300".to_string());
        stream.codec_tag = "0x31637661".to_string();
        stream.codec_tag_string = "avc1".to_string();

        let mut format = Format::default();
        format.bit_rate = Some("5000000".to_string());

        let metadata = FfProbe {
            streams: vec![stream],
            format,
        };

        let props =
            properties_from_metadata(&metadata, &PathBuf::from("test.mp4")).unwrap();
        assert_eq!(props.width, 1920);
        assert_eq!(props.height, 1080);
        assert!((props.frame_rate - 29.97).abs() < 0.01);
        assert_eq!(props.frame_count, 300);
        assert_eq!(props.codec_tag, 0x3163_7661);
        assert_eq!(props.bitrate, 5_000_000.0);
    }

    #[test]
    fn test_missing_fields_resolve_to_zero() {
        let metadata = FfProbe {
            streams: vec![video_stream()],
            format: Format::default(),
        };

        let props =
            properties_from_metadata(&metadata, &PathBuf::from("bare.mp4")).unwrap();
        assert_eq!(props.width, 0);
        assert_eq!(props.height, 0);
        assert_eq!(props.frame_rate, 0.0);
        assert_eq!(props.frame_count, 0);
        assert_eq!(props.bitrate, 0.0);
    }

    #[test]
    fn test_negative_dimensions_resolve_to_zero() {
        let mut stream = video_stream();
        stream.width = Some(-1);
        stream.height = Some(-1);

        let metadata = FfProbe {
            streams: vec![stream],
            format: Format::default(),
        };

        let props =
            properties_from_metadata(&metadata, &PathBuf::from("odd.mp4")).unwrap();
        assert_eq!(props.width, 0);
        assert_eq!(props.height, 0);
    }

    #[test]
    fn test_stream_bitrate_fallback() {
        let mut stream = video_stream();
        stream.bit_rate = Some("1200000".to_string());

        let metadata = FfProbe {
            streams: vec![stream],
            format: Format::default(),
        };

        let props =
            properties_from_metadata(&metadata, &PathBuf::from("stream.mkv")).unwrap();
        assert_eq!(props.bitrate, 1_200_000.0);
    }

    #[test]
    fn test_no_video_stream_is_an_error() {
        let mut audio = Stream::default();
        audio.codec_type = Some("audio".to_string());

        let metadata = FfProbe {
            streams: vec![audio],
            format: Format::default(),
        };

        let result = properties_from_metadata(&metadata, &PathBuf::from("audio.m4a"));
        assert!(matches!(result, Err(CoreError::VideoInfoError(_))));
    }
}
