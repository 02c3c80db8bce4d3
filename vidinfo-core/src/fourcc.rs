//! FourCC codec identifier handling.
//!
//! ffprobe exposes the codec tag twice: as a packed 32-bit integer rendered
//! in hex (`codec_tag`, e.g. `"0x31637661"`) and as a readable string
//! (`codec_tag_string`, e.g. `"avc1"`). This module parses either form and
//! renders the 4-character label from the packed value.

/// A packed 32-bit FourCC codec identifier.
///
/// Byte 0 (the least significant byte) is the first character of the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FourCc(u32);

impl FourCc {
    /// Creates a FourCc from the raw packed integer.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Creates a FourCc from ffprobe's tag representations.
    ///
    /// Prefers the packed `codec_tag` value; when that is zero or unparsable
    /// (some containers report `0x0000`), packs the bytes of
    /// `codec_tag_string` instead.
    pub fn from_tag_strings(codec_tag: &str, codec_tag_string: &str) -> Self {
        let raw = parse_packed_tag(codec_tag).unwrap_or(0);
        if raw != 0 {
            Self(raw)
        } else {
            Self(pack_tag_string(codec_tag_string))
        }
    }

    /// Returns the raw packed integer value.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Decodes the identifier into its 4-character label.
    ///
    /// Each byte maps to its character code, least significant byte first.
    /// Non-printable bytes pass through as their raw character value, so the
    /// label is always exactly 4 characters.
    pub fn label(self) -> String {
        (0..4)
            .map(|i| ((self.0 >> (8 * i)) & 0xFF) as u8 as char)
            .collect()
    }
}

impl std::fmt::Display for FourCc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses ffprobe's `codec_tag` field, which is a hex string like
/// `"0x31637661"` (plain decimal is accepted as well).
fn parse_packed_tag(tag: &str) -> Option<u32> {
    if let Some(hex) = tag.strip_prefix("0x").or_else(|| tag.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        tag.parse::<u32>().ok()
    }
}

/// Packs up to four bytes of a tag string, least significant byte first.
fn pack_tag_string(tag: &str) -> u32 {
    tag.bytes()
        .take(4)
        .enumerate()
        .fold(0u32, |acc, (i, b)| acc | (u32::from(b) << (8 * i)))
}
