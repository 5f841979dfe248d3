//! Text normalization for release filenames
//!
//! Strips the noise that release groups and download sites wrap around a
//! serial: codec and resolution tags, site watermarks, brackets.
//! Steps run in a fixed order since later patterns assume the earlier
//! cleanup has already happened.

use once_cell::sync::Lazy;
use regex::Regex;

static CODEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(h265|h264)").expect("codec regex should compile"));

// Leftmost-first: "fhdc" loses only its "fhd" part.
static QUALITY_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(fhd|fhdc|fhdcj|hd)").expect("quality tag regex should compile"));

static WATERMARK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\w+\.(cc|com|net|me|club|jp|tv|xyz|biz|wiki|info|tw|us|de)@|^22-sht\.me")
        .expect("watermark regex should compile")
});

static RESOLUTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(1080p|720p|4k|x264|x265|uncensored|leak)")
        .expect("resolution regex should compile")
});

// The full-width pair is matched as one literal sequence, not as a class.
static BRACKET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\[|\]|】【)").expect("bracket regex should compile"));

static DATE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\d{4}-\d{1,2}-\d{1,2}\] - ").expect("date tag regex should compile")
});

/// Normalize a raw filename before serial extraction.
///
/// The result is lowercase, has no `/`, and uses `-` in place of `_`.
///
/// # Example
/// ```
/// use av_serial_parser::normalize;
///
/// assert_eq!(normalize("hhd800.com@053124-001-1pon"), "053124-001-1pon");
/// assert_eq!(normalize("[FHD]ABC_123"), "abc-123");
/// ```
pub fn normalize(text: &str) -> String {
    let text = text.replace('/', "").to_lowercase();

    let text = CODEC_REGEX.replace_all(&text, "");
    let text = QUALITY_TAG_REGEX.replace_all(&text, "");
    let text = WATERMARK_REGEX.replace(&text, "");
    let text = RESOLUTION_REGEX.replace_all(&text, "");
    let text = BRACKET_REGEX.replace_all(&text, "");
    // Inert in practice: the brackets are already gone by now
    let text = DATE_TAG_REGEX.replace_all(&text, "");

    text.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_slashes() {
        assert_eq!(normalize("ABC/123"), "abc123");
        assert_eq!(normalize("KIN8-3911-CD1"), "kin8-3911-cd1");
    }

    #[test]
    fn test_strips_codec_and_resolution() {
        assert_eq!(normalize("abc-123-H264-1080p"), "abc-123--");
        assert_eq!(normalize("x265.abc-123.4K"), ".abc-123.");
        assert_eq!(normalize("abc-123-UNCENSORED-LEAK"), "abc-123--");
    }

    #[test]
    fn test_quality_tags_are_substring_matches() {
        // "fhd" wins over "fhdc", leaving the trailing "c"
        assert_eq!(normalize("abc-123-fhdc"), "abc-123-c");
        // "hd" is stripped even inside a word
        assert_eq!(normalize("hhd800"), "h800");
    }

    #[test]
    fn test_strips_watermark_prefix() {
        assert_eq!(normalize("hhd800.com@053124-001-1pon"), "053124-001-1pon");
        assert_eq!(normalize("site.xyz@abc-123"), "abc-123");
        assert_eq!(normalize("22-sht.me-abc-123"), "-abc-123");
        // Only a leading watermark is removed
        assert_eq!(normalize("abc-123 site.com@"), "abc-123 site.com@");
        // Unlisted TLD is kept
        assert_eq!(normalize("site.org@abc-123"), "site.org@abc-123");
    }

    #[test]
    fn test_brackets() {
        assert_eq!(normalize("[abc]-123"), "abc-123");
        assert_eq!(normalize("abc】【123"), "abc123");
        // A lone full-width bracket is not removed
        assert_eq!(normalize("【abc-123】"), "【abc-123】");
    }

    #[test]
    fn test_underscores_become_hyphens() {
        assert_eq!(normalize("103024_01-10MU"), "103024-01-10mu");
    }

    #[test]
    fn test_is_pure() {
        let input = "[2024-6-1] - hhd800.com@FC2-PPV-1234567_1080p";
        assert_eq!(normalize(input), normalize(input));
    }
}
