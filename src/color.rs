//! Commit id parsing and brightness classification.
//!
//! This module provides functions for:
//! - Checking that a captured line holds a full hex digest
//! - Decoding the first three hex octets into an RGB color
//! - Calculating a perceptual luminance from integer RGB weights
//! - Determining if a color is dark or light

use std::fmt;

use crate::error::ColorError;

/// Length of a hex encoded SHA-1 digest.
pub const SHA1_HEX_LENGTH: usize = 40;

/// Colors with a luminance above this value are considered light.
pub const LIGHT_THRESHOLD: u8 = u8::MAX / 2;

const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;
const WEIGHT_TOTAL: u32 = 1000;

/// RGB color derived from a commit id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color from individual components.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Perceived brightness of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    /// Luminance above [`LIGHT_THRESHOLD`].
    Light,
    /// Luminance at or below [`LIGHT_THRESHOLD`].
    Dark,
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Parse the color encoded in the first six characters of a commit id.
///
/// The line must hold at least [`SHA1_HEX_LENGTH`] bytes as captured, line
/// terminator included. Only the octets at offsets 0, 2 and 4 are decoded,
/// the rest of the line is not inspected.
///
/// # Arguments
///
/// * `line` - Line captured from `git rev-parse HEAD`
///
/// # Errors
///
/// - `ColorError::TruncatedInput` if the line is shorter than a full digest
/// - `ColorError::InvalidHexDigit` if one of the first six characters is not
///   in `0-9a-f` (uppercase digits are rejected)
///
/// # Examples
///
/// ```
/// # use commit_color::color::{Rgb, parse_commit_color};
/// let line = b"abcdef0123456789abcdef0123456789abcdef01\n";
/// assert_eq!(parse_commit_color(line).unwrap(), Rgb::new(171, 205, 239));
/// ```
pub fn parse_commit_color(line: &[u8]) -> Result<Rgb, ColorError> {
    if line.len() < SHA1_HEX_LENGTH {
        return Err(ColorError::TruncatedInput { len: line.len() });
    }

    let r = parse_hex_octet(line, 0)?;
    let g = parse_hex_octet(line, 2)?;
    let b = parse_hex_octet(line, 4)?;
    Ok(Rgb::new(r, g, b))
}

/// Decode the two hex digits starting at `offset` into a byte.
///
/// The caller guarantees `offset + 1` is in bounds.
fn parse_hex_octet(digest: &[u8], offset: usize) -> Result<u8, ColorError> {
    let upper = parse_hex_digit(digest[offset], offset)?;
    let lower = parse_hex_digit(digest[offset + 1], offset + 1)?;
    Ok((upper << 4) | lower)
}

/// Decode a single lowercase hex digit.
fn parse_hex_digit(c: u8, offset: usize) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ColorError::InvalidHexDigit {
            digit: char::from(c),
            offset,
        }),
    }
}

/// Calculate the perceived luminance of a color.
///
/// Uses the weighted sum `(299 R + 587 G + 114 B) / 1000` with truncating
/// integer division, so the result stays in 0-255.
///
/// # Examples
///
/// ```
/// # use commit_color::color::{Rgb, luminance};
/// assert_eq!(luminance(Rgb::new(255, 255, 255)), 255);
/// assert_eq!(luminance(Rgb::new(0, 0, 0)), 0);
/// ```
#[must_use]
pub fn luminance(rgb: Rgb) -> u8 {
    let weighted = RED_WEIGHT * u32::from(rgb.r)
        + GREEN_WEIGHT * u32::from(rgb.g)
        + BLUE_WEIGHT * u32::from(rgb.b);
    let lum = weighted / WEIGHT_TOTAL;
    debug_assert!(lum <= u32::from(u8::MAX), "luminance out of range: {lum}");
    u8::try_from(lum).unwrap_or(u8::MAX)
}

/// Determine if a color is dark or light based on its luminance.
///
/// # Returns
///
/// - `Brightness::Light` if luminance > `LIGHT_THRESHOLD`
/// - `Brightness::Dark` otherwise
#[must_use]
pub fn classify_color(rgb: Rgb) -> Brightness {
    if luminance(rgb) > LIGHT_THRESHOLD {
        Brightness::Light
    } else {
        Brightness::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const HEAD: &[u8] = b"abcdef0123456789abcdef0123456789abcdef01\n";

    fn digest(prefix: &str) -> Vec<u8> {
        let mut line = prefix.as_bytes().to_vec();
        line.resize(SHA1_HEX_LENGTH, b'0');
        line.push(b'\n');
        line
    }

    #[test]
    fn test_parse_commit_color() -> Result<()> {
        assert_eq!(parse_commit_color(HEAD)?, Rgb::new(171, 205, 239));
        assert_eq!(parse_commit_color(&digest("000000"))?, Rgb::new(0, 0, 0));
        assert_eq!(parse_commit_color(&digest("ffffff"))?, Rgb::new(255, 255, 255));
        assert_eq!(parse_commit_color(&digest("123456"))?, Rgb::new(18, 52, 86));
        assert_eq!(parse_commit_color(&digest("0a90f1"))?, Rgb::new(10, 144, 241));
        Ok(())
    }

    #[test]
    fn test_parse_commit_color_is_deterministic() -> Result<()> {
        let first = parse_commit_color(HEAD)?;
        for _ in 0..10 {
            assert_eq!(parse_commit_color(HEAD)?, first);
        }
        Ok(())
    }

    #[test]
    fn test_parse_commit_color_line_terminators() -> Result<()> {
        let line = &HEAD[..SHA1_HEX_LENGTH];
        assert_eq!(parse_commit_color(line)?, Rgb::new(171, 205, 239));

        let mut crlf = line.to_vec();
        crlf.extend_from_slice(b"\r\n");
        assert_eq!(parse_commit_color(&crlf)?, Rgb::new(171, 205, 239));
        Ok(())
    }

    #[test]
    fn test_parse_commit_color_truncated() {
        let short = &HEAD[..SHA1_HEX_LENGTH - 1];
        assert!(matches!(
            parse_commit_color(short),
            Err(ColorError::TruncatedInput { len: 39 })
        ));

        assert!(matches!(
            parse_commit_color(&HEAD[..10]),
            Err(ColorError::TruncatedInput { len: 10 })
        ));
        assert!(matches!(
            parse_commit_color(b""),
            Err(ColorError::TruncatedInput { len: 0 })
        ));
        assert!(matches!(
            parse_commit_color(b"\n"),
            Err(ColorError::TruncatedInput { len: 1 })
        ));
    }

    #[test]
    fn test_parse_commit_color_counts_line_terminator() -> Result<()> {
        // 39 hex digits plus the newline reach the digest length
        let mut short_line = HEAD[..SHA1_HEX_LENGTH - 1].to_vec();
        short_line.push(b'\n');
        assert_eq!(short_line.len(), SHA1_HEX_LENGTH);
        assert_eq!(parse_commit_color(&short_line)?, Rgb::new(171, 205, 239));

        // 38 hex digits plus the newline do not
        let mut shorter_line = HEAD[..SHA1_HEX_LENGTH - 2].to_vec();
        shorter_line.push(b'\n');
        assert!(matches!(
            parse_commit_color(&shorter_line),
            Err(ColorError::TruncatedInput { len: 39 })
        ));
        Ok(())
    }

    #[test]
    fn test_parse_commit_color_rejects_uppercase() {
        assert!(matches!(
            parse_commit_color(&digest("ABCDEF")),
            Err(ColorError::InvalidHexDigit { digit: 'A', offset: 0 })
        ));
        assert!(matches!(
            parse_commit_color(&digest("abcdeF")),
            Err(ColorError::InvalidHexDigit { digit: 'F', offset: 5 })
        ));
    }

    #[test]
    fn test_parse_commit_color_rejects_non_hex() {
        assert!(matches!(
            parse_commit_color(&digest("abgdef")),
            Err(ColorError::InvalidHexDigit { digit: 'g', offset: 2 })
        ));
        assert!(matches!(
            parse_commit_color(&digest("ab cd ")),
            Err(ColorError::InvalidHexDigit { digit: ' ', offset: 2 })
        ));
    }

    #[test]
    fn test_parse_commit_color_ignores_rest_of_digest() -> Result<()> {
        let mut line = digest("abcdef");
        line[SHA1_HEX_LENGTH - 1] = b'Z';
        assert_eq!(parse_commit_color(&line)?, Rgb::new(171, 205, 239));
        Ok(())
    }

    #[test]
    fn test_parse_hex_digit() -> Result<()> {
        for (offset, c) in b"0123456789abcdef".iter().enumerate() {
            assert_eq!(usize::from(parse_hex_digit(*c, offset)?), offset);
        }
        assert!(parse_hex_digit(b'A', 0).is_err());
        assert!(parse_hex_digit(b'g', 0).is_err());
        assert!(parse_hex_digit(b'/', 0).is_err());
        assert!(parse_hex_digit(b':', 0).is_err());
        assert!(parse_hex_digit(b'`', 0).is_err());
        Ok(())
    }

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(Rgb::new(0, 0, 0)), 0);
        assert_eq!(luminance(Rgb::new(255, 255, 255)), 255);
        assert_eq!(luminance(Rgb::new(255, 0, 0)), 76);
        assert_eq!(luminance(Rgb::new(0, 255, 0)), 149);
        assert_eq!(luminance(Rgb::new(0, 0, 255)), 29);
        assert_eq!(luminance(Rgb::new(171, 205, 239)), 198);
        assert_eq!(luminance(Rgb::new(18, 52, 86)), 45);
    }

    #[test]
    fn test_classify_color() {
        assert_eq!(classify_color(Rgb::new(0, 0, 0)), Brightness::Dark);
        assert_eq!(classify_color(Rgb::new(255, 255, 255)), Brightness::Light);
        assert_eq!(classify_color(Rgb::new(0, 255, 0)), Brightness::Light);
        assert_eq!(classify_color(Rgb::new(255, 0, 0)), Brightness::Dark);
        assert_eq!(classify_color(Rgb::new(171, 205, 239)), Brightness::Light);
    }

    #[test]
    fn test_classify_color_threshold() {
        assert_eq!(luminance(Rgb::new(127, 127, 127)), 127);
        assert_eq!(classify_color(Rgb::new(127, 127, 127)), Brightness::Dark);
        assert_eq!(luminance(Rgb::new(128, 128, 128)), 128);
        assert_eq!(classify_color(Rgb::new(128, 128, 128)), Brightness::Light);
    }

    #[test]
    fn test_brightness_display() {
        assert_eq!(Brightness::Light.to_string(), "light");
        assert_eq!(Brightness::Dark.to_string(), "dark");
    }
}
