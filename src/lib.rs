//! Prompt coloring after the current git commit.
//!
//! The first six hex digits of the `HEAD` commit id give a 24-bit color.
//! Light colors are used as foreground, dark ones as background with white
//! text, so the prompt stays readable whatever the commit.

pub mod color;
pub mod error;
pub mod escape;
pub mod git;
pub mod logs;

use anyhow::{Context, Result};

use color::{classify_color, luminance, parse_commit_color};
use escape::escape_sequence;
use git::query_head_commit;
use logs::debug;

pub use error::ColorError;

/// Derive the prompt escape sequence for the current `HEAD` commit.
///
/// This function orchestrates the entire process:
/// 1. Run `git rev-parse HEAD` and capture its first line
/// 2. Parse the first three hex octets into RGB values
/// 3. Classify the color as light or dark
/// 4. Build the matching escape sequence
///
/// Nothing is written anywhere: the caller decides what to do with the
/// sequence, so a failure can never leave a partial sequence behind.
///
/// # Errors
///
/// Returns an error if:
/// - `git` cannot be started or prints nothing (e.g. outside a repository)
/// - The commit id is shorter than 40 characters
/// - One of its first six characters is not a lowercase hex digit
pub fn commit_escape_sequence() -> Result<String> {
    let line = query_head_commit().context("Failed to query the HEAD commit")?;
    render_line(&line)
}

/// Build the escape sequence for a line captured from `git rev-parse HEAD`.
///
/// # Errors
///
/// Returns an error if the line is not a valid commit id, see
/// [`color::parse_commit_color`].
///
/// # Examples
///
/// ```
/// # use commit_color::render_line;
/// let line = b"abcdef0123456789abcdef0123456789abcdef01\n";
/// assert_eq!(render_line(line).unwrap(), "\x1b[38;2;171;205;239m");
/// ```
pub fn render_line(line: &[u8]) -> Result<String> {
    debug(&format!("line={:?}", line.escape_ascii().to_string()));

    let rgb = parse_commit_color(line).context("Failed to parse the commit id")?;
    debug(&format!("rgb={rgb:?}"));

    let lum = luminance(rgb);
    debug(&format!("lum={lum}"));

    let brightness = classify_color(rgb);
    debug(&format!("brightness={brightness}"));

    Ok(escape_sequence(rgb, brightness))
}
