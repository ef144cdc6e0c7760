//! Error kinds for every step of the commit color pipeline.

use std::io;
use thiserror::Error;

/// Reasons why no color could be derived from the current commit.
///
/// Every variant leads to the same observable behavior (empty stdout,
/// exit status 1), they only differ in the diagnostics printed with
/// `COMMIT_COLOR_DEBUG`.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The `git` process could not be started.
    #[error("failed to spawn git")]
    Spawn(#[source] io::Error),

    /// The process closed its stdout before writing a single byte.
    #[error("git produced no output")]
    NoOutput,

    /// Reading the process stdout failed.
    #[error("failed to read git output")]
    Read(#[source] io::Error),

    /// The captured line is shorter than a full hex digest.
    #[error("commit id is truncated: got {len} characters")]
    TruncatedInput {
        /// Number of characters captured, line terminator excluded.
        len: usize,
    },

    /// A character outside `0-9a-f` was found in the color prefix.
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidHexDigit {
        /// The offending character.
        digit: char,
        /// Its position in the captured line.
        offset: usize,
    },
}
