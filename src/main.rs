//! Prompt color derived from the current git commit.
//!
//! This binary runs `git rev-parse HEAD`, turns the first six hex digits of
//! the commit id into a 24-bit color and prints the matching ANSI escape
//! sequence, ready to be embedded in a shell prompt.
//!
//! # Usage
//!
//! The program outputs one of two possible sequences, without newline:
//! - `ESC[38;2;R;G;Bm` - light colors, used as foreground
//! - `ESC[48;2;R;G;BmESC[37m` - dark colors, used as background with white text
//!
//! Exit codes:
//! - 0: Escape sequence written
//! - 1: No color could be derived, nothing written
//!
//! # Environment Variables
//!
//! - `COMMIT_COLOR_DEBUG`: When set, enables debug output to stderr showing
//!   the captured line, parsed RGB values, luminance and the reason of a
//!   failure. The output lands in the prompt, so only set it while debugging.
//!   A plain `DEBUG` variable is ignored.

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use commit_color::commit_escape_sequence;
use commit_color::logs::debug;

/// Write the whole sequence at once and flush it.
fn emit(sequence: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(sequence.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match commit_escape_sequence().and_then(|sequence| emit(&sequence)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug(&format!("unable to derive a commit color: {err:#}"));
            ExitCode::FAILURE
        }
    }
}
