//! Logging and debug utilities.
//!
//! The tool runs inside prompt rendering, where anything written to the
//! terminal ends up in the prompt. Diagnostics are therefore opt-in only,
//! behind a variable name no other tool is likely to set.

use std::env;

/// Environment variable enabling diagnostics on stderr.
pub const DEBUG_ENV_VAR: &str = "COMMIT_COLOR_DEBUG";

/// Returns `true` when the `COMMIT_COLOR_DEBUG` environment variable is set.
#[must_use]
pub fn debug_enabled() -> bool {
    env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Print debug messages to stderr if `COMMIT_COLOR_DEBUG` is set.
///
/// Nothing is ever written otherwise, so a failing run stays silent in the
/// prompt.
///
/// # Arguments
///
/// * `message` - The debug message to print
///
/// # Examples
///
/// ```
/// # use commit_color::logs::debug;
/// debug("spawned git rev-parse HEAD");
/// debug(&format!("rgb={:?}", (171, 205, 239)));
/// ```
pub fn debug(message: &str) {
    if debug_enabled() {
        eprintln!("{message}");
    }
}
