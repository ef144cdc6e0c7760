//! Invocation of `git rev-parse HEAD` and capture of its output.
//!
//! This module provides functions for:
//! - Building the `git rev-parse HEAD` command
//! - Spawning a command with stderr discarded
//! - Reading its first output line into a bounded buffer
//! - Reaping the child process on every exit path

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};

use crate::color::SHA1_HEX_LENGTH;
use crate::error::ColorError;
use crate::logs::debug;

/// Maximum number of bytes captured: a full digest plus its line terminator.
pub const LINE_CAPACITY: usize = SHA1_HEX_LENGTH + 1;

/// Builds the `git rev-parse HEAD` command.
///
/// The command runs in the current working directory, which must be inside
/// a repository for it to succeed.
#[must_use]
pub fn rev_parse_head() -> Command {
    let mut command = Command::new("git");
    command.args(["rev-parse", "HEAD"]);
    command
}

/// Reads the first line of `reader`, keeping at most [`LINE_CAPACITY`] bytes.
///
/// The line terminator is kept when it fits in the buffer. A last line
/// without terminator still counts as a line.
///
/// # Arguments
///
/// * `reader` - Output stream of the child process
///
/// # Errors
///
/// - `ColorError::NoOutput` if the stream ends before any byte is read
/// - `ColorError::Read` if reading from the stream fails
///
/// # Examples
///
/// ```
/// # use commit_color::git::read_first_line;
/// let line = read_first_line(&b"0123abcd\nsecond line\n"[..]).unwrap();
/// assert_eq!(line, b"0123abcd\n");
/// ```
pub fn read_first_line(reader: impl Read) -> Result<Vec<u8>, ColorError> {
    let mut bounded = BufReader::new(reader.take(LINE_CAPACITY as u64));
    let mut line = Vec::with_capacity(LINE_CAPACITY);

    match bounded.read_until(b'\n', &mut line) {
        Ok(0) => Err(ColorError::NoOutput),
        Ok(_) => Ok(line),
        Err(e) => Err(ColorError::Read(e)),
    }
}

/// Runs `command` and captures the first line of its standard output.
///
/// Stderr is sent to the null device and stdout is piped. Once the line is
/// read the pipe is closed and the child is waited for, whether reading
/// succeeded or not. The exit status is only logged: a line is a line, even
/// from a failing process.
///
/// # Errors
///
/// - `ColorError::Spawn` if the process cannot be started
/// - `ColorError::NoOutput` if it writes nothing to stdout
/// - `ColorError::Read` if its stdout cannot be read
pub fn capture_first_line(command: &mut Command) -> Result<Vec<u8>, ColorError> {
    let mut child = command
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(ColorError::Spawn)?;

    // stdout is moved into the reader and closed before waiting
    let result = match child.stdout.take() {
        Some(stdout) => read_first_line(stdout),
        None => Err(ColorError::NoOutput),
    };

    // Always reap the child
    release(&mut child);

    result
}

/// Captures the first output line of `git rev-parse HEAD`.
///
/// # Errors
///
/// Same as [`capture_first_line`].
pub fn query_head_commit() -> Result<Vec<u8>, ColorError> {
    capture_first_line(&mut rev_parse_head())
}

fn release(child: &mut Child) {
    match child.wait() {
        Ok(status) => debug(&format!("git exited with {status}")),
        Err(e) => debug(&format!("failed to wait for git: {e}")),
    }
}
