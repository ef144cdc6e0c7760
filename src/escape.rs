//! ANSI escape sequences for 24-bit terminal colors.
//!
//! See <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>.

use crate::color::{Brightness, Rgb};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Select Graphic Rendition terminator.
pub const SGR: &str = "m";
/// SGR selector setting a 24-bit foreground color.
pub const SET_24BIT_FOREGROUND: u8 = 38;
/// SGR selector setting a 24-bit background color.
pub const SET_24BIT_BACKGROUND: u8 = 48;
/// SGR parameter forcing a plain white foreground.
pub const SET_WHITE_FOREGROUND: &str = "37";

/// SGR selector used for a color of the given brightness.
///
/// Light colors are readable as text, dark ones are used as background.
#[must_use]
pub fn selector(brightness: Brightness) -> u8 {
    match brightness {
        Brightness::Light => SET_24BIT_FOREGROUND,
        Brightness::Dark => SET_24BIT_BACKGROUND,
    }
}

/// Build the escape sequence coloring the prompt after `rgb`.
///
/// Dark colors are set as background and followed by a white foreground.
/// The background comes first, some terminals reset the foreground when
/// the background changes. No reset sequence or newline is appended.
///
/// # Examples
///
/// ```
/// # use commit_color::color::{Brightness, Rgb};
/// # use commit_color::escape::escape_sequence;
/// let light = escape_sequence(Rgb::new(18, 52, 86), Brightness::Light);
/// assert_eq!(light, "\x1b[38;2;18;52;86m");
///
/// let dark = escape_sequence(Rgb::new(0, 0, 0), Brightness::Dark);
/// assert_eq!(dark, "\x1b[48;2;0;0;0m\x1b[37m");
/// ```
#[must_use]
pub fn escape_sequence(rgb: Rgb, brightness: Brightness) -> String {
    let Rgb { r, g, b } = rgb;
    let mode = selector(brightness);
    let mut sequence = format!("{CSI}{mode};2;{r};{g};{b}{SGR}");

    if brightness == Brightness::Dark {
        sequence.push_str(CSI);
        sequence.push_str(SET_WHITE_FOREGROUND);
        sequence.push_str(SGR);
    }

    sequence
}
