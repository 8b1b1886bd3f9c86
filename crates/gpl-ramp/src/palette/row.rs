//! A single color entry line of the palette body.

use std::fmt::{self, Write};

/// Field width of one channel value.
pub const CHANNEL_WIDTH: usize = 3;

/// Name column written for every entry; the rows carry no color names.
pub const EMPTY_NAME: &str = "#";

/// Right-align `value` in a field of `width` characters, padding with spaces.
///
/// ```
/// use gpl_ramp::palette::format_channel;
///
/// assert_eq!(format_channel(5, 3), "  5");
/// assert_eq!(format_channel(42, 3), " 42");
/// assert_eq!(format_channel(200, 3), "200");
/// ```
pub fn format_channel(value: u8, width: usize) -> String {
    let mut field = String::with_capacity(width);
    // Writing into a String cannot fail.
    let _ = write_channel(&mut field, value, width);
    field
}

/// Streaming form of [`format_channel`].
#[inline]
pub fn write_channel<W: Write>(out: &mut W, value: u8, width: usize) -> fmt::Result {
    write!(out, "{:>width$}", value, width = width)
}

/// One emitted palette entry.
///
/// Displays as `"RRR GGG BBB\t#"` with each channel right-aligned to
/// [`CHANNEL_WIDTH`], without a trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteRow {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PaletteRow {
    #[inline]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// A row with all three channels set to `value`.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl fmt::Display for PaletteRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_channel(f, self.red, CHANNEL_WIDTH)?;
        f.write_char(' ')?;
        write_channel(f, self.green, CHANNEL_WIDTH)?;
        f.write_char(' ')?;
        write_channel(f, self.blue, CHANNEL_WIDTH)?;
        f.write_char('\t')?;
        f.write_str(EMPTY_NAME)
    }
}
