//! GIMP palette header with the CC0 dedication block.

use std::fmt::{self, Write};

use super::model::PaletteSettings;

/// First line of every GIMP palette file.
pub const FORMAT_TAG: &str = "GIMP Palette";

const DEDICATION: [&str; 9] = [
    "#",
    "# To the extent possible under law, the author(s) have dedicated all copyright",
    "# and related and neighboring rights to this software to the public domain",
    "# worldwide. This software is distributed without any warranty.",
    "#",
    "# You should have received a copy of the CC0 Public Domain Dedication along",
    "# with this software. If not, see",
    "# <https://creativecommons.org/publicdomain/zero/1.0/>.",
    "#",
];

/// Write the header block, every line newline-terminated.
///
/// Title, column count, year and author are inserted verbatim. The block ends
/// with a lone `#` line that separates it from the color entries.
pub fn write_header<W: Write>(out: &mut W, settings: &PaletteSettings) -> fmt::Result {
    writeln!(out, "{}", FORMAT_TAG)?;
    writeln!(out, "Name: {}", settings.title)?;
    writeln!(out, "Columns: {}", settings.columns)?;
    writeln!(out, "#")?;
    writeln!(out, "# Written in {} by {}", settings.year, settings.author)?;
    for line in DEDICATION {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Render the header block into a new string.
pub fn render_header(settings: &PaletteSettings) -> String {
    let mut header = String::with_capacity(512);
    let _ = write_header(&mut header, settings);
    header
}
