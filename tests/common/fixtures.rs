//! Test fixtures and constants.

use std::path::{Path, PathBuf};

/// Configuration files in the `key = value` syntax
pub mod configs {
    /// 2-bit gray ramp with every header field set
    pub const GRAY_2BIT: &str = "type = gray\n\
                                 depth = 2\n\
                                 title = Gray 2\n\
                                 columns = 4\n\
                                 author = Tester\n\
                                 years = 2020\n";

    /// Classic 3-3-2 RGB palette (256 colors)
    pub const RGB_332: &str = "type = rgb\n\
                               depth = 3 3 2\n\
                               title = RGB 332\n\
                               columns = 16\n";

    /// One-bit RGB cube with free-text years
    pub const RGB_1BIT: &str = "depth = 1 1 1\n\
                                title = Cube\n\
                                years = 2020-2022\n";

    /// Depth token that strict mode rejects
    pub const BAD_DEPTH: &str = "depth = 3 nine 2\n";
}

/// Same 2-bit gray ramp as [`configs::GRAY_2BIT`], in YAML
pub const GRAY_2BIT_YAML: &str = "type: gray\n\
                                  depth: 2\n\
                                  title: Gray 2\n\
                                  columns: 4\n\
                                  author: Tester\n\
                                  years: 2020\n";

/// Expected document for [`configs::GRAY_2BIT`]
pub const GRAY_2BIT_DOCUMENT: &str = "GIMP Palette\n\
Name: Gray 2\n\
Columns: 4\n\
#\n\
# Written in 2020 by Tester\n\
#\n\
# To the extent possible under law, the author(s) have dedicated all copyright\n\
# and related and neighboring rights to this software to the public domain\n\
# worldwide. This software is distributed without any warranty.\n\
#\n\
# You should have received a copy of the CC0 Public Domain Dedication along\n\
# with this software. If not, see\n\
# <https://creativecommons.org/publicdomain/zero/1.0/>.\n\
#\n\
\x20 0   0   0\t#\n\
\x2085  85  85\t#\n\
170 170 170\t#\n\
255 255 255\t#\n";

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write config fixture");
    path
}
