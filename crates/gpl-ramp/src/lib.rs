#![allow(clippy::manual_range_contains, clippy::module_inception)]

//! gpl-ramp: exhaustive quantized ramp palettes in the GIMP palette format
//!
//! Given a bit depth per channel, this library enumerates every color that
//! depth can express and writes them as a `.gpl` document, either as a single
//! gray ramp or as the full RGB cross product.
//!
//! # Quick Start
//!
//! ```
//! use gpl_ramp::{BitDepth, ChannelDepths, ColorModel, PaletteBuilder, PaletteSettings};
//!
//! let settings = PaletteSettings::new(2024)
//!     .color_model(ColorModel::Gray)
//!     .depths(ChannelDepths::uniform(BitDepth::new(2)))
//!     .title("Gray 2-bit");
//!
//! let text = PaletteBuilder::new(&settings).build();
//! assert!(text.contains("Name: Gray 2-bit\n"));
//! assert!(text.ends_with(" 85  85  85\t#\n170 170 170\t#\n255 255 255\t#\n"));
//! ```
//!
//! # Quantization
//!
//! A channel with `d` bits has `q + 1` levels where `q = 2^d - 1`. Level `i`
//! maps to `round(i * 255 / q)`, rounding halves away from zero. The value is
//! computed with integers only (see [`levels`]) so the output is bit-exact on
//! every platform; a float division followed by `round()` can land on the
//! wrong side of a boundary.
//!
//! | Depth | Levels | Step |
//! |-------|--------|------|
//! | 1 | 2 | 255 |
//! | 2 | 4 | 85 |
//! | 4 | 16 | 17 |
//! | 8 | 256 | 1 |
//!
//! Depths 3, 5, 6 and 7 do not divide 255 evenly; their steps alternate.
//!
//! # Row Order
//!
//! RGB palettes iterate blue in the outer loop, green in the middle and red
//! innermost. Tools that lay the palette out in a grid depend on blue varying
//! slowest, so the order is part of the output format.
//!
//! # Lenient Input
//!
//! [`BitDepth`] never rejects a value: anything outside `1..=8` or not a
//! number becomes 8. Callers that want to report bad input use
//! [`BitDepth::try_new`] / [`BitDepth::try_parse`] instead.

pub mod palette;
pub mod quantize;


pub use palette::{
    build, ChannelDepths, ColorModel, PaletteBuilder, PaletteRow, PaletteSettings, Year,
};
pub use quantize::{levels, BitDepth, ChannelLevels, DepthError};
