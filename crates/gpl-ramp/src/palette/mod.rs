//! Palette document assembly
//!
//! This module provides the settings model, the row and header formatting,
//! and the [`PaletteBuilder`] that combines quantized channels into a
//! complete GIMP palette.

mod builder;
mod header;
mod model;
mod row;

pub use builder::{build, PaletteBuilder, Rows};
pub use header::{render_header, write_header, FORMAT_TAG};
pub use model::{ChannelDepths, ColorModel, PaletteSettings, Year, GRAY_SYNONYMS};
pub use row::{format_channel, write_channel, PaletteRow, CHANNEL_WIDTH, EMPTY_NAME};
