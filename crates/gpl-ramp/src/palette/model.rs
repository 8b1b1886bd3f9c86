//! Settings consumed by the palette builder.

use std::fmt;

use crate::quantize::BitDepth;

/// Spellings accepted for the grayscale model. Matching is case-sensitive.
pub const GRAY_SYNONYMS: [&str; 5] = ["g", "gr", "gry", "gray", "grey"];

/// Color model of the generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// One ramp with R = G = B, driven by the red channel depth.
    Gray,
    /// Full cross product of three independently quantized channels.
    #[default]
    Rgb,
}

impl ColorModel {
    /// Resolve a configuration string.
    ///
    /// Any of [`GRAY_SYNONYMS`] selects [`ColorModel::Gray`]; every other
    /// string, including differently cased grayscale spellings, is RGB.
    ///
    /// ```
    /// use gpl_ramp::ColorModel;
    ///
    /// assert_eq!(ColorModel::from_name("grey"), ColorModel::Gray);
    /// assert_eq!(ColorModel::from_name("Gray"), ColorModel::Rgb);
    /// ```
    pub fn from_name(name: &str) -> Self {
        if GRAY_SYNONYMS.contains(&name) {
            ColorModel::Gray
        } else {
            ColorModel::Rgb
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorModel::Gray => write!(f, "gray"),
            ColorModel::Rgb => write!(f, "rgb"),
        }
    }
}

/// Bit depths for the red, green and blue channels.
///
/// In gray mode only `red` is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelDepths {
    pub red: BitDepth,
    pub green: BitDepth,
    pub blue: BitDepth,
}

impl ChannelDepths {
    pub fn new(red: BitDepth, green: BitDepth, blue: BitDepth) -> Self {
        Self { red, green, blue }
    }

    /// Same depth on all three channels.
    pub fn uniform(depth: BitDepth) -> Self {
        Self::new(depth, depth, depth)
    }

    /// Build from an ordered `(red, green, blue)` list.
    ///
    /// Missing trailing channels default to [`BitDepth::MAX`]; entries past
    /// the third are ignored.
    pub fn from_slice(depths: &[BitDepth]) -> Self {
        let at = |i: usize| depths.get(i).copied().unwrap_or_default();
        Self::new(at(0), at(1), at(2))
    }
}

/// Copyright year as it appears in the header.
///
/// Either a plain year or free text such as `"2020-2022"`; rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Year {
    Number(i32),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(year) => write!(f, "{}", year),
            Year::Text(text) => f.write_str(text),
        }
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Year::Number(year)
    }
}

impl From<&str> for Year {
    fn from(text: &str) -> Self {
        Year::Text(text.to_string())
    }
}

impl From<String> for Year {
    fn from(text: String) -> Self {
        Year::Text(text)
    }
}

/// Fully resolved, immutable input of [`PaletteBuilder`](super::PaletteBuilder).
///
/// Only the year has no built-in default because it depends on the clock;
/// everything else starts at RGB 8/8/8, title `"GIMP Palette"`, 16 columns and
/// author `"anonymous"`, and can be overridden with the consuming setters.
///
/// # Example
///
/// ```
/// use gpl_ramp::{BitDepth, ChannelDepths, ColorModel, PaletteSettings};
///
/// let settings = PaletteSettings::new(2024)
///     .color_model(ColorModel::Gray)
///     .depths(ChannelDepths::uniform(BitDepth::new(4)))
///     .title("Gray 4");
///
/// assert_eq!(settings.title, "Gray 4");
/// assert_eq!(settings.columns, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSettings {
    pub color_model: ColorModel,
    pub depths: ChannelDepths,
    pub title: String,
    pub columns: u32,
    pub author: String,
    pub year: Year,
}

impl PaletteSettings {
    pub const DEFAULT_TITLE: &'static str = "GIMP Palette";
    pub const DEFAULT_COLUMNS: u32 = 16;
    pub const DEFAULT_AUTHOR: &'static str = "anonymous";

    /// Default settings attributed to `year`.
    pub fn new(year: impl Into<Year>) -> Self {
        Self {
            color_model: ColorModel::default(),
            depths: ChannelDepths::default(),
            title: Self::DEFAULT_TITLE.to_string(),
            columns: Self::DEFAULT_COLUMNS,
            author: Self::DEFAULT_AUTHOR.to_string(),
            year: year.into(),
        }
    }

    #[inline]
    pub fn color_model(mut self, model: ColorModel) -> Self {
        self.color_model = model;
        self
    }

    #[inline]
    pub fn depths(mut self, depths: ChannelDepths) -> Self {
        self.depths = depths;
        self
    }

    #[inline]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    #[inline]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[inline]
    pub fn year(mut self, year: impl Into<Year>) -> Self {
        self.year = year.into();
        self
    }

    /// Total bits that drive the row count: the red depth in gray mode,
    /// the sum of all three depths in RGB mode.
    pub fn depth_sum(&self) -> u32 {
        let ChannelDepths { red, green, blue } = self.depths;
        match self.color_model {
            ColorModel::Gray => red.bits() as u32,
            ColorModel::Rgb => red.bits() as u32 + green.bits() as u32 + blue.bits() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_synonyms() {
        for name in GRAY_SYNONYMS {
            assert_eq!(ColorModel::from_name(name), ColorModel::Gray, "{name}");
        }
    }

    #[test]
    fn test_everything_else_is_rgb() {
        for name in ["rgb", "", "GRAY", "Grey", "greyscale", " gray", "g "] {
            assert_eq!(ColorModel::from_name(name), ColorModel::Rgb, "{name:?}");
        }
    }

    #[test]
    fn test_depths_from_slice_pads_with_max() {
        let three = BitDepth::new(3);
        assert_eq!(
            ChannelDepths::from_slice(&[three]),
            ChannelDepths::new(three, BitDepth::MAX, BitDepth::MAX)
        );
        assert_eq!(ChannelDepths::from_slice(&[]), ChannelDepths::default());
    }

    #[test]
    fn test_depths_from_slice_ignores_extra() {
        let d = [1, 2, 3, 4].map(BitDepth::new);
        assert_eq!(
            ChannelDepths::from_slice(&d),
            ChannelDepths::new(d[0], d[1], d[2])
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = PaletteSettings::new(2024);
        assert_eq!(settings.color_model, ColorModel::Rgb);
        assert_eq!(settings.depths, ChannelDepths::uniform(BitDepth::MAX));
        assert_eq!(settings.title, "GIMP Palette");
        assert_eq!(settings.columns, 16);
        assert_eq!(settings.author, "anonymous");
        assert_eq!(settings.year, Year::Number(2024));
    }

    #[test]
    fn test_year_display_is_verbatim() {
        assert_eq!(Year::from(1999).to_string(), "1999");
        assert_eq!(Year::from("2020-2022").to_string(), "2020-2022");
    }

    #[test]
    fn test_depth_sum() {
        let depths = ChannelDepths::new(BitDepth::new(3), BitDepth::new(3), BitDepth::new(2));
        let rgb = PaletteSettings::new(2024).depths(depths);
        assert_eq!(rgb.depth_sum(), 8);
        let gray = rgb.color_model(ColorModel::Gray);
        assert_eq!(gray.depth_sum(), 3);
    }
}
