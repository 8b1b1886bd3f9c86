//! PaletteBuilder -- assembles the complete palette document.
//!
//! [`PaletteBuilder`] quantizes each channel once at construction and then
//! produces the header and rows either as one string ([`build`](PaletteBuilder::build))
//! or streamed into a writer ([`write_to`](PaletteBuilder::write_to)).

use std::fmt::Write as _;
use std::io;
use std::iter::FusedIterator;

use super::header::{render_header, write_header};
use super::model::{ColorModel, PaletteSettings};
use super::row::PaletteRow;
use crate::quantize::{levels, ChannelLevels};

/// Bytes of one rendered row including its newline.
const ROW_LEN: usize = 14;

/// Quantized channels selected by the color model.
#[derive(Debug, Clone)]
enum Body {
    Gray(ChannelLevels),
    Rgb {
        red: ChannelLevels,
        green: ChannelLevels,
        blue: ChannelLevels,
    },
}

/// Builds a GIMP palette for one set of resolved settings.
///
/// Gray palettes hold one row per level of the red-channel depth with
/// R = G = B. RGB palettes hold every `(red, green, blue)` combination, with
/// blue varying slowest and red fastest; consumers rely on that order.
///
/// The builder is immutable and can render the same document any number of
/// times.
///
/// # Example
///
/// ```
/// use gpl_ramp::{BitDepth, ChannelDepths, ColorModel, PaletteBuilder, PaletteSettings};
///
/// let settings = PaletteSettings::new(2024)
///     .depths(ChannelDepths::uniform(BitDepth::new(1)));
/// let builder = PaletteBuilder::new(&settings);
///
/// assert_eq!(builder.row_count(), 8);
/// let text = builder.build();
/// assert!(text.starts_with("GIMP Palette\n"));
/// assert!(text.ends_with("255 255 255\t#\n"));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    settings: PaletteSettings,
    body: Body,
}

impl PaletteBuilder {
    /// Quantize the channels required by `settings.color_model`.
    pub fn new(settings: &PaletteSettings) -> Self {
        let depths = settings.depths;
        let body = match settings.color_model {
            ColorModel::Gray => Body::Gray(levels(depths.red)),
            ColorModel::Rgb => Body::Rgb {
                red: levels(depths.red),
                green: levels(depths.green),
                blue: levels(depths.blue),
            },
        };

        Self {
            settings: settings.clone(),
            body,
        }
    }

    /// The settings captured at construction, used for the header.
    #[inline]
    pub fn settings(&self) -> &PaletteSettings {
        &self.settings
    }

    /// Number of color rows the document will contain.
    pub fn row_count(&self) -> usize {
        match &self.body {
            Body::Gray(gray) => gray.len(),
            Body::Rgb { red, green, blue } => red.len() * green.len() * blue.len(),
        }
    }

    /// Iterate the color rows in document order.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            body: &self.body,
            next: 0,
            total: self.row_count(),
        }
    }

    /// The header block alone.
    pub fn header(&self) -> String {
        render_header(&self.settings)
    }

    /// Render the full document (header followed by all rows) as one string.
    ///
    /// For deep RGB palettes prefer [`write_to`](Self::write_to): 8/8/8
    /// produces roughly 235 MB of text.
    pub fn build(&self) -> String {
        let mut doc = String::with_capacity(512 + self.row_count() * ROW_LEN);
        let _ = write_header(&mut doc, &self.settings);
        for row in self.rows() {
            let _ = writeln!(doc, "{}", row);
        }
        doc
    }

    /// Stream the full document into `out`.
    ///
    /// Produces exactly the bytes of [`build`](Self::build). `out` should be
    /// buffered; every row is a separate write.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.header().as_bytes())?;
        for row in self.rows() {
            writeln!(out, "{}", row)?;
        }
        out.flush()
    }
}

/// Build the full palette document for `settings`.
pub fn build(settings: &PaletteSettings) -> String {
    PaletteBuilder::new(settings).build()
}

/// Iterator over the rows of a [`PaletteBuilder`], in document order.
///
/// Row `n` of an RGB body decomposes as
/// `n = (blue * greens + green) * reds + red`.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    body: &'a Body,
    next: usize,
    total: usize,
}

impl Iterator for Rows<'_> {
    type Item = PaletteRow;

    fn next(&mut self) -> Option<PaletteRow> {
        if self.next >= self.total {
            return None;
        }
        let n = self.next;
        self.next += 1;

        let row = match self.body {
            Body::Gray(gray) => PaletteRow::gray(gray[n]),
            Body::Rgb { red, green, blue } => {
                let r = n % red.len();
                let g = (n / red.len()) % green.len();
                let b = n / (red.len() * green.len());
                PaletteRow::new(red[r], green[g], blue[b])
            }
        };
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
