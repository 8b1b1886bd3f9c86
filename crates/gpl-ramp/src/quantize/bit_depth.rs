//! Per-channel bit depth with lenient normalisation.

use std::fmt;

use super::error::DepthError;

/// Number of bits of precision carried by one color channel.
///
/// Always in `1..=8`. Every constructor except the `try_*` family accepts any
/// input and degrades to [`BitDepth::MAX`] when the value is unusable, so a
/// malformed configuration still yields a full 8-bit ramp.
///
/// # Example
///
/// ```
/// use gpl_ramp::BitDepth;
///
/// assert_eq!(BitDepth::new(3).bits(), 3);
/// assert_eq!(BitDepth::new(0), BitDepth::MAX);
/// assert_eq!(BitDepth::from_f64(2.9).bits(), 2);
/// assert_eq!(BitDepth::parse_lossy("x"), BitDepth::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    /// Smallest accepted depth (two levels: 0 and 255).
    pub const MIN: BitDepth = BitDepth(1);
    /// Largest accepted depth and the substitute for invalid input.
    pub const MAX: BitDepth = BitDepth(8);

    /// Normalise an integer depth. Values outside `1..=8` become 8.
    #[inline]
    pub fn new(bits: i64) -> Self {
        Self::try_new(bits).unwrap_or(Self::MAX)
    }

    /// Normalise a possibly fractional depth.
    ///
    /// Non-finite values and values outside `1.0..=8.0` become 8; anything
    /// else is truncated toward zero.
    pub fn from_f64(bits: f64) -> Self {
        if !bits.is_finite() || bits < 1.0 || bits > 8.0 {
            return Self::MAX;
        }
        BitDepth(bits.trunc() as u8)
    }

    /// Normalise a textual depth as found in configuration files.
    ///
    /// Only plain ASCII digit strings count as numbers; signs, decimal points
    /// and surrounding whitespace make the token non-numeric, which yields 8.
    pub fn parse_lossy(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or(Self::MAX)
    }

    /// Strict counterpart of [`new`](Self::new).
    pub fn try_new(bits: i64) -> Result<Self, DepthError> {
        match bits {
            1..=8 => Ok(BitDepth(bits as u8)),
            _ => Err(DepthError::OutOfRange(bits)),
        }
    }

    /// Strict counterpart of [`parse_lossy`](Self::parse_lossy).
    pub fn try_parse(raw: &str) -> Result<Self, DepthError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DepthError::NotNumeric(raw.to_string()));
        }
        // All digits but too long for i64 is still "a number out of range".
        match raw.parse::<i64>() {
            Ok(bits) => Self::try_new(bits),
            Err(_) => Err(DepthError::OutOfRange(i64::MAX)),
        }
    }

    /// The depth in bits.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Number of quantization levels, `2^bits`.
    #[inline]
    pub fn level_count(self) -> usize {
        1 << self.0
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range_is_kept() {
        for bits in 1..=8 {
            assert_eq!(BitDepth::new(bits).bits() as i64, bits);
        }
    }

    #[test]
    fn test_out_of_range_becomes_max() {
        assert_eq!(BitDepth::new(0), BitDepth::MAX);
        assert_eq!(BitDepth::new(9), BitDepth::MAX);
        assert_eq!(BitDepth::new(-3), BitDepth::MAX);
        assert_eq!(BitDepth::new(i64::MIN), BitDepth::MAX);
    }

    #[test]
    fn test_fractional_depth_truncates() {
        assert_eq!(BitDepth::from_f64(1.0).bits(), 1);
        assert_eq!(BitDepth::from_f64(4.99).bits(), 4);
        assert_eq!(BitDepth::from_f64(8.0).bits(), 8);
    }

    #[test]
    fn test_fractional_out_of_range_becomes_max() {
        assert_eq!(BitDepth::from_f64(0.5), BitDepth::MAX);
        assert_eq!(BitDepth::from_f64(8.5), BitDepth::MAX);
        assert_eq!(BitDepth::from_f64(f64::NAN), BitDepth::MAX);
        assert_eq!(BitDepth::from_f64(f64::NEG_INFINITY), BitDepth::MAX);
    }

    #[test]
    fn test_parse_lossy() {
        assert_eq!(BitDepth::parse_lossy("3").bits(), 3);
        assert_eq!(BitDepth::parse_lossy("08").bits(), 8);
        assert_eq!(BitDepth::parse_lossy("0"), BitDepth::MAX);
        assert_eq!(BitDepth::parse_lossy("-3"), BitDepth::MAX);
        assert_eq!(BitDepth::parse_lossy("2.5"), BitDepth::MAX);
        assert_eq!(BitDepth::parse_lossy(" 2"), BitDepth::MAX);
        assert_eq!(BitDepth::parse_lossy(""), BitDepth::MAX);
        assert_eq!(BitDepth::parse_lossy("99999999999999999999999"), BitDepth::MAX);
    }

    #[test]
    fn test_try_parse_reports_reason() {
        assert_eq!(
            BitDepth::try_parse("abc"),
            Err(DepthError::NotNumeric("abc".to_string()))
        );
        assert_eq!(BitDepth::try_parse("12"), Err(DepthError::OutOfRange(12)));
        assert_eq!(BitDepth::try_parse("5"), Ok(BitDepth::new(5)));
    }

    #[test]
    fn test_level_count() {
        assert_eq!(BitDepth::MIN.level_count(), 2);
        assert_eq!(BitDepth::new(3).level_count(), 8);
        assert_eq!(BitDepth::MAX.level_count(), 256);
    }

    #[test]
    fn test_depth_error_display() {
        assert_eq!(
            DepthError::OutOfRange(9).to_string(),
            "bit depth 9 is outside 1..=8"
        );
        assert_eq!(
            DepthError::NotNumeric("x".to_string()).to_string(),
            "bit depth \"x\" is not a number"
        );
    }
}
