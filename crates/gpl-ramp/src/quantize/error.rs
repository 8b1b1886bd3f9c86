//! Error type for strict bit depth validation

use std::fmt;

/// Error returned by [`BitDepth::try_new`](super::BitDepth::try_new) and
/// [`BitDepth::try_parse`](super::BitDepth::try_parse) when a value would
/// otherwise be silently replaced by the default depth.
#[derive(Debug, Clone, PartialEq)]
pub enum DepthError {
    /// Value is a number but lies outside `1..=8`
    OutOfRange(i64),
    /// Value is not a number at all
    NotNumeric(String),
}

impl fmt::Display for DepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthError::OutOfRange(bits) => {
                write!(f, "bit depth {} is outside 1..=8", bits)
            }
            DepthError::NotNumeric(raw) => {
                write!(f, "bit depth {:?} is not a number", raw)
            }
        }
    }
}

impl std::error::Error for DepthError {}
