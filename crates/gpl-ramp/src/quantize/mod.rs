//! Channel quantization
//!
//! Maps a per-channel bit depth to the 8-bit values of its quantization levels.

mod bit_depth;
mod error;
mod levels;

pub use bit_depth::BitDepth;
pub use error::DepthError;
pub use levels::{levels, ChannelLevels};
