//! Evenly spaced 8-bit output values for a channel's quantization levels.

use std::ops::Deref;

use super::bit_depth::BitDepth;

/// Largest 8-bit output value, `2^8 - 1`.
const MAX_OUTPUT: u32 = (1 << 8) - 1;

/// The ordered 8-bit values of every quantization level of one channel.
///
/// Index `i` holds the output value of level `i`. The sequence has
/// `2^depth` entries, starts at 0, ends at 255 and never decreases.
/// Dereferences to `[u8]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLevels {
    depth: BitDepth,
    values: Vec<u8>,
}

impl ChannelLevels {
    /// The depth these levels were generated for.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// The level values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}

impl Deref for ChannelLevels {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.values
    }
}

/// Compute the output values for every level of a channel with `depth` bits.
///
/// Level `i` of `q = 2^depth - 1` is `round(i * 255 / q)` with halves rounded
/// away from zero, evaluated entirely in integers as
/// `(x + x % q) / q` where `x = i * 255`. Writing `x = k*q + r`, the sum is
/// `k*q + 2r`, so the quotient gains one exactly when `2r >= q`.
///
/// # Example
///
/// ```
/// use gpl_ramp::{levels, BitDepth};
///
/// assert_eq!(&*levels(BitDepth::new(2)), &[0, 85, 170, 255]);
/// assert_eq!(&*levels(BitDepth::new(3)), &[0, 36, 73, 109, 146, 182, 219, 255]);
/// ```
pub fn levels(depth: BitDepth) -> ChannelLevels {
    let quantity = (1u32 << depth.bits()) - 1;

    let values = (0..=quantity)
        .map(|index| {
            let scaled = index * MAX_OUTPUT;
            ((scaled + scaled % quantity) / quantity) as u8
        })
        .collect();

    ChannelLevels { depth, values }
}
