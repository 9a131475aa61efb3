//! WT450 frame bit layout and parity computation
//!
//! A frame is 36 bits, MSB-first per field:
//!
//! | field        | bits | value           |
//! |--------------|------|-----------------|
//! | preamble     | 4    | `1100`          |
//! | house code   | 4    | 1-15            |
//! | channel      | 2    | channel - 1     |
//! | separator    | 3    | `110`           |
//! | humidity     | 7    | 0-127           |
//! | temperature  | 15   | floor(t*128)+6400 |
//! | parity       | 1    | even over bits 1-35 |

use crate::core::SensorFrame;
use crate::spec;

/// WT450 frame encoder
///
/// Produces the ordered `(value, width)` field stream the pulse transmitter
/// consumes directly, and the packed 36-bit frame value for callers that
/// want the whole frame at once.
pub struct FrameEncoder;

impl FrameEncoder {
    /// The six frame fields in wire order as `(value, width)` pairs
    ///
    /// Field values are masked to their declared width, so out-of-range
    /// inputs alias rather than corrupt neighboring fields.
    pub fn fields(frame: &SensorFrame) -> [(u32, u32); 6] {
        [
            (spec::PREAMBLE, spec::PREAMBLE_BITS),
            (frame.house.value() as u32, spec::HOUSE_BITS),
            (frame.channel.encoded() as u32, spec::CHANNEL_BITS),
            (spec::SEPARATOR, spec::SEPARATOR_BITS),
            (frame.humidity.value() as u32, spec::HUMIDITY_BITS),
            (frame.temperature.encoded() as u32, spec::TEMPERATURE_BITS),
        ]
    }

    /// Pack the 35 data bits of a frame into the low bits of a `u64`
    pub fn data_bits(frame: &SensorFrame) -> u64 {
        let mut data = 0u64;
        for (value, width) in Self::fields(frame) {
            let mask = (1u64 << width) - 1;
            data = (data << width) | (value as u64 & mask);
        }
        data
    }

    /// Compute the even-parity bit over the 35 data bits
    pub fn parity_bit(frame: &SensorFrame) -> bool {
        Self::data_bits(frame).count_ones() % 2 == 1
    }

    /// Encode a complete 36-bit frame, parity bit in the least significant
    /// position
    pub fn encode(frame: &SensorFrame) -> u64 {
        let data = Self::data_bits(frame);
        (data << 1) | (data.count_ones() % 2 == 1) as u64
    }

    /// Expand a frame into its 36 bits, most significant first
    pub fn bits(frame: &SensorFrame) -> Vec<bool> {
        let encoded = Self::encode(frame);
        (0..spec::FRAME_BITS)
            .rev()
            .map(|k| (encoded >> k) & 1 != 0)
            .collect()
    }
}
