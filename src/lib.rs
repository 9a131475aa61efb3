//! # WT450 Protocol Transmitter
//!
//! A Rust library for encoding sensor readings into the WT450 wireless
//! weather-sensor protocol and bit-banging them onto a digital output line.
//!
//! WT450 is a one-way, fixed-format protocol used by temperature/humidity
//! transmitters talking to a receiving base station. This library provides:
//!
//! - Packing of house code, channel, humidity, and temperature into the
//!   36-bit frame with even parity
//! - Self-clocking pulse rendering (one long pulse = 0, two short pulses = 1)
//!   with start/end framing and configurable repeats
//! - Field validation and error handling
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```no_run
//! use wt450_transmitter::{OutputLine, Level, Result, ThreadDelay, Wt450Transmitter};
//!
//! struct ConsoleLine;
//!
//! impl OutputLine for ConsoleLine {
//!     fn set_level(&mut self, level: Level) -> Result<()> {
//!         println!("line -> {}", level);
//!         Ok(())
//!     }
//! }
//!
//! let mut tx = Wt450Transmitter::new(ConsoleLine, ThreadDelay);
//! tx.transmit(1, 2, 59, 23.5)?;
//! # Ok::<(), wt450_transmitter::TransmitError>(())
//! ```

pub mod core;
pub mod encoding;
pub mod error;
pub mod output;
pub mod timing;
pub mod transmitter;

pub use crate::core::{Channel, HouseCode, Humidity, SensorFrame, Temperature};
pub use encoding::FrameEncoder;
pub use error::{Result, TransmitError};
pub use output::{Level, OutputLine};
pub use timing::{BoundedDelay, Delay, PulseTiming, ThreadDelay};
pub use transmitter::{TransmitterBuilder, Wt450Transmitter};

/// The WT450 protocol constants
pub mod spec {
    /// Fixed preamble opening every frame
    pub const PREAMBLE: u32 = 0b1100;

    /// Preamble width in bits
    pub const PREAMBLE_BITS: u32 = 4;

    /// House code width in bits
    pub const HOUSE_BITS: u32 = 4;

    /// Channel width in bits (transmitted as `channel - 1`)
    pub const CHANNEL_BITS: u32 = 2;

    /// Fixed separator between the channel and humidity fields
    pub const SEPARATOR: u32 = 0b110;

    /// Separator width in bits
    pub const SEPARATOR_BITS: u32 = 3;

    /// Humidity width in bits
    pub const HUMIDITY_BITS: u32 = 7;

    /// Temperature width in bits
    pub const TEMPERATURE_BITS: u32 = 15;

    /// Data bits covered by the parity bit
    pub const DATA_BITS: u32 = 35;

    /// Total frame length in bits, parity included
    pub const FRAME_BITS: u32 = 36;

    /// Temperature resolution: wire units per degree Celsius
    pub const TEMPERATURE_SCALE: f32 = 128.0;

    /// Temperature offset: `50.0 * 128`, shifting the encodable range to
    /// start at -50 degrees Celsius
    pub const TEMPERATURE_OFFSET: u16 = 6400;

    /// Frame repeats per transmission sent by stock WT450 units
    pub const DEFAULT_REPEATS: u32 = 2;

    /// Frame repeats the protocol documentation calls for
    pub const NOMINAL_REPEATS: u32 = 3;
}
