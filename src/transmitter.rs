//! Pulse transmitter for the WT450 protocol
//!
//! Renders a frame as a self-clocking pulse train on a single output line:
//! a '0' bit is one long pulse at the current level followed by a level
//! toggle, a '1' bit is two short pulses at opposite levels with no net
//! level change. Each frame is bracketed by a low trigger hold and repeated
//! for redundancy (WT450 is one-way, so redundancy is the only recovery
//! mechanism a receiver has).
//!
//! Execution is fully synchronous and blocking: every pulse holds the line
//! for a wall-clock duration, and a transmission runs to completion once
//! started.

use crate::core::SensorFrame;
use crate::encoding::FrameEncoder;
use crate::error::Result;
use crate::output::{Level, OutputLine};
use crate::spec;
use crate::timing::{Delay, PulseTiming};

/// Transmission-scoped pulse state
///
/// Created at frame start, threaded through bit emission, and discarded at
/// frame end. `level` is the level the next bit starts from; `parity`
/// accumulates even parity over the '1' bits emitted so far.
#[derive(Debug, Clone, Copy)]
struct TxState {
    level: Level,
    parity: bool,
}

impl TxState {
    /// State at the end of the start trigger: first bit begins high,
    /// parity cleared
    fn new() -> Self {
        TxState {
            level: Level::High,
            parity: false,
        }
    }
}

/// WT450 pulse transmitter
///
/// Owns the output line and the blocking delay for its lifetime. The line is
/// an exclusively-owned resource: nothing else may drive it during a
/// transmission.
#[derive(Debug)]
pub struct Wt450Transmitter<PIN, DELAY> {
    pin: PIN,
    delay: DELAY,
    timing: PulseTiming,
    repeats: u32,
}

impl<PIN: OutputLine, DELAY: Delay> Wt450Transmitter<PIN, DELAY> {
    /// Create a transmitter with default timing and repeat count
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        Wt450Transmitter {
            pin,
            delay,
            timing: PulseTiming::default(),
            repeats: spec::DEFAULT_REPEATS,
        }
    }

    /// The pulse timing in use
    pub fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Number of frame repeats per transmission
    pub fn repeats(&self) -> u32 {
        self.repeats
    }

    /// Validate the reading and transmit it
    ///
    /// This is the hardened entry point: out-of-range fields fail with an
    /// invalid-field error before the line is touched. Wire output for
    /// in-range inputs is identical to [`transmit_unchecked`].
    ///
    /// [`transmit_unchecked`]: Wt450Transmitter::transmit_unchecked
    pub fn transmit(
        &mut self,
        house: u8,
        channel: u8,
        humidity: u8,
        temperature: f32,
    ) -> Result<()> {
        let frame = SensorFrame::new(house, channel, humidity, temperature)?;
        self.transmit_frame(&frame)
    }

    /// Transmit without field validation
    ///
    /// Out-of-range fields are bit-masked and alias silently, matching
    /// stock WT450 transmitters.
    pub fn transmit_unchecked(
        &mut self,
        house: u8,
        channel: u8,
        humidity: u8,
        temperature: f32,
    ) -> Result<()> {
        let frame = SensorFrame::new_unchecked(house, channel, humidity, temperature);
        self.transmit_frame(&frame)
    }

    /// Transmit a frame, repeated `repeats` times with full start/end
    /// framing on every repeat
    pub fn transmit_frame(&mut self, frame: &SensorFrame) -> Result<()> {
        for _ in 0..self.repeats {
            self.send_once(frame)?;
        }
        Ok(())
    }

    /// Emit one framed repeat: trigger, field stream, parity bit, end
    fn send_once(&mut self, frame: &SensorFrame) -> Result<()> {
        let mut state = TxState::new();

        // Start: drive low and hold for the trigger duration
        self.pin.set_low()?;
        self.delay.delay_us(self.timing.trigger_us);

        for (value, width) in FrameEncoder::fields(frame) {
            self.write_field(&mut state, value, width)?;
        }

        let parity = state.parity;
        self.write_bit(&mut state, parity)?;

        // End: the parity bit leaves the line low with the next-bit level
        // high; a half pulse terminates that final low interval cleanly.
        if state.level == Level::High {
            self.pin.set_high()?;
            self.delay.delay_us(self.timing.end_half_us);
        }
        self.pin.set_low()?;
        self.delay.delay_us(self.timing.trigger_us);
        Ok(())
    }

    /// Stream one field onto the line, most significant bit first
    fn write_field(&mut self, state: &mut TxState, value: u32, width: u32) -> Result<()> {
        for k in (0..width).rev() {
            self.write_bit(state, (value >> k) & 1 != 0)?;
        }
        Ok(())
    }

    /// Emit a single bit
    ///
    /// '0': one long pulse at the current level, which leaves the line at
    /// the opposite level, so the state toggles. '1': two short pulses at
    /// opposite levels, returning the line to where it started; the parity
    /// accumulator flips.
    fn write_bit(&mut self, state: &mut TxState, bit: bool) -> Result<()> {
        if bit {
            self.pin.set_level(state.level)?;
            self.delay.delay_us(self.timing.short_us);
            self.pin.set_level(state.level.toggled())?;
            self.delay.delay_us(self.timing.short_us);
            state.parity = !state.parity;
        } else {
            self.pin.set_level(state.level)?;
            self.delay.delay_us(self.timing.long_us);
            state.level = state.level.toggled();
        }
        Ok(())
    }
}

/// Builder for configuring a [`Wt450Transmitter`]
pub struct TransmitterBuilder<PIN, DELAY> {
    pin: PIN,
    delay: DELAY,
    timing: PulseTiming,
    repeats: u32,
}

impl<PIN: OutputLine, DELAY: Delay> TransmitterBuilder<PIN, DELAY> {
    /// Start building a transmitter around an output line and a delay
    pub fn new(pin: PIN, delay: DELAY) -> Self {
        TransmitterBuilder {
            pin,
            delay,
            timing: PulseTiming::default(),
            repeats: spec::DEFAULT_REPEATS,
        }
    }

    /// Set the pulse timing
    pub fn with_timing(mut self, timing: PulseTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the repeat count
    ///
    /// Stock WT450 units send 2 repeats; the protocol nominally calls for
    /// [`spec::NOMINAL_REPEATS`].
    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }

    /// Build the transmitter
    pub fn build(self) -> Wt450Transmitter<PIN, DELAY> {
        Wt450Transmitter {
            pin: self.pin,
            delay: self.delay,
            timing: self.timing,
            repeats: self.repeats,
        }
    }
}
