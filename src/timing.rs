//! Pulse durations and the blocking wait primitive

use std::time::Duration;

/// Ceiling of a single busy-wait on platforms whose microsecond timer caps
/// one call (AVR's `delayMicroseconds` tops out near this value)
///
/// Waits longer than this must be issued as multiple primitive calls; see
/// [`BoundedDelay`].
pub const MAX_PRIMITIVE_DELAY_US: u32 = 16_383;

/// Pulse durations of the WT450 line code, in microseconds
///
/// These are configuration constants rather than hard-coded literals so a
/// caller can tune them to a receiver's tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PulseTiming {
    /// Low hold bracketing each frame (start trigger and inter-repeat
    /// separator)
    pub trigger_us: u32,
    /// Half-bit pulse of a '1' bit
    pub short_us: u32,
    /// Full-bit pulse of a '0' bit
    pub long_us: u32,
    /// Terminating high pulse when a frame ends with the line low
    pub end_half_us: u32,
}

impl Default for PulseTiming {
    fn default() -> Self {
        PulseTiming {
            trigger_us: 15_000,
            short_us: 1_000,
            long_us: 2_000,
            end_half_us: 500,
        }
    }
}

/// A blocking wait
///
/// The contract is total duration: `delay_us(d)` blocks for at least `d`
/// microseconds, regardless of how many primitive waits that takes.
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Blocking delay backed by [`std::thread::sleep`]
///
/// Has no per-call ceiling, so a single sleep covers any requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(us as u64));
    }
}

/// Adapter for delay primitives that cap the duration of a single call
///
/// Splits one requested wait into consecutive primitive calls of at most
/// `max_us` each, summing to the requested total. On platforms whose timer
/// caps out near [`MAX_PRIMITIVE_DELAY_US`], long holds such as the 15 ms
/// frame trigger have to be issued in pieces; this adapter keeps that
/// workaround out of the transmitter.
#[derive(Debug, Clone, Copy)]
pub struct BoundedDelay<D> {
    inner: D,
    max_us: u32,
}

impl<D: Delay> BoundedDelay<D> {
    /// Wrap a primitive delay whose single call is limited to `max_us`
    pub fn new(inner: D, max_us: u32) -> Self {
        BoundedDelay { inner, max_us }
    }

    /// Wrap a primitive delay limited to [`MAX_PRIMITIVE_DELAY_US`]
    pub fn platform_limited(inner: D) -> Self {
        Self::new(inner, MAX_PRIMITIVE_DELAY_US)
    }
}

impl<D: Delay> Delay for BoundedDelay<D> {
    fn delay_us(&mut self, us: u32) {
        let mut remaining = us;
        while remaining > self.max_us {
            self.inner.delay_us(self.max_us);
            remaining -= self.max_us;
        }
        if remaining > 0 {
            self.inner.delay_us(remaining);
        }
    }
}
