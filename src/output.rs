//! Output line abstraction for the pulse transmitter

use crate::error::Result;

/// Logic level of the output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Line driven low (idle level)
    Low,
    /// Line driven high
    High,
}

impl Level {
    /// The opposite level
    pub fn toggled(&self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Convert level to bit representation
    pub fn as_bit(&self) -> u8 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::High => write!(f, "high"),
        }
    }
}

/// A single digital output line
///
/// The transmitter is the only writer during a transmission; the protocol's
/// timing-based framing would be corrupted by interleaved writes, so callers
/// introducing concurrency must serialize access to the transmitter.
///
/// Implementations should return
/// [`TransmitError::HardwareUnavailable`](crate::TransmitError::HardwareUnavailable)
/// when the line cannot be driven.
pub trait OutputLine {
    /// Drive the line to the given level
    fn set_level(&mut self, level: Level) -> Result<()>;

    /// Drive the line high
    fn set_high(&mut self) -> Result<()> {
        self.set_level(Level::High)
    }

    /// Drive the line low
    fn set_low(&mut self) -> Result<()> {
        self.set_level(Level::Low)
    }
}
