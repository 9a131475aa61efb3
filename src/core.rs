//! Core types and structures for the WT450 protocol

use crate::error::{Result, TransmitError};
use crate::spec;

/// House code identifying a transmitter group (1-15, 4 bits on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseCode(u8);

impl HouseCode {
    /// Minimum house code value (1)
    pub const MIN: u8 = 1;
    /// Maximum house code value (15)
    pub const MAX: u8 = 15;

    /// Create a new house code, validating it's within range [1, 15]
    pub fn new(house: u8) -> Result<Self> {
        if house < Self::MIN || house > Self::MAX {
            return Err(TransmitError::invalid_house_code(format!(
                "House code {} out of range [{}, {}]",
                house,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(HouseCode(house))
    }

    /// Create a house code without validation
    ///
    /// The value is masked to 4 bits, so out-of-range inputs silently alias
    /// onto other house codes, the way stock WT450 transmitters behave.
    pub fn new_unchecked(house: u8) -> Self {
        HouseCode(house & 0x0F)
    }

    /// Get the raw house code value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for HouseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "house {}", self.0)
    }
}

/// Sensor channel (1-4, transmitted as `channel - 1` in 2 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel(u8);

impl Channel {
    /// Minimum channel value (1)
    pub const MIN: u8 = 1;
    /// Maximum channel value (4)
    pub const MAX: u8 = 4;

    /// Create a new channel, validating it's within range [1, 4]
    pub fn new(channel: u8) -> Result<Self> {
        if channel < Self::MIN || channel > Self::MAX {
            return Err(TransmitError::invalid_channel(format!(
                "Channel {} out of range [{}, {}]",
                channel,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Channel(channel))
    }

    /// Create a channel without validation
    ///
    /// The wire value `channel - 1` is masked to 2 bits; channel 0 wraps to
    /// the wire value 3 (channel 4).
    pub fn new_unchecked(channel: u8) -> Self {
        Channel((channel.wrapping_sub(1) & 0x03) + 1)
    }

    /// Get the user-facing channel value (1-4)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Get the 2-bit wire encoding (`channel - 1`)
    pub fn encoded(&self) -> u8 {
        self.0 - 1
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "channel {}", self.0)
    }
}

/// Relative humidity in percent (0-127, 7 bits on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Humidity(u8);

impl Humidity {
    /// Maximum humidity value (127)
    pub const MAX: u8 = 127;

    /// Create a new humidity value, validating it's within range [0, 127]
    pub fn new(humidity: u8) -> Result<Self> {
        if humidity > Self::MAX {
            return Err(TransmitError::invalid_humidity(format!(
                "Humidity {} out of range [0, {}]",
                humidity,
                Self::MAX
            )));
        }
        Ok(Humidity(humidity))
    }

    /// Create a humidity value without validation, masked to 7 bits
    pub fn new_unchecked(humidity: u8) -> Self {
        Humidity(humidity & 0x7F)
    }

    /// Get the raw humidity value
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Temperature in degrees Celsius
///
/// Transmitted as `floor(t * 128.0) + 6400` in an unsigned 15-bit field.
/// The offset equals `50.0 * 128`, so the wire format matches the documented
/// `(t + 50.0) * 128` formula with 1/128 degree resolution.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature(f32);

impl Temperature {
    /// Minimum temperature accepted by the validating constructor
    pub const MIN: f32 = 0.0;
    /// Maximum temperature accepted by the validating constructor
    pub const MAX: f32 = 205.0;

    /// Create a new temperature, validating it's within range [0, 205]
    pub fn new(temperature: f32) -> Result<Self> {
        if !temperature.is_finite() || temperature < Self::MIN || temperature > Self::MAX {
            return Err(TransmitError::invalid_temperature(format!(
                "Temperature {} out of range [{}, {}]",
                temperature,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Temperature(temperature))
    }

    /// Create a temperature without validation
    ///
    /// Extreme inputs overflow the 15-bit wire field and wrap silently, as
    /// stock WT450 transmitters do.
    pub fn new_unchecked(temperature: f32) -> Self {
        Temperature(temperature)
    }

    /// Get the temperature in degrees Celsius
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Compute the 15-bit wire encoding
    pub fn encoded(&self) -> u16 {
        let scaled = (self.0 * spec::TEMPERATURE_SCALE).floor() as i32;
        (scaled.wrapping_add(spec::TEMPERATURE_OFFSET as i32) as u16) & 0x7FFF
    }

    /// Recover a temperature from its wire encoding
    ///
    /// Round-trips within the encoder's 1/128 degree resolution.
    pub fn from_encoded(encoded: u16) -> Self {
        Temperature((encoded as f32 - spec::TEMPERATURE_OFFSET as f32) / spec::TEMPERATURE_SCALE)
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} C", self.0)
    }
}

/// One sensor reading, constructed fresh per send call
///
/// Wire layout (36 bits, MSB-first per field):
/// `1100`(4) house(4) channel-1(2) `110`(3) humidity(7) temperature(15)
/// parity(1), with even parity over the 35 preceding bits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorFrame {
    /// House code (1-15)
    pub house: HouseCode,
    /// Channel (1-4)
    pub channel: Channel,
    /// Relative humidity (0-127 %)
    pub humidity: Humidity,
    /// Temperature in degrees Celsius
    pub temperature: Temperature,
}

impl SensorFrame {
    /// Create a frame with field validation
    pub fn new(house: u8, channel: u8, humidity: u8, temperature: f32) -> Result<Self> {
        Ok(SensorFrame {
            house: HouseCode::new(house)?,
            channel: Channel::new(channel)?,
            humidity: Humidity::new(humidity)?,
            temperature: Temperature::new(temperature)?,
        })
    }

    /// Create a frame without validation
    ///
    /// Out-of-range fields are bit-masked and alias silently, preserving how
    /// stock WT450 transmitters handle malformed input.
    pub fn new_unchecked(house: u8, channel: u8, humidity: u8, temperature: f32) -> Self {
        SensorFrame {
            house: HouseCode::new_unchecked(house),
            channel: Channel::new_unchecked(channel),
            humidity: Humidity::new_unchecked(humidity),
            temperature: Temperature::new_unchecked(temperature),
        }
    }
}

impl std::fmt::Display for SensorFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SensorFrame({}, {}, {}% RH, {})",
            self.house, self.channel, self.humidity.value(), self.temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_code_creation() {
        assert!(HouseCode::new(1).is_ok());
        assert!(HouseCode::new(15).is_ok());
        assert!(HouseCode::new(0).is_err());
        assert!(HouseCode::new(16).is_err());
    }

    #[test]
    fn test_house_code_unchecked_aliases() {
        assert_eq!(HouseCode::new_unchecked(16).value(), 0);
        assert_eq!(HouseCode::new_unchecked(17).value(), 1);
    }

    #[test]
    fn test_channel_creation() {
        assert!(Channel::new(1).is_ok());
        assert!(Channel::new(4).is_ok());
        assert!(Channel::new(0).is_err());
        assert!(Channel::new(5).is_err());
    }

    #[test]
    fn test_channel_encoding() {
        assert_eq!(Channel::new(1).unwrap().encoded(), 0b00);
        assert_eq!(Channel::new(4).unwrap().encoded(), 0b11);
    }

    #[test]
    fn test_channel_unchecked_wraps() {
        assert_eq!(Channel::new_unchecked(5).encoded(), 0b00);
        assert_eq!(Channel::new_unchecked(0).encoded(), 0b11);
    }

    #[test]
    fn test_humidity_creation() {
        assert!(Humidity::new(0).is_ok());
        assert!(Humidity::new(127).is_ok());
        assert!(Humidity::new(128).is_err());
        assert_eq!(Humidity::new_unchecked(128).value(), 0);
    }

    #[test]
    fn test_temperature_creation() {
        assert!(Temperature::new(0.0).is_ok());
        assert!(Temperature::new(205.0).is_ok());
        assert!(Temperature::new(-0.1).is_err());
        assert!(Temperature::new(205.1).is_err());
        assert!(Temperature::new(f32::NAN).is_err());
    }

    #[test]
    fn test_temperature_encoding() {
        // floor(23.5 * 128) + 6400 = 3008 + 6400
        assert_eq!(Temperature::new(23.5).unwrap().encoded(), 9408);
        assert_eq!(Temperature::new(0.0).unwrap().encoded(), 6400);
    }

    #[test]
    fn test_temperature_roundtrip() {
        for t in [0.0f32, 0.5, 23.5, 100.25, 204.9, 205.0] {
            let encoded = Temperature::new(t).unwrap().encoded();
            let decoded = Temperature::from_encoded(encoded).value();
            assert!(
                (decoded - t).abs() <= 1.0 / 128.0,
                "temperature {} decoded as {}",
                t,
                decoded
            );
        }
    }

    #[test]
    fn test_frame_creation() -> Result<()> {
        let frame = SensorFrame::new(1, 1, 59, 23.5)?;
        assert_eq!(frame.house.value(), 1);
        assert_eq!(frame.channel.encoded(), 0);
        assert_eq!(frame.humidity.value(), 59);
        assert_eq!(frame.temperature.encoded(), 9408);

        assert!(SensorFrame::new(0, 1, 59, 23.5).is_err());
        Ok(())
    }

    #[test]
    fn test_frame_display() {
        let frame = SensorFrame::new(1, 2, 59, 23.5).unwrap();
        let text = frame.to_string();
        assert!(text.contains("house 1"));
        assert!(text.contains("channel 2"));
    }
}
