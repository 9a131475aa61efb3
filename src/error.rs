//! Error types for WT450 encoding and transmission

use thiserror::Error;

/// Result type for WT450 operations
pub type Result<T> = std::result::Result<T, TransmitError>;

/// Error types encountered during WT450 frame construction and transmission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransmitError {
    /// House code outside the 4-bit range [1, 15]
    #[error("Invalid house code: {0}")]
    InvalidHouseCode(String),

    /// Channel outside the range [1, 4]
    #[error("Invalid channel: {0}")]
    InvalidChannel(String),

    /// Humidity outside the 7-bit range [0, 127]
    #[error("Invalid humidity: {0}")]
    InvalidHumidity(String),

    /// Temperature outside the encodable range
    #[error("Invalid temperature: {0}")]
    InvalidTemperature(String),

    /// The output line could not be driven
    #[error("Hardware unavailable: {0}")]
    HardwareUnavailable(String),
}

impl TransmitError {
    /// Create a new InvalidHouseCode error
    pub fn invalid_house_code(msg: impl Into<String>) -> Self {
        TransmitError::InvalidHouseCode(msg.into())
    }

    /// Create a new InvalidChannel error
    pub fn invalid_channel(msg: impl Into<String>) -> Self {
        TransmitError::InvalidChannel(msg.into())
    }

    /// Create a new InvalidHumidity error
    pub fn invalid_humidity(msg: impl Into<String>) -> Self {
        TransmitError::InvalidHumidity(msg.into())
    }

    /// Create a new InvalidTemperature error
    pub fn invalid_temperature(msg: impl Into<String>) -> Self {
        TransmitError::InvalidTemperature(msg.into())
    }

    /// Create a new HardwareUnavailable error
    pub fn hardware_unavailable(msg: impl Into<String>) -> Self {
        TransmitError::HardwareUnavailable(msg.into())
    }
}
