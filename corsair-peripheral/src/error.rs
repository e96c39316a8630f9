//! Controller error types

use corsair_transport::TransportError;
use thiserror::Error;

/// Errors from controller operations
#[derive(Error, Debug)]
pub enum PeripheralError {
    /// Transport layer error
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// More colors supplied than the device has LEDs
    #[error("Too many LEDs: device has {max}, got {got}")]
    TooManyLeds { max: usize, got: usize },

    /// Device was never classified, so there is no protocol to speak
    #[error("Feature not supported: {0}")]
    NotSupported(String),

    /// Device returned unexpected response
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}
