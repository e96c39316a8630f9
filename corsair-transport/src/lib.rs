//! Transport abstraction layer for Corsair peripheral communication
//!
//! This crate separates "talk to a HID device" from the device drivers:
//!
//! - [`HidBackend`] enumerates attached HID interfaces and opens one by path
//! - [`HidHandle`] is an exclusively owned, opened device
//!
//! [`HidApiBackend`] implements both on top of hidapi. Tests and other
//! platforms can supply their own backend.

pub mod error;
pub mod types;

mod discovery;
mod hid_wired;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use discovery::HidApiBackend;
pub use error::TransportError;
pub use hid_wired::HidWiredHandle;
pub use types::HidCandidate;

/// An opened HID device
///
/// A handle is owned by exactly one controller. Dropping it closes the
/// device, so release happens once on every exit path.
pub trait HidHandle: Send {
    /// Path the handle was opened from
    fn path(&self) -> &str;

    /// Write an output report (first byte is the report ID)
    fn write(&self, data: &[u8]) -> Result<usize, TransportError>;

    /// Read an input report, waiting at most `timeout_ms`
    ///
    /// Returns [`TransportError::Timeout`] when nothing arrived in time.
    fn read_timeout(&self, buf: &mut [u8], timeout_ms: i32) -> Result<usize, TransportError>;

    /// USB serial number string, if the device reports one
    fn serial_number(&self) -> Result<Option<String>, TransportError>;
}

/// Source of candidate devices and opened handles
pub trait HidBackend {
    /// List every currently attached HID interface
    fn enumerate(&self) -> Result<Vec<HidCandidate>, TransportError>;

    /// Open the device at `path` for exclusive use
    fn open_path(&self, path: &str) -> Result<Box<dyn HidHandle>, TransportError>;
}

/// Type alias for a boxed handle
pub type BoxedHandle = Box<dyn HidHandle>;
