//! hidapi-backed handle for wired USB devices

use hidapi::HidDevice;
use tracing::debug;

use crate::error::TransportError;
use crate::HidHandle;

/// An opened hidapi device
///
/// Dropping the handle closes the underlying device.
pub struct HidWiredHandle {
    device: HidDevice,
    path: String,
}

impl HidWiredHandle {
    /// Wrap a device opened from `path`
    pub fn new(device: HidDevice, path: impl Into<String>) -> Self {
        Self {
            device,
            path: path.into(),
        }
    }
}

impl HidHandle for HidWiredHandle {
    fn path(&self) -> &str {
        &self.path
    }

    fn write(&self, data: &[u8]) -> Result<usize, TransportError> {
        let written = self.device.write(data)?;
        if written < data.len() {
            return Err(TransportError::ShortWrite {
                expected: data.len(),
                written,
            });
        }
        Ok(written)
    }

    fn read_timeout(&self, buf: &mut [u8], timeout_ms: i32) -> Result<usize, TransportError> {
        let n = self.device.read_timeout(buf, timeout_ms)?;
        if n == 0 {
            return Err(TransportError::Timeout);
        }
        Ok(n)
    }

    fn serial_number(&self) -> Result<Option<String>, TransportError> {
        Ok(self.device.get_serial_number_string()?)
    }
}

impl Drop for HidWiredHandle {
    fn drop(&mut self) {
        debug!("Closing HID device {}", self.path);
    }
}
