//! Common types for transport layer

use serde::Serialize;

/// One HID interface reported by the platform during an enumeration pass
///
/// Candidates are transient: they describe what was attached when
/// [`HidBackend::enumerate`](crate::HidBackend::enumerate) ran and are
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HidCandidate {
    /// Platform device path, opaque to everything but the backend
    pub path: String,
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
    /// USB interface number (-1 when the backend cannot tell)
    pub interface_number: i32,
    /// HID usage page of the top-level collection
    pub usage_page: u16,
    /// HID usage of the top-level collection
    pub usage: u16,
    /// Serial number if available
    pub serial_number: Option<String>,
    /// Manufacturer string if available
    pub manufacturer: Option<String>,
    /// Product name if available
    pub product: Option<String>,
}

impl HidCandidate {
    /// Create a candidate with only the fields used for matching
    pub fn new(
        path: impl Into<String>,
        vendor_id: u16,
        product_id: u16,
        interface_number: i32,
        usage_page: u16,
    ) -> Self {
        Self {
            path: path.into(),
            vendor_id,
            product_id,
            interface_number,
            usage_page,
            usage: 0,
            serial_number: None,
            manufacturer: None,
            product: None,
        }
    }

    /// Format VID:PID the way lsusb does
    pub fn vid_pid(&self) -> String {
        format!("{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

impl From<&hidapi::DeviceInfo> for HidCandidate {
    fn from(info: &hidapi::DeviceInfo) -> Self {
        Self {
            path: info.path().to_string_lossy().to_string(),
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            interface_number: info.interface_number(),
            usage_page: info.usage_page(),
            usage: info.usage(),
            serial_number: info.serial_number().map(|s| s.to_string()),
            manufacturer: info.manufacturer_string().map(|s| s.to_string()),
            product: info.product_string().map(|s| s.to_string()),
        }
    }
}
