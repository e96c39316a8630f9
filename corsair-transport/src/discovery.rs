//! Device enumeration and open-by-path over hidapi

use std::ffi::CString;

use hidapi::HidApi;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::TransportError;
use crate::hid_wired::HidWiredHandle;
use crate::types::HidCandidate;
use crate::{HidBackend, HidHandle};

/// hidapi implementation of [`HidBackend`]
///
/// Holds one `HidApi` context for the lifetime of the backend. Enumeration
/// refreshes the context's device list, so a backend can serve repeated
/// detection passes.
pub struct HidApiBackend {
    api: Mutex<HidApi>,
}

impl HidApiBackend {
    /// Initialise hidapi
    pub fn new() -> Result<Self, TransportError> {
        let api = HidApi::new()?;
        Ok(Self {
            api: Mutex::new(api),
        })
    }
}

impl HidBackend for HidApiBackend {
    fn enumerate(&self) -> Result<Vec<HidCandidate>, TransportError> {
        let mut api = self.api.lock();
        api.refresh_devices()?;

        let candidates: Vec<HidCandidate> = api.device_list().map(HidCandidate::from).collect();
        for c in &candidates {
            debug!(
                "Found device: VID={:04X} PID={:04X} if={} page={:04X} path={}",
                c.vendor_id, c.product_id, c.interface_number, c.usage_page, c.path
            );
        }

        info!("Enumerated {} HID interfaces", candidates.len());
        Ok(candidates)
    }

    fn open_path(&self, path: &str) -> Result<Box<dyn HidHandle>, TransportError> {
        let c_path =
            CString::new(path).map_err(|_| TransportError::InvalidPath(path.to_string()))?;
        let api = self.api.lock();
        let device = api.open_path(&c_path)?;
        Ok(Box::new(HidWiredHandle::new(device, path)))
    }
}
