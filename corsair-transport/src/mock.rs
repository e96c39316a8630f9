//! In-memory backend for tests
//!
//! [`MockBackend`] serves a fixed candidate list. Each openable candidate is
//! backed by a [`MockDevice`] that records writes, replays scripted input
//! reports and counts how often handles to it were opened and closed.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::types::HidCandidate;
use crate::{HidBackend, HidHandle};

#[derive(Default)]
struct MockDeviceInner {
    writes: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    serial: Option<String>,
    opens: usize,
    closes: usize,
}

/// Shared state of one simulated device
#[derive(Clone, Default)]
pub struct MockDevice {
    inner: Arc<Mutex<MockDeviceInner>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input report for the next `read_timeout`
    pub fn push_response(&self, data: impl Into<Vec<u8>>) {
        self.inner.lock().responses.push_back(data.into());
    }

    pub fn with_serial(self, serial: impl Into<String>) -> Self {
        self.inner.lock().serial = Some(serial.into());
        self
    }

    /// All output reports written so far
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.inner.lock().writes.clone()
    }

    pub fn open_count(&self) -> usize {
        self.inner.lock().opens
    }

    pub fn close_count(&self) -> usize {
        self.inner.lock().closes
    }

    /// Handles opened and not yet dropped
    pub fn open_handles(&self) -> usize {
        let inner = self.inner.lock();
        inner.opens - inner.closes
    }
}

/// Handle to a [`MockDevice`]; dropping it counts as a close
pub struct MockHandle {
    path: String,
    device: MockDevice,
}

impl HidHandle for MockHandle {
    fn path(&self) -> &str {
        &self.path
    }

    fn write(&self, data: &[u8]) -> Result<usize, TransportError> {
        self.device.inner.lock().writes.push(data.to_vec());
        Ok(data.len())
    }

    fn read_timeout(&self, buf: &mut [u8], _timeout_ms: i32) -> Result<usize, TransportError> {
        let resp = self
            .device
            .inner
            .lock()
            .responses
            .pop_front()
            .ok_or(TransportError::Timeout)?;
        let n = resp.len().min(buf.len());
        buf[..n].copy_from_slice(&resp[..n]);
        Ok(n)
    }

    fn serial_number(&self) -> Result<Option<String>, TransportError> {
        Ok(self.device.inner.lock().serial.clone())
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.device.inner.lock().closes += 1;
    }
}

/// Backend serving a fixed set of simulated devices
#[derive(Default)]
pub struct MockBackend {
    candidates: Vec<HidCandidate>,
    devices: HashMap<String, MockDevice>,
    failed_opens: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate that opens successfully, returning its device state
    pub fn add_device(&mut self, candidate: HidCandidate) -> MockDevice {
        let device = MockDevice::new();
        self.add_device_with(candidate, device.clone());
        device
    }

    /// Add a candidate backed by an existing device state
    pub fn add_device_with(&mut self, candidate: HidCandidate, device: MockDevice) {
        self.devices.insert(candidate.path.clone(), device);
        self.candidates.push(candidate);
    }

    /// Add a candidate whose open always fails (busy, permission denied)
    pub fn add_unopenable(&mut self, candidate: HidCandidate) {
        self.candidates.push(candidate);
    }

    /// Paths for which an open was attempted and failed
    pub fn failed_opens(&self) -> Vec<String> {
        self.failed_opens.lock().clone()
    }
}

impl HidBackend for MockBackend {
    fn enumerate(&self) -> Result<Vec<HidCandidate>, TransportError> {
        Ok(self.candidates.clone())
    }

    fn open_path(&self, path: &str) -> Result<Box<dyn HidHandle>, TransportError> {
        match self.devices.get(path) {
            Some(device) => {
                device.inner.lock().opens += 1;
                Ok(Box::new(MockHandle {
                    path: path.to_string(),
                    device: device.clone(),
                }))
            }
            None => {
                self.failed_opens.lock().push(path.to_string());
                Err(TransportError::HidPermissionDenied(path.to_string()))
            }
        }
    }
}
