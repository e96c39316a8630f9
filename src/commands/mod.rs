//! Command handlers for the CLI application.
//!
//! - `query`: detection pass (detect)
//! - `set`: lighting writes (set-color)
//! - `utility`: HID listing and the detector table (list, detectors)

pub mod query;
pub mod set;
pub mod utility;

use corsair_rgb::{detect_controllers, detector_table, ControllerRegistry, Settings};
use corsair_transport::HidApiBackend;

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;

/// Run one detection pass against the attached hardware
pub fn detect_all(settings: &Settings) -> anyhow::Result<ControllerRegistry> {
    let backend = HidApiBackend::new()?;
    let registry = ControllerRegistry::new();
    detect_controllers(&backend, detector_table(), &registry, settings);
    Ok(registry)
}
