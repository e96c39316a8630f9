// Utility commands: list, detectors

use anyhow::Context;
use corsair_rgb::{detector_table, Settings};
use corsair_transport::{HidApiBackend, HidBackend};

use super::CommandResult;

/// List all HID devices
pub fn list() -> CommandResult {
    let backend = HidApiBackend::new()?;
    let candidates = backend.enumerate().context("enumerate HID devices")?;

    println!("All HID devices:");
    for c in &candidates {
        println!(
            "  VID={:04x} PID={:04x} usage={:04x} page={:04x} if={} path={} {}",
            c.vendor_id,
            c.product_id,
            c.usage,
            c.usage_page,
            c.interface_number,
            c.path,
            c.product.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

/// Print the detector registration table
pub fn detectors(settings: &Settings) -> CommandResult {
    println!(
        "{:<34} {:>9}  {:>9}  {:>5}",
        "Name", "VID:PID", "Interface", "Page"
    );
    for reg in detector_table() {
        let interface = reg.interface.map_or("-".to_string(), |i| i.to_string());
        let page = reg
            .usage_page
            .map_or("-".to_string(), |p| format!("{p:04X}"));
        let state = if settings.is_disabled(reg.name) {
            "  (disabled)"
        } else {
            ""
        };
        println!(
            "{:<34} {:04X}:{:04X}  {:>9}  {:>5}{}",
            reg.name, reg.vendor_id, reg.product_id, interface, page, state
        );
    }
    Ok(())
}
