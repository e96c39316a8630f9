//! Detector functions: open a candidate, classify it, register or discard
//!
//! Each detector owns the opened handle only through the controller it
//! constructs. A discarded controller is dropped, which closes the handle.
//! Open failures are silent: another process may hold the device, or the
//! interface may not be ours.

use corsair_peripheral::{
    CorsairK100Controller, CorsairK55RgbProController, CorsairPeripheralController, DeviceType,
    KeyboardType,
};
use corsair_transport::{HidBackend, HidCandidate};
use tracing::debug;

use crate::controllers::{
    RgbControllerCorsairK100, RgbControllerCorsairK55RgbPro, RgbControllerCorsairPeripheral,
};
use crate::registry::ControllerRegistry;

const CORSAIR_PERIPHERAL_CONTROLLER_NAME: &str = "Corsair peripheral";

/// Legacy-protocol keyboards, mice, mousepads and headset stands
pub fn detect_corsair_peripheral_controllers(
    backend: &dyn HidBackend,
    info: &HidCandidate,
    name: &str,
    registry: &ControllerRegistry,
) {
    let Ok(handle) = backend.open_path(&info.path) else {
        return;
    };

    debug!(
        "[{}] Device opened. VID/PID {:04X}:{:04X}",
        CORSAIR_PERIPHERAL_CONTROLLER_NAME, info.vendor_id, info.product_id
    );

    let mut controller = CorsairPeripheralController::new(handle, info.product_id);
    controller.set_name(name);

    if controller.device_type() == DeviceType::Unknown {
        debug!("[{}] Device type is unknown", CORSAIR_PERIPHERAL_CONTROLLER_NAME);
        return;
    }

    registry.register(Box::new(RgbControllerCorsairPeripheral::new(controller)));
}

/// K100 keyboard, registered only if its keyboard type register matches
pub fn detect_corsair_k100_controllers(
    backend: &dyn HidBackend,
    info: &HidCandidate,
    name: &str,
    registry: &ControllerRegistry,
) {
    let Ok(handle) = backend.open_path(&info.path) else {
        return;
    };

    let mut controller = CorsairK100Controller::new(handle);
    controller.set_name(name);

    if controller.keyboard_type() == KeyboardType::Unknown {
        return;
    }

    registry.register(Box::new(RgbControllerCorsairK100::new(controller)));
}

/// K55 RGB PRO keyboard, registered unconditionally once opened
pub fn detect_corsair_k55_rgb_pro_controllers(
    backend: &dyn HidBackend,
    info: &HidCandidate,
    name: &str,
    registry: &ControllerRegistry,
) {
    let Ok(handle) = backend.open_path(&info.path) else {
        return;
    };

    let mut controller = CorsairK55RgbProController::new(handle);
    controller.set_name(name);

    registry.register(Box::new(RgbControllerCorsairK55RgbPro::new(controller)));
}
