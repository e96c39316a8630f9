use corsair_peripheral::{CorsairPeripheralController, DeviceType};

use super::VENDOR;
use crate::rgb_controller::{ControllerError, Mode, RgbController, RgbControllerData, ZoneType};

/// Lighting adapter for legacy-protocol keyboards, mice, mousepads and
/// headset stands
pub struct RgbControllerCorsairPeripheral {
    controller: CorsairPeripheralController,
    data: RgbControllerData,
}

impl RgbControllerCorsairPeripheral {
    /// Wrap a classified controller
    pub fn new(controller: CorsairPeripheralController) -> Self {
        let mut data = RgbControllerData::new(controller.device_type());
        data.name = controller.name().to_string();
        data.vendor = VENDOR.to_string();
        data.description = match controller.device_type() {
            DeviceType::Keyboard => format!(
                "Corsair RGB Peripheral Device ({} layout)",
                controller.logical_layout().name()
            ),
            _ => "Corsair RGB Peripheral Device".to_string(),
        };
        data.version = controller.firmware_version().to_string();
        data.serial = controller.serial();
        data.location = controller.location().to_string();
        data.modes.push(Mode::direct());

        let mut adapter = Self { controller, data };
        adapter.setup_zones();
        adapter
    }
}

impl RgbController for RgbControllerCorsairPeripheral {
    fn data(&self) -> &RgbControllerData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut RgbControllerData {
        &mut self.data
    }

    fn setup_zones(&mut self) {
        let (zone, zone_type, led_prefix) = match self.controller.device_type() {
            DeviceType::Keyboard => ("Keyboard", ZoneType::Matrix, "Key"),
            DeviceType::Mouse => ("Mouse", ZoneType::Single, "Mouse LED"),
            DeviceType::Mousemat => ("Mousemat", ZoneType::Linear, "Mousemat LED"),
            DeviceType::HeadsetStand => ("Headset Stand", ZoneType::Linear, "Headset Stand LED"),
            DeviceType::Unknown => return,
        };

        self.data
            .add_fixed_zone(zone, zone_type, self.controller.led_count(), |i| {
                format!("{} {}", led_prefix, i + 1)
            });
        self.data.setup_colors();
    }

    fn device_update_leds(&self) -> Result<(), ControllerError> {
        self.controller.set_leds(&self.data.colors)?;
        Ok(())
    }
}
