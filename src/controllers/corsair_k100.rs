use corsair_peripheral::{CorsairK100Controller, DeviceType};

use super::VENDOR;
use crate::rgb_controller::{ControllerError, Mode, RgbController, RgbControllerData, ZoneType};

/// Lighting adapter for the K100
pub struct RgbControllerCorsairK100 {
    controller: CorsairK100Controller,
    data: RgbControllerData,
}

impl RgbControllerCorsairK100 {
    pub fn new(controller: CorsairK100Controller) -> Self {
        let mut data = RgbControllerData::new(DeviceType::Keyboard);
        data.name = controller.name().to_string();
        data.vendor = VENDOR.to_string();
        data.description = "Corsair K100 Keyboard Device".to_string();
        data.version = controller.firmware_version().to_string();
        data.serial = controller.serial();
        data.location = controller.location().to_string();
        data.modes.push(Mode::direct());

        let mut adapter = Self { controller, data };
        adapter.setup_zones();
        adapter
    }
}

impl RgbController for RgbControllerCorsairK100 {
    fn data(&self) -> &RgbControllerData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut RgbControllerData {
        &mut self.data
    }

    fn setup_zones(&mut self) {
        self.data.add_fixed_zone(
            "Keyboard",
            ZoneType::Matrix,
            self.controller.led_count(),
            |i| format!("Key {}", i + 1),
        );
        self.data.setup_colors();
    }

    fn device_update_leds(&self) -> Result<(), ControllerError> {
        self.controller.set_leds(&self.data.colors)?;
        Ok(())
    }
}
