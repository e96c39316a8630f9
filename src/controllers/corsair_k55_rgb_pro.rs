use corsair_peripheral::{CorsairK55RgbProController, DeviceType};

use super::VENDOR;
use crate::rgb_controller::{ControllerError, Mode, RgbController, RgbControllerData, ZoneType};

/// Lighting adapter for the K55 RGB PRO (six zone keyboard)
pub struct RgbControllerCorsairK55RgbPro {
    controller: CorsairK55RgbProController,
    data: RgbControllerData,
}

impl RgbControllerCorsairK55RgbPro {
    pub fn new(controller: CorsairK55RgbProController) -> Self {
        let mut data = RgbControllerData::new(DeviceType::Keyboard);
        data.name = controller.name().to_string();
        data.vendor = VENDOR.to_string();
        data.description = "Corsair K55 RGB PRO Keyboard Device".to_string();
        data.version = controller.firmware_version().to_string();
        data.serial = controller.serial();
        data.location = controller.location().to_string();
        data.modes.push(Mode::direct());

        let mut adapter = Self { controller, data };
        adapter.setup_zones();
        adapter
    }
}

impl RgbController for RgbControllerCorsairK55RgbPro {
    fn data(&self) -> &RgbControllerData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut RgbControllerData {
        &mut self.data
    }

    fn setup_zones(&mut self) {
        self.data.add_fixed_zone(
            "Keyboard",
            ZoneType::Linear,
            self.controller.led_count(),
            |i| format!("Zone {}", i + 1),
        );
        self.data.setup_colors();
    }

    fn device_update_leds(&self) -> Result<(), ControllerError> {
        self.controller.set_leds(&self.data.colors)?;
        Ok(())
    }
}
