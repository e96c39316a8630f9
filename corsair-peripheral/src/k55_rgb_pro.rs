//! K55 RGB PRO keyboard controller (framed protocol, six lighting zones)

use corsair_transport::BoxedHandle;
use tracing::debug;

use crate::error::PeripheralError;
use crate::led::RgbColor;
use crate::protocol::{self, framed};

/// The K55 RGB PRO lights in six fixed zones
pub const K55_RGB_PRO_LED_COUNT: usize = 6;

/// Controller for the K55 RGB PRO
///
/// There is a single model behind this PID, so no classification is done.
pub struct CorsairK55RgbProController {
    handle: BoxedHandle,
    name: String,
    location: String,
}

impl CorsairK55RgbProController {
    /// Take ownership of `handle` and switch the keyboard to software mode
    pub fn new(handle: BoxedHandle) -> Self {
        let location = format!("HID: {}", handle.path());
        let controller = Self {
            handle,
            name: String::new(),
            location,
        };

        if let Err(e) = controller.lighting_control() {
            debug!("Failed to enter software mode on {}: {}", controller.location, e);
        }

        controller
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn serial(&self) -> String {
        self.handle.serial_number().ok().flatten().unwrap_or_default()
    }

    /// The K55 RGB PRO does not report a firmware version
    pub fn firmware_version(&self) -> &str {
        ""
    }

    pub fn led_count(&self) -> usize {
        K55_RGB_PRO_LED_COUNT
    }

    /// Push one color per zone
    pub fn set_leds(&self, colors: &[RgbColor]) -> Result<(), PeripheralError> {
        if colors.len() > K55_RGB_PRO_LED_COUNT {
            return Err(PeripheralError::TooManyLeds {
                max: K55_RGB_PRO_LED_COUNT,
                got: colors.len(),
            });
        }

        let payload = RgbColor::planes(colors, K55_RGB_PRO_LED_COUNT).concat();
        for report in protocol::framed_data_reports(framed::ENDPOINT_LIGHTING, &payload) {
            self.handle.write(&report)?;
        }
        Ok(())
    }

    fn lighting_control(&self) -> Result<(), PeripheralError> {
        for report in protocol::framed_software_mode_reports() {
            self.handle.write(&report)?;
        }
        Ok(())
    }
}
