//! K100 keyboard controller (framed protocol)

use corsair_transport::BoxedHandle;
use tracing::debug;

use crate::error::PeripheralError;
use crate::led::RgbColor;
use crate::protocol::{self, device, framed, timing, RESPONSE_SIZE};
use crate::types::KeyboardType;

/// Addressable LEDs on the K100 (keys plus light bar)
pub const K100_LED_COUNT: usize = 193;

/// Controller for the K100
///
/// The keyboard type register is read at construction: the device is a
/// K100 only if its product ID property reads back as the K100 PID.
pub struct CorsairK100Controller {
    handle: BoxedHandle,
    name: String,
    location: String,
    keyboard_type: KeyboardType,
    firmware_version: String,
}

impl CorsairK100Controller {
    /// Take ownership of `handle` and read the keyboard type
    pub fn new(handle: BoxedHandle) -> Self {
        let location = format!("HID: {}", handle.path());
        let mut controller = Self {
            handle,
            name: String::new(),
            location,
            keyboard_type: KeyboardType::Unknown,
            firmware_version: String::new(),
        };

        // Discarding an unknown keyboard is silent
        controller.keyboard_type = match controller.get_property(framed::PROP_PRODUCT_ID) {
            Ok(value) if value[..2] == device::PID_K100.to_le_bytes() => KeyboardType::K100,
            _ => KeyboardType::Unknown,
        };

        if controller.keyboard_type != KeyboardType::Unknown {
            if let Ok(v) = controller.get_property(framed::PROP_FIRMWARE) {
                controller.firmware_version = format!("{}.{}.{}", v[1], v[0], v[2]);
            }
            if let Err(e) = controller.lighting_control() {
                debug!("Failed to enter software mode on {}: {}", controller.location, e);
            }
        }

        controller
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classified keyboard sub-model
    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn serial(&self) -> String {
        self.handle.serial_number().ok().flatten().unwrap_or_default()
    }

    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    pub fn led_count(&self) -> usize {
        K100_LED_COUNT
    }

    /// Push one color per LED: red plane, green plane, blue plane
    pub fn set_leds(&self, colors: &[RgbColor]) -> Result<(), PeripheralError> {
        if colors.len() > K100_LED_COUNT {
            return Err(PeripheralError::TooManyLeds {
                max: K100_LED_COUNT,
                got: colors.len(),
            });
        }

        let payload = RgbColor::planes(colors, K100_LED_COUNT).concat();
        for report in protocol::framed_data_reports(framed::ENDPOINT_LIGHTING, &payload) {
            self.handle.write(&report)?;
        }
        Ok(())
    }

    /// Read a 4-byte property value
    fn get_property(&self, prop: u8) -> Result<[u8; 4], PeripheralError> {
        self.handle
            .write(&protocol::build_report(&[framed::PREFIX, framed::GET, prop]))?;

        let mut buf = [0u8; RESPONSE_SIZE];
        let n = self.handle.read_timeout(&mut buf, timing::READ_TIMEOUT_MS)?;

        // [0] = prefix echo, [1] = GET echo, [2] = status, [3..7] = value
        if n < 7 || buf[1] != framed::GET || buf[2] != 0x00 {
            return Err(PeripheralError::UnexpectedResponse(format!(
                "property 0x{prop:02X}: {:02X?}",
                &buf[..n.min(8)]
            )));
        }
        Ok([buf[3], buf[4], buf[5], buf[6]])
    }

    fn lighting_control(&self) -> Result<(), PeripheralError> {
        for report in protocol::framed_software_mode_reports() {
            self.handle.write(&report)?;
        }
        Ok(())
    }
}
