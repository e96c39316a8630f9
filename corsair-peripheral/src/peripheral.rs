//! Legacy-protocol controller for Corsair keyboards, mice, mousepads and
//! headset stands

use corsair_transport::BoxedHandle;
use tracing::debug;

use crate::error::PeripheralError;
use crate::led::RgbColor;
use crate::protocol::{
    self, cmd, color_channel, control, device, firmware_info, property, timing, RESPONSE_SIZE,
};
use crate::types::{DeviceType, KeyboardLayout};

/// Addressable key slots on a legacy keyboard
pub const KEYBOARD_LED_COUNT: usize = 144;

/// LEDs on the MM800 Polaris
pub const MOUSEMAT_LED_COUNT: usize = 15;

/// LEDs on the ST100
pub const HEADSET_STAND_LED_COUNT: usize = 9;

/// Stream payload per packet for 24-bit keyboard color planes
const STREAM_CHUNK: usize = 60;

/// Controller for devices speaking the legacy protocol
///
/// Construction reads the firmware info register to classify the device.
/// The handle is owned for the controller's lifetime and closed when it
/// is dropped.
pub struct CorsairPeripheralController {
    handle: BoxedHandle,
    name: String,
    location: String,
    product_id: u16,
    device_type: DeviceType,
    layout: KeyboardLayout,
    firmware_version: String,
}

impl CorsairPeripheralController {
    /// Take ownership of `handle` and classify the device behind it
    ///
    /// A device whose firmware info cannot be read, or reports an unknown
    /// class, gets [`DeviceType::Unknown`]. Classified devices are switched
    /// to software lighting control.
    pub fn new(handle: BoxedHandle, product_id: u16) -> Self {
        let location = format!("HID: {}", handle.path());
        let mut controller = Self {
            handle,
            name: String::new(),
            location,
            product_id,
            device_type: DeviceType::Unknown,
            layout: KeyboardLayout::default(),
            firmware_version: String::new(),
        };

        controller.read_firmware_info();

        if controller.device_type != DeviceType::Unknown {
            if let Err(e) = controller.enable_software_control() {
                debug!("Failed to switch {} to software control: {}", controller.location, e);
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

    /// Classified device type
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Keyboard layout (only meaningful for keyboards)
    pub fn logical_layout(&self) -> KeyboardLayout {
        self.layout
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// USB serial number, empty if the device does not report one
    pub fn serial(&self) -> String {
        self.handle.serial_number().ok().flatten().unwrap_or_default()
    }

    pub fn firmware_version(&self) -> &str {
        &self.firmware_version
    }

    pub fn product_id(&self) -> u16 {
        self.product_id
    }

    /// Number of addressable LEDs for the classified device
    pub fn led_count(&self) -> usize {
        match self.device_type {
            DeviceType::Keyboard => KEYBOARD_LED_COUNT,
            DeviceType::Mouse => device::mouse_led_count(self.product_id),
            DeviceType::Mousemat => MOUSEMAT_LED_COUNT,
            DeviceType::HeadsetStand => HEADSET_STAND_LED_COUNT,
            DeviceType::Unknown => 0,
        }
    }

    /// Push one color per LED to the device
    pub fn set_leds(&self, colors: &[RgbColor]) -> Result<(), PeripheralError> {
        let max = self.led_count();
        if colors.len() > max {
            return Err(PeripheralError::TooManyLeds {
                max,
                got: colors.len(),
            });
        }

        match self.device_type {
            DeviceType::Keyboard => self.set_leds_keyboard_full(colors),
            DeviceType::Mouse => self.set_leds_mouse(colors),
            DeviceType::Mousemat | DeviceType::HeadsetStand => self.set_leds_packed(colors),
            DeviceType::Unknown => Err(PeripheralError::NotSupported(
                "device type is unknown".into(),
            )),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<(), PeripheralError> {
        self.handle.write(&protocol::build_report(bytes))?;
        Ok(())
    }

    /// Leaves the device `Unknown` on any failure; the caller reports it
    fn read_firmware_info(&mut self) {
        if self.write(&[cmd::READ, property::FIRMWARE_INFO]).is_err() {
            return;
        }

        let mut buf = [0u8; RESPONSE_SIZE];
        match self.handle.read_timeout(&mut buf, timing::READ_TIMEOUT_MS) {
            Ok(n) if n > firmware_info::LAYOUT => {}
            _ => return,
        }

        self.firmware_version = format!(
            "{}.{}",
            buf[firmware_info::VERSION_MAJOR],
            buf[firmware_info::VERSION_MINOR]
        );

        self.device_type = match buf[firmware_info::DEVICE_CLASS] {
            firmware_info::CLASS_KEYBOARD => {
                self.layout = KeyboardLayout::from_u8(buf[firmware_info::LAYOUT])
                    .unwrap_or_default();
                DeviceType::Keyboard
            }
            firmware_info::CLASS_MOUSE => DeviceType::Mouse,
            firmware_info::CLASS_MOUSEMAT if self.product_id == device::PID_ST100 => {
                DeviceType::HeadsetStand
            }
            firmware_info::CLASS_MOUSEMAT => DeviceType::Mousemat,
            _ => DeviceType::Unknown,
        };
    }

    fn enable_software_control(&self) -> Result<(), PeripheralError> {
        self.write(&[cmd::WRITE, property::SPECIAL_FUNCTION, control::SOFTWARE])?;

        if self.device_type == DeviceType::Keyboard {
            self.write(&[
                cmd::WRITE,
                property::LIGHTING_CONTROL,
                control::SOFTWARE,
                0x00,
                0x03,
            ])
        } else {
            self.write(&[cmd::WRITE, property::LIGHTING_CONTROL, control::SOFTWARE])
        }
    }

    /// 24-bit keyboard update: stream each color plane, then submit it
    fn set_leds_keyboard_full(&self, colors: &[RgbColor]) -> Result<(), PeripheralError> {
        let planes = RgbColor::planes(colors, KEYBOARD_LED_COUNT);
        let channels = [color_channel::RED, color_channel::GREEN, color_channel::BLUE];

        for (plane, channel) in planes.iter().zip(channels) {
            let mut packets = 0u8;
            for (i, chunk) in plane.chunks(STREAM_CHUNK).enumerate() {
                let mut packet = vec![cmd::STREAM, (i + 1) as u8, chunk.len() as u8, 0x00];
                packet.extend_from_slice(chunk);
                self.write(&packet)?;
                packets += 1;
            }

            let finish = if channel == color_channel::BLUE { 0x01 } else { 0x02 };
            self.write(&[
                cmd::WRITE,
                property::SUBMIT_KEYBOARD_COLOR_24,
                channel,
                packets,
                finish,
            ])?;
        }
        Ok(())
    }

    /// Mouse update: (index, r, g, b) tuples, indices start at 1
    fn set_leds_mouse(&self, colors: &[RgbColor]) -> Result<(), PeripheralError> {
        let mut packet = vec![
            cmd::WRITE,
            property::SUBMIT_MOUSE_COLOR,
            colors.len() as u8,
            0x01,
        ];
        for (i, c) in colors.iter().enumerate() {
            packet.extend_from_slice(&[(i + 1) as u8, c.r, c.g, c.b]);
        }
        self.write(&packet)
    }

    /// Mousemat / headset stand update: packed r, g, b triples
    fn set_leds_packed(&self, colors: &[RgbColor]) -> Result<(), PeripheralError> {
        let mut packet = vec![
            cmd::WRITE,
            property::SUBMIT_MOUSE_COLOR,
            colors.len() as u8,
            0x00,
        ];
        for c in colors {
            packet.extend_from_slice(&[c.r, c.g, c.b]);
        }
        self.write(&packet)
    }
}
