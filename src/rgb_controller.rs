//! Generic lighting model shared by every registered controller
//!
//! A lighting adapter describes its device as zones of LEDs, keeps one color
//! per LED, and pushes that color buffer to hardware on request.

use corsair_peripheral::{DeviceType, PeripheralError, RgbColor};
use serde::Serialize;
use thiserror::Error;

/// Errors from lighting adapter operations
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("Device error: {0}")]
    Peripheral(#[from] PeripheralError),

    #[error("Invalid zone index {index} ({count} zones)")]
    InvalidZone { index: usize, count: usize },

    #[error("Invalid LED index {index} ({count} LEDs)")]
    InvalidLed { index: usize, count: usize },
}

/// Zone layout type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZoneType {
    Single,
    Linear,
    Matrix,
}

/// A lighting mode offered by the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub name: String,
    pub value: i32,
    /// Colors are supplied per LED by the host
    pub per_led_color: bool,
}

impl Mode {
    /// Host-driven per-LED color
    pub fn direct() -> Self {
        Self {
            name: "Direct".to_string(),
            value: 0,
            per_led_color: true,
        }
    }
}

/// A named region of consecutive LEDs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub name: String,
    pub zone_type: ZoneType,
    /// Index of the first LED of this zone in the controller's LED list
    pub start_idx: usize,
    pub leds_count: usize,
    pub leds_min: usize,
    pub leds_max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Led {
    pub name: String,
    pub value: u32,
}

/// Descriptive fields and color state of a lighting adapter
#[derive(Debug, Clone, Serialize)]
pub struct RgbControllerData {
    pub name: String,
    pub vendor: String,
    pub description: String,
    pub version: String,
    pub serial: String,
    pub location: String,
    pub device_type: DeviceType,
    pub modes: Vec<Mode>,
    pub active_mode: usize,
    pub zones: Vec<Zone>,
    pub leds: Vec<Led>,
    pub colors: Vec<RgbColor>,
}

impl RgbControllerData {
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            name: String::new(),
            vendor: String::new(),
            description: String::new(),
            version: String::new(),
            serial: String::new(),
            location: String::new(),
            device_type,
            modes: Vec::new(),
            active_mode: 0,
            zones: Vec::new(),
            leds: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Append a fixed-size zone, naming each LED with `led_name(i)`
    pub fn add_fixed_zone(
        &mut self,
        name: &str,
        zone_type: ZoneType,
        count: usize,
        led_name: impl Fn(usize) -> String,
    ) {
        let start_idx = self.leds.len();
        self.zones.push(Zone {
            name: name.to_string(),
            zone_type,
            start_idx,
            leds_count: count,
            leds_min: count,
            leds_max: count,
        });
        self.leds.extend((0..count).map(|i| Led {
            name: led_name(i),
            value: i as u32,
        }));
    }

    /// Size the color buffer to the LED list, new entries black
    pub fn setup_colors(&mut self) {
        self.colors.resize(self.leds.len(), RgbColor::BLACK);
    }

    /// Colors belonging to one zone
    pub fn zone_colors(&self, zone: usize) -> Option<&[RgbColor]> {
        let z = self.zones.get(zone)?;
        self.colors.get(z.start_idx..z.start_idx + z.leds_count)
    }
}

/// A lighting adapter registered with the [`crate::ControllerRegistry`]
pub trait RgbController: Send {
    fn data(&self) -> &RgbControllerData;
    fn data_mut(&mut self) -> &mut RgbControllerData;

    /// Build zones and LEDs, then the color buffer
    fn setup_zones(&mut self);

    /// Fixed topologies ignore resize requests
    fn resize_zone(&mut self, _zone: usize, _new_size: usize) {}

    /// Push the whole color buffer to the device
    fn device_update_leds(&self) -> Result<(), ControllerError>;

    fn update_zone_leds(&self, zone: usize) -> Result<(), ControllerError> {
        let count = self.data().zones.len();
        if zone >= count {
            return Err(ControllerError::InvalidZone { index: zone, count });
        }
        self.device_update_leds()
    }

    fn update_single_led(&self, led: usize) -> Result<(), ControllerError> {
        let count = self.data().leds.len();
        if led >= count {
            return Err(ControllerError::InvalidLed { index: led, count });
        }
        self.device_update_leds()
    }

    fn set_custom_mode(&mut self) {
        self.data_mut().active_mode = 0;
    }

    fn device_update_mode(&self) -> Result<(), ControllerError> {
        self.device_update_leds()
    }

    fn name(&self) -> &str {
        &self.data().name
    }

    fn location(&self) -> &str {
        &self.data().location
    }

    fn led_count(&self) -> usize {
        self.data().leds.len()
    }

    /// Set every LED in the color buffer (does not push)
    fn set_all_leds(&mut self, color: RgbColor) {
        self.data_mut().colors.fill(color);
    }

    /// Set one LED in the color buffer (does not push)
    fn set_led(&mut self, led: usize, color: RgbColor) -> Result<(), ControllerError> {
        let colors = &mut self.data_mut().colors;
        let count = colors.len();
        let slot = colors
            .get_mut(led)
            .ok_or(ControllerError::InvalidLed { index: led, count })?;
        *slot = color;
        Ok(())
    }
}
