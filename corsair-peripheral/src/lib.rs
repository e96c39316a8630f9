//! Controller drivers for Corsair RGB peripherals
//!
//! Each controller takes ownership of an opened [`corsair_transport::HidHandle`],
//! classifies the device behind it where the protocol allows, and translates
//! per-LED colors into device command bytes.
//!
//! - [`CorsairPeripheralController`]: legacy protocol keyboards, mice,
//!   mousepads and headset stands
//! - [`CorsairK100Controller`]: K100 keyboard
//! - [`CorsairK55RgbProController`]: K55 RGB PRO keyboard

pub mod error;
pub mod k100;
pub mod k55_rgb_pro;
pub mod led;
pub mod peripheral;
pub mod protocol;
pub mod types;

pub use error::PeripheralError;
pub use k100::{CorsairK100Controller, K100_LED_COUNT};
pub use k55_rgb_pro::{CorsairK55RgbProController, K55_RGB_PRO_LED_COUNT};
pub use led::RgbColor;
pub use peripheral::CorsairPeripheralController;
pub use types::{DeviceType, KeyboardLayout, KeyboardType};
