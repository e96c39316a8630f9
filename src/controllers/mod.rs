//! Lighting adapters wrapping the Corsair controller drivers

mod corsair_k100;
mod corsair_k55_rgb_pro;
mod corsair_peripheral;

pub use corsair_k100::RgbControllerCorsairK100;
pub use corsair_k55_rgb_pro::RgbControllerCorsairK55RgbPro;
pub use corsair_peripheral::RgbControllerCorsairPeripheral;

/// Vendor string shown for every adapter in this module
pub(crate) const VENDOR: &str = "Corsair";
