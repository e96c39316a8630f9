//! Detector registration table
//!
//! Single source of truth for which HID interfaces are opened and by which
//! detector. Order matters: the dispatcher walks the table top to bottom.

use corsair_peripheral::protocol::device::{self, VENDOR_ID};
use corsair_transport::{HidBackend, HidCandidate};

use super::detectors::{
    detect_corsair_k100_controllers, detect_corsair_k55_rgb_pro_controllers,
    detect_corsair_peripheral_controllers,
};
use crate::registry::ControllerRegistry;

/// Detector entry point: query one candidate, register on success
pub type DetectorFn = fn(&dyn HidBackend, &HidCandidate, &str, &ControllerRegistry);

/// One `(name, detector, VID, PID, interface?, usage page?)` entry
#[derive(Clone, Copy)]
pub struct DetectorRegistration {
    pub name: &'static str,
    pub detector: DetectorFn,
    pub vendor_id: u16,
    pub product_id: u16,
    /// Required interface number, if filtered by interface
    pub interface: Option<i32>,
    /// Required usage page, if filtered by usage page
    pub usage_page: Option<u16>,
}

impl DetectorRegistration {
    /// Filter on VID/PID only
    pub const fn new(
        name: &'static str,
        detector: DetectorFn,
        vendor_id: u16,
        product_id: u16,
    ) -> Self {
        Self {
            name,
            detector,
            vendor_id,
            product_id,
            interface: None,
            usage_page: None,
        }
    }

    /// Filter on VID/PID and interface number
    pub const fn with_interface(
        name: &'static str,
        detector: DetectorFn,
        vendor_id: u16,
        product_id: u16,
        interface: i32,
    ) -> Self {
        let mut reg = Self::new(name, detector, vendor_id, product_id);
        reg.interface = Some(interface);
        reg
    }

    /// Filter on VID/PID and usage page
    pub const fn with_usage_page(
        name: &'static str,
        detector: DetectorFn,
        vendor_id: u16,
        product_id: u16,
        usage_page: u16,
    ) -> Self {
        let mut reg = Self::new(name, detector, vendor_id, product_id);
        reg.usage_page = Some(usage_page);
        reg
    }

    /// Filter on VID/PID, interface number and usage page
    pub const fn with_interface_and_usage_page(
        name: &'static str,
        detector: DetectorFn,
        vendor_id: u16,
        product_id: u16,
        interface: i32,
        usage_page: u16,
    ) -> Self {
        let mut reg = Self::new(name, detector, vendor_id, product_id);
        reg.interface = Some(interface);
        reg.usage_page = Some(usage_page);
        reg
    }

    /// Check if an enumerated candidate passes this registration's filter
    pub fn matches(&self, candidate: &HidCandidate) -> bool {
        candidate.vendor_id == self.vendor_id
            && candidate.product_id == self.product_id
            && self.interface.is_none_or(|i| candidate.interface_number == i)
            && self.usage_page.is_none_or(|p| candidate.usage_page == p)
    }
}

impl std::fmt::Debug for DetectorRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorRegistration")
            .field("name", &self.name)
            .field("vendor_id", &format_args!("{:04X}", self.vendor_id))
            .field("product_id", &format_args!("{:04X}", self.product_id))
            .field("interface", &self.interface)
            .field("usage_page", &self.usage_page)
            .finish()
    }
}

/// Legacy-protocol keyboard or mouse: lighting interface on the vendor page
const fn legacy(name: &'static str, product_id: u16) -> DetectorRegistration {
    DetectorRegistration::with_interface_and_usage_page(
        name,
        detect_corsair_peripheral_controllers,
        VENDOR_ID,
        product_id,
        device::INTERFACE_LIGHTING,
        device::USAGE_PAGE_LEGACY,
    )
}

/// Single-interface legacy device, matched by usage page
#[cfg(feature = "hid-usage")]
const fn legacy_single(name: &'static str, product_id: u16) -> DetectorRegistration {
    DetectorRegistration::with_usage_page(
        name,
        detect_corsair_peripheral_controllers,
        VENDOR_ID,
        product_id,
        device::USAGE_PAGE_LEGACY,
    )
}

/// Single-interface legacy device, matched by interface number
#[cfg(not(feature = "hid-usage"))]
const fn legacy_single(name: &'static str, product_id: u16) -> DetectorRegistration {
    DetectorRegistration::with_interface(
        name,
        detect_corsair_peripheral_controllers,
        VENDOR_ID,
        product_id,
        device::INTERFACE_PRIMARY,
    )
}

/// Framed-protocol keyboard with its own detector
const fn framed(
    name: &'static str,
    detector: DetectorFn,
    product_id: u16,
) -> DetectorRegistration {
    DetectorRegistration::with_interface_and_usage_page(
        name,
        detector,
        VENDOR_ID,
        product_id,
        device::INTERFACE_LIGHTING,
        device::USAGE_PAGE_FRAMED,
    )
}

const DETECTORS: &[DetectorRegistration] = &[
    // Keyboards
    legacy("Corsair K55 RGB", device::PID_K55_RGB),
    legacy("Corsair K65 RGB", device::PID_K65_RGB),
    legacy("Corsair K65 LUX RGB", device::PID_K65_LUX_RGB),
    legacy("Corsair K65 RGB RAPIDFIRE", device::PID_K65_RGB_RAPIDFIRE),
    legacy("Corsair K68 RGB", device::PID_K68_RGB),
    legacy("Corsair K70 RGB", device::PID_K70_RGB),
    legacy("Corsair K70 LUX RGB", device::PID_K70_LUX_RGB),
    legacy("Corsair K70 RGB RAPIDFIRE", device::PID_K70_RGB_RAPIDFIRE),
    legacy("Corsair K70 RGB MK.2", device::PID_K70_RGB_MK2),
    legacy("Corsair K70 RGB MK.2 SE", device::PID_K70_RGB_MK2_SE),
    legacy("Corsair K70 RGB MK.2 Low Profile", device::PID_K70_RGB_MK2_LP),
    legacy("Corsair K95 RGB", device::PID_K95_RGB),
    legacy("Corsair K95 RGB PLATINUM", device::PID_K95_PLATINUM),
    legacy("Corsair Strafe", device::PID_STRAFE),
    legacy("Corsair Strafe Red", device::PID_STRAFE_RED),
    legacy("Corsair Strafe MK.2", device::PID_STRAFE_MK2),
    // Mice
    legacy("Corsair Glaive RGB", device::PID_GLAIVE_RGB),
    legacy("Corsair Glaive RGB PRO", device::PID_GLAIVE_RGB_PRO),
    legacy("Corsair Harpoon RGB", device::PID_HARPOON_RGB),
    legacy("Corsair Harpoon RGB PRO", device::PID_HARPOON_RGB_PRO),
    legacy("Corsair Ironclaw RGB", device::PID_IRONCLAW_RGB),
    legacy("Corsair M65", device::PID_M65),
    legacy("Corsair M65 PRO", device::PID_M65_PRO),
    legacy("Corsair M65 RGB Elite", device::PID_M65_RGB_ELITE),
    legacy("Corsair Nightsword", device::PID_NIGHTSWORD),
    legacy("Corsair Scimitar PRO RGB", device::PID_SCIMITAR_PRO_RGB),
    legacy("Corsair Sabre RGB", device::PID_SABRE_RGB),
    // Mousemats
    legacy_single("Corsair MM800 RGB Polaris", device::PID_MM800_RGB_POLARIS),
    // Headset stands
    legacy_single("Corsair ST100 RGB", device::PID_ST100),
    // Keyboards with separate drivers
    framed("Corsair K100", detect_corsair_k100_controllers, device::PID_K100),
    framed(
        "Corsair K55 RGB PRO",
        detect_corsair_k55_rgb_pro_controllers,
        device::PID_K55_RGB_PRO,
    ),
];

/// All detector registrations, in dispatch order
pub fn detector_table() -> &'static [DetectorRegistration] {
    DETECTORS
}
