//! Detection dispatcher
//!
//! One pass enumerates HID devices once, then walks the registration table
//! in order and hands every matching candidate to that registration's
//! detector. Detectors decide on their own whether to register anything.

mod detectors;
mod table;

pub use detectors::{
    detect_corsair_k100_controllers, detect_corsair_k55_rgb_pro_controllers,
    detect_corsair_peripheral_controllers,
};
pub use table::{detector_table, DetectorFn, DetectorRegistration};

use corsair_transport::HidBackend;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::registry::ControllerRegistry;
use crate::settings::Settings;

/// Counters from one detection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetectionSummary {
    /// HID interfaces enumerated
    pub candidates: usize,
    /// Detector invocations (one per matching registration/candidate pair)
    pub matched: usize,
    /// Adapters added to the registry during this pass
    pub registered: usize,
}

/// Run one detection pass over everything `backend` enumerates
pub fn detect_controllers(
    backend: &dyn HidBackend,
    table: &[DetectorRegistration],
    registry: &ControllerRegistry,
    settings: &Settings,
) -> DetectionSummary {
    let candidates = match backend.enumerate() {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("HID enumeration failed: {}", e);
            return DetectionSummary::default();
        }
    };

    let before = registry.len();
    let mut matched = 0;

    for registration in table {
        if settings.is_disabled(registration.name) {
            debug!("Detector '{}' disabled in settings", registration.name);
            continue;
        }

        for candidate in candidates.iter().filter(|c| registration.matches(c)) {
            debug!(
                "Running detector '{}' on {} ({})",
                registration.name,
                candidate.path,
                candidate.vid_pid()
            );
            matched += 1;
            (registration.detector)(backend, candidate, registration.name, registry);
        }
    }

    let summary = DetectionSummary {
        candidates: candidates.len(),
        matched,
        registered: registry.len().saturating_sub(before),
    };
    info!(
        "Detection pass: {} HID interfaces, {} matched, {} registered",
        summary.candidates, summary.matched, summary.registered
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb_controller::{ControllerError, RgbController, RgbControllerData};
    use corsair_peripheral::DeviceType;
    use corsair_transport::mock::MockBackend;
    use corsair_transport::{HidCandidate, TransportError};
    use tracing_test::traced_test;

    /// Adapter that only records which candidate produced it
    struct Recorder(RgbControllerData);

    impl RgbController for Recorder {
        fn data(&self) -> &RgbControllerData {
            &self.0
        }
        fn data_mut(&mut self) -> &mut RgbControllerData {
            &mut self.0
        }
        fn setup_zones(&mut self) {}
        fn device_update_leds(&self) -> Result<(), ControllerError> {
            Ok(())
        }
    }

    fn recording_detector(
        _backend: &dyn HidBackend,
        info: &HidCandidate,
        name: &str,
        registry: &ControllerRegistry,
    ) {
        let mut data = RgbControllerData::new(DeviceType::Unknown);
        data.name = name.to_string();
        data.location = info.path.clone();
        registry.register(Box::new(Recorder(data)));
    }

    const RECORDER: DetectorRegistration =
        DetectorRegistration::with_interface("Recorder", recording_detector, 0x1B1C, 0x1B7C, 1);

    struct FailingBackend;

    impl HidBackend for FailingBackend {
        fn enumerate(&self) -> Result<Vec<HidCandidate>, TransportError> {
            Err(TransportError::HidError("hid_init failed".into()))
        }
        fn open_path(
            &self,
            path: &str,
        ) -> Result<Box<dyn corsair_transport::HidHandle>, TransportError> {
            Err(TransportError::HidError(format!("{path}: hid_init failed")))
        }
    }

    #[test]
    fn test_invoked_once_per_matching_candidate() {
        let mut backend = MockBackend::new();
        backend.add_device(HidCandidate::new("a", 0x1B1C, 0x1B7C, 1, 0xFF42));
        backend.add_device(HidCandidate::new("b", 0x1B1C, 0x1B7C, 1, 0xFF42));
        backend.add_device(HidCandidate::new("c", 0x1B1C, 0x1B7C, 0, 0xFF42));
        backend.add_device(HidCandidate::new("d", 0x1B1C, 0x1B13, 1, 0xFF42));

        let registry = ControllerRegistry::new();
        let summary = detect_controllers(&backend, &[RECORDER], &registry, &Settings::default());

        let locations: Vec<_> = registry.snapshot().into_iter().map(|d| d.location).collect();
        assert_eq!(locations, ["a", "b"]);
        assert_eq!(
            summary,
            DetectionSummary {
                candidates: 4,
                matched: 2,
                registered: 2
            }
        );
    }

    #[test]
    fn test_duplicate_registrations_each_invoke() {
        let mut backend = MockBackend::new();
        backend.add_device(HidCandidate::new("a", 0x1B1C, 0x1B7C, 1, 0xFF42));

        let registry = ControllerRegistry::new();
        detect_controllers(&backend, &[RECORDER, RECORDER], &registry, &Settings::default());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_no_matches_is_silent() {
        let mut backend = MockBackend::new();
        backend.add_device(HidCandidate::new("a", 0x046D, 0xC52B, 1, 0xFF00));

        let registry = ControllerRegistry::new();
        let summary = detect_controllers(&backend, &[RECORDER], &registry, &Settings::default());
        assert!(registry.is_empty());
        assert_eq!(summary.matched, 0);
    }

    #[test]
    #[traced_test]
    fn test_disabled_detector_is_skipped() {
        let mut backend = MockBackend::new();
        backend.add_device(HidCandidate::new("a", 0x1B1C, 0x1B7C, 1, 0xFF42));

        let mut settings = Settings::default();
        settings.detectors.disabled.push("Recorder".to_string());

        let registry = ControllerRegistry::new();
        detect_controllers(&backend, &[RECORDER], &registry, &settings);
        assert!(registry.is_empty());
        assert!(logs_contain("Detector 'Recorder' disabled in settings"));
    }

    #[test]
    #[traced_test]
    fn test_enumeration_failure_yields_empty_pass() {
        let registry = ControllerRegistry::new();
        let summary = detect_controllers(
            &FailingBackend,
            detector_table(),
            &registry,
            &Settings::default(),
        );
        assert_eq!(summary, DetectionSummary::default());
        assert!(registry.is_empty());
        assert!(logs_contain("HID enumeration failed"));
    }
}
