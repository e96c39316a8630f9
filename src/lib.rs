//! Corsair RGB peripheral detection - shared library
//!
//! Detector table, detection dispatcher, lighting adapters and registry

pub mod controllers;
pub mod detect;
pub mod registry;
pub mod rgb_controller;
pub mod settings;

pub use detect::{detect_controllers, detector_table, DetectionSummary, DetectorRegistration};
pub use registry::ControllerRegistry;
pub use rgb_controller::{ControllerError, RgbController, RgbControllerData};
pub use settings::Settings;
