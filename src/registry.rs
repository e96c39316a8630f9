//! Shared sink for lighting adapters produced by detection

use parking_lot::Mutex;
use tracing::info;

use crate::rgb_controller::{RgbController, RgbControllerData};

/// Thread-safe list of registered lighting adapters
///
/// Adapters are kept in registration order and live until the registry is
/// dropped; dropping an adapter releases its device handle.
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: Mutex<Vec<Box<dyn RgbController>>>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a lighting adapter
    pub fn register(&self, controller: Box<dyn RgbController>) {
        info!(
            "Registered {} at {}",
            controller.name(),
            controller.location()
        );
        self.controllers.lock().push(controller);
    }

    pub fn len(&self) -> usize {
        self.controllers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.lock().is_empty()
    }

    /// Run `f` with exclusive access to the registered adapters
    pub fn with_controllers<R>(&self, f: impl FnOnce(&mut [Box<dyn RgbController>]) -> R) -> R {
        f(&mut self.controllers.lock())
    }

    /// Copy of every adapter's descriptive data
    pub fn snapshot(&self) -> Vec<RgbControllerData> {
        self.controllers
            .lock()
            .iter()
            .map(|c| c.data().clone())
            .collect()
    }
}
