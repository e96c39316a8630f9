// Setting commands: set-color

use corsair_peripheral::RgbColor;
use corsair_rgb::Settings;
use tracing::warn;

use super::{detect_all, CommandResult};

/// Set every LED on every detected controller to one color
pub fn set_color(settings: &Settings, r: u8, g: u8, b: u8) -> CommandResult {
    let color = RgbColor::new(r, g, b);
    let registry = detect_all(settings)?;

    if registry.is_empty() {
        println!("No Corsair controllers found");
        return Ok(());
    }

    registry.with_controllers(|controllers| {
        for controller in controllers.iter_mut() {
            controller.set_custom_mode();
            controller.set_all_leds(color);
            match controller.device_update_leds() {
                Ok(()) => println!("{}: {}", controller.name(), color),
                Err(e) => warn!("{}: {}", controller.name(), e),
            }
        }
    });
    Ok(())
}
