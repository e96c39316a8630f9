// Query commands: detect

use corsair_rgb::Settings;

use super::{detect_all, CommandResult};

/// Detect controllers and print what was registered
pub fn detect(settings: &Settings, json: bool) -> CommandResult {
    let registry = detect_all(settings)?;
    let controllers = registry.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&controllers)?);
        return Ok(());
    }

    if controllers.is_empty() {
        println!("No Corsair controllers found");
        return Ok(());
    }

    for (i, c) in controllers.iter().enumerate() {
        println!("{}: {} ({})", i, c.name, c.device_type.name());
        println!("   Location: {}", c.location);
        if !c.serial.is_empty() {
            println!("   Serial:   {}", c.serial);
        }
        if !c.version.is_empty() {
            println!("   Firmware: {}", c.version);
        }
        for zone in &c.zones {
            println!("   Zone \"{}\": {} LEDs", zone.name, zone.leds_count);
        }
    }
    Ok(())
}
