//! Corsair RGB CLI
//!
//! Detects Corsair keyboards, mice, mousepads and headset stands and drives
//! their lighting in Direct mode.

use anyhow::Result;
use clap::Parser;
use corsair_rgb::Settings;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers
mod commands;

fn setup_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("corsair_rgb={level}").parse()?)
        .add_directive(format!("corsair_peripheral={level}").parse()?)
        .add_directive(format!("corsair_transport={level}").parse()?);

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let settings = Settings::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::List) => commands::utility::list(),
        Some(Commands::Detectors) => commands::utility::detectors(&settings),
        None => commands::query::detect(&settings, false),
        Some(Commands::Detect { json }) => commands::query::detect(&settings, json),
        Some(Commands::SetColor { r, g, b }) => commands::set::set_color(&settings, r, g, b),
    }
}
