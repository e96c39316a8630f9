// CLI definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "corsair-rgb")]
#[command(author, version, about = "Corsair RGB peripheral detection and lighting")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (default: $XDG_CONFIG_HOME/corsair-rgb/settings.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all HID devices
    #[command(visible_alias = "ls")]
    List,

    /// Show the detector registration table
    #[command(visible_alias = "table")]
    Detectors,

    /// Run one detection pass and show registered controllers
    #[command(visible_alias = "scan")]
    Detect {
        /// Print controllers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set every LED on every detected controller to one color
    #[command(visible_aliases = ["color", "c"])]
    SetColor {
        /// Red (0-255)
        r: u8,
        /// Green (0-255)
        g: u8,
        /// Blue (0-255)
        b: u8,
    },
}
