//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Single-page developer portfolio for the terminal
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Profile file (TOML). Defaults to the built-in sample portfolio
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Color theme. `auto` follows the terminal's reported palette
    #[arg(short, long, value_enum, default_value_t = ThemeArg::Auto)]
    pub theme: ThemeArg,

    /// Milliseconds between typed characters in the hero line
    #[arg(long = "type-delay", value_name = "MS")]
    pub type_delay: Option<u64>,
}

/// Theme selection from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Auto,
    Light,
    Dark,
}

impl ThemeArg {
    /// The dark-mode override this selection carries, if any.
    pub const fn dark_mode(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Light => Some(false),
            Self::Dark => Some(true),
        }
    }
}
