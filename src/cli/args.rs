//! Defines the command-line arguments for the self-check binary.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;

use crate::config::{ColorMode, OutputConfig};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "slither-selfcheck",
    version,
    about = "Runs Slither's own ordering and skipping checks."
)]
pub struct SelfCheckArgs {
    /// When to color the output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Use plain ASCII markers instead of emoji.
    #[arg(long)]
    pub no_emoji: bool,

    /// Register one extra test that always fails.
    #[arg(long)]
    pub demo_failure: bool,
}

impl SelfCheckArgs {
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            color: self.color,
            emoji: !self.no_emoji,
        }
    }
}
