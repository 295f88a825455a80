//! The Slither command-line interface.
//!
//! This module is the entry point for the `slither-selfcheck` binary and
//! wires argument parsing, console output and the self-check suite together.

use clap::Parser;

use crate::cli::args::SelfCheckArgs;
use crate::orchestrator::Orchestrator;

pub mod args;
pub mod output;
pub mod selfcheck;

/// The main entry point for the CLI.
///
/// Exits the process with status 1 when any test fails.
pub fn run() {
    let args = SelfCheckArgs::parse();
    let mut suite = Orchestrator::with_config(args.output_config());
    selfcheck::register(&mut suite, args.demo_failure);
    suite.run_and_exit();
}
