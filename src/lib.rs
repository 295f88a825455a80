//! Slither: a minimal, strictly sequential test orchestrator.
//!
//! Register setup, test and teardown actions on an [`Orchestrator`], then
//! run them once. Tests report their verdict by raising [`pass`] or [`fail`];
//! a test that returns without doing either is a failure.

pub use crate::errors::{Failure, NO_PASS_OR_FAIL, TEST_SKIPPED};
pub use crate::notify::{Notification, NotificationBuffer, Notifier, NullNotifier};
pub use crate::orchestrator::Orchestrator;
pub use crate::registry::{Action, Entry, Phase};
pub use crate::report::{RunReport, RunState, TestOutcome};
pub use crate::signal::{fail, pass, ActionResult, Signal};

pub mod cli;
pub mod config;
pub mod errors;
pub mod notify;
pub mod orchestrator;
pub mod registry;
pub mod report;
pub mod signal;

mod runner;
