//! Failure taxonomy for test, setup and teardown actions.
//!
//! Every way an action can go wrong collapses into one [`Failure`] value at
//! the callback boundary. Nothing here ever propagates past a phase runner;
//! a `Failure` only ends up in a notification or in a test outcome's reason.

use miette::Diagnostic;
use thiserror::Error;

use crate::signal::Signal;

/// Reason recorded for a test that returned without signalling.
pub const NO_PASS_OR_FAIL: &str = "No \"pass()\" or \"fail()\" called.";

/// Reason recorded for a test registered through a skip variant.
pub const TEST_SKIPPED: &str = "Test skipped";

/// Everything that can go wrong while running one action.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Failure {
    /// Raised through `fail(reason)`.
    #[error("{reason}")]
    #[diagnostic(code(slither::fail))]
    ExplicitFail { reason: String },

    /// A propagated error or a panic that did not go through `fail()`.
    #[error("{message}")]
    #[diagnostic(code(slither::unexpected))]
    Unexpected { message: String },

    /// A test body returned normally without raising a verdict.
    #[error("No \"pass()\" or \"fail()\" called.")]
    #[diagnostic(
        code(slither::silent),
        help("end the test body with `pass()` or `fail(reason)`")
    )]
    SilentCompletion,

    /// `pass()` raised from a setup or teardown step.
    #[error("pass() is only meaningful inside a test")]
    #[diagnostic(
        code(slither::misplaced_pass),
        help("setup and teardown steps have no outcome; return `Ok(())` instead")
    )]
    PassOutsideTest,
}

impl Failure {
    /// Classifies a signal raised by a setup or teardown step.
    pub fn from_hook_signal(signal: Signal) -> Self {
        match signal {
            Signal::Pass => Failure::PassOutsideTest,
            Signal::Fail { reason } => Failure::ExplicitFail { reason },
            Signal::Unexpected { message } => Failure::Unexpected { message },
        }
    }

    /// Text surfaced as a failed outcome's `reason`.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// True when the message was not authored for test reporting.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Failure::Unexpected { .. })
    }
}
