//! Pass/fail signalling for registered actions.
//!
//! A test body finishes by *raising* its verdict rather than returning it:
//! [`pass`] and [`fail`] both produce an `Err(Signal)`, so they can end the
//! body from any call depth through `?` or as the tail expression. Helpers
//! returning other `Result<T, Signal>` types forward them the same way.
//!
//! ```rust
//! use slither::{fail, pass, ActionResult};
//!
//! fn check(ready: bool) -> ActionResult {
//!     if !ready {
//!         fail("not ready")?;
//!     }
//!     pass()
//! }
//!
//! assert!(check(true).is_err());
//! ```
//!
//! Ordinary errors also travel through `?`: anything implementing
//! [`std::error::Error`] converts into [`Signal::Unexpected`].

use std::fmt;

/// Result type every registered action returns.
///
/// `Ok(())` means the action ran to completion without raising anything.
pub type ActionResult = Result<(), Signal>;

/// Non-local exit raised from inside an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The test finished successfully.
    Pass,
    /// The test finished with an explicit failure.
    Fail { reason: String },
    /// Something other than `fail()` went wrong: a propagated error or a panic.
    Unexpected { message: String },
}

impl Signal {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Signal::Unexpected {
            message: message.into(),
        }
    }

    /// Message carried by the signal, as it appears in reports.
    pub fn message(&self) -> &str {
        match self {
            Signal::Pass => "The test passed successfully",
            Signal::Fail { reason } => reason,
            Signal::Unexpected { message } => message,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// `Signal` must not implement `std::error::Error`, or this overlaps
// the reflexive `From<T> for T`.
impl<E> From<E> for Signal
where
    E: std::error::Error,
{
    fn from(err: E) -> Self {
        Signal::Unexpected {
            message: err.to_string(),
        }
    }
}

/// Ends the current test as passed.
pub fn pass() -> ActionResult {
    Err(Signal::Pass)
}

/// Ends the current test as failed with `reason`.
pub fn fail(reason: impl Into<String>) -> ActionResult {
    Err(Signal::Fail {
        reason: reason.into(),
    })
}
