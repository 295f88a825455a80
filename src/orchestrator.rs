//! The test orchestrator: registration API and the single `run` entry point.
//!
//! A run drains the registry in a fixed order:
//! 1. setup entries, each isolated from the others
//! 2. test entries, each producing a [`TestOutcome`]
//! 3. teardown entries, always, whatever the tests did
//!
//! The verdict is derived from test outcomes only. Setup and teardown
//! failures are reported as they happen but never fail the run.
//!
//! ```rust,no_run
//! use slither::{fail, pass, Orchestrator};
//!
//! let mut suite = Orchestrator::new();
//! suite.add_test("arithmetic", || {
//!     if 1 + 1 != 2 {
//!         fail("math is broken")?;
//!     }
//!     pass()
//! });
//! suite.run_and_exit();
//! ```

use std::process;

use crate::cli::output::ConsoleNotifier;
use crate::config::OutputConfig;
use crate::notify::{Notification, Notifier};
use crate::registry::{Entry, Phase, Registry};
use crate::report::{RunReport, RunState};
use crate::runner;
use crate::signal::ActionResult;

/// Owns one suite of setup, test and teardown entries.
///
/// `run` consumes the orchestrator, so a suite runs at most once.
pub struct Orchestrator {
    registry: Registry,
    notifier: Box<dyn Notifier>,
    state: RunState,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// An orchestrator reporting to the console with default settings.
    pub fn new() -> Self {
        Self::with_config(OutputConfig::default())
    }

    pub fn with_config(config: OutputConfig) -> Self {
        Self::with_notifier(Box::new(ConsoleNotifier::stdout(&config)))
    }

    pub fn with_notifier(notifier: Box<dyn Notifier>) -> Self {
        Self {
            registry: Registry::default(),
            notifier,
            state: RunState::Idle,
        }
    }

    pub fn add_setup<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        self.registry.push(Phase::Setup, Entry::new(name, action));
    }

    pub fn add_skipped_setup<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        self.registry.push(Phase::Setup, Entry::skipped(name, action));
    }

    pub fn add_test<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        self.registry.push(Phase::Test, Entry::new(name, action));
    }

    pub fn add_skipped_test<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        self.registry.push(Phase::Test, Entry::skipped(name, action));
    }

    pub fn add_teardown<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        self.registry.push(Phase::Teardown, Entry::new(name, action));
    }

    pub fn add_skipped_teardown<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        self.registry.push(Phase::Teardown, Entry::skipped(name, action));
    }

    /// Number of entries registered for `phase`, skipped ones included.
    pub fn registered(&self, phase: Phase) -> usize {
        self.registry.entries(phase).len()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Runs every phase and returns the ordered test outcomes.
    ///
    /// Never terminates the process; see [`Orchestrator::run_and_exit`].
    pub fn run(mut self) -> RunReport {
        self.notifier.notify(&Notification::RunStart);
        let (setup, tests, teardown) = std::mem::take(&mut self.registry).into_phases();

        self.advance(RunState::SettingUp);
        runner::run_hooks(Phase::Setup, setup, self.notifier.as_mut());

        self.advance(RunState::Testing);
        let outcomes = runner::run_tests(tests, self.notifier.as_mut());

        self.advance(RunState::TearingDown);
        runner::run_hooks(Phase::Teardown, teardown, self.notifier.as_mut());

        let report = RunReport::new(outcomes);
        self.advance(report.state());
        self.notifier.notify(&Notification::RunComplete {
            passed: report.all_passed(),
        });
        report
    }

    /// Runs the suite and exits the process with status 1 if any test failed.
    ///
    /// On success this returns normally so the process exits with status 0.
    pub fn run_and_exit(self) {
        let report = self.run();
        if !report.all_passed() {
            process::exit(report.exit_status());
        }
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal run transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
    }
}
