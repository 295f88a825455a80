//! Test outcomes and the verdict derived from them.

use crate::errors::{Failure, TEST_SKIPPED};

/// Recorded result of one test entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    /// Present for failures and for skipped tests.
    pub reason: Option<String>,
    pub skipped: bool,
}

impl TestOutcome {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            reason: None,
            skipped: false,
        }
    }

    /// Skipped tests count as passing, with a fixed reason.
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            reason: Some(TEST_SKIPPED.to_string()),
            skipped: true,
        }
    }

    pub fn failed(name: impl Into<String>, failure: &Failure) -> Self {
        Self {
            name: name.into(),
            passed: false,
            reason: Some(failure.reason()),
            skipped: false,
        }
    }
}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    SettingUp,
    Testing,
    TearingDown,
    Passed,
    Failed,
}

impl RunState {
    /// Whether `next` is the only legal successor of `self`.
    pub fn can_advance_to(self, next: RunState) -> bool {
        matches!(
            (self, next),
            (RunState::Idle, RunState::SettingUp)
                | (RunState::SettingUp, RunState::Testing)
                | (RunState::Testing, RunState::TearingDown)
                | (RunState::TearingDown, RunState::Passed)
                | (RunState::TearingDown, RunState::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Passed | RunState::Failed)
    }
}

/// Ordered outcomes of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    outcomes: Vec<TestOutcome>,
}

impl RunReport {
    pub fn new(outcomes: Vec<TestOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<TestOutcome> {
        self.outcomes
    }

    /// The verdict: true iff no outcome failed. Skipped tests never fail.
    pub fn all_passed(&self) -> bool {
        !self.outcomes.iter().any(|o| !o.passed)
    }

    pub fn state(&self) -> RunState {
        if self.all_passed() {
            RunState::Passed
        } else {
            RunState::Failed
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Tests that ran and passed. Skipped tests are not included.
    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.passed && !o.skipped)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.skipped).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Status the process should exit with: 0 on success, 1 otherwise.
    pub fn exit_status(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> std::process::ExitCode {
        if self.all_passed() {
            std::process::ExitCode::SUCCESS
        } else {
            std::process::ExitCode::FAILURE
        }
    }
}
