//! Handles all user-facing console output for a run.
//!
//! Task lines (run start, phase headers, test starts, the final verdict) are
//! printed two spaces in with a leading marker; sub-task lines (hook names,
//! skips, errors, passes) sit underneath, indented seven spaces.

use std::io::Write;

use miette::Diagnostic;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::config::OutputConfig;
use crate::notify::{Notification, Notifier};
use crate::registry::Phase;

const SUBTASK_INDENT: &str = "       ";

// ============================================================================
// MARKERS
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Marker {
    Run,
    Setup,
    Test,
    Teardown,
    Error,
    Ok,
    Nope,
}

impl Marker {
    fn glyph(self, emoji: bool) -> &'static str {
        match (self, emoji) {
            (Marker::Run, true) => "🏃",
            (Marker::Setup, true) => "🐰",
            (Marker::Test, true) => "✈️",
            (Marker::Teardown, true) => "🧹",
            (Marker::Error, true) => "🐍",
            (Marker::Ok, true) => "✅",
            (Marker::Nope, true) => "❌",
            (Marker::Run, false) => ">>",
            (Marker::Setup, false) => "++",
            (Marker::Test, false) => "->",
            (Marker::Teardown, false) => "--",
            (Marker::Error, false) => "!!",
            (Marker::Ok, false) => "ok",
            (Marker::Nope, false) => "xx",
        }
    }
}

// ============================================================================
// CONSOLE NOTIFIER
// ============================================================================

/// Renders notifications as colored console lines.
pub struct ConsoleNotifier<W: WriteColor = StandardStream> {
    out: W,
    emoji: bool,
}

impl ConsoleNotifier<StandardStream> {
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color.color_choice()), config)
    }
}

impl<W: WriteColor> ConsoleNotifier<W> {
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self {
            out,
            emoji: config.emoji,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn task(&mut self, marker: Marker, message: &str, color: Option<Color>) {
        let glyph = marker.glyph(self.emoji);
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(color).set_bold(true));
        let _ = writeln!(self.out, "  {}  {}", glyph, message);
        let _ = self.out.reset();
    }

    fn subtask(&mut self, message: &str, color: Option<Color>) {
        let _ = self.out.set_color(ColorSpec::new().set_fg(color));
        let _ = writeln!(self.out, "{}{}", SUBTASK_INDENT, message);
        let _ = self.out.reset();
    }
}

impl<W: WriteColor> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, notification: &Notification) {
        match notification {
            Notification::RunStart => self.task(Marker::Run, "Starting tests.", None),
            Notification::PhaseStart(Phase::Setup) => {
                self.task(Marker::Setup, "Setting up...", None)
            }
            Notification::PhaseStart(Phase::Teardown) => {
                self.task(Marker::Teardown, "Cleaning up...", None)
            }
            // Tests have no phase header; each test start is its own task line.
            Notification::PhaseStart(Phase::Test) => {}
            Notification::ItemStart {
                phase: Phase::Test,
                name,
                skipped,
            } => {
                let label = if *skipped {
                    format!("Running test: [SKIPPED] {}", name)
                } else {
                    format!("Running test: {}", name)
                };
                let color = skipped.then_some(Color::Yellow);
                self.task(Marker::Test, &label, color);
            }
            Notification::ItemStart { name, .. } => self.subtask(name, None),
            Notification::ItemSkip { name, .. } => {
                self.subtask(&format!("[SKIPPED] {}", name), Some(Color::Yellow))
            }
            Notification::ItemError(failure) => {
                let glyph = Marker::Error.glyph(self.emoji);
                self.subtask(
                    &format!("ERROR: {}  {}", glyph, failure),
                    Some(Color::Red),
                );
                if let Some(help) = failure.help() {
                    self.subtask(&format!("help: {}", help), Some(Color::Cyan));
                }
            }
            Notification::ItemPass => self.subtask("Test passed.", Some(Color::Green)),
            Notification::RunComplete { passed: true } => {
                self.task(Marker::Ok, "Tests completed.\n", Some(Color::Green))
            }
            Notification::RunComplete { passed: false } => {
                self.task(Marker::Nope, "Tests failed.\n", Some(Color::Red))
            }
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod output_tests {
    use termcolor::Buffer;

    use super::*;
    use crate::errors::Failure;

    fn render(config: &OutputConfig, notes: &[Notification]) -> String {
        let mut console = ConsoleNotifier::new(Buffer::no_color(), config);
        for note in notes {
            console.notify(note);
        }
        String::from_utf8_lossy(console.into_inner().as_slice()).into_owned()
    }

    #[test]
    fn renders_task_and_subtask_lines() {
        let out = render(
            &OutputConfig::default(),
            &[
                Notification::RunStart,
                Notification::PhaseStart(Phase::Setup),
                Notification::ItemStart {
                    phase: Phase::Setup,
                    name: "prepare".to_string(),
                    skipped: false,
                },
                Notification::ItemStart {
                    phase: Phase::Test,
                    name: "adds".to_string(),
                    skipped: false,
                },
                Notification::ItemPass,
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  🏃  Starting tests.",
                "  🐰  Setting up...",
                "       prepare",
                "  ✈️  Running test: adds",
                "       Test passed.",
            ]
        );
    }

    #[test]
    fn skips_and_errors_are_distinguishable() {
        let out = render(
            &OutputConfig::plain(),
            &[
                Notification::ItemStart {
                    phase: Phase::Test,
                    name: "later".to_string(),
                    skipped: true,
                },
                Notification::ItemSkip {
                    phase: Phase::Teardown,
                    name: "cleanup".to_string(),
                },
                Notification::ItemError(Failure::ExplicitFail {
                    reason: "boom".to_string(),
                }),
            ],
        );
        assert!(out.contains("  ->  Running test: [SKIPPED] later"));
        assert!(out.contains("       [SKIPPED] cleanup"));
        assert!(out.contains("       ERROR: !!  boom"));
        assert!(!out.contains("help:"));
    }

    #[test]
    fn silent_completion_prints_help() {
        let out = render(
            &OutputConfig::plain(),
            &[Notification::ItemError(Failure::SilentCompletion)],
        );
        assert!(out.contains("ERROR: !!  No \"pass()\" or \"fail()\" called."));
        assert!(out.contains("help: end the test body with `pass()` or `fail(reason)`"));
    }

    #[test]
    fn verdict_lines() {
        let passed = render(
            &OutputConfig::plain(),
            &[Notification::RunComplete { passed: true }],
        );
        let failed = render(
            &OutputConfig::plain(),
            &[Notification::RunComplete { passed: false }],
        );
        assert!(passed.starts_with("  ok  Tests completed."));
        assert!(failed.starts_with("  xx  Tests failed."));
    }
}
