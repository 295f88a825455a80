//! Phase runners.
//!
//! Setup and teardown share one algorithm: every entry is isolated, failures
//! are reported and swallowed, nothing is produced. The test runner turns
//! each entry into a [`TestOutcome`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::errors::Failure;
use crate::notify::{Notification, Notifier};
use crate::registry::{Action, Entry, Phase};
use crate::report::TestOutcome;
use crate::signal::{ActionResult, Signal};

/// Invokes one action, turning an unwinding panic into [`Signal::Unexpected`].
pub(crate) fn invoke(action: Action) -> ActionResult {
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(result) => result,
        Err(payload) => Err(Signal::Unexpected {
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "action panicked".to_string()
    }
}

/// Runs a setup or teardown sequence.
pub(crate) fn run_hooks(phase: Phase, entries: Vec<Entry>, notifier: &mut dyn Notifier) {
    if entries.is_empty() {
        return;
    }
    notifier.notify(&Notification::PhaseStart(phase));

    for Entry { name, action, skip } in entries {
        if skip {
            notifier.notify(&Notification::ItemSkip { phase, name });
            continue;
        }
        notifier.notify(&Notification::ItemStart {
            phase,
            name,
            skipped: false,
        });
        if let Err(signal) = invoke(action) {
            notifier.notify(&Notification::ItemError(Failure::from_hook_signal(signal)));
        }
    }
}

/// Runs one test entry to an outcome.
pub(crate) fn run_test(entry: Entry, notifier: &mut dyn Notifier) -> TestOutcome {
    let Entry { name, action, skip } = entry;
    notifier.notify(&Notification::ItemStart {
        phase: Phase::Test,
        name: name.clone(),
        skipped: skip,
    });
    if skip {
        return TestOutcome::skipped(name);
    }

    let failure = match invoke(action) {
        Err(Signal::Pass) => {
            notifier.notify(&Notification::ItemPass);
            return TestOutcome::passed(name);
        }
        Err(Signal::Fail { reason }) => Failure::ExplicitFail { reason },
        Err(Signal::Unexpected { message }) => Failure::Unexpected { message },
        Ok(()) => Failure::SilentCompletion,
    };
    let outcome = TestOutcome::failed(name, &failure);
    notifier.notify(&Notification::ItemError(failure));
    outcome
}

/// Runs every test entry strictly in order.
pub(crate) fn run_tests(entries: Vec<Entry>, notifier: &mut dyn Notifier) -> Vec<TestOutcome> {
    entries
        .into_iter()
        .map(|entry| run_test(entry, &mut *notifier))
        .collect()
}
