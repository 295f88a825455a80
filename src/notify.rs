//! Notifications emitted while a run progresses, and the sinks receiving them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::Failure;
use crate::registry::Phase;

/// One observable step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    RunStart,
    /// A non-empty setup or teardown sequence is about to run.
    PhaseStart(Phase),
    /// An entry is starting. Tests report this even when skipped.
    ItemStart {
        phase: Phase,
        name: String,
        skipped: bool,
    },
    /// A setup or teardown entry was skipped.
    ItemSkip { phase: Phase, name: String },
    ItemError(Failure),
    ItemPass,
    RunComplete { passed: bool },
}

/// Receives notifications as they happen.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

/// Discards every notification.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notification: &Notification) {}
}

/// Records notifications for later inspection.
///
/// Clones share the same storage, so a handle kept by the caller still sees
/// everything after the orchestrator owning the other clone has run.
#[derive(Clone, Default)]
pub struct NotificationBuffer(Rc<RefCell<Vec<Notification>>>);

impl NotificationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Every error reported so far, in order.
    pub fn errors(&self) -> Vec<Failure> {
        self.0
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::ItemError(failure) => Some(failure.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for NotificationBuffer {
    fn notify(&mut self, notification: &Notification) {
        self.0.borrow_mut().push(notification.clone());
    }
}
