//! Append-only registry of setup, test and teardown entries.

use std::fmt;

use crate::signal::ActionResult;

/// Zero-argument unit of work owned by an [`Entry`].
pub type Action = Box<dyn FnOnce() -> ActionResult>;

/// A named stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Setup,
    Test,
    Teardown,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Test => "test",
            Phase::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One registered callback. Immutable once built.
pub struct Entry {
    pub name: String,
    pub action: Action,
    pub skip: bool,
}

impl Entry {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
            skip: false,
        }
    }

    pub fn skipped<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> ActionResult + 'static,
    {
        Self {
            skip: true,
            ..Self::new(name, action)
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}

/// The three phase sequences, in registration order.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    setup: Vec<Entry>,
    tests: Vec<Entry>,
    teardown: Vec<Entry>,
}

impl Registry {
    pub(crate) fn push(&mut self, phase: Phase, entry: Entry) {
        self.sequence_mut(phase).push(entry);
    }

    pub(crate) fn entries(&self, phase: Phase) -> &[Entry] {
        match phase {
            Phase::Setup => &self.setup,
            Phase::Test => &self.tests,
            Phase::Teardown => &self.teardown,
        }
    }

    /// Hands the sequences over to the runners as `(setup, tests, teardown)`.
    pub(crate) fn into_phases(self) -> (Vec<Entry>, Vec<Entry>, Vec<Entry>) {
        (self.setup, self.tests, self.teardown)
    }

    fn sequence_mut(&mut self, phase: Phase) -> &mut Vec<Entry> {
        match phase {
            Phase::Setup => &mut self.setup,
            Phase::Test => &mut self.tests,
            Phase::Teardown => &mut self.teardown,
        }
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;
    use crate::signal::pass;

    fn names(registry: &Registry, phase: Phase) -> Vec<&str> {
        registry
            .entries(phase)
            .iter()
            .map(|e| e.name.as_str())
            .collect()
    }

    #[test]
    fn entries_keep_registration_order_per_phase() {
        let mut registry = Registry::default();
        registry.push(Phase::Test, Entry::new("b", pass));
        registry.push(Phase::Setup, Entry::new("s1", || Ok(())));
        registry.push(Phase::Test, Entry::new("a", pass));
        registry.push(Phase::Setup, Entry::skipped("s2", || Ok(())));

        assert_eq!(names(&registry, Phase::Setup), vec!["s1", "s2"]);
        assert_eq!(names(&registry, Phase::Test), vec!["b", "a"]);
        assert!(registry.entries(Phase::Teardown).is_empty());
    }

    #[test]
    fn duplicate_names_do_not_collide() {
        let mut registry = Registry::default();
        registry.push(Phase::Teardown, Entry::new("same", || Ok(())));
        registry.push(Phase::Teardown, Entry::new("same", || Ok(())));
        assert_eq!(registry.entries(Phase::Teardown).len(), 2);
    }

    #[test]
    fn skipped_constructor_only_flips_skip() {
        let entry = Entry::skipped("later", || Ok(()));
        assert!(entry.skip);
        assert_eq!(entry.name, "later");
        assert!(!Entry::new("now", || Ok(())).skip);
    }
}
