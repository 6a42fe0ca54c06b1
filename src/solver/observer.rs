//! Side-channel diagnostics for the search.
//!
//! The engine reports structured events through an explicit observer rather
//! than a process-wide logger, so the core carries no hidden global state
//! and stays independently testable. Observers must not affect the solver's
//! outcome.

use crate::solver::{
    assignment::Assignment,
    value::{Value, Variable},
};

/// Receiver for structured search events.
///
/// All methods have empty default bodies, so an observer only implements
/// the events it cares about.
pub trait SearchObserver {
    /// The driver picked a variable to branch on.
    fn variable_selected(&self, _variable: &Variable, _domain_size: usize) {}

    /// A candidate value is about to be tried.
    fn value_tried(&self, _variable: &Variable, _value: &Value) {}

    /// Propagation emptied a variable's domain; the branch is infeasible.
    fn domain_wipeout(&self, _variable: &Variable) {}

    /// A complete satisfying assignment was found.
    fn solution_found(&self, _assignment: &Assignment) {}
}

/// The default observer: discards every event.
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Forwards events to [`tracing`] at debug/trace verbosity.
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn variable_selected(&self, variable: &Variable, domain_size: usize) {
        tracing::debug!(%variable, domain_size, "branching");
    }

    fn value_tried(&self, variable: &Variable, value: &Value) {
        tracing::trace!(%variable, %value, "trying value");
    }

    fn domain_wipeout(&self, variable: &Variable) {
        tracing::debug!(%variable, "domain wiped out, backtracking");
    }

    fn solution_found(&self, assignment: &Assignment) {
        tracing::debug!(assigned = assignment.len(), "solution found");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Records event names in order, for asserting observer wiring.
    #[derive(Default)]
    pub struct RecordingObserver {
        pub events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl SearchObserver for RecordingObserver {
        fn variable_selected(&self, variable: &Variable, _domain_size: usize) {
            self.push(format!("select {}", variable));
        }

        fn value_tried(&self, variable: &Variable, value: &Value) {
            self.push(format!("try {}={}", variable, value));
        }

        fn domain_wipeout(&self, variable: &Variable) {
            self.push(format!("wipeout {}", variable));
        }

        fn solution_found(&self, assignment: &Assignment) {
            self.push(format!("solved {}", assignment.len()));
        }
    }
}
