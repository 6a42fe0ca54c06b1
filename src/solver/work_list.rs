use std::collections::{HashSet, VecDeque};

use crate::solver::{constraint::ConstraintId, value::Variable};

/// A directed arc `(target, against)` for one binary constraint: the
/// target's domain must keep support in `against`'s domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Arc {
    pub target: Variable,
    pub against: Variable,
    pub constraint_id: ConstraintId,
}

/// FIFO queue of pending arcs with membership-based deduplication, so an
/// arc already awaiting revision is not enqueued twice.
#[derive(Debug, Default)]
pub(crate) struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.queue_members.insert(arc.clone()) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }
}
