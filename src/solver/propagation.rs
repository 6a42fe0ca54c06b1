//! Arc-consistency (AC-3) propagation.
//!
//! After each tentative assignment the solver re-establishes arc
//! consistency for the binary constraints reachable from the just-assigned
//! variable. Non-binary constraints are opaque here; they are enforced by
//! the search's consistency checks instead.

use crate::solver::{
    observer::SearchObserver,
    problem::Problem,
    state::SearchState,
    stats::SearchStats,
    value::Variable,
    work_list::{Arc, WorkList},
};

/// Outcome of a propagation pass.
///
/// A wipeout is not an error: it is the expected early-pruning signal that
/// tells the driver to backtrack cheaply. The accumulated statistics ride
/// along so the work done on the doomed branch still counts.
#[derive(Debug)]
pub(crate) enum Propagation {
    /// Fixed point reached; domains (possibly) reduced.
    Reduced(SearchState),
    /// Some variable's domain became empty; the branch is infeasible.
    Wipeout(SearchStats),
}

/// Runs AC-3 scoped to `just_assigned`.
///
/// Seeds the work queue with one arc `(other, just_assigned)` per binary
/// constraint touching the just-assigned variable, then revises arcs until
/// the queue empties. When a revision shrinks a domain, every inward arc of
/// the shrunk variable is re-enqueued except the one pointing back at the
/// domain it was just revised against.
pub(crate) fn propagate(
    problem: &Problem,
    state: &SearchState,
    just_assigned: &Variable,
    observer: &dyn SearchObserver,
) -> Propagation {
    let mut domains = state.domains().clone();
    let mut stats = state.stats().clone();

    let mut worklist = WorkList::new();
    for (constraint_id, constraint) in problem.constraints().iter().enumerate() {
        if let Some(binary) = constraint.as_binary() {
            if let Some(other) = binary.other(just_assigned) {
                worklist.push_back(Arc {
                    target: other.clone(),
                    against: just_assigned.clone(),
                    constraint_id,
                });
            }
        }
    }

    while let Some(arc) = worklist.pop_front() {
        let Some(binary) = problem.constraints()[arc.constraint_id].as_binary() else {
            continue;
        };
        let (Some(target_domain), Some(against_domain)) =
            (domains.get(&arc.target), domains.get(&arc.against))
        else {
            continue;
        };

        // Orient the support computation to the constraint's endpoint order.
        let supported = if binary.first() == &arc.target {
            binary.supported_values(target_domain, against_domain).0
        } else {
            binary.supported_values(against_domain, target_domain).1
        };

        let pruned = supported.len() < target_domain.size();
        stats.record_revision(arc.constraint_id, pruned);
        if !pruned {
            continue;
        }

        match target_domain.filter(|v| supported.contains(v)) {
            None => {
                observer.domain_wipeout(&arc.target);
                return Propagation::Wipeout(stats);
            }
            Some(reduced) => {
                domains = domains.update(arc.target.clone(), reduced);

                // The target shrank; previously-established support for its
                // other neighbors may no longer hold.
                for (constraint_id, constraint) in problem.constraints().iter().enumerate() {
                    let Some(other_binary) = constraint.as_binary() else {
                        continue;
                    };
                    let Some(neighbor) = other_binary.other(&arc.target) else {
                        continue;
                    };
                    // Skip only the exact arc just processed: a parallel
                    // constraint between the same pair still needs its
                    // reverse arc re-revised.
                    if *neighbor == arc.against && constraint_id == arc.constraint_id {
                        continue;
                    }
                    worklist.push_back(Arc {
                        target: neighbor.clone(),
                        against: arc.target.clone(),
                        constraint_id,
                    });
                }
            }
        }
    }

    Propagation::Reduced(state.with_domains(domains, stats))
}
