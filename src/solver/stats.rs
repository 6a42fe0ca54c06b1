use std::time::Duration;

use im::HashMap;
use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::constraint::{Constraint, ConstraintId};

/// Per-constraint propagation counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PerConstraintStats {
    /// How many arc revisions consulted this constraint.
    pub revisions: u64,
    /// How many of those revisions removed at least one value.
    pub prunings: u64,
}

/// Running counters carried inside every search state.
///
/// The struct is cheap to clone (the per-constraint map is persistent), so
/// exhausted branches can hand their counts back to the parent and the
/// totals stay monotone across the whole search.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchStats {
    /// Tentative assignments derived, including ones discarded immediately.
    pub nodes_explored: u64,
    /// Successful propagation passes.
    pub inferences_applied: u64,
    /// Branches abandoned after exhausting their candidate values.
    pub backtracks: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

impl SearchStats {
    pub(crate) fn record_revision(&mut self, constraint_id: ConstraintId, pruned: bool) {
        let entry = self
            .constraint_stats
            .entry(constraint_id)
            .or_insert_with(PerConstraintStats::default);
        entry.revisions += 1;
        if pruned {
            entry.prunings += 1;
        }
    }
}

/// Final statistics reported alongside a solve outcome.
#[derive(Clone, Debug, Serialize)]
pub struct SolveStats {
    pub nodes_explored: u64,
    pub inferences_applied: u64,
    pub backtracks: u64,
    pub elapsed: Duration,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

impl SolveStats {
    pub(crate) fn from_search(stats: SearchStats, elapsed: Duration) -> Self {
        Self {
            nodes_explored: stats.nodes_explored,
            inferences_applied: stats.inferences_applied,
            backtracks: stats.backtracks,
            elapsed,
            constraint_stats: stats.constraint_stats,
        }
    }
}

/// Renders the per-constraint propagation breakdown as a text table.
pub fn render_stats_table(stats: &SolveStats, constraints: &[Constraint]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Revisions"),
        Cell::new("Prunings"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();
    sorted_stats.sort_by_key(|(id, _)| **id);

    for (constraint_id, constraint_stats) in sorted_stats {
        // Diagnostics must not panic if the slice does not match the stats
        // (e.g. constraints from a different problem).
        let (name, description) = match constraints.get(*constraint_id) {
            Some(constraint) => {
                let descriptor = constraint.descriptor();
                (descriptor.name, descriptor.description)
            }
            None => ("<unknown>".to_string(), String::new()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&description),
            Cell::new(&constraint_stats.revisions.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn record_revision_tracks_prunings_separately() {
        let mut stats = SearchStats::default();
        stats.record_revision(0, false);
        stats.record_revision(0, true);
        stats.record_revision(1, false);

        let zero = stats.constraint_stats.get(&0).unwrap();
        assert_eq!(zero.revisions, 2);
        assert_eq!(zero.prunings, 1);

        let one = stats.constraint_stats.get(&1).unwrap();
        assert_eq!(one.revisions, 1);
        assert_eq!(one.prunings, 0);
    }

    #[test]
    fn rendering_tolerates_stats_for_unknown_constraints() {
        let mut search = SearchStats::default();
        search.record_revision(5, true);
        let stats = SolveStats::from_search(search, std::time::Duration::from_millis(1));

        // An empty constraint slice cannot describe id 5; the table must
        // still render.
        let table = render_stats_table(&stats, &[]);
        assert!(table.contains("<unknown>"));
        assert!(table.contains("5"));
    }
}
