//! Standard heuristics for selecting which variable to branch on next
//! during the search process.

use std::cmp::Reverse;

use crate::solver::{problem::Problem, state::SearchState, value::Variable};

/// A strategy for choosing the next unassigned variable to branch on.
///
/// Returning `None` means every variable is already assigned; the search
/// driver treats that as completion, not failure.
pub trait VariableSelectionHeuristic {
    fn select_variable(&self, problem: &Problem, state: &SearchState) -> Option<Variable>;
}

/// Selects the first unassigned variable in declaration order.
///
/// A basic, deterministic baseline; useful in tests and as a control in
/// benchmarks.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, problem: &Problem, state: &SearchState) -> Option<Variable> {
        problem
            .variables()
            .iter()
            .find(|v| !state.assignment().contains(v))
            .cloned()
    }
}

/// Minimum Remaining Values with a degree tie-break.
///
/// Picks the unassigned variable with the smallest current domain
/// ("fail-first"). Ties are broken by preferring the variable involved in
/// the most constraints that can still prune something, i.e. constraints
/// whose scope contains another unassigned variable. Remaining ties fall
/// back to declaration order for determinism.
pub struct MrvDegreeHeuristic;

impl MrvDegreeHeuristic {
    fn degree(problem: &Problem, state: &SearchState, variable: &Variable) -> usize {
        problem
            .constraints_involving(variable)
            .filter(|c| {
                c.scope()
                    .iter()
                    .any(|other| other != variable && !state.assignment().contains(other))
            })
            .count()
    }
}

impl VariableSelectionHeuristic for MrvDegreeHeuristic {
    fn select_variable(&self, problem: &Problem, state: &SearchState) -> Option<Variable> {
        problem
            .variables()
            .iter()
            .enumerate()
            .filter(|(_, v)| !state.assignment().contains(v))
            .min_by_key(|(index, v)| {
                let size = state.domain(v).map(|d| d.size()).unwrap_or(usize::MAX);
                let degree = Self::degree(problem, state, v);
                (size, Reverse(degree), *index)
            })
            .map(|(_, v)| v.clone())
    }
}
