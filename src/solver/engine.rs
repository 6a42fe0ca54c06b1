use std::{sync::Arc, time::Instant};

use serde::Serialize;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        heuristics::{
            value::{IdentityValueHeuristic, ValueOrderingHeuristic},
            variable::{MrvDegreeHeuristic, VariableSelectionHeuristic},
        },
        observer::{NullObserver, SearchObserver},
        problem::Problem,
        propagation::{propagate, Propagation},
        state::SearchState,
        stats::{SearchStats, SolveStats},
    },
};

/// The tagged outcome of a solve.
#[derive(Debug, Clone, Serialize)]
pub enum SolveOutcome {
    /// A complete assignment satisfying every constraint.
    Solution(Assignment),
    /// The entire search space was exhausted; no solution exists.
    Unsolvable,
    /// The cooperative cancellation check fired before the space was
    /// exhausted; solvability is unknown.
    Cancelled,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solution(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveOutcome::Solution(assignment) => Some(assignment),
            _ => None,
        }
    }

    /// A human-readable explanation for negative outcomes.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            SolveOutcome::Solution(_) => None,
            SolveOutcome::Unsolvable => {
                Some("no solution exists that satisfies all constraints")
            }
            SolveOutcome::Cancelled => {
                Some("cancelled before the search space was exhausted")
            }
        }
    }
}

/// What a call to [`SolverEngine::solve`] hands back: the outcome plus the
/// search statistics, whichever way the search ended.
#[derive(Debug, Clone, Serialize)]
pub struct SolverResult {
    pub outcome: SolveOutcome,
    pub stats: SolveStats,
}

/// Result of one recursive search call. Negative outcomes carry the
/// statistics accumulated so far, so sibling branches keep counting from
/// where a failed branch left off.
enum SearchOutcome {
    Solution(SearchState),
    Exhausted(SearchStats),
    Cancelled(SearchStats),
}

/// The backtracking search driver.
///
/// The engine owns its variable-selection and value-ordering policies and
/// an optional diagnostics observer; the problem itself stays read-only for
/// the whole solve. Each tentative assignment is checked against the static
/// constraint set and then propagated with AC-3 before recursing; the first
/// complete solution found is returned.
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    observer: Arc<dyn SearchObserver>,
    cancellation: Option<Box<dyn Fn() -> bool>>,
}

impl SolverEngine {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            observer: Arc::new(NullObserver),
            cancellation: None,
        }
    }

    /// Installs a diagnostics observer. Observers are side-channel only and
    /// cannot change the solver's outcome.
    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Installs a cooperative cancellation check, invoked at the top of
    /// each recursive call (between branches, not inside the inner value
    /// loops). When it returns `true` the solve ends with
    /// [`SolveOutcome::Cancelled`].
    pub fn with_cancellation(mut self, check: impl Fn() -> bool + 'static) -> Self {
        self.cancellation = Some(Box::new(check));
        self
    }

    /// Solves the problem, returning the first satisfying assignment found
    /// or a negative outcome with full statistics.
    ///
    /// Search-internal infeasibility (domain wipeouts, exhausted branches)
    /// never surfaces as an error; the `Err` path is reserved for
    /// structural problems.
    pub fn solve(&self, problem: &Problem) -> Result<SolverResult> {
        let started = Instant::now();
        let root = SearchState::initial(problem);

        // The incremental checks in `search` only run after a tentative
        // assignment; a constraint that already rejects the root assignment
        // (e.g. over an empty scope) must be caught here.
        if !problem.is_consistent(root.assignment()) {
            return Ok(SolverResult {
                outcome: SolveOutcome::Unsolvable,
                stats: SolveStats::from_search(root.stats().clone(), started.elapsed()),
            });
        }

        let (outcome, stats) = match self.search(problem, root)? {
            SearchOutcome::Solution(state) => {
                self.observer.solution_found(state.assignment());
                let stats = state.stats().clone();
                (SolveOutcome::Solution(state.assignment().clone()), stats)
            }
            SearchOutcome::Exhausted(stats) => (SolveOutcome::Unsolvable, stats),
            SearchOutcome::Cancelled(stats) => (SolveOutcome::Cancelled, stats),
        };

        Ok(SolverResult {
            outcome,
            stats: SolveStats::from_search(stats, started.elapsed()),
        })
    }

    fn search(&self, problem: &Problem, state: SearchState) -> Result<SearchOutcome> {
        if let Some(cancelled) = &self.cancellation {
            if cancelled() {
                return Ok(SearchOutcome::Cancelled(state.stats().clone()));
            }
        }

        if state.is_complete(problem) {
            return Ok(SearchOutcome::Solution(state));
        }

        let Some(variable) = self.variable_heuristic.select_variable(problem, &state) else {
            // Only reachable when every variable is assigned, which the
            // completeness check above already handled.
            return Ok(SearchOutcome::Exhausted(state.stats().clone()));
        };
        let domain_size = state.domain(&variable).map(|d| d.size()).unwrap_or(0);
        self.observer.variable_selected(&variable, domain_size);

        let mut stats = state.stats().clone();
        for value in self.value_heuristic.order_values(problem, &variable, &state) {
            self.observer.value_tried(&variable, &value);

            let guess = state.with_stats(stats).assign(&variable, &value);
            stats = guess.stats().clone();

            if !problem.is_consistent(guess.assignment()) {
                continue;
            }

            match propagate(problem, &guess, &variable, self.observer.as_ref()) {
                Propagation::Wipeout(wipeout_stats) => {
                    stats = wipeout_stats;
                }
                Propagation::Reduced(propagated) => {
                    match self.search(problem, propagated.record_inference())? {
                        SearchOutcome::Solution(solved) => {
                            return Ok(SearchOutcome::Solution(solved));
                        }
                        SearchOutcome::Exhausted(child_stats) => {
                            stats = child_stats;
                        }
                        cancelled @ SearchOutcome::Cancelled(_) => return Ok(cancelled),
                    }
                }
            }
        }

        // Every candidate value failed; the caller backtracks by dropping
        // this state.
        stats.backtracks += 1;
        Ok(SearchOutcome::Exhausted(stats))
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(Box::new(MrvDegreeHeuristic), Box::new(IdentityValueHeuristic))
    }
}
