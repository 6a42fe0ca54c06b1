use im::HashMap;

use crate::solver::{
    assignment::Assignment,
    domain::Domain,
    problem::Problem,
    stats::SearchStats,
    value::{Value, Variable},
};

/// An immutable snapshot of the search: the partial assignment so far, the
/// current (possibly narrowed) domain of every variable, and the running
/// statistics.
///
/// States clone cheaply thanks to structural sharing, and every derivation
/// ([`SearchState::assign`], [`SearchState::with_domains`]) produces a new
/// snapshot. Abandoning a branch is just dropping its states; there is no
/// undo.
#[derive(Clone, Debug)]
pub struct SearchState {
    assignment: Assignment,
    domains: HashMap<Variable, Domain>,
    stats: SearchStats,
}

impl SearchState {
    /// The root state of a solve: empty assignment, the problem's initial
    /// domains, zeroed counters.
    pub fn initial(problem: &Problem) -> Self {
        Self {
            assignment: Assignment::new(),
            domains: problem.domains().clone(),
            stats: SearchStats::default(),
        }
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn domain(&self, variable: &Variable) -> Option<&Domain> {
        self.domains.get(variable)
    }

    pub fn domains(&self) -> &HashMap<Variable, Domain> {
        &self.domains
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// True iff the assignment covers every problem variable.
    pub fn is_complete(&self, problem: &Problem) -> bool {
        problem
            .variables()
            .iter()
            .all(|v| self.assignment.contains(v))
    }

    /// Derives the state for a tentative assignment: extends the assignment,
    /// collapses the variable's domain to a singleton, and counts the node.
    pub fn assign(&self, variable: &Variable, value: &Value) -> Self {
        let mut stats = self.stats.clone();
        stats.nodes_explored += 1;
        Self {
            assignment: self.assignment.set(variable.clone(), value.clone()),
            domains: self
                .domains
                .update(variable.clone(), Domain::singleton(value.clone())),
            stats,
        }
    }

    /// Replaces the running statistics, keeping assignment and domains.
    /// Used to thread counts from an exhausted sibling branch.
    pub fn with_stats(&self, stats: SearchStats) -> Self {
        Self {
            assignment: self.assignment.clone(),
            domains: self.domains.clone(),
            stats,
        }
    }

    pub(crate) fn with_domains(&self, domains: HashMap<Variable, Domain>, stats: SearchStats) -> Self {
        Self {
            assignment: self.assignment.clone(),
            domains,
            stats,
        }
    }

    /// Counts one successful propagation pass.
    pub fn record_inference(&self) -> Self {
        let mut stats = self.stats.clone();
        stats.inferences_applied += 1;
        self.with_stats(stats)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::problem::ProblemBuilder;

    fn problem() -> Problem {
        ProblemBuilder::new()
            .variable("a", ["1", "2"])
            .unwrap()
            .variable("b", ["1", "2"])
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn assign_never_mutates_the_receiver() {
        let problem = problem();
        let root = SearchState::initial(&problem);
        let child = root.assign(&Variable::from("a"), &Value::from("1"));

        assert!(root.assignment().is_empty());
        assert_eq!(root.domain(&Variable::from("a")).unwrap().size(), 2);
        assert_eq!(root.stats().nodes_explored, 0);

        assert_eq!(child.assignment().len(), 1);
        assert!(child.domain(&Variable::from("a")).unwrap().is_singleton());
        assert_eq!(child.stats().nodes_explored, 1);
    }

    #[test]
    fn assignment_grows_along_a_path() {
        let problem = problem();
        let root = SearchState::initial(&problem);
        let one = root.assign(&Variable::from("a"), &Value::from("1"));
        let two = one.assign(&Variable::from("b"), &Value::from("2"));

        assert!(root.assignment().len() <= one.assignment().len());
        assert!(one.assignment().len() <= two.assignment().len());
        assert!(two.is_complete(&problem));
        assert!(!one.is_complete(&problem));
    }

    #[test]
    fn record_inference_counts_without_touching_domains() {
        let problem = problem();
        let root = SearchState::initial(&problem);
        let counted = root.record_inference();

        assert_eq!(counted.stats().inferences_applied, 1);
        assert_eq!(root.stats().inferences_applied, 0);
        assert_eq!(counted.domains(), root.domains());
    }
}
