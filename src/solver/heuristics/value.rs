//! Strategies that determine the order in which a variable's candidate
//! values are tried.

use crate::solver::{
    problem::Problem,
    state::SearchState,
    value::{Value, Variable},
};

/// A strategy for ordering the candidate values of the branching variable.
pub trait ValueOrderingHeuristic {
    /// Returns the variable's current domain as an ordered list of values
    /// to try. The order must be deterministic within one run.
    fn order_values(
        &self,
        problem: &Problem,
        variable: &Variable,
        state: &SearchState,
    ) -> Vec<Value>;
}

/// Returns values in the domain's natural iteration order.
///
/// The order is unspecified beyond being deterministic within one run; no
/// caller may rely on a particular solution among several valid ones.
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(
        &self,
        _problem: &Problem,
        variable: &Variable,
        state: &SearchState,
    ) -> Vec<Value> {
        state
            .domain(variable)
            .map(|d| d.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Least-constraining-value ordering.
///
/// Tries first the value that rules out the fewest candidates in the
/// domains of neighbors connected through binary constraints. Costs one
/// `supported`-style scan per candidate, so it only pays off on problems
/// where a wrong early value is expensive.
pub struct LeastConstrainingValueHeuristic;

impl LeastConstrainingValueHeuristic {
    /// Counts neighbor-domain values that `value` would eliminate.
    fn conflicts(
        problem: &Problem,
        variable: &Variable,
        state: &SearchState,
        value: &Value,
    ) -> usize {
        let mut eliminated = 0;
        for constraint in problem.constraints_involving(variable) {
            let Some(binary) = constraint.as_binary() else {
                continue;
            };
            let Some(neighbor) = binary.other(variable) else {
                continue;
            };
            if state.assignment().contains(neighbor) {
                continue;
            }
            let Some(neighbor_domain) = state.domain(neighbor) else {
                continue;
            };
            let variable_is_first = binary.first() == variable;
            eliminated += neighbor_domain
                .iter()
                .filter(|w| {
                    if variable_is_first {
                        !binary.check(value, w)
                    } else {
                        !binary.check(w, value)
                    }
                })
                .count();
        }
        eliminated
    }
}

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        problem: &Problem,
        variable: &Variable,
        state: &SearchState,
    ) -> Vec<Value> {
        let mut values: Vec<Value> = state
            .domain(variable)
            .map(|d| d.iter().cloned().collect())
            .unwrap_or_default();
        values.sort_by_cached_key(|v| Self::conflicts(problem, variable, state, v));
        values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{constraints::binary::BinaryConstraint, problem::ProblemBuilder};

    #[test]
    fn identity_returns_the_whole_domain() {
        let problem = ProblemBuilder::new()
            .variable("a", ["1", "2", "3"])
            .unwrap()
            .build()
            .unwrap();
        let state = SearchState::initial(&problem);

        let mut values =
            IdentityValueHeuristic.order_values(&problem, &Variable::from("a"), &state);
        values.sort();
        assert_eq!(
            values,
            vec![Value::from("1"), Value::from("2"), Value::from("3")]
        );
    }

    #[test]
    fn least_constraining_value_tries_the_permissive_value_first() {
        // a == b means any value of "a" eliminates all of b's domain except
        // the matching one; b's domain is {1}, so a = "1" eliminates nothing
        // while a = "2" wipes b out entirely.
        let problem = ProblemBuilder::new()
            .variable("a", ["1", "2"])
            .unwrap()
            .variable("b", ["1"])
            .unwrap()
            .constraint(BinaryConstraint::new(
                Variable::from("a"),
                Variable::from("b"),
                "a == b",
                |x, y| x == y,
            ))
            .build()
            .unwrap();
        let state = SearchState::initial(&problem);

        let values = LeastConstrainingValueHeuristic.order_values(
            &problem,
            &Variable::from("a"),
            &state,
        );
        assert_eq!(values[0], Value::from("1"));
    }
}
