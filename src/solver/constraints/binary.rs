use std::{fmt, sync::Arc};

use im::HashSet;

use crate::solver::{
    assignment::Assignment,
    constraint::ConstraintDescriptor,
    domain::Domain,
    value::{Value, Variable},
};

/// A constraint between exactly two variables, expressed as a predicate
/// over their values.
///
/// Binary constraints are the only variant arc-consistency propagation can
/// see through: [`BinaryConstraint::supported_values`] computes which values
/// of each domain still have at least one supporting partner in the other,
/// and [`BinaryConstraint::other`] lets the propagator walk the constraint
/// graph.
#[derive(Clone)]
pub struct BinaryConstraint {
    vars: [Variable; 2],
    predicate: Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>,
    description: String,
}

impl BinaryConstraint {
    pub fn new(
        first: Variable,
        second: Variable,
        description: impl Into<String>,
        predicate: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            vars: [first, second],
            predicate: Arc::new(predicate),
            description: description.into(),
        }
    }

    /// Convenience constructor for the ubiquitous "values must differ"
    /// relation (map coloring adjacency and friends).
    pub fn not_equal(first: Variable, second: Variable) -> Self {
        let description = format!("{} != {}", first, second);
        Self::new(first, second, description, |a, b| a != b)
    }

    pub fn first(&self) -> &Variable {
        &self.vars[0]
    }

    pub fn second(&self) -> &Variable {
        &self.vars[1]
    }

    pub fn scope(&self) -> &[Variable] {
        &self.vars
    }

    /// Given one endpoint, returns the other, or `None` if `variable` is not
    /// an endpoint of this constraint.
    pub fn other(&self, variable: &Variable) -> Option<&Variable> {
        if *variable == self.vars[0] {
            Some(&self.vars[1])
        } else if *variable == self.vars[1] {
            Some(&self.vars[0])
        } else {
            None
        }
    }

    /// Evaluates the predicate with values in endpoint order.
    pub fn check(&self, first_value: &Value, second_value: &Value) -> bool {
        (self.predicate)(first_value, second_value)
    }

    /// Satisfied whenever either endpoint is unassigned; otherwise the
    /// predicate decides.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match (assignment.get(&self.vars[0]), assignment.get(&self.vars[1])) {
            (Some(a), Some(b)) => (self.predicate)(a, b),
            _ => true,
        }
    }

    /// Computes, by exhaustive pairing, the subset of each domain that has
    /// at least one jointly-satisfying partner in the other.
    ///
    /// `first_domain` belongs to the first endpoint and `second_domain` to
    /// the second. Cost is O(|first| * |second|); this is the primitive arc
    /// revision is built on.
    pub fn supported_values(
        &self,
        first_domain: &Domain,
        second_domain: &Domain,
    ) -> (HashSet<Value>, HashSet<Value>) {
        let mut supported_first = HashSet::new();
        let mut supported_second = HashSet::new();
        for a in first_domain.iter() {
            for b in second_domain.iter() {
                if (self.predicate)(a, b) {
                    supported_first.insert(a.clone());
                    supported_second.insert(b.clone());
                }
            }
        }
        (supported_first, supported_second)
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "BinaryConstraint".to_string(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for BinaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryConstraint")
            .field("vars", &self.vars)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
