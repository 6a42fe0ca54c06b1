use std::{fmt, sync::Arc};

use crate::solver::{
    assignment::Assignment,
    constraint::ConstraintDescriptor,
    value::Variable,
};

/// A constraint expressed as an arbitrary predicate over an assignment.
///
/// This is the escape hatch for relations that the other variants cannot
/// express (e.g. "no two queens share a column or diagonal" over a whole
/// board). The predicate is evaluated against possibly-partial assignments,
/// so it must be optimistic: it should only inspect bindings that are
/// present and return `true` when the variables it cares about are still
/// unassigned.
#[derive(Clone)]
pub struct FunctionConstraint {
    scope: Vec<Variable>,
    predicate: Arc<dyn Fn(&Assignment) -> bool + Send + Sync>,
    description: String,
}

impl FunctionConstraint {
    pub fn new(
        scope: Vec<Variable>,
        description: impl Into<String>,
        predicate: impl Fn(&Assignment) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            scope,
            predicate: Arc::new(predicate),
            description: description.into(),
        }
    }

    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        (self.predicate)(assignment)
    }

    pub fn scope(&self) -> &[Variable] {
        &self.scope
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "FunctionConstraint".to_string(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for FunctionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionConstraint")
            .field("scope", &self.scope)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::value::Value;

    #[test]
    fn evaluates_the_stored_predicate() {
        let a = Variable::from("a");
        let b = Variable::from("b");
        let scope = vec![a.clone(), b.clone()];
        let (pa, pb) = (a.clone(), b.clone());
        let constraint = FunctionConstraint::new(scope, "a and b disagree", move |asg| {
            match (asg.get(&pa), asg.get(&pb)) {
                (Some(x), Some(y)) => x != y,
                _ => true,
            }
        });

        let partial = Assignment::new().set(a.clone(), Value::from("1"));
        assert!(constraint.is_satisfied(&partial));

        let same = partial.set(b.clone(), Value::from("1"));
        assert!(!constraint.is_satisfied(&same));

        let different = partial.set(b, Value::from("2"));
        assert!(constraint.is_satisfied(&different));
    }
}
