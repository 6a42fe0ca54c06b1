use im::HashSet;

use crate::{
    error::{Error, Result},
    solver::{assignment::Assignment, constraint::ConstraintDescriptor, value::Variable},
};

/// A constraint requiring all variables in a set to take distinct values.
///
/// Only *assigned* variables are compared: a partial assignment where some
/// scope members are still free is accepted optimistically. Propagation does
/// not see through this variant; it is enforced by the search's consistency
/// checks.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint {
    vars: Vec<Variable>,
}

impl AllDifferentConstraint {
    /// Creates the constraint over the given variables.
    ///
    /// Fails with [`Error::InvalidScope`] if fewer than 2 variables are
    /// given, since uniqueness over fewer is vacuous.
    pub fn new(vars: Vec<Variable>) -> Result<Self> {
        if vars.len() < 2 {
            return Err(Error::InvalidScope {
                required: 2,
                given: vars.len(),
            });
        }
        Ok(Self { vars })
    }

    pub fn scope(&self) -> &[Variable] {
        &self.vars
    }

    /// Scans assigned values in scope order, failing on the first repeat.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        let mut seen = HashSet::new();
        for var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if seen.insert(value.clone()).is_some() {
                    return false;
                }
            }
        }
        true
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }
}
