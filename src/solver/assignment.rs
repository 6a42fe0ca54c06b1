use im::HashMap;
use serde::Serialize;

use crate::solver::value::{Value, Variable};

/// A possibly-partial mapping from variables to values.
///
/// Assignments are persistent: [`Assignment::set`] returns an extended copy
/// and never mutates the receiver, so abandoning a search branch cannot
/// corrupt the assignments held by sibling branches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment(HashMap<Variable, Value>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable: &Variable) -> Option<&Value> {
        self.0.get(variable)
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.0.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Value)> {
        self.0.iter()
    }

    /// Returns a new assignment extended with one additional binding.
    pub fn set(&self, variable: Variable, value: Value) -> Self {
        Self(self.0.update(variable, value))
    }
}
