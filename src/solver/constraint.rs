use crate::solver::{
    assignment::Assignment,
    constraints::{
        all_different::AllDifferentConstraint, binary::BinaryConstraint,
        function::FunctionConstraint,
    },
    value::Variable,
};

/// Position of a constraint in its problem's constraint list.
pub type ConstraintId = usize;

/// Human-readable identification of a constraint, for diagnostics only.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule restricting the joint assignment of a set of variables.
///
/// The solver treats constraints uniformly through [`Constraint::is_satisfied`]
/// and [`Constraint::scope`]; arc-consistency propagation additionally
/// pattern-matches on the [`Constraint::Binary`] variant (via
/// [`Constraint::as_binary`]) to reach its support-computation primitive.
/// Other variants are opaque to propagation and only consulted during the
/// search's consistency checks.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// An arbitrary predicate over a (possibly partial) assignment.
    Function(FunctionConstraint),
    /// A predicate over the values of exactly two variables.
    Binary(BinaryConstraint),
    /// No two assigned variables in scope may share a value.
    AllDifferent(AllDifferentConstraint),
}

impl Constraint {
    /// Returns `true` if the assignment does not *currently* violate the
    /// constraint. Unassigned scope members are treated optimistically:
    /// a partial assignment is never rejected solely for missing bindings.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match self {
            Constraint::Function(c) => c.is_satisfied(assignment),
            Constraint::Binary(c) => c.is_satisfied(assignment),
            Constraint::AllDifferent(c) => c.is_satisfied(assignment),
        }
    }

    /// The exact set of variables the constraint reads.
    pub fn scope(&self) -> &[Variable] {
        match self {
            Constraint::Function(c) => c.scope(),
            Constraint::Binary(c) => c.scope(),
            Constraint::AllDifferent(c) => c.scope(),
        }
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        match self {
            Constraint::Function(c) => c.descriptor(),
            Constraint::Binary(c) => c.descriptor(),
            Constraint::AllDifferent(c) => c.descriptor(),
        }
    }

    /// The seam used by AC-3: only binary constraints participate in arc
    /// propagation.
    pub fn as_binary(&self) -> Option<&BinaryConstraint> {
        match self {
            Constraint::Binary(c) => Some(c),
            _ => None,
        }
    }

    pub fn involves(&self, variable: &Variable) -> bool {
        self.scope().contains(variable)
    }
}

impl From<FunctionConstraint> for Constraint {
    fn from(c: FunctionConstraint) -> Self {
        Constraint::Function(c)
    }
}

impl From<BinaryConstraint> for Constraint {
    fn from(c: BinaryConstraint) -> Self {
        Constraint::Binary(c)
    }
}

impl From<AllDifferentConstraint> for Constraint {
    fn from(c: AllDifferentConstraint) -> Self {
        Constraint::AllDifferent(c)
    }
}
