use crate::solver::value::Variable;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Structural input errors, raised eagerly at construction time.
///
/// Infeasibility discovered during search (domain wipeout, exhausted
/// branches) is never reported through this type; it is handled internally
/// by backtracking and surfaces only as a negative
/// [`SolveOutcome`](crate::solver::engine::SolveOutcome).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A domain was constructed from an empty set of values.
    #[error("a domain must contain at least one value")]
    InvalidDomain,

    /// A constraint was declared over too few variables.
    #[error("constraint scope requires at least {required} variables, got {given}")]
    InvalidScope { required: usize, given: usize },

    /// A lookup or constraint scope referenced a variable the problem does
    /// not declare.
    #[error("unknown variable: {0}")]
    UnknownVariable(Variable),

    /// A declared variable was not given a domain.
    #[error("variable {0} has no domain")]
    MissingDomain(Variable),

    /// The same variable was registered twice with the problem builder.
    #[error("variable {0} is already declared")]
    DuplicateVariable(Variable),
}
