use im::HashMap;

use crate::{
    error::{Error, Result},
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        domain::Domain,
        value::{Value, Variable},
    },
};

/// An immutable constraint satisfaction problem: variables, one domain per
/// variable, and the constraints restricting their joint assignment.
///
/// A `Problem` is deep-frozen after construction; the solver never mutates
/// it. All domain narrowing during search happens in
/// [`SearchState`](crate::solver::state::SearchState) snapshots instead.
#[derive(Clone, Debug)]
pub struct Problem {
    variables: Vec<Variable>,
    domains: HashMap<Variable, Domain>,
    constraints: Vec<Constraint>,
}

impl Problem {
    /// Validates and freezes a problem.
    ///
    /// Fails with [`Error::MissingDomain`] if a declared variable has no
    /// domain, and [`Error::UnknownVariable`] if any constraint's scope
    /// references an undeclared variable.
    pub fn new(
        variables: Vec<Variable>,
        domains: HashMap<Variable, Domain>,
        constraints: Vec<Constraint>,
    ) -> Result<Self> {
        for variable in &variables {
            if !domains.contains_key(variable) {
                return Err(Error::MissingDomain(variable.clone()));
            }
        }
        for constraint in &constraints {
            for scoped in constraint.scope() {
                if !variables.contains(scoped) {
                    return Err(Error::UnknownVariable(scoped.clone()));
                }
            }
        }
        Ok(Self {
            variables,
            domains,
            constraints,
        })
    }

    /// The variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The initial domain of a variable.
    pub fn domain(&self, variable: &Variable) -> Result<&Domain> {
        self.domains
            .get(variable)
            .ok_or_else(|| Error::UnknownVariable(variable.clone()))
    }

    pub(crate) fn domains(&self) -> &HashMap<Variable, Domain> {
        &self.domains
    }

    /// All constraints whose scope contains `variable`. A linear scan;
    /// constraint counts are small relative to search cost.
    pub fn constraints_involving<'a>(
        &'a self,
        variable: &'a Variable,
    ) -> impl Iterator<Item = &'a Constraint> {
        self.constraints.iter().filter(move |c| c.involves(variable))
    }

    /// True iff every constraint accepts the (possibly partial) assignment.
    /// This checks the static constraint set only; it is not domain-aware.
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(assignment))
    }
}

/// Fluent construction surface for [`Problem`].
///
/// The builder checks duplicate registrations eagerly and defers referential
/// validation (constraint scopes, missing domains) to [`ProblemBuilder::build`],
/// which delegates to [`Problem::new`].
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    variables: Vec<Variable>,
    domains: HashMap<Variable, Domain>,
    constraints: Vec<Constraint>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variable with its candidate values.
    ///
    /// Fails with [`Error::DuplicateVariable`] on re-registration and
    /// [`Error::InvalidDomain`] if `values` is empty.
    pub fn variable(
        mut self,
        name: impl Into<Variable>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Result<Self> {
        let variable = name.into();
        if self.domains.contains_key(&variable) {
            return Err(Error::DuplicateVariable(variable));
        }
        let domain = Domain::new(values.into_iter().map(Into::into))?;
        self.variables.push(variable.clone());
        self.domains.insert(variable, domain);
        Ok(self)
    }

    pub fn constraint(mut self, constraint: impl Into<Constraint>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn build(self) -> Result<Problem> {
        Problem::new(self.variables, self.domains, self.constraints)
    }
}
