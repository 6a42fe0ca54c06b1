//! Plexus is a constraint satisfaction problem (CSP) solver.
//!
//! A problem is a set of named variables, a domain of candidate values per
//! variable, and constraints restricting their joint assignment. The engine
//! finds an assignment satisfying every constraint, or proves that none
//! exists, using backtracking search with MRV/degree variable selection and
//! AC-3 domain propagation after every tentative assignment.
//!
//! # Core Concepts
//!
//! - **[`ProblemBuilder`](solver::problem::ProblemBuilder)**: the fluent
//!   construction surface for variables, domains, and constraints.
//! - **[`Constraint`](solver::constraint::Constraint)**: the built-in
//!   variants: binary predicates, all-different, and free-form function
//!   constraints.
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: the search driver;
//!   [`solve`](solver::engine::SolverEngine::solve) returns a tagged
//!   [`SolveOutcome`](solver::engine::SolveOutcome) plus search statistics.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?a != ?b` where `?a` can be `1` or `2` and `?b` only `1`: the
//! solver must deduce `?a = 2`.
//!
//! ```
//! use plexus::solver::{
//!     constraints::binary::BinaryConstraint,
//!     engine::SolverEngine,
//!     problem::ProblemBuilder,
//!     value::{Value, Variable},
//! };
//!
//! let problem = ProblemBuilder::new()
//!     .variable("a", ["1", "2"])?
//!     .variable("b", ["1"])?
//!     .constraint(BinaryConstraint::not_equal(
//!         Variable::from("a"),
//!         Variable::from("b"),
//!     ))
//!     .build()?;
//!
//! let result = SolverEngine::default().solve(&problem)?;
//! let assignment = result.outcome.assignment().expect("satisfiable");
//! assert_eq!(assignment.get(&Variable::from("a")), Some(&Value::from("2")));
//! # Ok::<(), plexus::error::Error>(())
//! ```

pub mod error;
pub mod problems;
pub mod solver;
