//! The solving engine: data model, constraints, heuristics, propagation,
//! and the backtracking search driver.

pub mod assignment;
pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod observer;
pub mod problem;
pub(crate) mod propagation;
pub mod state;
pub mod stats;
pub mod value;
pub(crate) mod work_list;
