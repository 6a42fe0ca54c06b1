//! Ready-made problem generators, built entirely on the public
//! construction API.

pub mod map_coloring;
pub mod n_queens;
