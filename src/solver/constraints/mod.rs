//! The built-in constraint variants.

pub mod all_different;
pub mod binary;
pub mod function;
