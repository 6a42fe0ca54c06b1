//! Variable-selection and value-ordering policies for the search driver.

pub mod value;
pub mod variable;
