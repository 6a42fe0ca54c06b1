//! Opaque identifier tokens for variables and values.
//!
//! The solver core never interprets the content of a token; any numeric or
//! structural meaning (e.g. a queen's column index) belongs to the problem
//! generators that mint the tokens.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// A named variable in a constraint problem.
///
/// Variables are cheap-to-clone interned strings. Two variables are equal
/// iff their names are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(Arc<str>);

impl Variable {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A candidate value in a variable's domain.
///
/// Like [`Variable`], a value is an opaque interned string token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(Arc<str>);

impl Value {
    pub fn new(content: impl Into<Arc<str>>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Value {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
