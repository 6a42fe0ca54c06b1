use im::HashSet;

use crate::{
    error::{Error, Result},
    solver::value::Value,
};

/// An immutable, non-empty set of candidate values for one variable.
///
/// A `Domain` is never constructed empty: any operation that would produce
/// an empty result returns `None` instead of a zero-size `Domain`. All
/// narrowing operations are copy-on-write over a persistent set, which is
/// what makes backtracking safe without explicit undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain(HashSet<Value>);

impl Domain {
    /// Creates a domain from a set of values.
    ///
    /// Fails with [`Error::InvalidDomain`] if the input is empty.
    pub fn new(values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let set: HashSet<Value> = values.into_iter().collect();
        if set.is_empty() {
            return Err(Error::InvalidDomain);
        }
        Ok(Self(set))
    }

    /// Creates a one-value domain. Used by the search driver to collapse a
    /// variable's domain after a tentative assignment.
    pub fn singleton(value: Value) -> Self {
        Self(HashSet::unit(value))
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain holds exactly one value, returns it.
    pub fn singleton_value(&self) -> Option<&Value> {
        if self.is_singleton() {
            self.0.iter().next()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Iterates the contained values. The order is unspecified but stable
    /// within one traversal; the iterator is restartable.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }

    /// Returns a new domain retaining only values satisfying the predicate,
    /// or `None` if nothing would remain.
    pub fn filter(&self, keep: impl Fn(&Value) -> bool) -> Option<Self> {
        let retained: HashSet<Value> = self.0.iter().filter(|v| keep(v)).cloned().collect();
        if retained.is_empty() {
            None
        } else {
            Some(Self(retained))
        }
    }

    /// Returns a new domain excluding the given values, or `None` if nothing
    /// would remain. Removing a disjoint set yields a domain equal to the
    /// original.
    pub fn remove(&self, values: &HashSet<Value>) -> Option<Self> {
        self.filter(|v| !values.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    fn val(s: &str) -> Value {
        Value::from(s)
    }

    fn domain(values: &[&str]) -> Domain {
        Domain::new(values.iter().map(|s| val(s))).unwrap()
    }

    #[test]
    fn empty_construction_is_rejected() {
        let result = Domain::new(std::iter::empty());
        assert!(matches!(result, Err(Error::InvalidDomain)));
    }

    #[test]
    fn filter_to_nothing_signals_empty() {
        let d = domain(&["a", "b"]);
        assert!(d.filter(|_| false).is_none());
    }

    #[test]
    fn filter_keeps_matching_values() {
        let d = domain(&["a", "b", "c"]);
        let narrowed = d.filter(|v| v.as_str() != "b").unwrap();
        assert_eq!(narrowed.size(), 2);
        assert!(narrowed.contains(&val("a")));
        assert!(!narrowed.contains(&val("b")));
        // The original is untouched.
        assert_eq!(d.size(), 3);
    }

    #[test]
    fn remove_nothing_is_identity() {
        let d = domain(&["a", "b"]);
        let same = d.remove(&HashSet::new()).unwrap();
        assert_eq!(same, d);
    }

    #[test]
    fn remove_everything_signals_empty() {
        let d = domain(&["a"]);
        let to_remove: HashSet<Value> = [val("a")].into_iter().collect();
        assert!(d.remove(&to_remove).is_none());
    }

    #[test]
    fn equality_is_set_equality() {
        assert_eq!(domain(&["a", "b"]), domain(&["b", "a"]));
        assert_ne!(domain(&["a"]), domain(&["a", "b"]));
    }

    #[test]
    fn singleton_value_only_on_singletons() {
        assert_eq!(domain(&["x"]).singleton_value(), Some(&val("x")));
        assert_eq!(domain(&["x", "y"]).singleton_value(), None);
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            // Any chain of removals either yields a non-empty domain or the
            // explicit empty signal; a zero-size Domain never exists.
            #[test]
            fn removal_chains_never_produce_an_empty_domain(
                values in proptest::collection::hash_set("[a-z]{1,3}", 1..12),
                removals in proptest::collection::vec(
                    proptest::collection::hash_set("[a-z]{1,3}", 0..6),
                    0..6,
                ),
            ) {
                let mut current = Some(Domain::new(values.iter().map(|s| Value::from(s.as_str()))).unwrap());
                for removal in &removals {
                    let Some(domain) = current else { break };
                    let to_remove: HashSet<Value> =
                        removal.iter().map(|s| Value::from(s.as_str())).collect();
                    current = domain.remove(&to_remove);
                }
                if let Some(domain) = &current {
                    prop_assert!(domain.size() >= 1);
                }
            }
        }
    }
}
