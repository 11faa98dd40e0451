//! Ordered key sets used on both sides of a key mapping
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// An immutable, order-preserving sequence of key names
///
/// Duplicates are allowed. The position of a key is its index in the sequence,
/// and lookups by value always resolve to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedKeySet {
    keys: Vec<String>,
}

impl OrderedKeySet {
    /// Create a key set from any list of key names
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether any element equals `key`
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Check whether `index` is a valid position
    pub fn contains_position(&self, index: usize) -> bool {
        index < self.keys.len()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare lengths with another key set
    pub fn same_len_as(&self, other: &OrderedKeySet) -> bool {
        self.len() == other.len()
    }

    /// Position of the first element equal to `key`
    pub fn position_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Key at `index`, or [`Error::OutOfRange`]
    pub fn get(&self, index: usize) -> Result<&str> {
        self.keys
            .get(index)
            .map(String::as_str)
            .ok_or(Error::OutOfRange {
                index,
                len: self.keys.len(),
            })
    }

    /// All keys in order
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for OrderedKeySet {
    fn from(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

impl From<&[&str]> for OrderedKeySet {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedKeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a OrderedKeySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_lookup_by_value_and_position() {
        let keys = OrderedKeySet::new(["fname", "lname", "email"]);

        assert!(keys.contains("lname"));
        assert!(!keys.contains("age"));
        assert!(keys.contains_position(2));
        assert!(!keys.contains_position(3));
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.position_of("email"), Some(2));
        assert_eq!(keys.position_of("age"), None);
        assert_eq!(keys.get(0).unwrap(), "fname");
    }

    #[test]
    fn test_duplicates_resolve_to_first_position() {
        let keys = OrderedKeySet::new(["a", "b", "a"]);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.position_of("a"), Some(0));
    }

    #[test]
    fn test_get_out_of_range() {
        let keys = OrderedKeySet::new(["only"]);
        let err = keys.get(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(matches!(err, Error::OutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_same_len_as() {
        let a = OrderedKeySet::new(["a", "b"]);
        let b = OrderedKeySet::new(["x", "y"]);
        let c = OrderedKeySet::new(["x"]);
        assert!(a.same_len_as(&b));
        assert!(!a.same_len_as(&c));
        assert!(OrderedKeySet::default().is_empty());
    }

    #[test]
    fn test_serde_is_a_plain_array() {
        let keys: OrderedKeySet = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(keys.as_slice(), &["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_string(&keys).unwrap(), r#"["a","b"]"#);
    }
}
