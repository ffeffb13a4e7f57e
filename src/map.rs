//! Ordered name-to-value mapping.
//!
//! [`PysonMap`] is what [`Reader::as_mapping`](crate::Reader::as_mapping)
//! returns. It wraps an [`IndexMap`] so iteration follows the order the
//! records appeared in the file.
//!
//! ## Examples
//!
//! ```rust
//! use pyson::{PysonMap, Value};
//!
//! let mut map = PysonMap::new();
//! map.insert("width".to_string(), Value::from(640));
//! map.insert("height".to_string(), Value::from(480));
//!
//! let names: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(names, vec!["width", "height"]);
//! ```

use crate::{Record, Value};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An insertion-ordered map of record names to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PysonMap(IndexMap<String, Value>);

impl PysonMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        PysonMap(IndexMap::new())
    }

    /// Creates an empty map with room for `capacity` names.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PysonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value, returning the previous value under that name.
    pub fn insert(&mut self, name: String, value: Value) -> Option<Value> {
        self.0.insert(name, value)
    }

    /// Returns the value stored under `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{PysonMap, Value};
    ///
    /// let mut map = PysonMap::new();
    /// map.insert("port".to_string(), Value::from(8080));
    /// assert_eq!(map.get("port").and_then(Value::get_int), Some(8080));
    /// assert_eq!(map.get("host"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns `true` if a value is stored under `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the position of `name` in insertion order.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.get_index_of(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over names in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Converts back to records in insertion order.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.0
            .into_iter()
            .map(|(name, value)| Record::new(name, value))
            .collect()
    }
}

impl Serialize for PysonMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl IntoIterator for PysonMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PysonMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for PysonMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        PysonMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_lookup() {
        let map: PysonMap = vec![
            ("z".to_string(), Value::Int(1)),
            ("a".to_string(), Value::from("two")),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.index_of("z"), Some(0));
        assert_eq!(map.index_of("a"), Some(1));
        assert!(map.contains_name("a"));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_serialize_as_object() {
        let mut map = PysonMap::new();
        map.insert("n".to_string(), Value::Int(3));
        map.insert("l".to_string(), Value::from(vec!["x"]));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"n":3,"l":["x"]}"#);
    }

    #[test]
    fn test_into_records() {
        let mut map = PysonMap::with_capacity(2);
        map.insert("a".to_string(), Value::Int(1));
        map.insert("b".to_string(), Value::Float(0.5));
        let records = map.into_records();
        assert_eq!(records[0].to_line(), "a:int:1");
        assert_eq!(records[1].to_line(), "b:float:0.5");
    }

    #[test]
    fn test_values_and_borrowed_iteration() {
        let mut map = PysonMap::new();
        assert!(map.is_empty());
        map.insert("w".to_string(), Value::Int(2));
        map.insert("h".to_string(), Value::Int(3));
        assert_eq!(map.insert("w".to_string(), Value::Int(4)), Some(Value::Int(2)));

        let area: i64 = map.values().map(Value::int_or_zero).product();
        assert_eq!(area, 12);
        let names: Vec<&String> = (&map).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["w", "h"]);
        assert_eq!(map.iter().count(), map.len());
    }
}
