//! Typed values carried by pyson records.
//!
//! This module provides the [`Value`] enum, a closed union of the four payload
//! types pyson understands, and the [`PysonType`] tag naming them.
//!
//! ## Core Types
//!
//! - [`Value`]: an integer, a 64-bit float, a string, or a list of strings
//! - [`PysonType`]: the tag of a value, written as `int`, `float`, `str`, or `list`
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use pyson::Value;
//!
//! let count = Value::from(42);
//! let ratio = Value::from(0.5);
//! let name = Value::from("alice");
//! let tags = Value::from(vec!["red", "green"]);
//! assert!(tags.is_list());
//! ```
//!
//! ### Extracting Values
//!
//! Each payload type has three accessor families: `*_or` returns a default on
//! mismatch, `get_*` returns an `Option`, and `try_*` returns a [`Result`]
//! carrying [`Error::WrongType`].
//!
//! ```rust
//! use pyson::Value;
//!
//! let value = Value::from("hello");
//! assert_eq!(value.int_or(7), 7);
//! assert_eq!(value.get_int(), None);
//! assert!(value.try_int().is_err());
//! assert_eq!(value.get_str(), Some("hello"));
//! ```
//!
//! ### List Payloads
//!
//! Lists are encoded by joining elements with the three-character marker `(*)`.
//!
//! ```rust
//! use pyson::Value;
//!
//! let tags = Value::from(vec!["a", "b", "c"]);
//! assert_eq!(tags.value_as_string(), "a(*)b(*)c");
//! assert_eq!(Value::from_pyson_list("a(*)b(*)c"), tags);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Separator placed between adjacent list elements in a payload.
pub const LIST_SEPARATOR: &str = "(*)";

/// The tag of a [`Value`].
///
/// # Examples
///
/// ```rust
/// use pyson::PysonType;
///
/// assert_eq!(PysonType::Float.as_str(), "float");
/// assert_eq!("list".parse::<PysonType>().unwrap(), PysonType::List);
/// assert!("bool".parse::<PysonType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PysonType {
    Int,
    Float,
    Str,
    List,
}

impl PysonType {
    /// Returns the type token used in the line format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PysonType::Int => "int",
            PysonType::Float => "float",
            PysonType::Str => "str",
            PysonType::List => "list",
        }
    }
}

impl fmt::Display for PysonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type token is not one of `int`, `float`, `str`, `list`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownType(pub String);

impl fmt::Display for UnknownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type token '{}'", self.0)
    }
}

impl std::error::Error for UnknownType {}

impl FromStr for PysonType {
    type Err = UnknownType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "int" => Ok(PysonType::Int),
            "float" => Ok(PysonType::Float),
            "str" => Ok(PysonType::Str),
            "list" => Ok(PysonType::List),
            other => Err(UnknownType(other.to_string())),
        }
    }
}

/// A typed pyson value.
///
/// Equality compares tags first, so `Value::Int(1) != Value::Float(1.0)`.
///
/// # Examples
///
/// ```rust
/// use pyson::{PysonType, Value};
///
/// let value = Value::Int(42);
/// assert_eq!(value.pyson_type(), PysonType::Int);
/// assert_eq!(value.type_name(), "int");
/// assert_ne!(value, Value::Float(42.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<String>),
}

impl Value {
    /// Decodes a `(*)`-separated list payload.
    ///
    /// The trailing token is always kept, so an empty payload decodes to a
    /// one-element list holding `""`, not to an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// assert_eq!(Value::from_pyson_list("x(*)y"), Value::from(vec!["x", "y"]));
    /// assert_eq!(Value::from_pyson_list(""), Value::from(vec![""]));
    /// ```
    #[must_use]
    pub fn from_pyson_list(text: &str) -> Self {
        Value::List(split_list(text))
    }

    /// Returns the tag of this value.
    #[inline]
    #[must_use]
    pub const fn pyson_type(&self) -> PysonType {
        match self {
            Value::Int(_) => PysonType::Int,
            Value::Float(_) => PysonType::Float,
            Value::Str(_) => PysonType::Str,
            Value::List(_) => PysonType::List,
        }
    }

    /// Returns the tag as its line-format token.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.pyson_type().as_str()
    }

    /// Returns `true` if the value is an integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// assert!(Value::Int(1).is_int());
    /// assert!(!Value::Float(1.0).is_int());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a 64-bit float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is a list of strings.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Encodes the payload without name or type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// assert_eq!(Value::Int(-7).value_as_string(), "-7");
    /// assert_eq!(Value::Float(2.5).value_as_string(), "2.5");
    /// assert_eq!(Value::List(vec![]).value_as_string(), "");
    /// ```
    #[must_use]
    pub fn value_as_string(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::List(items) => items.join(LIST_SEPARATOR),
        }
    }

    /// Parses a payload according to `ty`.
    ///
    /// Returns the reason on failure; callers attach line context.
    pub(crate) fn parse_payload(ty: PysonType, payload: &str) -> std::result::Result<Self, String> {
        match ty {
            PysonType::Int => payload
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| format!("invalid int payload '{}': {}", payload, e)),
            PysonType::Float => payload
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| format!("invalid float payload '{}': {}", payload, e)),
            PysonType::Str => Ok(Value::Str(payload.to_string())),
            PysonType::List => Ok(Value::from_pyson_list(payload)),
        }
    }

    fn mismatch(&self, expected: PysonType) -> Error {
        Error::wrong_type(expected, self.pyson_type())
    }

    /// Returns the integer, or `default` if this is not an `Int`.
    ///
    /// A returned default does not prove a mismatch; use [`Value::get_int`]
    /// to tell the two apart.
    #[inline]
    #[must_use]
    pub fn int_or(&self, default: i64) -> i64 {
        self.get_int().unwrap_or(default)
    }

    /// Returns the integer, or `0` if this is not an `Int`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// assert_eq!(Value::from("123").int_or_zero(), 0);
    /// assert_eq!(Value::Int(123).int_or_zero(), 123);
    /// ```
    #[inline]
    #[must_use]
    pub fn int_or_zero(&self) -> i64 {
        self.int_or(0)
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// assert_eq!(Value::Int(0).get_int(), Some(0));
    /// assert_eq!(Value::from("0").get_int(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the integer or [`Error::WrongType`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{Error, PysonType, Value};
    ///
    /// assert_eq!(Value::Int(3).try_int(), Ok(3));
    /// assert_eq!(
    ///     Value::Float(3.0).try_int(),
    ///     Err(Error::WrongType { expected: PysonType::Int, actual: PysonType::Float })
    /// );
    /// ```
    pub fn try_int(&self) -> Result<i64> {
        self.get_int().ok_or_else(|| self.mismatch(PysonType::Int))
    }

    /// Returns the float, or `default` if this is not a `Float`.
    ///
    /// Integers are not widened; `Value::Int(2).float_or(0.5)` is `0.5`.
    #[inline]
    #[must_use]
    pub fn float_or(&self, default: f64) -> f64 {
        self.get_float().unwrap_or(default)
    }

    /// Returns the float, or `0.0` if this is not a `Float`.
    #[inline]
    #[must_use]
    pub fn float_or_zero(&self) -> f64 {
        self.float_or(0.0)
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn get_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the float or [`Error::WrongType`].
    pub fn try_float(&self) -> Result<f64> {
        self.get_float()
            .ok_or_else(|| self.mismatch(PysonType::Float))
    }

    /// Returns the string, or `default` if this is not a `Str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// assert_eq!(Value::from("set").str_or("unset"), "set");
    /// assert_eq!(Value::Int(1).str_or("unset"), "unset");
    /// ```
    #[inline]
    #[must_use]
    pub fn str_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.get_str().unwrap_or(default)
    }

    /// Returns the string, or `""` if this is not a `Str`.
    #[inline]
    #[must_use]
    pub fn str_or_empty(&self) -> &str {
        self.str_or("")
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn get_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string or [`Error::WrongType`].
    pub fn try_str(&self) -> Result<&str> {
        self.get_str().ok_or_else(|| self.mismatch(PysonType::Str))
    }

    /// Returns the list, or `default` if this is not a `List`.
    #[inline]
    #[must_use]
    pub fn list_or<'a>(&'a self, default: &'a [String]) -> &'a [String] {
        self.get_list().unwrap_or(default)
    }

    /// Returns the list, or an empty slice if this is not a `List`.
    #[inline]
    #[must_use]
    pub fn list_or_empty(&self) -> &[String] {
        self.list_or(&[])
    }

    /// If the value is a list, returns its elements. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// let tags = Value::from(vec!["a", "b"]);
    /// assert_eq!(tags.get_list().map(|l| l.len()), Some(2));
    /// assert_eq!(Value::from("a").get_list(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the list or [`Error::WrongType`].
    pub fn try_list(&self) -> Result<&[String]> {
        self.get_list().ok_or_else(|| self.mismatch(PysonType::List))
    }

    /// Replaces this value with a `Str` holding its encoded payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// let mut value = Value::from(vec!["a", "b"]);
    /// value.force_to_string();
    /// assert_eq!(value, Value::from("a(*)b"));
    /// ```
    pub fn force_to_string(&mut self) {
        if !self.is_str() {
            *self = Value::Str(self.value_as_string());
        }
    }

    /// Replaces this value with a `List`.
    ///
    /// Strings are re-parsed as list payloads; numbers become a one-element
    /// list holding their encoded form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Value;
    ///
    /// let mut value = Value::from("x(*)y");
    /// value.force_to_list();
    /// assert_eq!(value, Value::from(vec!["x", "y"]));
    ///
    /// let mut value = Value::Int(5);
    /// value.force_to_list();
    /// assert_eq!(value, Value::from(vec!["5"]));
    /// ```
    pub fn force_to_list(&mut self) {
        match self {
            Value::List(_) => {}
            Value::Str(s) => *self = Value::from_pyson_list(s),
            Value::Int(_) | Value::Float(_) => *self = Value::List(vec![self.value_as_string()]),
        }
    }
}

fn split_list(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut token = String::new();
    for ch in text.chars() {
        token.push(ch);
        if token.ends_with(LIST_SEPARATOR) {
            token.truncate(token.len() - LIST_SEPARATOR.len());
            items.push(std::mem::take(&mut token));
        }
    }
    items.push(token);
    items
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => f.write_str(&items.join(LIST_SEPARATOR)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer, float, string, or list of strings")
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Int)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<String>()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.try_int()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.try_float()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch(PysonType::Str)),
        }
    }
}

impl TryFrom<Value> for Vec<String> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch(PysonType::List)),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::List(value.into_iter().map(str::to_string).collect())
    }
}
