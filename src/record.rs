//! Named values and the single-line record codec.
//!
//! A [`Record`] binds a name to a [`Value`] and is stored as one line of text:
//!
//! ```text
//! NAME:TYPE:PAYLOAD
//! ```
//!
//! The name runs up to the first `:`, the type token up to the second, and the
//! rest of the line is the payload, which may itself contain `:`.
//!
//! ## Examples
//!
//! ```rust
//! use pyson::{Record, Value};
//!
//! let record = Record::from_line("count:int:42").unwrap();
//! assert_eq!(record.name(), "count");
//! assert_eq!(record.value(), &Value::Int(42));
//! assert_eq!(record.to_line(), "count:int:42");
//! ```

use crate::value::PysonType;
use crate::{Error, Result, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the name, type token, and payload of a line.
pub const FIELD_SEPARATOR: char = ':';

/// A name bound to a [`Value`].
///
/// Cloning a record deep-copies its value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    value: Value,
}

impl Record {
    /// Creates a record. Names are not validated here; see [`Record::validate`].
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Record {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the record name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the record value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns a mutable reference to the value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{Record, Value};
    ///
    /// let mut record = Record::new("retries", 3);
    /// record.set_value("never");
    /// assert_eq!(record.to_line(), "retries:str:never");
    /// assert_eq!(record.into_value(), Value::from("never"));
    /// ```
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Splits the record into its name and value.
    #[must_use]
    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }

    /// Consumes the record, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Encodes the record as `NAME:TYPE:PAYLOAD`, without a line terminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Record;
    ///
    /// let record = Record::new("tags", vec!["red", "green", "blue"]);
    /// assert_eq!(record.to_line(), "tags:list:red(*)green(*)blue");
    /// ```
    #[must_use]
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Checks that the record encodes to exactly one line that decodes back
    /// to the same name.
    ///
    /// When `strict_lists` is set, list elements containing the `(*)` marker
    /// are rejected too, since they would decode as several elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] describing the first offending field.
    pub fn validate(&self, strict_lists: bool) -> Result<()> {
        if self.name.contains(FIELD_SEPARATOR) {
            return Err(Error::encode(&format!(
                "name '{}' contains the field separator ':'",
                self.name
            )));
        }
        if contains_line_break(&self.name) {
            return Err(Error::encode(&format!(
                "name {:?} contains a line terminator",
                self.name
            )));
        }
        match &self.value {
            Value::Int(_) | Value::Float(_) => Ok(()),
            Value::Str(s) => {
                if contains_line_break(s) {
                    Err(Error::encode(&format!(
                        "str value of '{}' contains a line terminator",
                        self.name
                    )))
                } else {
                    Ok(())
                }
            }
            Value::List(items) => {
                for item in items {
                    if contains_line_break(item) {
                        return Err(Error::encode(&format!(
                            "list element of '{}' contains a line terminator",
                            self.name
                        )));
                    }
                    if strict_lists && item.contains(crate::value::LIST_SEPARATOR) {
                        return Err(Error::encode(&format!(
                            "list element {:?} of '{}' contains the list separator",
                            item, self.name
                        )));
                    }
                }
                Ok(())
            }
        }
    }

    /// Decodes one line (without its terminator) into a record.
    ///
    /// Errors report line 1; [`Reader`](crate::Reader) substitutes the real
    /// line number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the line has no name separator, no type
    /// separator, an unknown type token, or a payload that does not parse as
    /// the declared type.
    pub fn from_line(line: &str) -> Result<Self> {
        decode_line(line, 1)
    }
}

fn contains_line_break(s: &str) -> bool {
    s.contains('\n') || s.contains('\r')
}

pub(crate) fn decode_line(line: &str, line_no: usize) -> Result<Record> {
    let (name, rest) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| Error::decode(line_no, "missing ':' after name", line))?;
    let (token, payload) = rest
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| Error::decode(line_no, "missing ':' after type", line))?;
    let ty: PysonType = token
        .parse()
        .map_err(|e: crate::value::UnknownType| Error::decode(line_no, &e.to_string(), line))?;
    let value = Value::parse_payload(ty, payload).map_err(|msg| Error::decode(line_no, &msg, line))?;
    Ok(Record {
        name: name.to_string(),
        value,
    })
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.name,
            FIELD_SEPARATOR,
            self.value.type_name(),
            FIELD_SEPARATOR,
            self.value
        )
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Record::from_line(s)
    }
}

impl<N: Into<String>, V: Into<Value>> From<(N, V)> for Record {
    fn from((name, value): (N, V)) -> Self {
        Record::new(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_each_type() {
        assert_eq!(Record::new("n", 42).to_line(), "n:int:42");
        assert_eq!(Record::new("f", 2.5).to_line(), "f:float:2.5");
        assert_eq!(Record::new("s", "hi there").to_line(), "s:str:hi there");
        assert_eq!(Record::new("l", vec!["a", "b"]).to_line(), "l:list:a(*)b");
        assert_eq!(Record::new("e", Vec::<String>::new()).to_line(), "e:list:");
    }

    #[test]
    fn test_decode_examples() {
        let record = Record::from_line("count:int:42").unwrap();
        assert_eq!(record, Record::new("count", 42));

        let record: Record = "tags:list:red(*)green(*)blue".parse().unwrap();
        assert_eq!(record.value().list_or_empty().len(), 3);

        let err = Record::from_line("bad:int:notanumber").unwrap_err();
        assert!(matches!(err, Error::Decode { line: 1, .. }));
    }

    #[test]
    fn test_payload_keeps_colons() {
        let record = Record::from_line("url:str:http://example.com:80").unwrap();
        assert_eq!(record.value().get_str(), Some("http://example.com:80"));
    }

    #[test]
    fn test_empty_name_and_payload() {
        let record = Record::from_line(":str:").unwrap();
        assert_eq!(record.name(), "");
        assert_eq!(record.value(), &Value::from(""));
    }

    #[test]
    fn test_decode_failures() {
        for line in [
            "no separators",
            "name:int",
            "name:bool:true",
            "name::42",
            "name:float:",
            "name:int: 42",
            "",
        ] {
            assert!(
                matches!(Record::from_line(line), Err(Error::Decode { .. })),
                "expected decode failure for {:?}",
                line
            );
        }
    }

    #[test]
    fn test_validate() {
        assert!(Record::new("ok", "fine").validate(true).is_ok());
        assert!(matches!(
            Record::new("a:b", 1).validate(false),
            Err(Error::Encode(_))
        ));
        assert!(Record::new("a\nb", 1).validate(false).is_err());
        assert!(Record::new("s", "two\nlines").validate(false).is_err());
        assert!(Record::new("l", vec!["x\r"]).validate(false).is_err());
        assert!(Record::new("l", vec!["a(*)b"]).validate(false).is_ok());
        assert!(Record::new("l", vec!["a(*)b"]).validate(true).is_err());
    }

    #[test]
    fn test_mutators() {
        let mut record = Record::new("old", 1);
        record.set_name("new");
        record.set_value("text");
        record.value_mut().force_to_list();
        assert_eq!(record.to_line(), "new:list:text");
        let (name, value) = record.into_parts();
        assert_eq!(name, "new");
        assert_eq!(value, Value::from(vec!["text"]));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Record::new("l", vec!["a"]);
        let mut copy = original.clone();
        if let Value::List(items) = copy.value_mut() {
            items.push("b".to_string());
        }
        assert_eq!(original.value().list_or_empty().len(), 1);
        assert_eq!(copy.value().list_or_empty().len(), 2);
    }
}
