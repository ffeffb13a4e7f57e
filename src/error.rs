//! Error types for pyson decoding, reading, and writing.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side
//! is the single [`Error`] enum below.
//!
//! ## Error Categories
//!
//! - **Decode errors**: a line is not a valid `NAME:TYPE:PAYLOAD` record
//! - **Unexpected end**: the source ran out where a record was required
//! - **Wrong type**: a typed accessor was called on a value with a different tag
//! - **Duplicate names**: two records share a name while building a mapping
//! - **Source errors**: the underlying line source could not be opened or read
//! - **Encode errors**: a record cannot be written as a single line
//!
//! ## Examples
//!
//! ```rust
//! use pyson::{Error, Record};
//!
//! let err = Record::from_line("bad:int:notanumber").unwrap_err();
//! assert!(matches!(err, Error::Decode { .. }));
//! assert!(err.to_string().contains("notanumber"));
//! ```

use crate::value::PysonType;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A line could not be decoded into a record.
    #[error("Decode error at line {line}: {msg}\n{context}")]
    Decode {
        line: usize,
        msg: String,
        context: String,
    },

    /// The source was exhausted where a record was required.
    #[error("Unexpected end of input after line {line}: expected {expected}")]
    UnexpectedEnd { line: usize, expected: String },

    /// A typed accessor was called on a value holding another type.
    #[error("Wrong type: expected {expected}, found {actual}")]
    WrongType {
        expected: PysonType,
        actual: PysonType,
    },

    /// A name appeared more than once while building a mapping.
    #[error("Duplicate name '{name}' at line {line} (first seen at line {first_line})")]
    DuplicateName {
        name: String,
        first_line: usize,
        line: usize,
    },

    /// The line source could not be opened, read, or rewound.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A record cannot be represented as a single pyson line.
    #[error("Encode error: {0}")]
    Encode(String),
}

impl Error {
    /// Creates a decode error for the given 1-based line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Error;
    ///
    /// let err = Error::decode(3, "unknown type token 'bool'", "flag:bool:true");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn decode(line: usize, msg: &str, context: &str) -> Self {
        Error::Decode {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an unexpected-end error; `line` is the number of lines consumed so far.
    pub fn unexpected_end(line: usize, expected: &str) -> Self {
        Error::UnexpectedEnd {
            line,
            expected: expected.to_string(),
        }
    }

    /// Creates a wrong-type error.
    ///
    /// # Panics
    ///
    /// Panics if `expected == actual`. A type mismatch between identical tags
    /// can only come from a bug in the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{Error, PysonType};
    ///
    /// let err = Error::wrong_type(PysonType::Int, PysonType::Str);
    /// assert_eq!(err.to_string(), "Wrong type: expected int, found str");
    /// ```
    pub fn wrong_type(expected: PysonType, actual: PysonType) -> Self {
        assert_ne!(
            expected, actual,
            "wrong-type error constructed with identical tags"
        );
        Error::WrongType { expected, actual }
    }

    /// Creates a duplicate-name error.
    pub fn duplicate_name(name: &str, first_line: usize, line: usize) -> Self {
        Error::DuplicateName {
            name: name.to_string(),
            first_line,
            line,
        }
    }

    /// Creates a source error from any displayable cause.
    pub fn source_unavailable<T: std::fmt::Display>(msg: T) -> Self {
        Error::SourceUnavailable(msg.to_string())
    }

    /// Creates an encode error.
    pub fn encode(msg: &str) -> Self {
        Error::Encode(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::SourceUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
