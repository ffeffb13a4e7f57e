//! # pyson
//!
//! A minimal, self-describing, line-oriented record format and a streaming
//! reader over files made of such records.
//!
//! ## What is pyson?
//!
//! Every line of a pyson file is one record binding a name to a typed value:
//!
//! ```text
//! count:int:42
//! ratio:float:0.75
//! title:str:Quarterly report: draft
//! tags:list:red(*)green(*)blue
//! ```
//!
//! The four value types are `int`, `float`, `str`, and `list` (a list of
//! strings joined by the `(*)` marker). There is no nesting, no header, and
//! no escaping beyond the list separator.
//!
//! ## Key Features
//!
//! - **Closed value model**: [`Value`] is a four-variant enum with typed
//!   accessors that default, return `Option`, or return a typed error
//! - **Streaming reader**: [`Reader`] decodes one line at a time from any
//!   [`LineSource`], with rewind, seeking, lookup by name, and lazy iteration
//! - **All-or-nothing aggregates**: [`Reader::all`] and [`Reader::as_mapping`]
//!   either return every record or an error
//! - **Validated writing**: [`Writer`] refuses records that would not read
//!   back as written
//!
//! ## Quick Start
//!
//! ```rust
//! use pyson::{from_str, to_string, Record, Value};
//!
//! let records = vec![
//!     Record::new("count", 42),
//!     Record::new("tags", vec!["red", "green", "blue"]),
//! ];
//!
//! let text = to_string(&records).unwrap();
//! assert_eq!(text, "count:int:42\ntags:list:red(*)green(*)blue\n");
//!
//! let back = from_str(&text).unwrap();
//! assert_eq!(back, records);
//! assert_eq!(back[0].value(), &Value::Int(42));
//! ```
//!
//! ### Reading a File
//!
//! ```rust,no_run
//! use pyson::Reader;
//!
//! let mut reader = Reader::open("settings.pyson")?;
//! let width = reader.find_by_name("width")?.map(|v| v.int_or(800));
//! for record in reader.records() {
//!     let record = record?;
//!     println!("{} = {}", record.name(), record.value());
//! }
//! # Ok::<(), pyson::Error>(())
//! ```
//!
//! ## Format Limitations
//!
//! - List elements containing `(*)` split into several elements on decode.
//!   [`Writer`] rejects them unless `strict_lists` is turned off.
//! - An empty list encodes to an empty payload, which decodes to a list
//!   holding one empty string.
//! - Names cannot contain `:`; no value can contain a line break.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - writing and reading records
//! - **`macro.rs`** - building values with the `pyson!` macro
//! - **`read_file.rs`** - cursor operations over a file on disk
//! - **`dynamic_values.rs`** - typed accessors and coercions
//! - **`custom_options.rs`** - reader and writer options
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod reader;
pub mod record;
pub mod source;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use map::PysonMap;
pub use options::{LineEnding, ReaderOptions, WriterOptions};
pub use reader::{Reader, Records};
pub use record::Record;
pub use source::{IoLineSource, LineSource};
pub use value::{PysonType, Value};
pub use writer::Writer;

use std::io;
use std::path::Path;

/// Encodes records as pyson text, one `\n`-terminated line each.
///
/// # Errors
///
/// Returns [`Error::Encode`] if a record cannot be written as one line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(records: &[Record]) -> Result<String> {
    to_string_with_options(records, WriterOptions::default())
}

/// Encodes records as pyson text with custom writer options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(records: &[Record], options: WriterOptions) -> Result<String> {
    let mut writer = Writer::with_options(Vec::new(), options);
    writer.write_all(records)?;
    String::from_utf8(writer.into_inner()).map_err(|e| Error::encode(&e.to_string()))
}

/// Writes records to `writer` in pyson format.
///
/// # Examples
///
/// ```rust
/// use pyson::{to_writer, Record};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[Record::new("x", 1.5)]).unwrap();
/// assert_eq!(buffer, b"x:float:1.5\n");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, records: &[Record]) -> Result<()>
where
    W: io::Write,
{
    let mut writer = Writer::new(writer);
    writer.write_all(records)?;
    writer.flush()
}

/// Decodes every record in `text`.
///
/// # Errors
///
/// Returns the first decode error; no partial result is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Vec<Record>> {
    Reader::from_str(text).all()
}

/// Decodes every record from an I/O stream.
///
/// The stream is read to the end first, since it need not be seekable.
///
/// # Examples
///
/// ```rust
/// use pyson::from_reader;
/// use std::io::Cursor;
///
/// let records = from_reader(Cursor::new(b"a:str:b\n")).unwrap();
/// assert_eq!(records[0].value().get_str(), Some("b"));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Vec<Record>>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Opens a pyson file for cursor-based reading.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be opened.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Reader<IoLineSource<io::BufReader<std::fs::File>>>> {
    Reader::open(path)
}
