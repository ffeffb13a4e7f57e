//! Streaming, cursor-based record reader.
//!
//! A [`Reader`] owns a [`LineSource`] and decodes one line per call. Its only
//! state is the cursor: how many records have been consumed since the start.
//!
//! ## Overview
//!
//! - **Cursor reads**: [`Reader::next_record`] and friends decode the line at
//!   the cursor and advance it by one
//! - **Positioning**: [`Reader::rewind`], [`Reader::go_to_line`], and
//!   [`Reader::skip_n_lines`] move the cursor without returning records
//! - **Whole-file views**: [`Reader::all`], [`Reader::as_mapping`], and
//!   [`Reader::find_by_name`] rewind first and then scan
//! - **Traversal**: [`Reader::for_each`], [`Reader::map_each`],
//!   [`Reader::for_each_while`], and [`Reader::map_while`] consume the records
//!   remaining after the cursor
//! - **Iteration**: [`Reader::records`] yields the remaining records lazily
//!
//! Whole-file operations are all-or-nothing: the first malformed line aborts
//! them and nothing collected so far is returned.
//!
//! ## Usage
//!
//! ```rust
//! use pyson::{Reader, Value};
//!
//! let mut reader = Reader::from_str("width:int:640\nheight:int:480\ntitle:str:demo\n");
//!
//! let first = reader.next_record().unwrap().unwrap();
//! assert_eq!(first.name(), "width");
//!
//! let height = reader.find_by_name("height").unwrap();
//! assert_eq!(height, Some(Value::Int(480)));
//!
//! // The cursor sits just past the match.
//! let next = reader.next_record().unwrap().unwrap();
//! assert_eq!(next.name(), "title");
//! assert!(reader.next_record().unwrap().is_none());
//! ```

use crate::options::ReaderOptions;
use crate::record::decode_line;
use crate::source::{IoLineSource, LineSource};
use crate::{Error, PysonMap, Record, Result, Value};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use tracing::{debug, trace};

/// A cursor over the records of a [`LineSource`].
///
/// The reader exclusively owns its source; dropping the reader releases it.
#[derive(Debug)]
pub struct Reader<S> {
    source: S,
    options: ReaderOptions,
    /// Records consumed since the last rewind.
    position: usize,
    /// Physical lines consumed since the last rewind, used in error messages.
    line: usize,
}

impl<S: LineSource> Reader<S> {
    /// Creates a reader positioned at the first line of `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{IoLineSource, Reader};
    ///
    /// let mut reader = Reader::new(IoLineSource::from_bytes("n:int:1\n"));
    /// assert_eq!(reader.position(), 0);
    /// assert!(reader.next_record().unwrap().is_some());
    /// ```
    pub fn new(source: S) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Creates a reader with custom [`ReaderOptions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{IoLineSource, Reader, ReaderOptions};
    ///
    /// let options = ReaderOptions::new().with_skip_blank_lines(true);
    /// let mut reader = Reader::with_options(IoLineSource::from_bytes("\nn:int:1\n"), options);
    /// assert_eq!(reader.all().unwrap().len(), 1);
    /// ```
    pub fn with_options(source: S, options: ReaderOptions) -> Self {
        Reader {
            source,
            options,
            position: 0,
            line: 0,
        }
    }

    /// Returns the options this reader was created with.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Returns the cursor: the number of records consumed since the start
    /// of the source.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of physical lines consumed, including skipped
    /// blank lines and a line that failed to decode.
    ///
    /// This is the line number reported in errors.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Releases the reader and returns its source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn read_raw(&mut self) -> Result<Option<String>> {
        loop {
            let Some(bytes) = self.source.read_line()? else {
                return Ok(None);
            };
            self.line += 1;
            let raw = String::from_utf8(bytes).map_err(|e| {
                let context = String::from_utf8_lossy(e.as_bytes()).into_owned();
                debug!(line = self.line, "line is not valid UTF-8");
                Error::decode(self.line, &format!("invalid UTF-8: {}", e.utf8_error()), &context)
            })?;
            if self.options.skip_blank_lines && raw.is_empty() {
                trace!(line = self.line, "skipping blank line");
                continue;
            }
            return Ok(Some(raw));
        }
    }

    fn decode_next(&mut self) -> Result<Option<Record>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(None);
        };
        match decode_line(&raw, self.line) {
            Ok(record) => {
                self.position += 1;
                trace!(line = self.line, name = record.name(), "decoded record");
                Ok(Some(record))
            }
            Err(err) => {
                debug!(line = self.line, error = %err, "malformed record line");
                Err(err)
            }
        }
    }

    /// Decodes the record at the cursor and advances past it.
    ///
    /// Returns `Ok(None)` at the end of the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for a malformed line (including one that is
    /// not valid UTF-8) and [`Error::SourceUnavailable`] if the source fails. After an error the
    /// cursor position is unspecified; rewind before reading again.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        self.decode_next()
    }

    /// Like [`Reader::next_record`], returning `default` at the end of the source.
    pub fn next_record_or(&mut self, default: Record) -> Result<Record> {
        Ok(self.decode_next()?.unwrap_or(default))
    }

    /// Like [`Reader::next_record`], treating the end of the source as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEnd`] when no record is left.
    pub fn try_next_record(&mut self) -> Result<Record> {
        self.decode_next()?
            .ok_or_else(|| Error::unexpected_end(self.line, "a record"))
    }

    /// Moves the cursor back to the first line.
    pub fn rewind(&mut self) -> Result<()> {
        self.source.rewind()?;
        self.position = 0;
        self.line = 0;
        debug!("rewound reader");
        Ok(())
    }

    /// Rewinds, then skips exactly `n` records.
    ///
    /// `go_to_line(0)` is the same as [`Reader::rewind`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedEnd`] if the source holds fewer than `n`
    /// records, or [`Error::Decode`] if a skipped line is malformed.
    pub fn go_to_line(&mut self, n: usize) -> Result<()> {
        self.rewind()?;
        debug!(target_line = n, "seeking");
        self.skip_n_lines(n)
    }

    /// Skips `n` records from the current cursor, without rewinding.
    ///
    /// # Errors
    ///
    /// Same as [`Reader::go_to_line`].
    pub fn skip_n_lines(&mut self, n: usize) -> Result<()> {
        for skipped in 0..n {
            if self.decode_next()?.is_none() {
                debug!(requested = n, skipped, "source ended while skipping");
                return Err(Error::unexpected_end(
                    self.line,
                    &format!("{} more record(s) to skip", n - skipped),
                ));
            }
        }
        Ok(())
    }

    /// Rewinds and decodes every record in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Reader;
    ///
    /// let mut reader = Reader::from_str("a:int:1\nb:float:2.5\n");
    /// let records = reader.all().unwrap();
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[1].value().get_float(), Some(2.5));
    /// ```
    pub fn all(&mut self) -> Result<Vec<Record>> {
        self.rewind()?;
        let mut records = Vec::new();
        while let Some(record) = self.decode_next()? {
            records.push(record);
        }
        debug!(count = records.len(), "read all records");
        Ok(records)
    }

    /// Rewinds and builds a name-to-value mapping in source order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if a name occurs twice, or the first
    /// decode error encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{Error, Reader};
    ///
    /// let mut reader = Reader::from_str("a:int:1\nb:int:2\n");
    /// assert_eq!(reader.as_mapping().unwrap().len(), 2);
    ///
    /// let mut reader = Reader::from_str("a:int:1\na:int:2\n");
    /// assert!(matches!(reader.as_mapping(), Err(Error::DuplicateName { .. })));
    /// ```
    pub fn as_mapping(&mut self) -> Result<PysonMap> {
        self.rewind()?;
        let mut map = PysonMap::new();
        let mut first_lines = Vec::new();
        while let Some(record) = self.decode_next()? {
            if let Some(index) = map.index_of(record.name()) {
                return Err(Error::duplicate_name(
                    record.name(),
                    first_lines[index],
                    self.line,
                ));
            }
            let (name, value) = record.into_parts();
            map.insert(name, value);
            first_lines.push(self.line);
        }
        debug!(count = map.len(), "built mapping");
        Ok(map)
    }

    /// Rewinds and scans for the first record called `name`.
    ///
    /// On a hit the cursor is left just past the matching line. On a miss
    /// the source is exhausted and `Ok(None)` is returned.
    pub fn find_by_name(&mut self, name: &str) -> Result<Option<Value>> {
        self.rewind()?;
        while let Some(record) = self.decode_next()? {
            if record.name() == name {
                debug!(target_name = name, line = self.line, "found record");
                return Ok(Some(record.into_value()));
            }
        }
        debug!(target_name = name, "record not found");
        Ok(None)
    }

    /// Calls `f` on every remaining record.
    pub fn for_each<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(Record),
    {
        while let Some(record) = self.decode_next()? {
            f(record);
        }
        Ok(())
    }

    /// Collects `f` applied to every remaining record.
    pub fn map_each<T, F>(&mut self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(Record) -> T,
    {
        let mut out = Vec::new();
        while let Some(record) = self.decode_next()? {
            out.push(f(record));
        }
        Ok(out)
    }

    /// Calls `f` on remaining records until it returns `false`.
    ///
    /// The record for which `f` returned `false` has been consumed.
    pub fn for_each_while<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(Record) -> bool,
    {
        while let Some(record) = self.decode_next()? {
            if !f(record) {
                break;
            }
        }
        Ok(())
    }

    /// Collects the results of `f` over remaining records until it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Reader;
    ///
    /// let mut reader = Reader::from_str("a:int:1\nb:int:2\nc:str:x\nd:int:4\n");
    /// let ints = reader.map_while(|r| r.value().get_int()).unwrap();
    /// assert_eq!(ints, vec![1, 2]);
    ///
    /// // The stopping record was consumed.
    /// assert_eq!(reader.next_record().unwrap().unwrap().name(), "d");
    /// ```
    pub fn map_while<T, F>(&mut self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(Record) -> Option<T>,
    {
        let mut out = Vec::new();
        while let Some(record) = self.decode_next()? {
            match f(record) {
                Some(item) => out.push(item),
                None => break,
            }
        }
        Ok(out)
    }

    /// Returns a single-pass iterator over the remaining records.
    ///
    /// The iterator decodes one record ahead of what it has yielded, so
    /// dropping it part way leaves the cursor one record further on. It does
    /// not rewind; call [`Reader::rewind`] before iterating a second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::Reader;
    ///
    /// let mut reader = Reader::from_str("a:int:1\nb:int:2\n");
    /// let names: Vec<String> = reader
    ///     .records()
    ///     .map(|r| r.map(|r| r.name().to_string()))
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(names, vec!["a", "b"]);
    /// assert_eq!(reader.records().count(), 0);
    /// ```
    pub fn records(&mut self) -> Records<'_, S> {
        let mut records = Records {
            reader: self,
            peeked: None,
        };
        records.fill();
        records
    }
}

impl Reader<IoLineSource<Cursor<String>>> {
    /// Creates a reader over in-memory text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Reader::new(IoLineSource::from_bytes(text.to_string()))
    }
}

impl Reader<IoLineSource<BufReader<File>>> {
    /// Opens a pyson file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Reader::new(IoLineSource::open(path)?))
    }
}

/// Lookahead iterator returned by [`Reader::records`].
///
/// Yields `Err` at most once; iteration ends after an error.
#[derive(Debug)]
pub struct Records<'a, S> {
    reader: &'a mut Reader<S>,
    peeked: Option<Result<Record>>,
}

impl<S: LineSource> Records<'_, S> {
    fn fill(&mut self) {
        self.peeked = self.reader.decode_next().transpose();
    }

    /// Returns `true` if another item is cached, without reading further.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.peeked.is_some()
    }

    /// Returns the cached next record, if it decoded successfully.
    #[must_use]
    pub fn peek(&self) -> Option<&Record> {
        self.peeked.as_ref().and_then(|r| r.as_ref().ok())
    }
}

impl<S: LineSource> Iterator for Records<'_, S> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take()? {
            Ok(record) => {
                self.fill();
                Some(Ok(record))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl<S: LineSource> std::iter::FusedIterator for Records<'_, S> {}
