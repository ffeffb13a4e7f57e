//! Record writer.
//!
//! [`Writer`] validates each record and writes it as one terminated line.
//!
//! ```rust
//! use pyson::{Record, Writer};
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_record(&Record::new("count", 42)).unwrap();
//! writer.write_record(&Record::new("tags", vec!["a", "b"])).unwrap();
//! let bytes = writer.into_inner();
//! assert_eq!(String::from_utf8(bytes).unwrap(), "count:int:42\ntags:list:a(*)b\n");
//! ```

use crate::options::WriterOptions;
use crate::{Error, Record, Result};
use std::io;
use tracing::debug;

/// Writes records to an [`io::Write`] sink, one per line.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
    options: WriterOptions,
    written: usize,
}

impl<W: io::Write> Writer<W> {
    /// Creates a writer with default [`WriterOptions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{Record, Writer};
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.write_record(&Record::new("depth", 3)).unwrap();
    /// assert_eq!(writer.written(), 1);
    /// assert_eq!(writer.into_inner(), b"depth:int:3\n");
    /// ```
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, WriterOptions::default())
    }

    /// Creates a writer with explicit options.
    pub fn with_options(inner: W, options: WriterOptions) -> Self {
        Writer {
            inner,
            options,
            written: 0,
        }
    }

    /// Number of records written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes one record followed by the configured line ending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the record would not survive a round
    /// trip (see [`Record::validate`]); nothing is written in that case.
    /// I/O failures surface as [`Error::SourceUnavailable`].
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if let Err(err) = record.validate(self.options.strict_lists) {
            debug!(name = record.name(), error = %err, "rejected record");
            return Err(err);
        }
        let mut line = record.to_line();
        line.push_str(self.options.line_ending.as_str());
        self.inner
            .write_all(line.as_bytes())
            .map_err(|e| Error::source_unavailable(format!("write failed: {}", e)))?;
        self.written += 1;
        Ok(())
    }

    /// Writes every record in order, stopping at the first failure.
    pub fn write_all<'r, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flushes the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the sink cannot be flushed.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwraps the writer, returning the sink without flushing it.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
