//! Line sources feeding a [`Reader`](crate::Reader).
//!
//! A [`LineSource`] hands out one line at a time and can seek back to its
//! start. [`IoLineSource`] adapts anything that is `BufRead + Seek`, which
//! covers buffered files and in-memory cursors.
//!
//! Sources deal in raw bytes. Turning a line into text is the reader's job,
//! so a line that is not valid UTF-8 is reported as a decode error on that
//! line rather than as a broken source.
//!
//! ```rust
//! use pyson::{IoLineSource, LineSource};
//! use std::io::Cursor;
//!
//! let mut source = IoLineSource::new(Cursor::new("a:int:1\r\nb:int:2\n"));
//! assert_eq!(source.read_line().unwrap().as_deref(), Some(&b"a:int:1"[..]));
//! assert_eq!(source.read_line().unwrap().as_deref(), Some(&b"b:int:2"[..]));
//! assert_eq!(source.read_line().unwrap(), None);
//! source.rewind().unwrap();
//! assert_eq!(source.read_line().unwrap().as_deref(), Some(&b"a:int:1"[..]));
//! ```

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

/// A sequential provider of lines that can restart from the beginning.
///
/// Lines are returned as raw bytes without their terminator (`\n`, `\r\n`,
/// or a trailing `\r` at the end of the input). Both operations block until
/// they complete.
pub trait LineSource {
    /// Returns the next line, or `None` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the underlying input cannot be read.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>>;

    /// Moves back to the first line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the underlying input cannot seek.
    fn rewind(&mut self) -> Result<()>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        (**self).read_line()
    }

    fn rewind(&mut self) -> Result<()> {
        (**self).rewind()
    }
}

/// A [`LineSource`] over any seekable buffered reader.
///
/// # Examples
///
/// ```rust
/// use pyson::{IoLineSource, Reader};
///
/// let source = IoLineSource::from_bytes("answer:int:42\n");
/// let mut reader = Reader::new(source);
/// assert_eq!(reader.all().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct IoLineSource<R> {
    inner: R,
}

impl<R: BufRead + Seek> IoLineSource<R> {
    /// Wraps a buffered, seekable reader.
    pub fn new(inner: R) -> Self {
        IoLineSource { inner }
    }

    /// Unwraps this source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl IoLineSource<BufReader<File>> {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::source_unavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(IoLineSource::new(BufReader::new(file)))
    }
}

impl<T: AsRef<[u8]>> IoLineSource<Cursor<T>> {
    /// Wraps in-memory text or bytes.
    pub fn from_bytes(bytes: T) -> Self {
        IoLineSource::new(Cursor::new(bytes))
    }
}

impl<R: BufRead + Seek> LineSource for IoLineSource<R> {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        let n = self.inner.read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn rewind(&mut self) -> Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_text<S: LineSource>(source: &mut S) -> Option<String> {
        source
            .read_line()
            .unwrap()
            .map(|line| String::from_utf8(line).unwrap())
    }

    #[test]
    fn test_strips_terminators() {
        let mut source = IoLineSource::from_bytes("one\ntwo\r\nthree");
        assert_eq!(next_text(&mut source).as_deref(), Some("one"));
        assert_eq!(next_text(&mut source).as_deref(), Some("two"));
        assert_eq!(next_text(&mut source).as_deref(), Some("three"));
        assert_eq!(next_text(&mut source), None);
        assert_eq!(next_text(&mut source), None);
    }

    #[test]
    fn test_strips_lone_carriage_return_at_end() {
        let mut source = IoLineSource::from_bytes("a:str:x\r");
        assert_eq!(next_text(&mut source).as_deref(), Some("a:str:x"));
        assert_eq!(next_text(&mut source), None);
    }

    #[test]
    fn test_empty_lines_are_lines() {
        let mut source = IoLineSource::from_bytes("\n\n");
        assert_eq!(next_text(&mut source).as_deref(), Some(""));
        assert_eq!(next_text(&mut source).as_deref(), Some(""));
        assert_eq!(next_text(&mut source), None);
    }

    #[test]
    fn test_rewind() {
        let mut source = IoLineSource::from_bytes(b"x\ny\n".to_vec());
        next_text(&mut source);
        next_text(&mut source);
        source.rewind().unwrap();
        assert_eq!(next_text(&mut source).as_deref(), Some("x"));
    }

    #[test]
    fn test_invalid_utf8_is_passed_through() {
        let mut source = IoLineSource::from_bytes(vec![0xff, 0xfe, b'\n', b'a', b'\n']);
        assert_eq!(source.read_line().unwrap(), Some(vec![0xff, 0xfe]));
        assert_eq!(source.read_line().unwrap(), Some(b"a".to_vec()));
    }

    #[test]
    fn test_into_inner_keeps_position() {
        let mut source = IoLineSource::from_bytes("first\nsecond\n");
        next_text(&mut source);
        let cursor = source.into_inner();
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_open_missing_file() {
        let err = IoLineSource::open("/definitely/not/here.pyson").unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(ref m) if m.contains("here.pyson")));
    }
}
