//! Configuration options for reading and writing pyson files.
//!
//! - [`ReaderOptions`]: how a [`Reader`](crate::Reader) treats its input
//! - [`WriterOptions`]: how a [`Writer`](crate::Writer) emits records
//! - [`LineEnding`]: the terminator written after each record
//!
//! ## Examples
//!
//! ```rust
//! use pyson::{LineEnding, ReaderOptions, WriterOptions};
//!
//! let reader = ReaderOptions::new().with_skip_blank_lines(true);
//! assert!(reader.skip_blank_lines);
//!
//! let writer = WriterOptions::new()
//!     .with_line_ending(LineEnding::CrLf)
//!     .with_strict_lists(false);
//! assert_eq!(writer.line_ending.as_str(), "\r\n");
//! ```

/// Terminator written after each record.
///
/// Readers accept both regardless of this setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options for a [`Reader`](crate::Reader).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Skip lines that are empty after their terminator is removed.
    ///
    /// Skipped lines do not count as records for `go_to_line` and
    /// `skip_n_lines`. Off by default, so an empty line is a decode error.
    pub skip_blank_lines: bool,
}

impl ReaderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }
}

/// Options for a [`Writer`](crate::Writer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    pub line_ending: LineEnding,
    /// Reject list elements that contain the `(*)` separator.
    pub strict_lists: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            line_ending: LineEnding::default(),
            strict_lists: true,
        }
    }
}

impl WriterOptions {
    /// Creates default options (`\n` endings, strict list checking).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyson::{LineEnding, WriterOptions};
    ///
    /// let options = WriterOptions::new();
    /// assert_eq!(options.line_ending, LineEnding::Lf);
    /// assert!(options.strict_lists);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn with_strict_lists(mut self, strict: bool) -> Self {
        self.strict_lists = strict;
        self
    }
}
