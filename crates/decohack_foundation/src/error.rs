//! Error types for the DecoHack system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type alias using the DecoHack error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for table and entity operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a table index out of range error.
    ///
    /// `count` is the number of rows in the table; the valid interval is `0..count`.
    #[must_use]
    pub fn out_of_range(table: &'static str, index: i64, count: usize) -> Self {
        Self::new(ErrorKind::OutOfRange {
            table,
            index,
            max: count as i64 - 1,
        })
    }

    /// Creates a field value range error.
    #[must_use]
    pub fn field_range(field: &'static str, min: i64, max: i64, value: i64) -> Self {
        Self::new(ErrorKind::FieldRange {
            field,
            min,
            max,
            value,
        })
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue(message.into()))
    }

    /// Creates an unknown name error.
    #[must_use]
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownName {
            kind,
            name: name.into(),
        })
    }

    /// Creates an unsupported feature error.
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A row index fell outside a table.
    #[error("{table} index {index} out of range, must be from 0 to {max}")]
    OutOfRange {
        /// The table that was indexed.
        table: &'static str,
        /// The offending index.
        index: i64,
        /// Highest valid index.
        max: i64,
    },

    /// A field value fell outside its legal interval.
    #[error("{field} must be between {min} and {max}, got {value}")]
    FieldRange {
        /// Name of the field.
        field: &'static str,
        /// Lowest legal value.
        min: i64,
        /// Highest legal value.
        max: i64,
        /// The value that was rejected.
        value: i64,
    },

    /// A value was rejected for a reason other than its range.
    #[error("{0}")]
    InvalidValue(String),

    /// A name did not resolve to a known table entry.
    #[error("unknown {kind}: {name}")]
    UnknownName {
        /// What kind of name was looked up (sprite, sound, ...).
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// The operation is not available in the current dialect.
    #[error("{0}")]
    Unsupported(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Source stream name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source stream.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}
