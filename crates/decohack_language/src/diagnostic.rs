//! Compile diagnostics.
//!
//! A failed compile yields one [`CompileError`] holding every message
//! collected before the parse stopped.

use std::fmt;

use thiserror::Error;

use crate::token::Token;

/// One located compiler message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stream (file name or `[Text String]`) the message refers to.
    pub stream: String,
    /// 1-based line, or 0 when no position applies.
    pub line: u32,
    /// 1-based column, or 0 when no position applies.
    pub column: u32,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(
        stream: impl Into<String>,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stream: stream.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates a diagnostic positioned at `token`.
    #[must_use]
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        Self::new(
            token.stream.as_ref(),
            token.span.line,
            token.span.column,
            message,
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.stream, self.line, self.column, self.message
        )
    }
}

/// The aggregated failure of a compile.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", render(.diagnostics))]
pub struct CompileError {
    /// Messages in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileError {
    /// Wraps a single diagnostic.
    #[must_use]
    pub fn single(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }

    /// The first message, without location.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.diagnostics.first().map(|d| d.message.as_str())
    }
}

impl From<Diagnostic> for CompileError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::single(diagnostic)
    }
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
