//! Source location tracking.

/// Where a token starts in its stream. Both fields are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Line number.
    pub line: u32,
    /// Column number, counted in characters.
    pub column: u32,
}

impl Span {
    /// Creates a span at `line`, `column`.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The first character of a stream.
    #[must_use]
    pub const fn at_start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::at_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_at_start() {
        let span = Span::at_start();
        assert_eq!((span.line, span.column), (1, 1));
        assert_eq!(span, Span::default());
    }
}
