//! Token types for patch scripts.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::sync::Arc;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
    /// Name of the stream the token was read from.
    pub stream: Arc<str>,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, stream: Arc<str>) -> Self {
        Self { kind, span, stream }
    }

    /// The identifier text, if this is an identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is an identifier equal to `keyword`, ignoring case.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.identifier()
            .is_some_and(|name| name.eq_ignore_ascii_case(keyword))
    }

    /// The text of an identifier or string token.
    ///
    /// Several productions accept either form for names (sprites, sounds,
    /// map lumps).
    #[must_use]
    pub fn name_text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(text) | TokenKind::String(text) => Some(text),
            _ => None,
        }
    }
}

/// Token types for patch scripts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A word such as `state`, `TROO` or `A[\]`.
    Identifier(String),
    /// A quoted or raw string, escapes already applied.
    String(String),
    /// A numeric lexeme, left undecoded: `42`, `0x1F`, `3.5`.
    Number(String),

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `:`
    Colon,
    /// `+`
    Plus,
    /// `-`
    Minus,

    /// `true`, any case
    True,
    /// `false`, any case
    False,

    /// `#name`, a preprocessor directive
    Directive(String),

    /// End of input
    Eof,
    /// Lexer or include error
    Error(String),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Period => "'.'",
            Self::Colon => "':'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::True => "true",
            Self::False => "false",
            Self::Directive(_) => "directive",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }

    /// The token as it would appear in source, for messages.
    #[must_use]
    pub fn lexeme(&self) -> String {
        match self {
            Self::Identifier(text) | Self::String(text) | Self::Number(text) => text.clone(),
            Self::Directive(name) => format!("#{name}"),
            Self::Error(message) => message.clone(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
            Self::LBrace => "{".into(),
            Self::RBrace => "}".into(),
            Self::Comma => ",".into(),
            Self::Period => ".".into(),
            Self::Colon => ":".into(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::True => "true".into(),
            Self::False => "false".into(),
            Self::Eof => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind) -> Token {
        Token::new(kind, Span::at_start(), Arc::from("test"))
    }

    #[test]
    fn keyword_match_ignores_case() {
        let t = token(TokenKind::Identifier("STATE".into()));
        assert!(t.is_keyword("state"));
        assert!(!t.is_keyword("fill"));
        assert!(!token(TokenKind::String("state".into())).is_keyword("state"));
    }

    #[test]
    fn name_text_accepts_identifiers_and_strings() {
        assert_eq!(
            token(TokenKind::Identifier("TROO".into())).name_text(),
            Some("TROO")
        );
        assert_eq!(token(TokenKind::String("MAP01".into())).name_text(), Some("MAP01"));
        assert_eq!(token(TokenKind::Number("1".into())).name_text(), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::LBrace.name(), "'{'");
        assert_eq!(TokenKind::Eof.name(), "end of input");
    }

    #[test]
    fn lexemes() {
        assert_eq!(TokenKind::Identifier("thing".into()).lexeme(), "thing");
        assert_eq!(TokenKind::LBrace.lexeme(), "{");
        assert_eq!(TokenKind::Directive("define".into()).lexeme(), "#define");
    }
}
