//! Lexer for patch scripts.
//!
//! The lexer converts source text into tokens, skipping whitespace and
//! comments. Numbers are left as raw lexemes; the parser decides what they
//! mean. `#include` is recognized as a [`TokenKind::Directive`] and handled
//! by [`TokenStream`](crate::stream::TokenStream).

use std::sync::Arc;

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Stream name used when source text has no file behind it.
pub const DEFAULT_STREAM_NAME: &str = "[Text String]";

/// Lexer for patch script source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Stream name stamped onto every token.
    stream: Arc<str>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over anonymous source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_stream(DEFAULT_STREAM_NAME, source)
    }

    /// Creates a lexer whose tokens report `stream` as their origin.
    #[must_use]
    pub fn with_stream(stream: impl Into<Arc<str>>, source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            stream: stream.into(),
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_trivia() {
            return error;
        }

        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return self.token(TokenKind::Eof, start_line, start_column);
        };

        let kind = match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Period),
            ':' => self.single(TokenKind::Colon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '"' => self.scan_string(),
            '`' => self.scan_raw_string(),
            '#' => self.scan_directive(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c => {
                self.advance();
                TokenKind::Error(format!("Unexpected character: {c}"))
            }
        };

        self.token(kind, start_line, start_column)
    }

    /// Tokenizes all of `source`, ending with [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect_tokens()
    }

    /// Drains this lexer into a vector, ending with [`TokenKind::Eof`].
    #[must_use]
    pub fn collect_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn token(&self, kind: TokenKind, line: u32, column: u32) -> Token {
        Token::new(kind, Span::new(line, column), Arc::clone(&self.stream))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace and comments. An unterminated block comment comes
    /// back as an error token.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match (self.peek_char(), self.peek_char_n(1)) {
                (Some(c), _) if c.is_whitespace() => self.advance(),
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                (Some('/'), Some('*')) => {
                    let (line, column) = (self.line, self.column);
                    self.advance();
                    self.advance();
                    loop {
                        match (self.peek_char(), self.peek_char_n(1)) {
                            (Some('*'), Some('/')) => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            (Some(_), _) => self.advance(),
                            (None, _) => {
                                return Some(self.token(
                                    TokenKind::Error("Unterminated block comment.".into()),
                                    line,
                                    column,
                                ));
                            }
                        }
                    }
                }
                _ => return None,
            }
        }
    }

    /// Scans a `"..."` string literal.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // consume opening '"'
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    let escaped = match self.peek_char() {
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('\\') => '\\',
                        Some('"') => '"',
                        Some(c) => {
                            return TokenKind::Error(format!("Invalid escape sequence: \\{c}"));
                        }
                        None => {
                            return TokenKind::Error("Unterminated string literal.".into());
                        }
                    };
                    self.advance();
                    text.push(escaped);
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
                None => {
                    return TokenKind::Error("Unterminated string literal.".into());
                }
            }
        }
        TokenKind::String(text)
    }

    /// Scans a `` `...` `` raw string; backslashes are literal.
    fn scan_raw_string(&mut self) -> TokenKind {
        self.advance(); // consume opening '`'
        let start = self.position;
        loop {
            match self.peek_char() {
                Some('`') => {
                    let text = self.source[start..self.position].to_string();
                    self.advance();
                    return TokenKind::String(text);
                }
                Some(_) => self.advance(),
                None => return TokenKind::Error("Unterminated raw string literal.".into()),
            }
        }
    }

    /// Scans `#name`.
    fn scan_directive(&mut self) -> TokenKind {
        self.advance(); // consume '#'
        match self.peek_char() {
            Some(c) if c.is_ascii_alphabetic() => TokenKind::Directive(self.scan_word()),
            Some(c) => TokenKind::Error(format!("Unexpected character after '#': {c}")),
            None => TokenKind::Error("Unexpected end of input after '#'.".into()),
        }
    }

    /// Scans a number lexeme: decimal with an optional fraction, or `0x`
    /// followed by alphanumerics.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        let is_hex = self.peek_char() == Some('0')
            && matches!(self.peek_char_n(1), Some('x' | 'X'));

        if is_hex {
            self.advance();
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_alphanumeric()) {
                self.advance();
            }
        } else {
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            if self.peek_char() == Some('.')
                && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
            {
                self.advance();
                while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        TokenKind::Number(self.source[start..self.position].to_string())
    }

    /// Scans an identifier, folding `true`/`false` into boolean tokens.
    fn scan_identifier(&mut self) -> TokenKind {
        let word = self.scan_word();
        if word.eq_ignore_ascii_case("true") {
            TokenKind::True
        } else if word.eq_ignore_ascii_case("false") {
            TokenKind::False
        } else {
            TokenKind::Identifier(word)
        }
    }

    fn scan_word(&mut self) -> String {
        let start = self.position;
        while self.peek_char().is_some_and(is_identifier_char) {
            self.advance();
        }
        self.source[start..self.position].to_string()
    }
}

/// Returns true if `c` can start an identifier.
///
/// `[`, `\` and `]` are frame letters 26 to 28.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '[' | '\\' | ']')
}

/// Returns true if `c` can appear after the first identifier character.
fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
