//! Token stream with `#include` support.
//!
//! Each stream (the main script and every included file) is lexed up front
//! into a frame. Frames stack: an `#include "path"` directive pushes the
//! named file's tokens, and reaching the end of an included file pops back
//! to the token after the directive. Include failures surface as
//! [`TokenKind::Error`] tokens at the directive.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::vec;

use tracing::debug;

use crate::config::CompilerConfig;
use crate::lexer::{DEFAULT_STREAM_NAME, Lexer};
use crate::span::Span;
use crate::token::{Token, TokenKind};

const INCLUDE_DIRECTIVE: &str = "include";

struct Frame {
    /// Directory relative includes resolve against.
    directory: Option<PathBuf>,
    tokens: vec::IntoIter<Token>,
}

/// The parser's view of the input: tokens from the main stream with
/// included files spliced in.
pub struct TokenStream {
    frames: Vec<Frame>,
    includes_enabled: bool,
    max_include_depth: usize,
    include_paths: Vec<PathBuf>,
    /// The final end-of-input token, repeated once every frame is done.
    eof: Option<Token>,
}

impl TokenStream {
    /// Creates a stream over `source`, named `stream_name`.
    ///
    /// `directory` is where relative includes in `source` are looked up
    /// first; `None` means the working directory.
    #[must_use]
    pub fn new(
        stream_name: &str,
        source: &str,
        directory: Option<PathBuf>,
        config: &CompilerConfig,
    ) -> Self {
        let tokens = Lexer::with_stream(stream_name, source).collect_tokens();
        Self {
            frames: vec![Frame {
                directory,
                tokens: tokens.into_iter(),
            }],
            includes_enabled: config.includes_enabled,
            max_include_depth: config.max_include_depth,
            include_paths: config.include_paths.clone(),
            eof: None,
        }
    }

    /// Number of files currently open, the main stream included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the next token, following includes.
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(frame) = self.frames.last_mut() else {
                return self.eof.clone().unwrap_or_else(|| {
                    Token::new(
                        TokenKind::Eof,
                        Span::at_start(),
                        Arc::from(DEFAULT_STREAM_NAME),
                    )
                });
            };

            let Some(token) = frame.tokens.next() else {
                self.frames.pop();
                continue;
            };

            match &token.kind {
                TokenKind::Eof => {
                    self.frames.pop();
                    if self.frames.is_empty() {
                        self.eof = Some(token.clone());
                        return token;
                    }
                }
                TokenKind::Directive(name) if name.eq_ignore_ascii_case(INCLUDE_DIRECTIVE) => {
                    if let Some(error) = self.include(&token) {
                        return error;
                    }
                }
                TokenKind::Directive(name) => {
                    let message = format!("Unknown directive \"#{name}\".");
                    return error_at(&token, message);
                }
                _ => return token,
            }
        }
    }

    /// Handles `#include`; returns an error token on failure.
    fn include(&mut self, directive: &Token) -> Option<Token> {
        let frame = self.frames.last_mut()?;
        let path = match frame.tokens.next() {
            Some(Token {
                kind: TokenKind::String(path),
                ..
            }) => path,
            _ => {
                return Some(error_at(
                    directive,
                    "Expected file path string after \"#include\".",
                ));
            }
        };

        if !self.includes_enabled {
            return Some(error_at(directive, "Includes are not enabled."));
        }
        if self.frames.len() > self.max_include_depth {
            let message = format!(
                "Include depth exceeded; maximum is {}.",
                self.max_include_depth
            );
            return Some(error_at(directive, message));
        }

        let directory = self.frames.last().and_then(|f| f.directory.clone());
        let Some(resolved) = self.resolve(&path, directory.as_deref()) else {
            return Some(error_at(
                directive,
                format!("Could not find include file \"{path}\"."),
            ));
        };

        let text = match fs::read_to_string(&resolved) {
            Ok(text) => text,
            Err(e) => {
                return Some(error_at(
                    directive,
                    format!("Could not read include file \"{path}\": {e}"),
                ));
            }
        };

        let name = resolved.display().to_string();
        debug!(include = %name, depth = self.frames.len(), "including file");
        let tokens = Lexer::with_stream(name.as_str(), &text).collect_tokens();
        self.frames.push(Frame {
            directory: resolved.parent().map(Path::to_path_buf),
            tokens: tokens.into_iter(),
        });
        None
    }

    /// Finds `path` relative to `directory`, then each include path.
    fn resolve(&self, path: &str, directory: Option<&Path>) -> Option<PathBuf> {
        let requested = Path::new(path);
        if requested.is_absolute() {
            return requested.is_file().then(|| requested.to_path_buf());
        }
        let local = match directory {
            Some(dir) => dir.join(requested),
            None => requested.to_path_buf(),
        };
        std::iter::once(local)
            .chain(self.include_paths.iter().map(|dir| dir.join(requested)))
            .find(|candidate| candidate.is_file())
    }
}

fn error_at(token: &Token, message: impl Into<String>) -> Token {
    Token::new(
        TokenKind::Error(message.into()),
        token.span,
        Arc::clone(&token.stream),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(stream: &mut TokenStream) -> Vec<TokenKind> {
        let mut out = Vec::new();
        loop {
            let token = stream.next_token();
            let done = matches!(token.kind, TokenKind::Eof | TokenKind::Error(_));
            out.push(token.kind);
            if done {
                return out;
            }
        }
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("decohack_stream_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn plain_stream_ends_with_repeated_eof() {
        let mut stream = TokenStream::new("main", "misc", None, &CompilerConfig::default());
        assert_eq!(stream.next_token().kind, TokenKind::Identifier("misc".into()));
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
        assert_eq!(stream.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn include_splices_tokens_in_place() {
        let dir = temp_dir("splice");
        fs::write(dir.join("inner.dh"), "b c").unwrap();
        let mut stream = TokenStream::new(
            "main",
            "a #include \"inner.dh\" d",
            Some(dir.clone()),
            &CompilerConfig::default(),
        );
        let ident = |s: &str| TokenKind::Identifier(s.into());
        assert_eq!(
            kinds(&mut stream),
            vec![ident("a"), ident("b"), ident("c"), ident("d"), TokenKind::Eof]
        );
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn included_tokens_carry_their_stream_name() {
        let dir = temp_dir("names");
        fs::write(dir.join("inner.dh"), "\n  b").unwrap();
        let mut stream = TokenStream::new(
            "main",
            "#include \"inner.dh\"",
            Some(dir.clone()),
            &CompilerConfig::default(),
        );
        let token = stream.next_token();
        assert!(token.stream.ends_with("inner.dh"));
        assert_eq!((token.span.line, token.span.column), (2, 3));
        assert_eq!(stream.depth(), 2);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn include_paths_are_searched() {
        let dir = temp_dir("search");
        fs::write(dir.join("lib.dh"), "x").unwrap();
        let config = CompilerConfig::default().with_include_path(&dir);
        let mut stream = TokenStream::new("main", "#include \"lib.dh\"", None, &config);
        assert_eq!(stream.next_token().kind, TokenKind::Identifier("x".into()));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_include_is_an_error_token() {
        let mut stream = TokenStream::new(
            "main",
            "#include \"nope.dh\"",
            None,
            &CompilerConfig::default(),
        );
        assert_eq!(
            stream.next_token().kind,
            TokenKind::Error("Could not find include file \"nope.dh\".".into())
        );
    }

    #[test]
    fn disabled_includes_are_rejected() {
        let config = CompilerConfig::default().with_includes(false);
        let mut stream = TokenStream::new("main", "#include \"a.dh\"", None, &config);
        assert_eq!(
            stream.next_token().kind,
            TokenKind::Error("Includes are not enabled.".into())
        );
    }

    #[test]
    fn self_include_hits_depth_limit() {
        let dir = temp_dir("depth");
        fs::write(dir.join("loop.dh"), "#include \"loop.dh\"").unwrap();
        let config = CompilerConfig::default().with_max_include_depth(3);
        let mut stream =
            TokenStream::new("main", "#include \"loop.dh\"", Some(dir.clone()), &config);
        assert_eq!(
            stream.next_token().kind,
            TokenKind::Error("Include depth exceeded; maximum is 3.".into())
        );
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn include_needs_a_path() {
        let mut stream =
            TokenStream::new("main", "#include 5", None, &CompilerConfig::default());
        assert!(matches!(stream.next_token().kind, TokenKind::Error(_)));
        let mut stream = TokenStream::new("main", "#define X", None, &CompilerConfig::default());
        assert_eq!(
            stream.next_token().kind,
            TokenKind::Error("Unknown directive \"#define\".".into())
        );
    }
}
