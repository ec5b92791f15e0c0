//! Lexer, parser, and compiler for DecoHack patch scripts.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of patch script source
//! - [`TokenStream`] - Tokens with `#include` files spliced in
//! - [`Parser`] - Recursive-descent parsing straight into a [`PatchContext`]
//! - [`compile`] and friends - One call from source text to patch context
//!
//! [`PatchContext`]: decohack_storage::PatchContext

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod config;
pub mod diagnostic;
pub mod lexer;
pub mod literal;
pub mod parser;
pub mod span;
pub mod stream;
pub mod token;

pub use compiler::{compile, compile_file, compile_reader, compile_str};
pub use config::{CompilerConfig, DEFAULT_MAX_INCLUDE_DEPTH};
pub use diagnostic::{CompileError, Diagnostic};
pub use lexer::{DEFAULT_STREAM_NAME, Lexer};
pub use literal::{IntegerError, decode_frame_letter, decode_frames, parse_integer, parse_map_ref};
pub use parser::{LabelScope, Parser};
pub use span::Span;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
