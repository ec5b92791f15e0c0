//! Integration tests for decohack_language
//!
//! Tests for the lexer, literal decoding, and the parser.

mod lexer;
mod literals;
mod parser;
