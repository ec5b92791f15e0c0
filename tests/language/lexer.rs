//! Integration tests for the lexer
//!
//! Tests tokenization of patch script source.

use decohack_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn ident(s: &str) -> TokenKind {
    TokenKind::Identifier(s.into())
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_state_line() {
    assert_eq!(
        kinds("TROO A[\\] 10 bright A_Look"),
        vec![
            ident("TROO"),
            ident("A[\\]"),
            TokenKind::Number("10".into()),
            ident("bright"),
            ident("A_Look"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_booleans_any_case() {
    assert_eq!(
        kinds("TRUE false"),
        vec![TokenKind::True, TokenKind::False, TokenKind::Eof]
    );
}

#[test]
fn signs_are_separate_tokens() {
    assert_eq!(
        kinds("-42 +0x1F"),
        vec![
            TokenKind::Minus,
            TokenKind::Number("42".into()),
            TokenKind::Plus,
            TokenKind::Number("0x1F".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("( ) { } , . :"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Period,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

// =============================================================================
// Strings and Comments
// =============================================================================

#[test]
fn strings_and_raw_strings() {
    assert_eq!(
        kinds(r#""a\n\"b\"" `c\n`"#),
        vec![
            TokenKind::String("a\n\"b\"".into()),
            TokenKind::String("c\\n".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("a // line\n/* block\n */ b"),
        vec![ident("a"), ident("b"), TokenKind::Eof]
    );
}

#[test]
fn positions_are_one_based() {
    let tokens = Lexer::tokenize_all("using boom\n  misc");
    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    assert_eq!((tokens[2].span.line, tokens[2].span.column), (2, 3));
    assert_eq!(&*tokens[2].stream, "[Text String]");
}

#[test]
fn lexer_errors() {
    assert!(matches!(kinds("\"open")[0], TokenKind::Error(_)));
    assert!(matches!(kinds("/* open")[0], TokenKind::Error(_)));
    assert_eq!(
        kinds("@")[0],
        TokenKind::Error("Unexpected character: @".into())
    );
}
