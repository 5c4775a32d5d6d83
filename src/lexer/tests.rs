//! Unit tests for the lexer module.
//!
//! - Type keywords and identifiers
//! - Number and string literals
//! - Operators and punctuation
//! - Line tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::Span;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_type_keywords() {
    let tokens = tokenize("int float string").unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Type));
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].value, "float");
    assert_eq!(tokens[2].value, "string");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("integer floaty strings int_ string2").unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, "integer");
    assert_eq!(tokens[4].value, "string2");
}

#[test]
fn test_keyword_glued_to_number_is_identifier() {
    // No word boundary between `5` and `int`.
    let tokens = tokenize("5int").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "int");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Number));
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_trailing_dot_is_rejected() {
    let error = tokenize("x = 5.;").unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: . on line 1");
}

#[test]
fn test_tokenize_strings_keep_quotes() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::StringLiteral));
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].value, "\"multiple words\"");
    assert_eq!(tokens[2].value, "\"\"");
}

#[test]
fn test_backslash_is_not_an_escape() {
    let tokens = tokenize(r#""a\" b"#);

    // The literal closes at the second quote, leaving ` b` outside of it.
    let tokens = tokens.unwrap();
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, r#""a\""#);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_unterminated_string_is_rejected() {
    let error = tokenize("string s;\ns = \"abc;").unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \" on line 2");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("x = a + 1;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_whitespace_is_discarded() {
    assert!(tokenize("  \t \n\n\t ").unwrap().is_empty());
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn test_line_tracking() {
    let tokens = tokenize("int x;\n\nx = 5;").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[2].line, 1);
    assert_eq!(tokens[3].line, 3);
    assert_eq!(tokens[6].line, 3);
}

#[test]
fn test_newline_inside_string_does_not_advance_line() {
    let tokens = tokenize("s = \"a\nb\";\nx").unwrap();

    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[4].value, "x");
    assert_eq!(tokens[4].line, 2);
}

#[test]
fn test_spans() {
    let tokens = tokenize("int  abc;").unwrap();

    assert_eq!(tokens[0].span, Span { start: 0, end: 3 });
    assert_eq!(tokens[1].span, Span { start: 5, end: 8 });
    assert_eq!(tokens[2].span, Span { start: 8, end: 9 });
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("int x;\nint y;\nx = # 1;").unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: # on line 3");
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().offset, 18);
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_carriage_return_is_rejected() {
    let error = tokenize("int x;\r\n").unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: \r on line 1");
}

#[test]
fn test_non_ascii_character_is_rejected_whole() {
    let error = tokenize("int é;").unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: é on line 1");
}

#[test]
fn test_large_input_tokenizes_in_linear_time() {
    let source = ";".repeat(100_000);

    let start = std::time::Instant::now();
    let tokens = tokenize(&source).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(tokens.len(), 100_000);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Semicolon));
    assert!(
        elapsed < std::time::Duration::from_secs(10),
        "tokenizing took {:?}",
        elapsed
    );
}

#[test]
fn test_large_input_keeps_lines_and_errors() {
    let mut source = "int x;\nx = 1;\n".repeat(20_000);
    source.push_str("x = @;");

    let error = tokenize(&source).unwrap_err();

    assert_eq!(error.to_string(), "Unexpected token: @ on line 40001");
    assert_eq!(error.get_position().offset, source.len() - 2);
}
