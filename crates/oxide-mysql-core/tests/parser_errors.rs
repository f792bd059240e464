//! Tests for parser error cases: lexical errors, syntax errors and their
//! offsets, and trailing input.

mod common;
use common::*;

use oxide_mysql_core::{ErrorKind, ParseError};

#[test]
fn error_select_without_columns() {
    let err = parse_err("SELECT FROM;");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 7);
    assert_eq!(
        err.to_string(),
        "Unexpected token: expected `*` or column name, found keyword FROM at offset 7"
    );
}

#[test]
fn error_empty_input() {
    let err = parse_err("");
    assert_eq!(
        err,
        ParseError::Syntax {
            expected: String::from(
                "SELECT, INSERT, UPDATE, DELETE, CREATE, ALTER, DROP or TRUNCATE"
            ),
            found: String::from("end of input"),
            offset: 0,
        }
    );
}

#[test]
fn error_comment_only_input() {
    let err = parse_err("  -- nothing here\n");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 18);
}

#[test]
fn error_unsupported_statement() {
    let err = parse_err("GRANT ALL ON t TO u");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 0);
}

#[test]
fn error_incomplete_select() {
    let err = parse_err("SELECT a FROM");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 13);
}

#[test]
fn error_boolean_composition_unsupported() {
    let err = parse_err("SELECT a FROM t WHERE a = 1 AND b = 2");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 28);
}

#[test]
fn error_where_without_operator() {
    let err = parse_err("SELECT a FROM t WHERE a 1");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 24);
}

#[test]
fn error_order_without_by() {
    let err = parse_err("SELECT a FROM t ORDER a");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 22);
}

#[test]
fn error_limit_requires_integer() {
    let err = parse_err("SELECT a FROM t LIMIT 'ten'");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 22);

    let err = parse_err("SELECT a FROM t LIMIT -1");
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn error_keyword_used_as_identifier() {
    let err = parse_err("SELECT a FROM order");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 14);
}

#[test]
fn error_text_after_semicolon() {
    let err = parse_err("SELECT a FROM t; SELECT b FROM u");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 17);
}

#[test]
fn error_garbage_after_statement() {
    let err = parse_err("DELETE FROM t WHERE a = 1 1");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 26);
}

#[test]
fn double_dash_without_space_is_not_a_comment() {
    let err = parse_err("SELECT a FROM t WHERE a = 1--2");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), 27);

    let _ = parse("SELECT a FROM t WHERE a = 1-- 2");
}

#[test]
fn trailing_whitespace_and_comment_after_semicolon_allowed() {
    let _ = parse("SELECT a FROM t; -- done\n  ");
}

#[test]
fn error_unterminated_string() {
    let err = parse_err("SELECT a FROM t WHERE b = 'abc");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.offset(), 26);
}

#[test]
fn error_unterminated_quoted_identifier() {
    let err = parse_err("SELECT `abc FROM t");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.offset(), 7);
}

#[test]
fn error_unterminated_block_comment() {
    let err = parse_err("SELECT a /* FROM t");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.offset(), 9);
}

#[test]
fn error_unexpected_character() {
    let err = parse_err("SELECT a FROM t WHERE a = @x");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.offset(), 26);
}

#[test]
fn error_integer_out_of_range() {
    let err = parse_err("SELECT a FROM t WHERE a = 99999999999999999999");
    assert_eq!(err.kind(), ErrorKind::Lex);
    assert_eq!(err.offset(), 26);
}

#[test]
fn error_is_reported_once_without_partial_statement() {
    let result = oxide_mysql_core::parse("UPDATE t SET a = 1 WHERE");
    assert!(result.is_err());
}
