//! Modifiers between CREATE and the table name

use super::{parse, parse_with};
use sql_syntax::{
    ast::create_table::TableKind, config::ParserFeatures, dialect::DbType,
    errors::ParseError,
};

#[test]
fn test_global_temporary() {
    let stmt = parse("CREATE GLOBAL TEMPORARY TABLE t (a INT)").unwrap();
    assert_eq!(stmt.kind, TableKind::GlobalTemporary);

    let stmt = parse("create local temporary table t (a int)").unwrap();
    assert_eq!(stmt.kind, TableKind::LocalTemporary);
}

#[test]
fn test_global_without_temporary() {
    let err = parse("CREATE GLOBAL TABLE t (a INT)").unwrap_err();

    match err {
        ParseError::Syntax { message, span } => {
            assert_eq!(message, "expected TEMPORARY, found TABLE");
            assert_eq!(span.column, 15);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_dimension() {
    let stmt = parse("CREATE DIMENSION TABLE d (a INT)").unwrap();

    assert!(stmt.dimension);
    assert_eq!(stmt.kind, TableKind::Ordinary);
}

#[test]
fn test_if_not_exists_any_casing() {
    for sql in [
        "CREATE TABLE IF NOT EXISTS t (a INT)",
        "create table if not exists t (a int)",
        "Create Table If Not Exists t (a Int)",
    ] {
        let stmt = parse(sql).unwrap();
        assert!(stmt.if_not_exists, "{sql}");
        assert_eq!(stmt.name.to_string(), "t");
        assert_eq!(stmt.elements.len(), 1);
    }
}

#[test]
fn test_incomplete_if_not_exists() {
    assert!(parse("CREATE TABLE IF EXISTS t (a INT)").is_err());
    assert!(parse("CREATE TABLE IF NOT t (a INT)").is_err());
}

#[test]
fn test_qualified_name() {
    let stmt = parse(r#"CREATE TABLE sales."Orders" (a INT)"#).unwrap();

    assert_eq!(stmt.name.0.len(), 2);
    assert_eq!(stmt.name.base_name(), Some("Orders"));
}

#[test]
fn test_create_required() {
    let err = parse("TABLE t (a INT)").unwrap_err();
    assert!(err.to_string().contains("expected CREATE"));
}

#[test]
fn test_before_comments_kept_only_when_enabled() {
    let sql = "-- audit table\n/* v2 */\nCREATE TABLE t (a INT)";

    let stmt = parse(sql).unwrap();
    assert!(stmt.before_comments.is_empty());

    let stmt = parse_with(sql, DbType::Generic, ParserFeatures::KEEP_COMMENTS).unwrap();
    assert_eq!(stmt.before_comments, vec!["audit table", "v2"]);
}

#[test]
fn test_trailing_tokens_rejected() {
    assert!(parse("CREATE TABLE t (a INT);").is_ok());

    let err = parse("CREATE TABLE t (a INT) garbage").unwrap_err();
    assert!(err.to_string().contains("expected end of statement"));
}
