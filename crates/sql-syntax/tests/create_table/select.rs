//! CREATE TABLE ... AS

use super::{parse, parse_with};
use sql_syntax::{ast::select::SelectQuery, config::ParserFeatures, dialect::DbType};

#[test]
fn test_select_with_clauses() {
    let stmt = parse(
        "CREATE TABLE top_users AS SELECT user_id, count(*) AS n FROM orders \
         WHERE status = 'done' GROUP BY user_id ORDER BY n DESC LIMIT 10",
    )
    .unwrap();

    let Some(SelectQuery::Select(select)) = &stmt.select else {
        panic!("expected select");
    };
    assert_eq!(select.projection.len(), 2);
    assert!(select.limit.is_some());
}

#[test]
fn test_columns_then_select() {
    let stmt = parse("CREATE TABLE t (a INT) AS (SELECT a FROM s)").unwrap();

    assert_eq!(stmt.elements.len(), 1);
    assert!(matches!(&stmt.select, Some(SelectQuery::Select(s)) if s.parenthesized));
}

#[test]
fn test_template_placeholder() {
    let stmt = parse_with(
        "CREATE TABLE t AS $select_body",
        DbType::Generic,
        ParserFeatures::TEMPLATE,
    )
    .unwrap();

    assert_eq!(
        stmt.select,
        Some(SelectQuery::Template("$select_body".to_string()))
    );
}

#[test]
fn test_template_requires_feature() {
    assert!(parse("CREATE TABLE t AS $select_body").is_err());
}
