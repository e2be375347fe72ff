//! End-to-end statements

use super::{parse, parse_with};
use sql_syntax::{
    ast::{
        create_table::TableElement, expr::ExprKind, literal::Literal, select::SelectQuery,
    },
    config::ParserFeatures,
    dialect::DbType,
};

#[test]
fn test_two_columns() {
    let stmt = parse("CREATE TABLE t (a INT, b INT)").unwrap();

    assert_eq!(stmt.name.to_string(), "t");
    let names: Vec<_> = stmt.columns().map(|c| c.name.value.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(stmt.constraints().count(), 0);
    assert!(stmt.partition.is_none());
    assert!(!stmt.if_not_exists);
}

#[test]
fn test_if_not_exists_with_primary_key() {
    let stmt = parse("CREATE TABLE IF NOT EXISTS t (a INT, PRIMARY KEY(a))").unwrap();

    assert!(stmt.if_not_exists);
    assert_eq!(stmt.name.to_string(), "t");
    assert_eq!(stmt.elements.len(), 2);
    assert!(matches!(stmt.elements[0], TableElement::Column(_)));
    assert!(matches!(stmt.elements[1], TableElement::Constraint(_)));
}

#[test]
fn test_trailing_comma() {
    let stmt = parse("CREATE TABLE t (a INT,)").unwrap();

    assert_eq!(stmt.elements.len(), 1);
    assert_eq!(stmt.columns().next().unwrap().name.value, "a");
}

#[test]
fn test_create_as_select() {
    let stmt = parse("CREATE TABLE t AS SELECT * FROM s").unwrap();

    assert!(stmt.elements.is_empty());
    let Some(SelectQuery::Select(select)) = &stmt.select else {
        panic!("expected a parsed select");
    };
    assert!(matches!(select.projection[0].expr.kind, ExprKind::Wildcard));
    assert_eq!(select.from[0].name.to_string(), "s");
}

#[test]
fn test_postgres_with_options() {
    let stmt = parse_with(
        "CREATE TABLE t (a INT) WITH (fillfactor=70)",
        DbType::PostgreSql,
        ParserFeatures::empty(),
    )
    .unwrap();

    assert_eq!(stmt.options.len(), 1);
    assert_eq!(stmt.options[0].name, "fillfactor");
    assert_eq!(
        stmt.options[0].value.kind,
        ExprKind::Literal(Literal::Number("70".to_string()))
    );
}

#[test]
fn test_tablespace() {
    let stmt = parse("CREATE TABLE t (a INT) TABLESPACE ts1").unwrap();

    assert_eq!(stmt.tablespace.unwrap().to_string(), "ts1");
}
