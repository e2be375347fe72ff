//! Table element list dispatch and ordering

use super::parse;
use sql_syntax::ast::{
    column::ColumnOption, constraint::ConstraintKind, create_table::TableElement,
};

#[test]
fn test_elements_keep_source_order() {
    let stmt = parse(
        "CREATE TABLE orders (
            id BIGINT NOT NULL,
            CONSTRAINT pk_orders PRIMARY KEY (id),
            user_id BIGINT REFERENCES users (id),
            UNIQUE (user_id, placed_at),
            placed_at TIMESTAMP WITH TIME ZONE DEFAULT now(),
            CHECK (total >= 0),
            total NUMERIC(12, 2),
            FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
        )",
    )
    .unwrap();

    let shape: Vec<&str> = stmt
        .elements
        .iter()
        .map(|element| match element {
            TableElement::Column(_) => "column",
            TableElement::Constraint(c) => match c.kind {
                ConstraintKind::PrimaryKey(_) => "pk",
                ConstraintKind::Unique(_) => "unique",
                ConstraintKind::Check(_) => "check",
                ConstraintKind::ForeignKey(_) => "fk",
            },
            TableElement::SupplementalLogging(_) => "supplemental",
        })
        .collect();

    assert_eq!(
        shape,
        vec!["column", "pk", "column", "unique", "column", "check", "column", "fk"]
    );
}

#[test]
fn test_trailing_comma_matches_plain_list() {
    let with_comma = parse("CREATE TABLE t (a INT, b TEXT, PRIMARY KEY (a),)").unwrap();
    let without = parse("CREATE TABLE t (a INT, b TEXT, PRIMARY KEY (a))").unwrap();

    assert_eq!(with_comma.elements.len(), 3);
    assert_eq!(with_comma.to_string(), without.to_string());
}

#[test]
fn test_reserved_word_as_column_name() {
    let stmt = parse("CREATE TABLE t (key VARCHAR(20), values INT)").unwrap();

    let names: Vec<_> = stmt.columns().map(|c| c.name.value.as_str()).collect();
    assert_eq!(names, vec!["key", "values"]);
}

#[test]
fn test_quoted_column_names() {
    let stmt = parse(r#"CREATE TABLE t ("Order Id" INT, [group] INT, `desc` TEXT)"#).unwrap();

    let quotes: Vec<_> = stmt.columns().map(|c| c.name.quote).collect();
    assert_eq!(quotes, vec![Some('"'), Some('['), Some('`')]);
}

#[test]
fn test_column_options() {
    let stmt = parse(
        "CREATE TABLE t (
            id INT PRIMARY KEY,
            email VARCHAR(255) NOT NULL UNIQUE COLLATE nocase,
            status TEXT DEFAULT 'new' CHECK (status IN ('new', 'done'))
        )",
    )
    .unwrap();

    let columns: Vec<_> = stmt.columns().collect();
    assert!(columns[0].has_option(&ColumnOption::PrimaryKey));
    assert!(columns[1].has_option(&ColumnOption::NotNull));
    assert!(columns[1].has_option(&ColumnOption::Unique));
    assert_eq!(columns[2].options.len(), 2);
}

#[test]
fn test_tablespace_inside_elements_is_unsupported() {
    let err = parse("CREATE TABLE t (a INT, TABLESPACE ts)").unwrap_err();

    assert!(err.is_unsupported());
    assert_eq!(err.span().column, 24);
}

#[test]
fn test_missing_close_paren() {
    let err = parse("CREATE TABLE t (a INT b INT)").unwrap_err();

    assert!(!err.is_unsupported());
    assert!(err.to_string().contains("expected ')'"), "{err}");
}

#[test]
fn test_inherits() {
    let stmt = parse("CREATE TABLE cities_ext (state CHAR(2)) INHERITS (cities)").unwrap();

    assert_eq!(stmt.inherits.unwrap().to_string(), "cities");
}
