//! Printing parsed statements back as SQL

use super::{parse, parse_with};
use sql_syntax::{config::ParserFeatures, dialect::DbType};

#[test]
fn test_print_is_stable() {
    let inputs = [
        "CREATE TABLE IF NOT EXISTS app.users (id BIGINT NOT NULL, email VARCHAR(255) UNIQUE, CONSTRAINT pk_users PRIMARY KEY (id))",
        "CREATE GLOBAL TEMPORARY TABLE t (a INT DEFAULT -1, b NUMERIC(10, 2) CHECK (b > 0 AND b < 100))",
        "CREATE TABLE t AS SELECT a, b FROM s WHERE a IS NOT NULL ORDER BY b DESC",
        "CREATE TABLE t (a INT) TABLESPACE ts1",
    ];

    for sql in inputs {
        let printed = parse(sql).unwrap().to_string();
        assert_eq!(printed, sql);
        assert_eq!(parse(&printed).unwrap().to_string(), printed);
    }
}

#[test]
fn test_print_with_comments() {
    let stmt = parse_with(
        "-- owner: billing\nCREATE TABLE t (a INT)",
        DbType::Generic,
        ParserFeatures::KEEP_COMMENTS,
    )
    .unwrap();

    assert_eq!(stmt.to_string(), "/* owner: billing */\nCREATE TABLE t (a INT)");
}

#[test]
fn test_print_nested_negation() {
    let sql = "CREATE TABLE t (a INT DEFAULT - -1, b INT DEFAULT - +2, c INT)";
    let printed = parse(sql).unwrap().to_string();

    assert_eq!(printed, sql);
    let reparsed = parse(&printed).unwrap();
    assert_eq!(reparsed.elements.len(), 3);
    assert_eq!(reparsed.to_string(), printed);
}

#[test]
fn test_print_line_comment_containing_block_end() {
    let stmt = parse_with(
        "-- a */ b\n/* v2 */\nCREATE TABLE t (a INT)",
        DbType::Generic,
        ParserFeatures::KEEP_COMMENTS,
    )
    .unwrap();

    let printed = stmt.to_string();
    assert_eq!(printed, "-- a */ b\n/* v2 */\nCREATE TABLE t (a INT)");

    let reparsed = parse_with(&printed, DbType::Generic, ParserFeatures::KEEP_COMMENTS).unwrap();
    assert_eq!(reparsed.before_comments, vec!["a */ b", "v2"]);
}
