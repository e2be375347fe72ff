//! A dialect defined outside the crate, using only the public hooks.

use sql_syntax::{
    ast::create_table::{CreateTableStatement, TableKind},
    config::ParserFeatures,
    dialect::{DbType, Dialect},
    errors::ParseResult,
    parser::Parser,
};

/// Recognizes `SUPPLEMENTAL` but keeps the base property parser.
#[derive(Debug)]
struct PartialDialect;

impl Dialect for PartialDialect {
    fn db_type(&self) -> DbType {
        DbType::Generic
    }

    fn supports_supplemental_logging(&self) -> bool {
        true
    }

    fn create_table_before(
        &self,
        parser: &mut Parser<'_>,
        stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        if parser.cursor_mut().next_if_identifier("TEMP") {
            stmt.kind = TableKind::LocalTemporary;
        }
        Ok(())
    }

    fn parse_create_table_rest(
        &self,
        parser: &mut Parser<'_>,
        stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        if parser.cursor_mut().next_if_identifier("STRICT") {
            let value = parser.parse_primary()?;
            stmt.add_option("STRICT", value);
        }
        Ok(())
    }
}

fn parse(sql: &str) -> ParseResult<CreateTableStatement> {
    let mut parser = Parser::new(sql, &PartialDialect, ParserFeatures::empty())?;
    let stmt = parser.parse_create_table(true)?;
    parser.expect_end()?;
    Ok(stmt)
}

#[test]
fn test_base_supplemental_logging_is_unsupported() {
    let err = parse("CREATE TABLE t (a INT, SUPPLEMENTAL LOG DATA (ALL) COLUMNS)").unwrap_err();

    assert!(err.is_unsupported());
    assert_eq!(err.span().column, 24);
}

#[test]
fn test_overridden_hooks() {
    let stmt = parse("CREATE TEMP TABLE t (a INT) STRICT 1").unwrap();

    assert_eq!(stmt.kind, TableKind::LocalTemporary);
    assert_eq!(stmt.options[0].name, "STRICT");
}

#[test]
fn test_overridden_before_hook_drops_base_modifiers() {
    assert!(parse("CREATE GLOBAL TEMPORARY TABLE t (a INT)").is_err());
}
