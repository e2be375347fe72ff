use crate::{
    ast::create_table::CreateTableStatement,
    dialect::{DbType, Dialect},
    errors::ParseResult,
    lexer::token::{Keyword, TokenKind},
    parser::Parser,
};
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn db_type(&self) -> DbType {
        DbType::MySql
    }

    /// Table options after the body: `ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 ...`.
    fn parse_create_table_rest(
        &self,
        parser: &mut Parser<'_>,
        stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        loop {
            let Some(name) = parse_option_name(parser)? else {
                break;
            };
            parser.consume_token(&TokenKind::Eq);
            let value = parser.parse_primary()?;
            trace!(option = name, "Parsed MySQL table option");
            stmt.add_option(name, value);

            parser.consume_token(&TokenKind::Comma);
        }
        Ok(())
    }
}

/// Canonical option name, or `None` when the next token starts no option.
fn parse_option_name(parser: &mut Parser<'_>) -> ParseResult<Option<&'static str>> {
    let cursor = parser.cursor_mut();

    if cursor.next_if_identifier("ENGINE") {
        return Ok(Some("ENGINE"));
    }
    if cursor.next_if_identifier("AUTO_INCREMENT") {
        return Ok(Some("AUTO_INCREMENT"));
    }
    if cursor.next_if_identifier("COMMENT") {
        return Ok(Some("COMMENT"));
    }

    let defaulted = cursor.token().is_keyword(Keyword::Default);
    if defaulted {
        cursor.advance();
    }
    let cursor = parser.cursor_mut();
    if cursor.next_if_identifier("CHARSET") {
        return Ok(Some("CHARSET"));
    }
    if cursor.next_if_identifier("CHARACTER") {
        parser.expect_word("SET")?;
        return Ok(Some("CHARSET"));
    }
    if parser.parse_keyword(Keyword::Collate) {
        return Ok(Some("COLLATE"));
    }
    if defaulted {
        return Err(parser.expected("CHARSET, CHARACTER SET or COLLATE"));
    }
    Ok(None)
}
