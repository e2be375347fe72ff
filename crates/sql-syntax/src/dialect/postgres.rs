use crate::{
    ast::{
        create_table::CreateTableStatement,
        partition::{PartitionBound, PartitionBy, PartitionOf, PartitionStrategy},
    },
    dialect::{DbType, Dialect},
    errors::ParseResult,
    lexer::token::{Keyword, TokenKind},
    parser::Parser,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSqlDialect;

impl Dialect for PostgreSqlDialect {
    fn db_type(&self) -> DbType {
        DbType::PostgreSql
    }

    fn parse_with_options(
        &self,
        parser: &mut Parser<'_>,
        stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        if parser.cursor().token().is_keyword(Keyword::With) {
            parser.parse_table_options(stmt)?;
        }
        Ok(())
    }

    /// `PARTITION BY {RANGE | LIST | HASH} (key, ...)`
    fn parse_partition_by(&self, parser: &mut Parser<'_>) -> ParseResult<Option<PartitionBy>> {
        let start = parser.cursor().span();
        parser.expect_keyword(Keyword::Partition)?;
        parser.expect_keyword(Keyword::By)?;

        let strategy = if parser.cursor_mut().next_if_identifier("RANGE") {
            PartitionStrategy::Range
        } else if parser.cursor_mut().next_if_identifier("LIST") {
            PartitionStrategy::List
        } else if parser.cursor_mut().next_if_identifier("HASH") {
            PartitionStrategy::Hash
        } else {
            return Err(parser.expected("RANGE, LIST or HASH"));
        };

        let columns = parser.parse_parenthesized_exprs()?;
        debug!(strategy = %strategy, keys = columns.len(), "Parsed PARTITION BY");

        Ok(Some(PartitionBy {
            strategy,
            columns,
            span: parser.span_from(start),
        }))
    }

    /// `PARTITION OF parent [(elements)] {FOR VALUES bound | DEFAULT}`
    fn parse_partition_of(&self, parser: &mut Parser<'_>) -> ParseResult<Option<PartitionOf>> {
        let start = parser.cursor().span();
        parser.expect_keyword(Keyword::Partition)?;
        parser.expect_keyword(Keyword::Of)?;
        let parent = parser.parse_object_name()?;

        let elements = if parser.consume_token(&TokenKind::LeftParen) {
            parser.parse_table_elements()?
        } else {
            Vec::new()
        };

        let bound = parse_partition_bound(parser)?;
        debug!(parent = %parent, "Parsed PARTITION OF");

        Ok(Some(PartitionOf {
            parent,
            elements,
            bound,
            span: parser.span_from(start),
        }))
    }
}

fn parse_partition_bound(parser: &mut Parser<'_>) -> ParseResult<PartitionBound> {
    if parser.parse_keyword(Keyword::Default) {
        return Ok(PartitionBound::Default);
    }

    parser.expect_keyword(Keyword::For)?;
    parser.expect_keyword(Keyword::Values)?;

    if parser.parse_keyword(Keyword::In) {
        Ok(PartitionBound::In(parser.parse_parenthesized_exprs()?))
    } else if parser.parse_keyword(Keyword::From) {
        let from = parser.parse_parenthesized_exprs()?;
        parser.expect_keyword(Keyword::To)?;
        let to = parser.parse_parenthesized_exprs()?;
        Ok(PartitionBound::Range { from, to })
    } else if parser.parse_keyword(Keyword::With) {
        parser.expect_token(&TokenKind::LeftParen)?;
        parser.expect_word("MODULUS")?;
        let modulus = parser.parse_expr()?;
        parser.expect_token(&TokenKind::Comma)?;
        parser.expect_word("REMAINDER")?;
        let remainder = parser.parse_expr()?;
        parser.expect_token(&TokenKind::RightParen)?;
        Ok(PartitionBound::Hash { modulus, remainder })
    } else {
        Err(parser.expected("IN, FROM or WITH"))
    }
}
