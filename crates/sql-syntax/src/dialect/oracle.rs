use crate::{
    ast::{
        select::{RowLimitStyle, Select},
        supplemental::{SupplementalLogData, SupplementalLogging, SupplementalLoggingKind},
    },
    dialect::{DbType, Dialect},
    errors::{ParseError, ParseResult},
    lexer::token::{Keyword, TokenKind},
    parser::Parser,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl Dialect for OracleDialect {
    fn db_type(&self) -> DbType {
        DbType::Oracle
    }

    fn supports_supplemental_logging(&self) -> bool {
        true
    }

    /// `SUPPLEMENTAL LOG DATA (...) COLUMNS` or
    /// `SUPPLEMENTAL LOG GROUP name (col, ...) [ALWAYS]`
    fn parse_supplemental_logging_props(
        &self,
        parser: &mut Parser<'_>,
    ) -> ParseResult<SupplementalLogging> {
        let start = parser.cursor().span();
        parser.expect_word("SUPPLEMENTAL")?;
        parser.expect_word("LOG")?;

        let kind = if parser.cursor_mut().next_if_identifier("DATA") {
            parser.expect_token(&TokenKind::LeftParen)?;
            let data = parser.parse_comma_separated(parse_log_data)?;
            parser.expect_token(&TokenKind::RightParen)?;
            parser.expect_word("COLUMNS")?;
            SupplementalLoggingKind::Data(data)
        } else if parser.parse_keyword(Keyword::Group) {
            let name = parser.parse_identifier()?;
            let columns = parser.parse_parenthesized_columns()?;
            let always = parser.cursor_mut().next_if_identifier("ALWAYS");
            SupplementalLoggingKind::Group {
                name,
                columns,
                always,
            }
        } else {
            return Err(parser.expected("DATA or GROUP"));
        };

        debug!("Parsed Oracle supplemental logging property");
        Ok(SupplementalLogging {
            kind,
            span: parser.span_from(start),
        })
    }

    fn parse_select(&self, parser: &mut Parser<'_>) -> ParseResult<Select> {
        parser.parse_select(RowLimitStyle::Fetch)
    }
}

fn parse_log_data(parser: &mut Parser<'_>) -> ParseResult<SupplementalLogData> {
    if parser.parse_keyword(Keyword::All) {
        Ok(SupplementalLogData::All)
    } else if parser.parse_keyword(Keyword::Primary) {
        parser.expect_keyword(Keyword::Key)?;
        Ok(SupplementalLogData::PrimaryKey)
    } else if parser.parse_keyword(Keyword::Unique) {
        parser.cursor_mut().next_if_identifier("INDEX");
        Ok(SupplementalLogData::Unique)
    } else if parser.parse_keyword(Keyword::Foreign) {
        parser.expect_keyword(Keyword::Key)?;
        Ok(SupplementalLogData::ForeignKey)
    } else {
        Err(ParseError::syntax(
            format!(
                "expected ALL, PRIMARY KEY, UNIQUE or FOREIGN KEY, found {}",
                parser.cursor().kind()
            ),
            parser.cursor().span(),
        ))
    }
}
