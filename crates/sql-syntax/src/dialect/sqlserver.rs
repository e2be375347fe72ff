use crate::{
    ast::create_table::CreateTableStatement,
    dialect::{DbType, Dialect},
    errors::ParseResult,
    lexer::token::Keyword,
    parser::Parser,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerDialect;

impl Dialect for SqlServerDialect {
    fn db_type(&self) -> DbType {
        DbType::SqlServer
    }

    /// Trailing `WITH (DATA_COMPRESSION = PAGE, ...)`.
    fn parse_create_table_rest(
        &self,
        parser: &mut Parser<'_>,
        stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        if parser.cursor().token().is_keyword(Keyword::With) {
            parser.parse_table_options(stmt)?;
        }
        Ok(())
    }
}
