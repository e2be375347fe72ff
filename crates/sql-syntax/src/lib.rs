//! Clause-level `CREATE TABLE` parser with dialect extension hooks.
//!
//! ```ignore
//! use sql_syntax::{config::ParserConfig, dialect::DbType, parse_create_table};
//!
//! let config = ParserConfig::new(DbType::PostgreSql);
//! let stmt = parse_create_table("CREATE TABLE t (a INT) WITH (fillfactor=70)", &config)?;
//! assert_eq!(stmt.options[0].name, "fillfactor");
//! ```

use crate::{
    ast::create_table::CreateTableStatement, config::ParserConfig, dialect::dialect_for,
    errors::ParseResult, parser::Parser,
};

pub mod ast;
pub mod config;
pub mod cursor;
pub mod dialect;
pub mod errors;
pub mod lexer;
pub mod parser;

/// Parses a single statement, accepting one trailing `;`.
pub fn parse_create_table(sql: &str, config: &ParserConfig) -> ParseResult<CreateTableStatement> {
    let dialect = dialect_for(config.dialect);
    let mut parser = Parser::new(sql, dialect.as_ref(), config.features)?;
    let stmt = parser.parse_create_table(true)?;
    parser.expect_end()?;
    Ok(stmt)
}
