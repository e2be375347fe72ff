//! Dialect hook tests
//!
//! Each dialect capability object is exercised through full statements.

use sql_syntax::{
    ast::create_table::CreateTableStatement,
    config::{ParserConfig, ParserFeatures},
    dialect::DbType,
    errors::ParseResult,
    parse_create_table,
};

mod custom;
mod mysql;
mod oracle;
mod postgres;
mod sqlserver;

fn parse(sql: &str, dialect: DbType) -> ParseResult<CreateTableStatement> {
    parse_create_table(sql, &ParserConfig::new(dialect).with_features(ParserFeatures::empty()))
}
