//! CREATE TABLE engine tests
//!
//! These tests drive whole statements through the parser and check the
//! resulting statement structure.

use sql_syntax::{
    ast::create_table::CreateTableStatement,
    config::{ParserConfig, ParserFeatures},
    dialect::DbType,
    errors::ParseResult,
    parse_create_table,
};

mod elements;
mod modifiers;
mod round_trip;
mod scenarios;
mod select;

fn parse(sql: &str) -> ParseResult<CreateTableStatement> {
    parse_create_table(sql, &ParserConfig::default())
}

fn parse_with(sql: &str, dialect: DbType, features: ParserFeatures) -> ParseResult<CreateTableStatement> {
    parse_create_table(sql, &ParserConfig::new(dialect).with_features(features))
}
