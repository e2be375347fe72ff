//! Dialect capability objects.
//!
//! The create-table engine calls every hook of [`Dialect`] unconditionally;
//! each hook decides on its own whether the current input concerns it.

use crate::{
    ast::{
        create_table::{CreateTableStatement, TableElement, TableKind},
        partition::{PartitionBy, PartitionOf},
        select::{RowLimitStyle, Select},
        supplemental::SupplementalLogging,
    },
    errors::{ParseError, ParseResult},
    parser::Parser,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod generic;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlserver;

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgreSqlDialect;
pub use sqlserver::SqlServerDialect;

/// Dialect tag carried by every parsed statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    #[default]
    Generic,
    Oracle,
    PostgreSql,
    SqlServer,
    MySql,
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DbType::Generic => "generic",
            DbType::Oracle => "oracle",
            DbType::PostgreSql => "postgresql",
            DbType::SqlServer => "sqlserver",
            DbType::MySql => "mysql",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DbType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(DbType::Generic),
            "oracle" => Ok(DbType::Oracle),
            "postgres" | "postgresql" | "pg" => Ok(DbType::PostgreSql),
            "mssql" | "sqlserver" => Ok(DbType::SqlServer),
            "mysql" => Ok(DbType::MySql),
            other => Err(format!("Unknown dialect: {}", other)),
        }
    }
}

/// Grammar extension points of the create-table engine.
///
/// Hooks that consume nothing leave the cursor where they found it and
/// return `Ok(None)` / `Ok(())`.
pub trait Dialect: fmt::Debug + Send + Sync {
    fn db_type(&self) -> DbType;

    fn new_create_statement(&self) -> CreateTableStatement {
        CreateTableStatement::new(self.db_type())
    }

    /// Modifiers between `CREATE` and `TABLE`.
    fn create_table_before(
        &self,
        parser: &mut Parser<'_>,
        stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        if parser.cursor_mut().next_if_identifier("GLOBAL") {
            parser.expect_word("TEMPORARY")?;
            stmt.kind = TableKind::GlobalTemporary;
        } else if parser.cursor_mut().next_if_identifier("LOCAL") {
            parser.expect_word("TEMPORARY")?;
            stmt.kind = TableKind::LocalTemporary;
        }

        if parser.cursor_mut().next_if_identifier("DIMENSION") {
            stmt.dimension = true;
        }
        Ok(())
    }

    fn supports_supplemental_logging(&self) -> bool {
        false
    }

    /// Tried first for every entry of the table element list.
    fn parse_dialect_element(&self, parser: &mut Parser<'_>) -> ParseResult<Option<TableElement>> {
        if self.supports_supplemental_logging() && parser.cursor().identifier_equals("SUPPLEMENTAL")
        {
            let props = self.parse_supplemental_logging_props(parser)?;
            return Ok(Some(TableElement::SupplementalLogging(props)));
        }
        Ok(None)
    }

    fn parse_supplemental_logging_props(
        &self,
        parser: &mut Parser<'_>,
    ) -> ParseResult<SupplementalLogging> {
        Err(ParseError::unsupported(
            format!("SUPPLEMENTAL LOG for dialect {}", self.db_type()),
            parser.cursor().span(),
        ))
    }

    /// Query body of `CREATE TABLE ... AS`.
    fn parse_select(&self, parser: &mut Parser<'_>) -> ParseResult<Select> {
        parser.parse_select(RowLimitStyle::Limit)
    }

    /// `WITH (...)` directly after the body or the select.
    fn parse_with_options(
        &self,
        _parser: &mut Parser<'_>,
        _stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        Ok(())
    }

    /// Called with the cursor on `PARTITION` when `BY` follows.
    fn parse_partition_by(&self, _parser: &mut Parser<'_>) -> ParseResult<Option<PartitionBy>> {
        Ok(None)
    }

    /// Called with the cursor on `PARTITION` when `OF` follows.
    fn parse_partition_of(&self, _parser: &mut Parser<'_>) -> ParseResult<Option<PartitionOf>> {
        Ok(None)
    }

    /// Trailing dialect clauses after the partition clause.
    fn parse_create_table_rest(
        &self,
        _parser: &mut Parser<'_>,
        _stmt: &mut CreateTableStatement,
    ) -> ParseResult<()> {
        Ok(())
    }
}

pub fn dialect_for(db_type: DbType) -> Box<dyn Dialect> {
    match db_type {
        DbType::Generic => Box::new(GenericDialect),
        DbType::Oracle => Box::new(OracleDialect),
        DbType::PostgreSql => Box::new(PostgreSqlDialect),
        DbType::SqlServer => Box::new(SqlServerDialect),
        DbType::MySql => Box::new(MySqlDialect),
    }
}

/// Builds a dialect from a case-insensitive name such as `pg` or `mssql`.
pub fn dialect_from_str(name: &str) -> Option<Box<dyn Dialect>> {
    name.parse::<DbType>().ok().map(dialect_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str_aliases() {
        for (name, expected) in [
            ("generic", DbType::Generic),
            ("Oracle", DbType::Oracle),
            ("pg", DbType::PostgreSql),
            ("postgres", DbType::PostgreSql),
            ("POSTGRESQL", DbType::PostgreSql),
            ("mssql", DbType::SqlServer),
            ("sqlserver", DbType::SqlServer),
            ("mysql", DbType::MySql),
        ] {
            let dialect = dialect_from_str(name).unwrap();
            assert_eq!(dialect.db_type(), expected, "{name}");
        }
    }

    #[test]
    fn test_unknown_dialect() {
        assert!(dialect_from_str("sybase").is_none());
        assert!("sybase".parse::<DbType>().is_err());
    }

    #[test]
    fn test_db_type_serde_names() {
        let json = serde_json::to_string(&DbType::PostgreSql).unwrap();
        assert_eq!(json, "\"postgresql\"");

        let parsed: DbType = serde_json::from_str("\"sqlserver\"").unwrap();
        assert_eq!(parsed, DbType::SqlServer);
    }
}
