//! Defines the AST for a CREATE TABLE statement.

use crate::{
    ast::{
        column::ColumnDefinition,
        constraint::TableConstraint,
        expr::Expr,
        ident::{ObjectName, display_separated},
        partition::{PartitionBy, PartitionClause, PartitionOf},
        select::SelectQuery,
        supplemental::SupplementalLogging,
    },
    dialect::DbType,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableKind {
    #[default]
    Ordinary,
    GlobalTemporary,
    LocalTemporary,
}

/// One entry of the parenthesized table body. The variant is decided from
/// the token that starts the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableElement {
    Column(ColumnDefinition),
    Constraint(TableConstraint),
    SupplementalLogging(SupplementalLogging),
}

impl fmt::Display for TableElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableElement::Column(column) => write!(f, "{}", column),
            TableElement::Constraint(constraint) => write!(f, "{}", constraint),
            TableElement::SupplementalLogging(props) => write!(f, "{}", props),
        }
    }
}

/// `name = value` table option. Duplicates are kept in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOption {
    pub name: String,
    pub value: Expr,
}

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    pub db_type: DbType,
    pub name: ObjectName,
    pub if_not_exists: bool,
    pub kind: TableKind,
    pub dimension: bool,
    pub elements: Vec<TableElement>,
    pub inherits: Option<ObjectName>,
    pub select: Option<SelectQuery>,
    pub options: Vec<TableOption>,
    pub tablespace: Option<ObjectName>,
    pub partition: Option<PartitionClause>,
    pub before_comments: Vec<String>,
}

impl CreateTableStatement {
    pub fn new(db_type: DbType) -> Self {
        Self {
            db_type,
            name: ObjectName::default(),
            if_not_exists: false,
            kind: TableKind::Ordinary,
            dimension: false,
            elements: Vec::new(),
            inherits: None,
            select: None,
            options: Vec::new(),
            tablespace: None,
            partition: None,
            before_comments: Vec::new(),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.elements.iter().filter_map(|element| match element {
            TableElement::Column(column) => Some(column),
            _ => None,
        })
    }

    pub fn constraints(&self) -> impl Iterator<Item = &TableConstraint> {
        self.elements.iter().filter_map(|element| match element {
            TableElement::Constraint(constraint) => Some(constraint),
            _ => None,
        })
    }

    pub fn add_option(&mut self, name: impl Into<String>, value: Expr) {
        self.options.push(TableOption {
            name: name.into(),
            value,
        });
    }

    pub fn add_before_comments(&mut self, comments: Vec<String>) {
        self.before_comments.extend(comments);
    }

    pub fn partition_of(&self) -> Option<&PartitionOf> {
        match &self.partition {
            Some(PartitionClause::Of(of)) => Some(of),
            _ => None,
        }
    }

    pub fn partitioning(&self) -> Option<&PartitionBy> {
        match &self.partition {
            Some(PartitionClause::By(by)) => Some(by),
            _ => None,
        }
    }

    fn fmt_options(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.is_empty() {
            return Ok(());
        }
        if self.db_type == DbType::MySql {
            for option in &self.options {
                write!(f, " {}={}", option.name, option.value)?;
            }
            return Ok(());
        }
        let items = self
            .options
            .iter()
            .map(|option| format!("{} = {}", option.name, option.value))
            .collect::<Vec<_>>();
        write!(f, " WITH ({})", items.join(", "))
    }
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for comment in &self.before_comments {
            // Only line comments can contain `*/`, and they never span lines
            if comment.contains("*/") {
                writeln!(f, "-- {}", comment)?;
            } else {
                writeln!(f, "/* {} */", comment)?;
            }
        }
        write!(f, "CREATE ")?;
        match self.kind {
            TableKind::Ordinary => {}
            TableKind::GlobalTemporary => write!(f, "GLOBAL TEMPORARY ")?,
            TableKind::LocalTemporary => write!(f, "LOCAL TEMPORARY ")?,
        }
        if self.dimension {
            write!(f, "DIMENSION ")?;
        }
        write!(f, "TABLE ")?;
        if self.if_not_exists {
            write!(f, "IF NOT EXISTS ")?;
        }
        write!(f, "{}", self.name)?;
        if !self.elements.is_empty() {
            write!(f, " ({})", display_separated(&self.elements, ", "))?;
        }
        if let Some(parent) = &self.inherits {
            write!(f, " INHERITS ({})", parent)?;
        }
        if let Some(select) = &self.select {
            write!(f, " AS {}", select)?;
        }
        // PostgreSQL's WITH (...) sits before TABLESPACE; other dialects
        // carry their options in the trailing position.
        let options_first = self.db_type == DbType::PostgreSql;
        if options_first {
            self.fmt_options(f)?;
        }
        if let Some(tablespace) = &self.tablespace {
            write!(f, " TABLESPACE {}", tablespace)?;
        }
        if let Some(partition) = &self.partition {
            write!(f, " {}", partition)?;
        }
        if !options_first {
            self.fmt_options(f)?;
        }
        Ok(())
    }
}
