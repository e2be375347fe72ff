use crate::ast::{
    expr::Expr,
    ident::{Identifier, ObjectName, display_separated},
    span::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Table-level constraint: `[CONSTRAINT name] PRIMARY KEY (...)` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConstraint {
    pub name: Option<Identifier>,
    pub kind: ConstraintKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstraintKind {
    PrimaryKey(Vec<Identifier>),
    Unique(Vec<Identifier>),
    Check(Expr),
    ForeignKey(ForeignKey),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub columns: Vec<Identifier>,
    pub foreign_table: ObjectName,
    pub referred_columns: Vec<Identifier>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

/// `ON DELETE` / `ON UPDATE` actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferentialAction::Restrict => write!(f, "RESTRICT"),
            ReferentialAction::Cascade => write!(f, "CASCADE"),
            ReferentialAction::SetNull => write!(f, "SET NULL"),
            ReferentialAction::NoAction => write!(f, "NO ACTION"),
            ReferentialAction::SetDefault => write!(f, "SET DEFAULT"),
        }
    }
}

impl fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FOREIGN KEY ({}) REFERENCES {}",
            display_separated(&self.columns, ", "),
            self.foreign_table
        )?;
        if !self.referred_columns.is_empty() {
            write!(f, " ({})", display_separated(&self.referred_columns, ", "))?;
        }
        if let Some(action) = &self.on_delete {
            write!(f, " ON DELETE {}", action)?;
        }
        if let Some(action) = &self.on_update {
            write!(f, " ON UPDATE {}", action)?;
        }
        Ok(())
    }
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "CONSTRAINT {} ", name)?;
        }
        match &self.kind {
            ConstraintKind::PrimaryKey(cols) => {
                write!(f, "PRIMARY KEY ({})", display_separated(cols, ", "))
            }
            ConstraintKind::Unique(cols) => write!(f, "UNIQUE ({})", display_separated(cols, ", ")),
            ConstraintKind::Check(expr) => write!(f, "CHECK ({})", expr),
            ConstraintKind::ForeignKey(fk) => write!(f, "{}", fk),
        }
    }
}
