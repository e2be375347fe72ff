use crate::ast::{
    constraint::ReferentialAction,
    data_type::DataType,
    expr::Expr,
    ident::{Identifier, ObjectName, display_separated},
    literal::Literal,
    span::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Identifier,
    /// Absent for type-less columns (SQLite style, `PARTITION OF` bodies).
    pub data_type: Option<DataType>,
    pub options: Vec<ColumnOptionDef>,
    pub span: Span,
}

impl ColumnDefinition {
    pub fn has_option(&self, option: &ColumnOption) -> bool {
        self.options.iter().any(|def| &def.option == option)
    }
}

/// A column option, optionally named with `CONSTRAINT name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOptionDef {
    pub name: Option<Identifier>,
    pub option: ColumnOption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnOption {
    NotNull,
    Null,
    Default(Expr),
    PrimaryKey,
    Unique,
    Check(Expr),
    References {
        table: ObjectName,
        columns: Vec<Identifier>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
    },
    Collate(ObjectName),
    AutoIncrement,
    Comment(Literal),
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnOption::NotNull => write!(f, "NOT NULL"),
            ColumnOption::Null => write!(f, "NULL"),
            ColumnOption::Default(expr) => write!(f, "DEFAULT {}", expr),
            ColumnOption::PrimaryKey => write!(f, "PRIMARY KEY"),
            ColumnOption::Unique => write!(f, "UNIQUE"),
            ColumnOption::Check(expr) => write!(f, "CHECK ({})", expr),
            ColumnOption::References {
                table,
                columns,
                on_delete,
                on_update,
            } => {
                write!(f, "REFERENCES {}", table)?;
                if !columns.is_empty() {
                    write!(f, " ({})", display_separated(columns, ", "))?;
                }
                if let Some(action) = on_delete {
                    write!(f, " ON DELETE {}", action)?;
                }
                if let Some(action) = on_update {
                    write!(f, " ON UPDATE {}", action)?;
                }
                Ok(())
            }
            ColumnOption::Collate(name) => write!(f, "COLLATE {}", name),
            ColumnOption::AutoIncrement => write!(f, "AUTO_INCREMENT"),
            ColumnOption::Comment(text) => write!(f, "COMMENT {}", text),
        }
    }
}

impl fmt::Display for ColumnOptionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "CONSTRAINT {} ", name)?;
        }
        write!(f, "{}", self.option)
    }
}

impl fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(data_type) = &self.data_type {
            write!(f, " {}", data_type)?;
        }
        for option in &self.options {
            write!(f, " {}", option)?;
        }
        Ok(())
    }
}
