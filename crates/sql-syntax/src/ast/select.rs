//! AST for the query embedded by `CREATE TABLE ... AS <select>`.

use crate::ast::{
    expr::Expr,
    ident::{Identifier, ObjectName, display_separated},
    span::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `AS ...`: a parsed select, or a deferred template placeholder
/// kept verbatim (e.g. `$select_body`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectQuery {
    Select(Box<Select>),
    Template(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub distinct: bool,
    /// The list of columns or expressions to be returned.
    pub projection: Vec<SelectItem>,
    /// Comma-separated `FROM` list.
    pub from: Vec<TableRef>,
    pub selection: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<RowLimit>,
    /// Whether the query was wrapped in parentheses.
    #[serde(default)]
    pub parenthesized: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: ObjectName,
    pub alias: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByExpr {
    pub expr: Expr,
    /// `Some(true)` for ASC, `Some(false)` for DESC
    pub asc: Option<bool>,
}

/// How many rows to return, in either `LIMIT n OFFSET m` or
/// `OFFSET m ROWS FETCH FIRST n ROWS ONLY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowLimitStyle {
    #[default]
    Limit,
    Fetch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLimit {
    pub style: RowLimitStyle,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", alias)?;
        }
        Ok(())
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " {}", alias)?;
        }
        Ok(())
    }
}

impl fmt::Display for OrderByExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        match self.asc {
            Some(true) => write!(f, " ASC"),
            Some(false) => write!(f, " DESC"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for RowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            RowLimitStyle::Limit => {
                let mut sep = "";
                if let Some(limit) = &self.limit {
                    write!(f, "LIMIT {}", limit)?;
                    sep = " ";
                }
                if let Some(offset) = &self.offset {
                    write!(f, "{}OFFSET {}", sep, offset)?;
                }
                Ok(())
            }
            RowLimitStyle::Fetch => {
                let mut sep = "";
                if let Some(offset) = &self.offset {
                    write!(f, "OFFSET {} ROWS", offset)?;
                    sep = " ";
                }
                if let Some(limit) = &self.limit {
                    write!(f, "{}FETCH FIRST {} ROWS ONLY", sep, limit)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parenthesized {
            write!(f, "(")?;
        }
        write!(f, "SELECT ")?;
        if self.distinct {
            write!(f, "DISTINCT ")?;
        }
        write!(f, "{}", display_separated(&self.projection, ", "))?;
        if !self.from.is_empty() {
            write!(f, " FROM {}", display_separated(&self.from, ", "))?;
        }
        if let Some(selection) = &self.selection {
            write!(f, " WHERE {}", selection)?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", display_separated(&self.group_by, ", "))?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {}", having)?;
        }
        if !self.order_by.is_empty() {
            write!(f, " ORDER BY {}", display_separated(&self.order_by, ", "))?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " {}", limit)?;
        }
        if self.parenthesized {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectQuery::Select(select) => write!(f, "{}", select),
            SelectQuery::Template(placeholder) => write!(f, "{}", placeholder),
        }
    }
}
