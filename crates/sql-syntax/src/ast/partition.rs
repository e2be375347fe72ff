use crate::ast::{
    create_table::TableElement,
    expr::Expr,
    ident::{ObjectName, display_separated},
    span::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// At most one partitioning clause per statement: either the table is a
/// partition of a parent, or it declares how it is partitioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartitionClause {
    Of(PartitionOf),
    By(PartitionBy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionStrategy {
    Range,
    List,
    Hash,
}

/// `PARTITION BY {RANGE | LIST | HASH} (key, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionBy {
    pub strategy: PartitionStrategy,
    pub columns: Vec<Expr>,
    pub span: Span,
}

/// `PARTITION OF parent [(elements)] {FOR VALUES bound | DEFAULT}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionOf {
    pub parent: ObjectName,
    pub elements: Vec<TableElement>,
    pub bound: PartitionBound,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartitionBound {
    In(Vec<Expr>),
    Range { from: Vec<Expr>, to: Vec<Expr> },
    Hash { modulus: Expr, remainder: Expr },
    Default,
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionStrategy::Range => write!(f, "RANGE"),
            PartitionStrategy::List => write!(f, "LIST"),
            PartitionStrategy::Hash => write!(f, "HASH"),
        }
    }
}

impl fmt::Display for PartitionBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionBound::In(values) => {
                write!(f, "FOR VALUES IN ({})", display_separated(values, ", "))
            }
            PartitionBound::Range { from, to } => write!(
                f,
                "FOR VALUES FROM ({}) TO ({})",
                display_separated(from, ", "),
                display_separated(to, ", ")
            ),
            PartitionBound::Hash { modulus, remainder } => write!(
                f,
                "FOR VALUES WITH (MODULUS {}, REMAINDER {})",
                modulus, remainder
            ),
            PartitionBound::Default => write!(f, "DEFAULT"),
        }
    }
}

impl fmt::Display for PartitionClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionClause::By(by) => write!(
                f,
                "PARTITION BY {} ({})",
                by.strategy,
                display_separated(&by.columns, ", ")
            ),
            PartitionClause::Of(of) => {
                write!(f, "PARTITION OF {}", of.parent)?;
                if !of.elements.is_empty() {
                    write!(f, " ({})", display_separated(&of.elements, ", "))?;
                }
                write!(f, " {}", of.bound)
            }
        }
    }
}
