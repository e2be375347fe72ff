use crate::ast::{
    data_type::DataType,
    ident::{Identifier, ObjectName, display_separated},
    literal::Literal,
    operator::{BinaryOperator, UnaryOperator},
    span::Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Scalar expression forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    Literal(Literal),
    Identifier(Identifier),
    CompoundIdentifier(Vec<Identifier>),
    /// Placeholder such as `$1`, `:name` or `?`
    Variant(String),
    Wildcard,
    QualifiedWildcard(ObjectName),
    Unary {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: BinaryOperator,
        right: Box<Expr>,
    },
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    Function {
        name: ObjectName,
        args: Vec<Expr>,
        distinct: bool,
    },
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    Nested(Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(lit) => write!(f, "{}", lit),
            ExprKind::Identifier(ident) => write!(f, "{}", ident),
            ExprKind::CompoundIdentifier(parts) => write!(f, "{}", display_separated(parts, ".")),
            ExprKind::Variant(v) => write!(f, "{}", v),
            ExprKind::Wildcard => write!(f, "*"),
            ExprKind::QualifiedWildcard(prefix) => write!(f, "{}.*", prefix),
            ExprKind::Unary { operator, operand } => {
                let operand = operand.to_string();
                // `--` would start a line comment
                if *operator != UnaryOperator::Not && operand.starts_with(['-', '+']) {
                    write!(f, "{} {}", operator, operand)
                } else {
                    write!(f, "{}{}", operator, operand)
                }
            }
            ExprKind::Binary {
                left,
                operator,
                right,
            } => write!(f, "{} {} {}", left, operator, right),
            ExprKind::IsNull(expr) => write!(f, "{} IS NULL", expr),
            ExprKind::IsNotNull(expr) => write!(f, "{} IS NOT NULL", expr),
            ExprKind::InList {
                expr,
                list,
                negated,
            } => write!(
                f,
                "{} {}IN ({})",
                expr,
                if *negated { "NOT " } else { "" },
                display_separated(list, ", ")
            ),
            ExprKind::Function {
                name,
                args,
                distinct,
            } => write!(
                f,
                "{}({}{})",
                name,
                if *distinct { "DISTINCT " } else { "" },
                display_separated(args, ", ")
            ),
            ExprKind::Cast { expr, data_type } => write!(f, "{}::{}", expr, data_type),
            ExprKind::Nested(expr) => write!(f, "({})", expr),
        }
    }
}
