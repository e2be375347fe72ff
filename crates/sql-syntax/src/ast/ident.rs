use crate::{ast::span::Span, lexer::token::closing_quote};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single name part, optionally quoted (`"x"`, `` `x` ``, `[x]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub value: String,
    pub quote: Option<char>,
    pub span: Span,
}

impl Identifier {
    pub fn new(value: &str, span: Span) -> Self {
        Self {
            value: value.to_string(),
            quote: None,
            span,
        }
    }

    pub fn quoted(value: &str, quote: char, span: Span) -> Self {
        Self {
            value: value.to_string(),
            quote: Some(quote),
            span,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote {
            Some(q) => {
                let close = closing_quote(q);
                let escaped = self
                    .value
                    .replace(close, &format!("{close}{close}"));
                write!(f, "{}{}{}", q, escaped, close)
            }
            None => write!(f, "{}", self.value),
        }
    }
}

/// Dot-separated, possibly qualified name (e.g. `sales.public.orders`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectName(pub Vec<Identifier>);

impl ObjectName {
    /// The unqualified last part.
    pub fn base_name(&self) -> Option<&str> {
        self.0.last().map(|ident| ident.value.as_str())
    }

    pub fn span(&self) -> Span {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::default(),
        }
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_separated(&self.0, "."))
    }
}

pub(crate) fn display_separated<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
