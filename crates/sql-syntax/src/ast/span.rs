use crate::lexer::token::Token;
use serde::{Deserialize, Serialize};

/// Source location of a node or token: byte range plus 1-based line/column
/// of the first byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Span covering `self` through `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end.max(self.end),
            line: self.line,
            column: self.column,
        }
    }
}

impl From<&Token> for Span {
    fn from(token: &Token) -> Self {
        Span::new(token.span.0, token.span.1, token.line, token.column)
    }
}
