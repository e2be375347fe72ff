use crate::{ast::span::Span, lexer::error::LexerError};
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Failure of a statement parse. Parsing stops at the first error; no
/// partial statement is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token stream does not match the grammar at `span`.
    #[error("Syntax error at line {}, column {}: {message}", .span.line, .span.column)]
    Syntax { message: String, span: Span },

    /// The construct is recognized, but this dialect does not handle it.
    #[error("Unsupported construct at line {}, column {}: {construct}", .span.line, .span.column)]
    Unsupported { construct: String, span: Span },

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

impl ParseError {
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        ParseError::Syntax {
            message: message.into(),
            span,
        }
    }

    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        ParseError::Unsupported {
            construct: construct.into(),
            span,
        }
    }

    /// Location of the failure; lexer errors carry only line and column.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Syntax { span, .. } | ParseError::Unsupported { span, .. } => *span,
            ParseError::Lexer(LexerError::ParseError { line, column, .. })
            | ParseError::Lexer(LexerError::UnterminatedComment { line, column }) => {
                Span::new(0, 0, *line, *column)
            }
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ParseError::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParseError::syntax("expected TABLE, found INDEX", Span::new(7, 12, 1, 8));

        assert_eq!(
            err.to_string(),
            "Syntax error at line 1, column 8: expected TABLE, found INDEX"
        );
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_unsupported_error_is_distinguishable() {
        let span = Span::new(16, 26, 1, 17);
        let err = ParseError::unsupported("TABLESPACE inside table element list", span);

        assert!(err.is_unsupported());
        assert_eq!(err.span(), span);
    }

    #[test]
    fn test_lexer_error_position() {
        let err: ParseError = LexerError::UnterminatedComment { line: 3, column: 5 }.into();

        assert_eq!(err.span().line, 3);
        assert_eq!(err.span().column, 5);
    }
}
