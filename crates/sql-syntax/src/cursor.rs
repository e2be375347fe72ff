//! Positioned view over a lexed token stream.

use crate::{
    ast::span::Span,
    config::ParserFeatures,
    lexer::token::{Token, TokenKind},
};

/// Opaque cursor position returned by [`TokenCursor::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavePoint {
    index: usize,
}

pub struct TokenCursor {
    tokens: Vec<Token>,
    index: usize,
    features: ParserFeatures,
    comments: Vec<String>,
    /// Highest token index whose comments were already buffered.
    /// `reset` never lowers it, so a replayed token does not add its
    /// comments twice.
    comments_seen: Option<usize>,
}

impl TokenCursor {
    /// An `Eof` token is appended when `tokens` does not end with one.
    pub fn new(mut tokens: Vec<Token>, features: ParserFeatures) -> Self {
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let (line, column, end) = tokens
                .last()
                .map(|t| (t.line, t.column + t.lexeme.len(), t.span.1))
                .unwrap_or((1, 1, 0));
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                line,
                column,
                span: (end, end),
                comments: Vec::new(),
            });
        }

        let mut cursor = TokenCursor {
            tokens,
            index: 0,
            features,
            comments: Vec::new(),
            comments_seen: None,
        };
        cursor.collect_comments();
        cursor
    }

    pub fn is_enabled(&self, feature: ParserFeatures) -> bool {
        self.features.contains(feature)
    }

    /// Current token; `Eof` once the input is exhausted.
    pub fn token(&self) -> &Token {
        self.peek_nth(0)
    }

    pub fn kind(&self) -> &TokenKind {
        &self.token().kind
    }

    /// Token `n` positions ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.index + n).min(last)]
    }

    pub fn span(&self) -> Span {
        Span::from(self.token())
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&Token> {
        self.index.checked_sub(1).map(|i| &self.tokens[i])
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind(), TokenKind::Eof)
    }

    /// Move to the next token and return the one just passed.
    pub fn advance(&mut self) -> Token {
        let token = self.token().clone();
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
            self.collect_comments();
        }
        token
    }

    /// True when the current token is a word (keyword or identifier) equal
    /// to `word`, ignoring case.
    pub fn identifier_equals(&self, word: &str) -> bool {
        self.token()
            .word()
            .is_some_and(|text| text.eq_ignore_ascii_case(word))
    }

    pub fn next_if_identifier(&mut self, word: &str) -> bool {
        if self.identifier_equals(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn mark(&self) -> SavePoint {
        SavePoint { index: self.index }
    }

    pub fn reset(&mut self, save_point: SavePoint) {
        self.index = save_point.index;
    }

    pub fn has_comment(&self) -> bool {
        !self.comments.is_empty()
    }

    pub fn read_and_reset_comments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.comments)
    }

    /// Short position description for error messages.
    pub fn info(&self) -> String {
        let token = self.token();
        format!(
            "pos {}, line {}, column {}, token {}",
            token.span.0, token.line, token.column, token.kind
        )
    }

    fn collect_comments(&mut self) {
        if !self.features.contains(ParserFeatures::KEEP_COMMENTS) {
            return;
        }
        if self.comments_seen.is_some_and(|seen| seen >= self.index) {
            return;
        }
        self.comments_seen = Some(self.index);
        let token = &self.tokens[self.index];
        self.comments.extend(token.comments.iter().cloned());
    }
}
