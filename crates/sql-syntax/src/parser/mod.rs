//! Recursive-descent parser over the token cursor.
//!
//! `Parser` owns the cursor for one statement. Fragment, select and
//! create-table parsing are `impl Parser` blocks in the submodules, and
//! dialect hooks receive `&mut Parser` while they hold control.

use crate::{
    ast::span::Span,
    config::ParserFeatures,
    cursor::TokenCursor,
    dialect::Dialect,
    errors::{ParseError, ParseResult},
    lexer::{
        Lexer,
        token::{Keyword, Token, TokenKind},
    },
};

pub mod create_table;
pub mod fragment;
pub mod select;

pub struct Parser<'a> {
    cursor: TokenCursor,
    dialect: &'a dyn Dialect,
}

impl<'a> Parser<'a> {
    /// Tokenizes `sql` and positions the parser on its first token.
    pub fn new(sql: &str, dialect: &'a dyn Dialect, features: ParserFeatures) -> ParseResult<Self> {
        let tokens = Lexer::new().tokenize(sql)?;
        Ok(Self::from_tokens(tokens, dialect, features))
    }

    pub fn from_tokens(tokens: Vec<Token>, dialect: &'a dyn Dialect, features: ParserFeatures) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens, features),
            dialect,
        }
    }

    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut TokenCursor {
        &mut self.cursor
    }

    /// Accepts an optional `;` and then requires the end of input.
    pub fn expect_end(&mut self) -> ParseResult<()> {
        self.consume_token(&TokenKind::Semicolon);
        if self.cursor.is_eof() {
            Ok(())
        } else {
            Err(self.expected("end of statement"))
        }
    }

    /// Syntax error for the current token.
    pub fn expected(&self, what: &str) -> ParseError {
        ParseError::syntax(
            format!("expected {}, found {}", what, self.cursor.kind()),
            self.cursor.span(),
        )
    }

    /// Span from `start` through the last consumed token.
    pub fn span_from(&self, start: Span) -> Span {
        match self.cursor.previous() {
            Some(token) => start.to(Span::from(token)),
            None => start,
        }
    }

    pub fn parse_keyword(&mut self, keyword: Keyword) -> bool {
        if self.cursor.token().is_keyword(keyword) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<Token> {
        if self.cursor.token().is_keyword(keyword) {
            Ok(self.cursor.advance())
        } else {
            Err(self.expected(keyword.as_str()))
        }
    }

    /// Requires a word with the given text, keyword or not.
    pub fn expect_word(&mut self, word: &str) -> ParseResult<Token> {
        if self.cursor.identifier_equals(word) {
            Ok(self.cursor.advance())
        } else {
            Err(self.expected(word))
        }
    }

    pub fn consume_token(&mut self, kind: &TokenKind) -> bool {
        if self.cursor.kind() == kind {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    pub fn expect_token(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.cursor.kind() == kind {
            Ok(self.cursor.advance())
        } else {
            Err(self.expected(&format!("'{}'", kind)))
        }
    }

    pub fn parse_comma_separated<T, F>(&mut self, mut f: F) -> ParseResult<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> ParseResult<T>,
    {
        let mut items = vec![f(self)?];
        while self.consume_token(&TokenKind::Comma) {
            items.push(f(self)?);
        }
        Ok(items)
    }
}
