//! Embedded query of `CREATE TABLE ... AS`.

use crate::{
    ast::{
        ident::Identifier,
        select::{OrderByExpr, RowLimit, RowLimitStyle, Select, SelectItem, TableRef},
    },
    errors::ParseResult,
    lexer::token::{Keyword, TokenKind},
    parser::Parser,
};

/// Contextual words that end a clause instead of naming an alias.
const NON_ALIAS_WORDS: &[&str] = &["FETCH", "ROWS", "ROW", "INHERITS"];

impl<'a> Parser<'a> {
    /// Parses an optionally parenthesized `SELECT`. `style` selects between
    /// `LIMIT n OFFSET m` and `OFFSET m ROWS FETCH FIRST n ROWS ONLY`.
    pub fn parse_select(&mut self, style: RowLimitStyle) -> ParseResult<Select> {
        if self.consume_token(&TokenKind::LeftParen) {
            let mut select = self.parse_select(style)?;
            self.expect_token(&TokenKind::RightParen)?;
            select.parenthesized = true;
            return Ok(select);
        }

        let start = self.cursor.span();
        self.expect_keyword(Keyword::Select)?;

        let distinct = self.parse_keyword(Keyword::Distinct);
        if !distinct {
            self.parse_keyword(Keyword::All);
        }
        let projection = self.parse_comma_separated(Self::parse_select_item)?;

        let from = if self.parse_keyword(Keyword::From) {
            self.parse_comma_separated(Self::parse_table_ref)?
        } else {
            Vec::new()
        };

        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = if self.parse_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            self.parse_comma_separated(Self::parse_expr)?
        } else {
            Vec::new()
        };

        let having = if self.parse_keyword(Keyword::Having) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let order_by = if self.parse_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_comma_separated(Self::parse_order_by_expr)?
        } else {
            Vec::new()
        };

        let limit = match style {
            RowLimitStyle::Limit => self.parse_limit_offset()?,
            RowLimitStyle::Fetch => self.parse_offset_fetch()?,
        };

        Ok(Select {
            distinct,
            projection,
            from,
            selection,
            group_by,
            having,
            order_by,
            limit,
            parenthesized: false,
            span: self.span_from(start),
        })
    }

    fn parse_select_item(&mut self) -> ParseResult<SelectItem> {
        let expr = self.parse_expr()?;
        let alias = self.parse_optional_alias()?;
        Ok(SelectItem { expr, alias })
    }

    fn parse_table_ref(&mut self) -> ParseResult<TableRef> {
        let name = self.parse_object_name()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableRef { name, alias })
    }

    /// `AS alias` or a bare identifier alias.
    fn parse_optional_alias(&mut self) -> ParseResult<Option<Identifier>> {
        if self.parse_keyword(Keyword::As) {
            return self.parse_identifier().map(Some);
        }

        let bare = match self.cursor.kind() {
            TokenKind::Identifier(_) => !NON_ALIAS_WORDS
                .iter()
                .any(|word| self.cursor.identifier_equals(word)),
            TokenKind::QuotedIdentifier { .. } => true,
            _ => false,
        };
        if bare {
            self.parse_identifier().map(Some)
        } else {
            Ok(None)
        }
    }

    fn parse_order_by_expr(&mut self) -> ParseResult<OrderByExpr> {
        let expr = self.parse_expr()?;
        let asc = if self.parse_keyword(Keyword::Asc) {
            Some(true)
        } else if self.parse_keyword(Keyword::Desc) {
            Some(false)
        } else {
            None
        };
        Ok(OrderByExpr { expr, asc })
    }

    fn parse_limit_offset(&mut self) -> ParseResult<Option<RowLimit>> {
        let limit = if self.parse_keyword(Keyword::Limit) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let offset = if self.parse_keyword(Keyword::Offset) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        if limit.is_none() && offset.is_none() {
            return Ok(None);
        }
        Ok(Some(RowLimit {
            style: RowLimitStyle::Limit,
            limit,
            offset,
        }))
    }

    fn parse_offset_fetch(&mut self) -> ParseResult<Option<RowLimit>> {
        let offset = if self.parse_keyword(Keyword::Offset) {
            let offset = self.parse_expr()?;
            self.parse_row_word()?;
            Some(offset)
        } else {
            None
        };

        let limit = if self.cursor.next_if_identifier("FETCH") {
            if !self.cursor.next_if_identifier("FIRST") {
                self.expect_word("NEXT")?;
            }
            let limit = self.parse_expr()?;
            self.parse_row_word()?;
            self.expect_word("ONLY")?;
            Some(limit)
        } else {
            None
        };

        if limit.is_none() && offset.is_none() {
            return Ok(None);
        }
        Ok(Some(RowLimit {
            style: RowLimitStyle::Fetch,
            limit,
            offset,
        }))
    }

    fn parse_row_word(&mut self) -> ParseResult<()> {
        if self.cursor.next_if_identifier("ROWS") || self.cursor.next_if_identifier("ROW") {
            Ok(())
        } else {
            Err(self.expected("ROWS"))
        }
    }
}
