//! `CREATE TABLE` clause sequencing.
//!
//! ```text
//! CREATE [modifiers] TABLE [IF NOT EXISTS] name [(elements)] [INHERITS (parent)]
//!     [AS select] [WITH (options)] [TABLESPACE name] [PARTITION ...] [dialect tail]
//! ```

use crate::{
    ast::{
        create_table::{CreateTableStatement, TableElement},
        expr::{Expr, ExprKind},
        ident::Identifier,
        partition::PartitionClause,
        select::SelectQuery,
        span::Span,
    },
    config::ParserFeatures,
    errors::{ParseError, ParseResult},
    lexer::token::{Keyword, TokenKind},
    parser::Parser,
};
use tracing::{debug, trace};

impl<'a> Parser<'a> {
    /// Parses one `CREATE TABLE` statement. With `accept_create` the cursor
    /// must be on `CREATE`; otherwise it must already be past it.
    pub fn parse_create_table(&mut self, accept_create: bool) -> ParseResult<CreateTableStatement> {
        let dialect = self.dialect;
        let mut stmt = dialect.new_create_statement();
        debug!(dialect = %dialect.db_type(), "Parsing CREATE TABLE at {}", self.cursor.info());

        if self.cursor.is_enabled(ParserFeatures::KEEP_COMMENTS) && self.cursor.has_comment() {
            stmt.add_before_comments(self.cursor.read_and_reset_comments());
        }

        if accept_create {
            self.expect_keyword(Keyword::Create)?;
        }

        dialect.create_table_before(self, &mut stmt)?;
        self.expect_keyword(Keyword::Table)?;

        if self.cursor.next_if_identifier("IF") {
            self.expect_word("NOT")?;
            self.expect_word("EXISTS")?;
            stmt.if_not_exists = true;
        }

        stmt.name = self.parse_object_name()?;

        if self.consume_token(&TokenKind::LeftParen) {
            stmt.elements = self.parse_table_elements()?;

            if self.cursor.next_if_identifier("INHERITS") {
                self.expect_token(&TokenKind::LeftParen)?;
                stmt.inherits = Some(self.parse_object_name()?);
                self.expect_token(&TokenKind::RightParen)?;
            }
        }

        if self.parse_keyword(Keyword::As) {
            stmt.select = Some(self.parse_create_select()?);
        }

        dialect.parse_with_options(self, &mut stmt)?;

        if self.parse_keyword(Keyword::Tablespace) {
            stmt.tablespace = Some(self.parse_object_name()?);
        }

        // Resolved twice back to back; a second clause replaces the first.
        self.parse_partition_clause(&mut stmt)?;
        self.parse_partition_clause(&mut stmt)?;

        dialect.parse_create_table_rest(self, &mut stmt)?;

        debug!(
            table = %stmt.name,
            elements = stmt.elements.len(),
            "Parsed CREATE TABLE"
        );
        Ok(stmt)
    }

    /// Table element list, entered just after `(` and consuming the closing
    /// `)`. Each entry is classified once from its first token.
    pub fn parse_table_elements(&mut self) -> ParseResult<Vec<TableElement>> {
        let dialect = self.dialect;
        let mut elements = Vec::new();

        loop {
            let element = match dialect.parse_dialect_element(self)? {
                Some(element) => element,
                None => self.parse_standard_element()?,
            };
            trace!(element = %element, "Parsed table element");
            elements.push(element);

            if !self.consume_token(&TokenKind::Comma) {
                break;
            }
            // trailing comma
            if matches!(self.cursor.kind(), TokenKind::RightParen) {
                break;
            }
        }

        self.expect_token(&TokenKind::RightParen)?;
        Ok(elements)
    }

    fn parse_standard_element(&mut self) -> ParseResult<TableElement> {
        match self.cursor.kind() {
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier { .. } => {
                Ok(TableElement::Column(self.parse_column_definition()?))
            }
            TokenKind::Keyword(
                Keyword::Primary
                | Keyword::Unique
                | Keyword::Check
                | Keyword::Constraint
                | Keyword::Foreign,
            ) => Ok(TableElement::Constraint(self.parse_constraint()?)),
            TokenKind::Keyword(Keyword::Tablespace) => Err(ParseError::unsupported(
                "TABLESPACE inside table element list",
                self.cursor.span(),
            )),
            _ => Ok(TableElement::Column(self.parse_column_definition()?)),
        }
    }

    /// Body of `AS`: a template placeholder when enabled, otherwise the
    /// dialect's select.
    fn parse_create_select(&mut self) -> ParseResult<SelectQuery> {
        let token = self.cursor.token();
        let is_template = self.cursor.is_enabled(ParserFeatures::TEMPLATE)
            && matches!(token.kind, TokenKind::Identifier(_) | TokenKind::Variant(_))
            && token.lexeme.starts_with('$');

        if is_template {
            let token = self.cursor.advance();
            debug!(placeholder = %token.lexeme, "Deferred template query");
            return Ok(SelectQuery::Template(token.lexeme));
        }

        let dialect = self.dialect;
        let select = dialect.parse_select(self)?;
        Ok(SelectQuery::Select(Box::new(select)))
    }

    /// Standalone option list: `WITH ( name = value, ... )`.
    pub fn parse_table_options(&mut self, stmt: &mut CreateTableStatement) -> ParseResult<()> {
        self.expect_keyword(Keyword::With)?;
        self.expect_token(&TokenKind::LeftParen)?;

        loop {
            let name = self.parse_option_name()?;
            self.expect_token(&TokenKind::Eq)?;
            let value = self.parse_option_value()?;
            trace!(option = %name, "Parsed table option");
            stmt.add_option(name, value);

            if !self.consume_token(&TokenKind::Comma) {
                break;
            }
            if matches!(self.cursor.kind(), TokenKind::RightParen) {
                break;
            }
        }

        self.expect_token(&TokenKind::RightParen)?;
        Ok(())
    }

    /// Bare, possibly dotted option name such as `toast.autovacuum_enabled`.
    fn parse_option_name(&mut self) -> ParseResult<String> {
        let mut parts = Vec::new();
        loop {
            match self.cursor.token().word() {
                Some(word) => {
                    parts.push(word.to_string());
                    self.cursor.advance();
                }
                None => return Err(self.expected("option name")),
            }
            if !self.consume_token(&TokenKind::Dot) {
                break;
            }
        }
        Ok(parts.join("."))
    }

    /// Option values may be reserved words (`ON`, `OFF`) used bare.
    fn parse_option_value(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.token().clone();
        let ends_value = matches!(
            self.cursor.peek_nth(1).kind,
            TokenKind::Comma | TokenKind::RightParen
        );
        if let TokenKind::Keyword(keyword) = token.kind {
            let is_literal = matches!(keyword, Keyword::True | Keyword::False | Keyword::Null);
            if ends_value && !is_literal {
                self.cursor.advance();
                let span = Span::from(&token);
                return Ok(Expr::new(
                    ExprKind::Identifier(Identifier::new(&token.lexeme, span)),
                    span,
                ));
            }
        }
        self.parse_expr()
    }

    /// Resolves `PARTITION OF` / `PARTITION BY` with one token of lookahead.
    /// On any other follower the cursor stays one token past `PARTITION`.
    fn parse_partition_clause(&mut self, stmt: &mut CreateTableStatement) -> ParseResult<()> {
        if !self.cursor.token().is_keyword(Keyword::Partition) {
            return Ok(());
        }

        let dialect = self.dialect;
        let mark = self.cursor.mark();
        self.cursor.advance();

        let clause = if self.cursor.token().is_keyword(Keyword::Of) {
            self.cursor.reset(mark);
            debug!("Resolved PARTITION OF");
            dialect.parse_partition_of(self)?.map(PartitionClause::Of)
        } else if self.cursor.token().is_keyword(Keyword::By) {
            self.cursor.reset(mark);
            debug!("Resolved PARTITION BY");
            dialect.parse_partition_by(self)?.map(PartitionClause::By)
        } else {
            debug!("Skipped PARTITION followed by {}", self.cursor.kind());
            None
        };

        if let Some(clause) = clause {
            if let Some(previous) = stmt.partition.replace(clause) {
                debug!(replaced = %previous, "Second partition clause replaces the first");
            }
        }
        Ok(())
    }
}
