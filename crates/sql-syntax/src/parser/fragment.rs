//! Names, expressions, data types, column definitions and constraints.

use crate::{
    ast::{
        column::{ColumnDefinition, ColumnOption, ColumnOptionDef},
        constraint::{ConstraintKind, ForeignKey, ReferentialAction, TableConstraint},
        data_type::DataType,
        expr::{Expr, ExprKind},
        ident::{Identifier, ObjectName},
        literal::Literal,
        operator::{BinaryOperator, UnaryOperator},
        span::Span,
    },
    errors::ParseResult,
    lexer::token::{Keyword, Token, TokenKind},
    parser::Parser,
};

const NOT_PRECEDENCE: u8 = 15;
const COMPARISON_PRECEDENCE: u8 = 20;
const UNARY_PRECEDENCE: u8 = 50;

type ReferentialActions = (Option<ReferentialAction>, Option<ReferentialAction>);

impl<'a> Parser<'a> {
    pub fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.cursor.token().clone();
        let span = Span::from(&token);
        match &token.kind {
            TokenKind::Identifier(value) => {
                self.cursor.advance();
                Ok(Identifier::new(value, span))
            }
            TokenKind::QuotedIdentifier { value, quote } => {
                self.cursor.advance();
                Ok(Identifier::quoted(value, *quote, span))
            }
            _ => Err(self.expected("identifier")),
        }
    }

    /// Column names may also be reserved words used as bare names.
    pub fn parse_column_name(&mut self) -> ParseResult<Identifier> {
        let token = self.cursor.token().clone();
        match &token.kind {
            TokenKind::Keyword(_) => {
                self.cursor.advance();
                Ok(Identifier::new(&token.lexeme, Span::from(&token)))
            }
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier { .. } => self.parse_identifier(),
            _ => Err(self.expected("column name")),
        }
    }

    pub fn parse_object_name(&mut self) -> ParseResult<ObjectName> {
        let mut parts = vec![self.parse_identifier()?];
        while self.consume_token(&TokenKind::Dot) {
            parts.push(self.parse_identifier()?);
        }
        Ok(ObjectName(parts))
    }

    /// `( col, ... )`
    pub fn parse_parenthesized_columns(&mut self) -> ParseResult<Vec<Identifier>> {
        self.expect_token(&TokenKind::LeftParen)?;
        let columns = self.parse_comma_separated(Self::parse_column_name)?;
        self.expect_token(&TokenKind::RightParen)?;
        Ok(columns)
    }

    /// `( expr, ... )`
    pub fn parse_parenthesized_exprs(&mut self) -> ParseResult<Vec<Expr>> {
        self.expect_token(&TokenKind::LeftParen)?;
        let exprs = self.parse_comma_separated(Self::parse_expr)?;
        self.expect_token(&TokenKind::RightParen)?;
        Ok(exprs)
    }

    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_subexpr(0)
    }

    fn parse_subexpr(&mut self, precedence: u8) -> ParseResult<Expr> {
        let mut expr = self.parse_prefix()?;

        loop {
            if let Some(operator) = self.peek_binary_operator() {
                let next = operator.precedence();
                if next <= precedence {
                    break;
                }
                self.cursor.advance();
                let right = self.parse_subexpr(next)?;
                let span = expr.span.to(right.span);
                expr = Expr::new(
                    ExprKind::Binary {
                        left: Box::new(expr),
                        operator,
                        right: Box::new(right),
                    },
                    span,
                );
            } else if precedence < COMPARISON_PRECEDENCE && self.at_predicate() {
                expr = self.parse_predicate(expr)?;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.span();
        let operator = if self.parse_keyword(Keyword::Not) {
            Some((UnaryOperator::Not, NOT_PRECEDENCE))
        } else if self.consume_token(&TokenKind::Minus) {
            Some((UnaryOperator::Negate, UNARY_PRECEDENCE))
        } else if self.consume_token(&TokenKind::Plus) {
            Some((UnaryOperator::Plus, UNARY_PRECEDENCE))
        } else {
            None
        };

        if let Some((operator, precedence)) = operator {
            let operand = self.parse_subexpr(precedence)?;
            let span = start.to(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    operator,
                    operand: Box::new(operand),
                },
                span,
            ));
        }

        let mut expr = self.parse_primary()?;
        while self.consume_token(&TokenKind::DoubleColon) {
            let data_type = self.parse_data_type()?;
            let span = self.span_from(expr.span);
            expr = Expr::new(
                ExprKind::Cast {
                    expr: Box::new(expr),
                    data_type,
                },
                span,
            );
        }
        Ok(expr)
    }

    fn peek_binary_operator(&self) -> Option<BinaryOperator> {
        let operator = match self.cursor.kind() {
            TokenKind::Eq => BinaryOperator::Equal,
            TokenKind::NotEq => BinaryOperator::NotEqual,
            TokenKind::Lt => BinaryOperator::LessThan,
            TokenKind::Gt => BinaryOperator::GreaterThan,
            TokenKind::LtEq => BinaryOperator::LessOrEqual,
            TokenKind::GtEq => BinaryOperator::GreaterOrEqual,
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Subtract,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Percent => BinaryOperator::Modulo,
            TokenKind::Concat => BinaryOperator::Concat,
            TokenKind::Keyword(Keyword::And) => BinaryOperator::And,
            TokenKind::Keyword(Keyword::Or) => BinaryOperator::Or,
            _ => return None,
        };
        Some(operator)
    }

    /// `IS [NOT] NULL`, `[NOT] IN (...)`
    fn at_predicate(&self) -> bool {
        match self.cursor.kind() {
            TokenKind::Keyword(Keyword::Is | Keyword::In) => true,
            TokenKind::Keyword(Keyword::Not) => self.cursor.peek_nth(1).is_keyword(Keyword::In),
            _ => false,
        }
    }

    fn parse_predicate(&mut self, expr: Expr) -> ParseResult<Expr> {
        let start = expr.span;

        if self.parse_keyword(Keyword::Is) {
            let negated = self.parse_keyword(Keyword::Not);
            self.expect_keyword(Keyword::Null)?;
            let kind = if negated {
                ExprKind::IsNotNull(Box::new(expr))
            } else {
                ExprKind::IsNull(Box::new(expr))
            };
            return Ok(Expr::new(kind, self.span_from(start)));
        }

        let negated = self.parse_keyword(Keyword::Not);
        self.expect_keyword(Keyword::In)?;
        let list = self.parse_parenthesized_exprs()?;
        Ok(Expr::new(
            ExprKind::InList {
                expr: Box::new(expr),
                list,
                negated,
            },
            self.span_from(start),
        ))
    }

    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.token().clone();
        let span = Span::from(&token);

        let kind = match &token.kind {
            TokenKind::Number(n) => ExprKind::Literal(Literal::Number(n.clone())),
            TokenKind::String(s) => ExprKind::Literal(Literal::String(s.clone())),
            TokenKind::Keyword(Keyword::True) => ExprKind::Literal(Literal::Boolean(true)),
            TokenKind::Keyword(Keyword::False) => ExprKind::Literal(Literal::Boolean(false)),
            TokenKind::Keyword(Keyword::Null) => ExprKind::Literal(Literal::Null),
            TokenKind::Variant(v) => ExprKind::Variant(v.clone()),
            TokenKind::Star => ExprKind::Wildcard,
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.expect_token(&TokenKind::RightParen)?;
                return Ok(Expr::new(
                    ExprKind::Nested(Box::new(inner)),
                    self.span_from(span),
                ));
            }
            TokenKind::Identifier(_) | TokenKind::QuotedIdentifier { .. } => {
                return self.parse_identifier_expr();
            }
            _ => return Err(self.expected("expression")),
        };

        self.cursor.advance();
        Ok(Expr::new(kind, span))
    }

    /// Plain, compound and qualified-wildcard names, and function calls.
    fn parse_identifier_expr(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.span();
        let mut parts = vec![self.parse_identifier()?];

        while self.consume_token(&TokenKind::Dot) {
            if self.consume_token(&TokenKind::Star) {
                return Ok(Expr::new(
                    ExprKind::QualifiedWildcard(ObjectName(parts)),
                    self.span_from(start),
                ));
            }
            parts.push(self.parse_identifier()?);
        }

        if self.consume_token(&TokenKind::LeftParen) {
            let distinct = self.parse_keyword(Keyword::Distinct);
            let args = if self.consume_token(&TokenKind::RightParen) {
                Vec::new()
            } else {
                let args = self.parse_comma_separated(Self::parse_expr)?;
                self.expect_token(&TokenKind::RightParen)?;
                args
            };
            return Ok(Expr::new(
                ExprKind::Function {
                    name: ObjectName(parts),
                    args,
                    distinct,
                },
                self.span_from(start),
            ));
        }

        let kind = if parts.len() == 1 {
            ExprKind::Identifier(parts.remove(0))
        } else {
            ExprKind::CompoundIdentifier(parts)
        };
        Ok(Expr::new(kind, self.span_from(start)))
    }

    pub fn parse_data_type(&mut self) -> ParseResult<DataType> {
        let TokenKind::Identifier(first) = self.cursor.kind().clone() else {
            return Err(self.expected("data type"));
        };
        self.cursor.advance();

        let mut name = first.to_ascii_uppercase();
        let second = match name.as_str() {
            "DOUBLE" => Some("PRECISION"),
            "CHARACTER" | "CHAR" | "BIT" => Some("VARYING"),
            "LONG" => Some("RAW"),
            _ => None,
        };
        if let Some(second) = second {
            if self.cursor.next_if_identifier(second) {
                name.push(' ');
                name.push_str(second);
            }
        }

        let mut data_type = DataType::new(&name);
        if self.consume_token(&TokenKind::LeftParen) {
            data_type.args = self.parse_comma_separated(Self::parse_type_argument)?;
            self.expect_token(&TokenKind::RightParen)?;
        }

        if matches!(name.as_str(), "TIMESTAMP" | "TIME") {
            data_type.suffix = self.parse_time_zone_suffix();
        } else if self.cursor.next_if_identifier("UNSIGNED") {
            data_type.suffix = Some("UNSIGNED".to_string());
        }

        if self.consume_token(&TokenKind::LeftBracket) {
            if matches!(self.cursor.kind(), TokenKind::Number(_)) {
                self.cursor.advance();
            }
            self.expect_token(&TokenKind::RightBracket)?;
            data_type.array = true;
        }

        Ok(data_type)
    }

    /// One type argument as written, e.g. `255`, `20 BYTE`, `MAX`.
    fn parse_type_argument(&mut self) -> ParseResult<String> {
        let mut words = Vec::new();
        while !matches!(
            self.cursor.kind(),
            TokenKind::Comma | TokenKind::RightParen | TokenKind::Eof
        ) {
            let token = self.cursor.advance();
            match token.kind {
                TokenKind::String(_) => words.push(token.kind.to_string()),
                _ => words.push(token.lexeme),
            }
        }

        if words.is_empty() {
            return Err(self.expected("type argument"));
        }
        Ok(words.join(" "))
    }

    fn parse_time_zone_suffix(&mut self) -> Option<String> {
        let lead = match self.cursor.token().word() {
            Some(word) if word.eq_ignore_ascii_case("WITH") => "WITH",
            Some(word) if word.eq_ignore_ascii_case("WITHOUT") => "WITHOUT",
            _ => return None,
        };
        let is_word = |token: &Token, text: &str| {
            token.word().is_some_and(|w| w.eq_ignore_ascii_case(text))
        };
        if !is_word(self.cursor.peek_nth(1), "TIME") || !is_word(self.cursor.peek_nth(2), "ZONE") {
            return None;
        }

        for _ in 0..3 {
            self.cursor.advance();
        }
        Some(format!("{} TIME ZONE", lead))
    }

    pub fn parse_column_definition(&mut self) -> ParseResult<ColumnDefinition> {
        let start = self.cursor.span();
        let name = self.parse_column_name()?;

        let data_type = match self.cursor.kind() {
            TokenKind::Identifier(_) if !self.at_column_option_word() => {
                Some(self.parse_data_type()?)
            }
            _ => None,
        };

        let mut options = Vec::new();
        loop {
            let constraint_name = if self.parse_keyword(Keyword::Constraint) {
                Some(self.parse_identifier()?)
            } else {
                None
            };

            match self.parse_column_option()? {
                Some(option) => options.push(ColumnOptionDef {
                    name: constraint_name,
                    option,
                }),
                None if constraint_name.is_some() => {
                    return Err(self.expected("column constraint"));
                }
                None => break,
            }
        }

        Ok(ColumnDefinition {
            name,
            data_type,
            options,
            span: self.span_from(start),
        })
    }

    fn at_column_option_word(&self) -> bool {
        ["AUTO_INCREMENT", "AUTOINCREMENT", "COMMENT"]
            .iter()
            .any(|word| self.cursor.identifier_equals(word))
    }

    fn parse_column_option(&mut self) -> ParseResult<Option<ColumnOption>> {
        let option = if self.parse_keyword(Keyword::Not) {
            self.expect_keyword(Keyword::Null)?;
            ColumnOption::NotNull
        } else if self.parse_keyword(Keyword::Null) {
            ColumnOption::Null
        } else if self.parse_keyword(Keyword::Default) {
            ColumnOption::Default(self.parse_expr()?)
        } else if self.parse_keyword(Keyword::Primary) {
            self.expect_keyword(Keyword::Key)?;
            ColumnOption::PrimaryKey
        } else if self.parse_keyword(Keyword::Unique) {
            self.parse_keyword(Keyword::Key);
            ColumnOption::Unique
        } else if self.parse_keyword(Keyword::Check) {
            ColumnOption::Check(self.parse_check_body()?)
        } else if self.parse_keyword(Keyword::References) {
            let table = self.parse_object_name()?;
            let columns = self.parse_optional_columns()?;
            let (on_delete, on_update) = self.parse_referential_actions()?;
            ColumnOption::References {
                table,
                columns,
                on_delete,
                on_update,
            }
        } else if self.parse_keyword(Keyword::Collate) {
            ColumnOption::Collate(self.parse_object_name()?)
        } else if self.cursor.next_if_identifier("AUTO_INCREMENT")
            || self.cursor.next_if_identifier("AUTOINCREMENT")
        {
            ColumnOption::AutoIncrement
        } else if self.cursor.next_if_identifier("COMMENT") {
            let token = self.cursor.token().clone();
            let TokenKind::String(text) = token.kind else {
                return Err(self.expected("comment string"));
            };
            self.cursor.advance();
            ColumnOption::Comment(Literal::String(text))
        } else {
            return Ok(None);
        };
        Ok(Some(option))
    }

    fn parse_check_body(&mut self) -> ParseResult<Expr> {
        self.expect_token(&TokenKind::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_token(&TokenKind::RightParen)?;
        Ok(expr)
    }

    fn parse_optional_columns(&mut self) -> ParseResult<Vec<Identifier>> {
        if matches!(self.cursor.kind(), TokenKind::LeftParen) {
            self.parse_parenthesized_columns()
        } else {
            Ok(Vec::new())
        }
    }

    /// `ON DELETE action` and `ON UPDATE action`, in either order.
    fn parse_referential_actions(&mut self) -> ParseResult<ReferentialActions> {
        let mut on_delete = None;
        let mut on_update = None;

        while self.parse_keyword(Keyword::On) {
            if self.cursor.next_if_identifier("DELETE") {
                on_delete = Some(self.parse_referential_action()?);
            } else if self.cursor.next_if_identifier("UPDATE") {
                on_update = Some(self.parse_referential_action()?);
            } else {
                return Err(self.expected("DELETE or UPDATE"));
            }
        }
        Ok((on_delete, on_update))
    }

    fn parse_referential_action(&mut self) -> ParseResult<ReferentialAction> {
        if self.cursor.next_if_identifier("CASCADE") {
            Ok(ReferentialAction::Cascade)
        } else if self.cursor.next_if_identifier("RESTRICT") {
            Ok(ReferentialAction::Restrict)
        } else if self.cursor.next_if_identifier("SET") {
            if self.parse_keyword(Keyword::Null) {
                Ok(ReferentialAction::SetNull)
            } else {
                self.expect_keyword(Keyword::Default)?;
                Ok(ReferentialAction::SetDefault)
            }
        } else if self.cursor.next_if_identifier("NO") {
            self.expect_word("ACTION")?;
            Ok(ReferentialAction::NoAction)
        } else {
            Err(self.expected("referential action"))
        }
    }

    pub fn parse_constraint(&mut self) -> ParseResult<TableConstraint> {
        let start = self.cursor.span();
        let name = if self.parse_keyword(Keyword::Constraint) {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let kind = if self.parse_keyword(Keyword::Primary) {
            self.expect_keyword(Keyword::Key)?;
            ConstraintKind::PrimaryKey(self.parse_parenthesized_columns()?)
        } else if self.parse_keyword(Keyword::Unique) {
            self.parse_keyword(Keyword::Key);
            ConstraintKind::Unique(self.parse_parenthesized_columns()?)
        } else if self.parse_keyword(Keyword::Check) {
            ConstraintKind::Check(self.parse_check_body()?)
        } else if self.parse_keyword(Keyword::Foreign) {
            self.expect_keyword(Keyword::Key)?;
            let columns = self.parse_parenthesized_columns()?;
            self.expect_keyword(Keyword::References)?;
            let foreign_table = self.parse_object_name()?;
            let referred_columns = self.parse_optional_columns()?;
            let (on_delete, on_update) = self.parse_referential_actions()?;
            ConstraintKind::ForeignKey(ForeignKey {
                columns,
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
            })
        } else {
            return Err(self.expected("PRIMARY KEY, UNIQUE, CHECK or FOREIGN KEY"));
        };

        Ok(TableConstraint {
            name,
            kind,
            span: self.span_from(start),
        })
    }
}
