use crate::lexer::{
    error::LexerError,
    grammar::{Rule, SqlGrammar},
    token::{Keyword, Token, TokenKind},
};
use pest::{Parser, iterators::Pair};

pub mod error;
pub mod grammar;
pub mod token;

pub struct Lexer {
    tokens: Vec<Token>,
    pending_comments: Vec<String>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer {
            tokens: Vec::new(),
            pending_comments: Vec::new(),
        }
    }

    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>, LexerError> {
        self.tokens.clear();
        self.pending_comments.clear();

        let pairs =
            SqlGrammar::parse(Rule::program, input).map_err(LexerError::from_pest_error)?;

        for pair in pairs {
            self.process_pair(pair)?;
        }

        // Comments after the last token end up on EOF
        let (line, column) = end_position(input);
        let comments = std::mem::take(&mut self.pending_comments);
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            line,
            column,
            span: (input.len(), input.len()),
            comments,
        });

        Ok(self.tokens.clone())
    }

    fn process_pair(&mut self, pair: Pair<Rule>) -> Result<(), LexerError> {
        let span = pair.as_span();
        let (line, column) = span.start_pos().line_col();
        let lexeme = span.as_str();

        let kind = match pair.as_rule() {
            Rule::line_comment => {
                self.pending_comments
                    .push(lexeme.trim_start_matches("--").trim().to_string());
                return Ok(());
            }
            Rule::block_comment => {
                let body = &lexeme[2..lexeme.len() - 2];
                self.pending_comments.push(body.trim().to_string());
                return Ok(());
            }
            Rule::unterminated_comment => {
                return Err(LexerError::UnterminatedComment { line, column });
            }

            Rule::word => match Keyword::lookup(lexeme) {
                Some(keyword) => TokenKind::Keyword(keyword),
                None => TokenKind::Identifier(lexeme.to_string()),
            },
            Rule::quoted_ident => {
                let quote = lexeme.chars().next().unwrap_or('"');
                let close = token::closing_quote(quote);
                let inner = &lexeme[1..lexeme.len() - 1];
                let doubled = format!("{close}{close}");
                TokenKind::QuotedIdentifier {
                    value: inner.replace(&doubled, &close.to_string()),
                    quote,
                }
            }
            Rule::string => {
                let inner = &lexeme[1..lexeme.len() - 1];
                TokenKind::String(inner.replace("''", "'"))
            }
            Rule::number => TokenKind::Number(lexeme.to_string()),
            Rule::variant => TokenKind::Variant(lexeme.to_string()),

            // Operators
            Rule::op_neq => TokenKind::NotEq,
            Rule::op_lte => TokenKind::LtEq,
            Rule::op_gte => TokenKind::GtEq,
            Rule::op_concat => TokenKind::Concat,
            Rule::op_cast => TokenKind::DoubleColon,
            Rule::op_eq => TokenKind::Eq,
            Rule::op_lt => TokenKind::Lt,
            Rule::op_gt => TokenKind::Gt,
            Rule::op_plus => TokenKind::Plus,
            Rule::op_minus => TokenKind::Minus,
            Rule::op_star => TokenKind::Star,
            Rule::op_slash => TokenKind::Slash,
            Rule::op_percent => TokenKind::Percent,

            // Delimiters
            Rule::lparen => TokenKind::LeftParen,
            Rule::rparen => TokenKind::RightParen,
            Rule::lbracket => TokenKind::LeftBracket,
            Rule::rbracket => TokenKind::RightBracket,
            Rule::comma => TokenKind::Comma,
            Rule::dot => TokenKind::Dot,
            Rule::semicolon => TokenKind::Semicolon,

            Rule::EOI => return Ok(()),

            // Recursively process other rules
            _ => {
                for inner_pair in pair.into_inner() {
                    self.process_pair(inner_pair)?;
                }
                return Ok(());
            }
        };

        self.add_token(kind, lexeme, line, column, span.start(), span.end());
        Ok(())
    }

    fn add_token(
        &mut self,
        kind: TokenKind,
        lexeme: &str,
        line: usize,
        column: usize,
        start: usize,
        end: usize,
    ) {
        let comments = std::mem::take(&mut self.pending_comments);
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.to_string(),
            line,
            column,
            span: (start, end),
            comments,
        });
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

fn end_position(input: &str) -> (usize, usize) {
    let line = input.matches('\n').count() + 1;
    let column = input.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0) + 1;
    (line, column)
}
