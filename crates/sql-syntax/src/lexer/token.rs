use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: (usize, usize),
    /// Comments found between the previous token and this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl Token {
    /// Text of a word-like token, keyword or identifier, as written.
    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Keyword(_) | TokenKind::Identifier(_) => Some(&self.lexeme),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword(Keyword),

    // Identifiers
    Identifier(String),
    QuotedIdentifier { value: String, quote: char },

    // Literals
    String(String),
    Number(String),
    Variant(String),

    // Operators
    Eq,        // =
    NotEq,     // <> or !=
    Lt,        // <
    Gt,        // >
    LtEq,      // <=
    GtEq,      // >=
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    Concat,    // ||
    DoubleColon, // ::

    // Delimiters
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Dot,          // .
    Semicolon,    // ;

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(k) => write!(f, "{}", k),
            TokenKind::Identifier(s) => write!(f, "{}", s),
            TokenKind::QuotedIdentifier { value, quote } => {
                write!(f, "{}{}{}", quote, value, closing_quote(*quote))
            }
            TokenKind::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Variant(v) => write!(f, "{}", v),
            TokenKind::Eq => write!(f, "="),
            TokenKind::NotEq => write!(f, "<>"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::LtEq => write!(f, "<="),
            TokenKind::GtEq => write!(f, ">="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Percent => write!(f, "%"),
            TokenKind::Concat => write!(f, "||"),
            TokenKind::DoubleColon => write!(f, "::"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// Closing delimiter for an identifier quote character.
pub fn closing_quote(quote: char) -> char {
    match quote {
        '[' => ']',
        q => q,
    }
}

macro_rules! keywords {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// Reserved words recognized by the lexer. Anything else that looks
        /// like a word is an identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Keyword {
            $($variant),*
        }

        impl Keyword {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text),*
                }
            }

            /// Case-insensitive keyword lookup.
            pub fn lookup(word: &str) -> Option<Keyword> {
                $(
                    if word.eq_ignore_ascii_case($text) {
                        return Some(Keyword::$variant);
                    }
                )*
                None
            }
        }
    };
}

keywords! {
    All => "ALL",
    And => "AND",
    As => "AS",
    Asc => "ASC",
    By => "BY",
    Check => "CHECK",
    Collate => "COLLATE",
    Constraint => "CONSTRAINT",
    Create => "CREATE",
    Default => "DEFAULT",
    Desc => "DESC",
    Distinct => "DISTINCT",
    Exists => "EXISTS",
    False => "FALSE",
    For => "FOR",
    Foreign => "FOREIGN",
    From => "FROM",
    Group => "GROUP",
    Having => "HAVING",
    If => "IF",
    In => "IN",
    Is => "IS",
    Key => "KEY",
    Limit => "LIMIT",
    Not => "NOT",
    Null => "NULL",
    Of => "OF",
    Offset => "OFFSET",
    On => "ON",
    Or => "OR",
    Order => "ORDER",
    Partition => "PARTITION",
    Primary => "PRIMARY",
    References => "REFERENCES",
    Select => "SELECT",
    Table => "TABLE",
    Tablespace => "TABLESPACE",
    To => "TO",
    True => "TRUE",
    Unique => "UNIQUE",
    Values => "VALUES",
    Where => "WHERE",
    With => "WITH",
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
