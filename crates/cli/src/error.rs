use sql_syntax::{errors::ParseError, lexer::error::LexerError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse the statement: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to tokenize the input: {0}")]
    Lexer(#[from] LexerError),

    #[error("Failed to read the configuration file as JSON: {0}")]
    ConfigDeserialize(serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("{0}")]
    InvalidDialect(String),
}
