use crate::error::CliError;
use serde::Serialize;
use sql_syntax::lexer::token::Token;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)?;
    println!("{json}");
    Ok(())
}

pub fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{:>4}:{:<4} {:?}", token.line, token.column, token.kind);
    }
}
