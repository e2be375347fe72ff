use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the statement and print its AST as JSON
    Ast {
        #[command(flatten)]
        input: ParseArgs,
    },
    /// Parse the statement and print it back as SQL
    Format {
        #[command(flatten)]
        input: ParseArgs,
    },
    /// Print the token stream, one token per line
    Tokens {
        #[arg(long, help = "SQL file path, or '-' for stdin")]
        file: String,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    #[arg(long, help = "SQL file path, or '-' for stdin")]
    pub file: String,

    #[arg(
        long,
        help = "Dialect: generic, oracle, postgres, mssql, mysql (overrides the config file)"
    )]
    pub dialect: Option<String>,

    #[arg(long, help = "JSON parser configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Keep comments that precede the statement")]
    pub keep_comments: bool,

    #[arg(long, help = "Treat `AS $name` as a deferred template query")]
    pub template: bool,
}
