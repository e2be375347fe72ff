use crate::{
    commands::{Commands, ParseArgs},
    error::CliError,
};
use clap::Parser;
use sql_syntax::{
    config::{ParserConfig, ParserFeatures},
    dialect::DbType,
    lexer::Lexer,
    parse_create_table,
};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "ddlparse", version = "0.0.1", about = "CREATE TABLE parser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ast { input } => {
            let (sql, config) = load(&input)?;
            let stmt = parse_create_table(&sql, &config)?;
            output::print_json(&stmt)?;
        }
        Commands::Format { input } => {
            let (sql, config) = load(&input)?;
            let stmt = parse_create_table(&sql, &config)?;
            println!("{stmt}");
        }
        Commands::Tokens { file } => {
            let sql = read_source(&file)?;
            let tokens = Lexer::new().tokenize(&sql)?;
            output::print_tokens(&tokens);
        }
    }

    Ok(())
}

fn load(args: &ParseArgs) -> Result<(String, ParserConfig), CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            serde_json::from_str(&source).map_err(CliError::ConfigDeserialize)?
        }
        None => ParserConfig::default(),
    };

    if let Some(name) = &args.dialect {
        config.dialect = name.parse::<DbType>().map_err(CliError::InvalidDialect)?;
    }
    if args.keep_comments {
        config.features |= ParserFeatures::KEEP_COMMENTS;
    }
    if args.template {
        config.features |= ParserFeatures::TEMPLATE;
    }

    info!(
        "Parsing {} as {} with features {:?}",
        args.file, config.dialect, config.features
    );
    Ok((read_source(&args.file)?, config))
}

fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut sql = String::new();
        std::io::stdin().read_to_string(&mut sql)?;
        Ok(sql)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
