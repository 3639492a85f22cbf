//! csvql CLI
//!
//! Parses SQL-like statements and prints the resulting queries.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_csvql::{Format, check_source, input, parse_statements, print_tokens};

/// Parse single-table SQL statements into structured queries.
#[derive(Parser)]
#[command(name = "csvql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for parsed queries.
    #[arg(short, long, env = "CSVQL_FORMAT", value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse statements and print the resulting queries.
    Parse {
        /// Statements to parse, in order.
        #[arg(required = true)]
        sql: Vec<String>,
    },

    /// Check a file with one statement per line (`-` reads stdin).
    Check {
        /// Statement file.
        file: PathBuf,
    },

    /// Print the token stream of a statement.
    Tokens {
        /// Statement to tokenize.
        sql: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    match cli.command {
        Commands::Parse { sql } => {
            parse_statements(&sql, cli.format, &mut stdout, &mut stderr)?;
        }

        Commands::Check { file } => {
            let text = input::read_source(&file)?;
            check_source(&text, &mut stdout, &mut stderr)?;
        }

        Commands::Tokens { sql } => {
            print_tokens(&sql, &mut stdout)?;
        }
    }

    Ok(())
}
