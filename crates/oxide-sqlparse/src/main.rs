//! oxide-sqlparse CLI
//!
//! Parses SQL statements and prints their canonical SQL, JSON syntax tree or
//! debug representation.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_sqlparser::parser::DEFAULT_MAX_DEPTH;
use oxide_sqlparser::{Parser, ParserConfig, Statement};

/// Parse SQL statements and print their syntax trees.
#[derive(ClapParser)]
#[command(name = "oxide-sqlparse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL to parse instead of reading a file.
    #[arg(short, long, conflicts_with = "input")]
    execute: Option<String>,

    /// File to read SQL from (stdin if not specified).
    input: Option<PathBuf>,

    /// Treat every non-empty line as a separate statement.
    #[arg(short, long)]
    lines: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Sql)]
    format: Format,

    /// Maximum parse stack depth (0 for no limit).
    #[arg(long, env = "OXIDE_SQLPARSE_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Canonical SQL.
    Sql,
    /// The syntax tree as JSON.
    Json,
    /// The Rust debug representation.
    Debug,
}

impl Cli {
    fn config(&self) -> ParserConfig {
        match self.max_depth {
            0 => ParserConfig::unbounded(),
            depth => ParserConfig::default().with_max_depth(depth),
        }
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(sql) = &self.execute {
            return Ok(sql.clone());
        }
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

fn trim(sql: &str) -> &str {
    let sql = sql.trim();
    sql.strip_suffix(';').map_or(sql, str::trim_end)
}

/// Splits the input into statements, dropping one trailing `;` from each.
fn statements(input: &str, per_line: bool) -> Vec<&str> {
    if per_line {
        input
            .lines()
            .map(trim)
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        vec![trim(input)]
    }
}

fn render(statement: &Statement, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Sql => statement.to_string(),
        Format::Json => serde_json::to_string_pretty(statement)?,
        Format::Debug => format!("{statement:#?}"),
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = cli.read_input()?;
    let parser = Parser::new(cli.config());
    debug!(max_depth = ?parser.config().max_depth, "parser configured");

    let mut failures = 0usize;
    for sql in statements(&input, cli.lines) {
        match parser.parse_str(sql) {
            Ok(statement) => println!("{}", render(&statement, cli.format)?),
            Err(err) => {
                failures += 1;
                error!("{sql}: {err}");
            }
        }
    }

    if failures > 0 {
        debug!(failures, "some statements failed to parse");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
