use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use name_parser::config::ServerConfig;
use name_parser::{ParsedName, server};
use name_parser_types::NameFields;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "name_parser",
    about = "Break personal names into title, first, middle and last names"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    server: ServerConfig,
}

#[derive(Subcommand)]
enum Command {
    /// Serve POST /api/ParseFullName over HTTP (the default)
    Serve,
    /// Parse names given as arguments, or one per line on stdin
    Parse {
        /// Normalize case, e.g. "MCDONALD" → "McDonald"
        #[arg(long)]
        capitalize: bool,
        /// Names to parse, e.g. "Mr Fred Blogs" "Blogs, Fred"
        names: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Parse { capitalize, names }) => run_parse(names, capitalize),
        Some(Command::Serve) | None => run_serve(cli.server),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "name_parser=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ═══════════════════════════════════════════════════════════════════════
//  SERVE MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_serve(config: ServerConfig) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Runtime::new().context("cannot start tokio runtime")?;
    runtime.block_on(server::serve(config))?;
    Ok(ExitCode::SUCCESS)
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE: one JSON object per name on stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(names: Vec<String>, capitalize: bool) -> anyhow::Result<ExitCode> {
    let names = if names.is_empty() {
        read_names(std::io::stdin().lock())?
    } else {
        names
    };

    let failed = write_parsed(&names, capitalize, &mut std::io::stdout(), &mut std::io::stderr())?;
    if failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// One name per non-blank line.
fn read_names(reader: impl BufRead) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.context("cannot read stdin")?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}

/// Write one JSON object per name to `out`, pretty-printed when there is
/// only one. Failures go to `err`. Returns how many names failed.
fn write_parsed(
    names: &[String],
    capitalize: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<usize> {
    let pretty = names.len() == 1;
    let mut failed = 0;

    for raw in names {
        let parsed = match name_parser::parse(raw) {
            Ok(p) => p,
            Err(e) => {
                writeln!(err, "Cannot parse {raw:?}: {e}")?;
                failed += 1;
                continue;
            }
        };
        let parsed = if capitalize {
            parsed.capitalized()
        } else {
            parsed
        };
        writeln!(out, "{}", render(&parsed, pretty)?)?;
    }

    if failed > 0 {
        writeln!(err, "{failed} of {} names could not be parsed", names.len())?;
    }
    Ok(failed)
}

fn render(parsed: &ParsedName, pretty: bool) -> anyhow::Result<String> {
    let fields = NameFields::from(parsed);
    let json = if pretty {
        serde_json::to_string_pretty(&fields)
    } else {
        serde_json::to_string(&fields)
    };
    json.context("JSON serialization failed")
}
