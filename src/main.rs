use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rusqlite::{Connection, OpenFlags};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sqljson::bind::{self, BindingSource};
use sqljson::error::{Result, SqlJsonError};
use sqljson::query;
use sqljson::settings::Settings;
use sqljson::shape;

/// Run one SQL statement against a SQLite database and emit the rows as JSON.
#[derive(Parser, Debug)]
#[command(name = "sqljson", version, about)]
struct Cli {
    /// Database file to open (created if missing, unless configured otherwise)
    #[arg(short, long)]
    database: PathBuf,

    /// SQL to execute
    #[arg(short, long, conflicts_with = "query_path")]
    query: Option<String>,

    /// File containing the SQL to execute
    #[arg(long)]
    query_path: Option<PathBuf>,

    /// JSON file of named bindings; repeatable, later files override earlier ones
    #[arg(short, long)]
    bindings: Vec<PathBuf>,

    /// Existing JSON document to merge the rows into (requires --key)
    #[arg(short, long, visible_alias = "in")]
    input: Option<PathBuf>,

    /// Field name to store the rows under
    #[arg(short, long)]
    key: Option<String>,

    /// Write the JSON here instead of to stdout
    #[arg(short, long, visible_alias = "out")]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    // stdout is reserved for the JSON payload
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.exit_code(), "{e}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let sql = match (cli.query, &cli.query_path) {
        (Some(query), _) => query,
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| SqlJsonError::QueryRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?,
        (None, None) => return Err(SqlJsonError::QueryMissing),
    };

    let mut sources = Vec::new();
    for path in &cli.bindings {
        let text = fs::read_to_string(path).map_err(|e| SqlJsonError::BindRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        sources.push(BindingSource::new(path.display().to_string(), text));
    }
    let bindings = bind::build(&sources)?;

    let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE;
    if settings.database.create_missing {
        flags |= OpenFlags::SQLITE_OPEN_CREATE;
    }
    let conn = Connection::open_with_flags(&cli.database, flags).map_err(|e| {
        SqlJsonError::DatabaseOpen {
            path: cli.database.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let existing = match &cli.input {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| SqlJsonError::InputRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            Some(serde_json::from_str(&text).map_err(|e| SqlJsonError::InputDeserialize {
                path: path.display().to_string(),
                message: e.to_string(),
            })?)
        }
        None => None,
    };

    let records = query::run(&conn, &sql, &bindings)?;
    info!(rows = records.len(), "statement ran");
    let document = shape::shape(records, existing, cli.key.as_deref())?;

    let rendered = if cli.compact || !settings.output.pretty {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .map_err(|e| SqlJsonError::OutputSerialize(e.to_string()))?;

    match &cli.output {
        Some(path) => fs::write(path, rendered).map_err(|e| SqlJsonError::OutputWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })?,
        None => println!("{rendered}"),
    }
    Ok(())
}
