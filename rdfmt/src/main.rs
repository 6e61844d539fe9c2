//! # rdfmt
//!
//! Command-line front end for rdfmtlib: converts JSON records and SQLite
//! query results into RD data files for report tools.
//!
//! ## Usage
//!
//! ```bash
//! # A JSON array of objects (or a single object) to RD on stdout
//! rdfmt json rows.json
//!
//! # Read JSON from stdin, custom separators
//! cat rows.json | rdfmt --col-sep '|' --line-sep '\r\n' json -
//!
//! # Stream a query result straight into a file
//! rdfmt -o report.rd sqlite app.db "SELECT name, age FROM person"
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Arg, ArgMatches, Command};
use console::Style;
use rdfmtlib::{
    format_map, format_map_list, write_result_set, Row, Separators, SqliteCursor,
    DEFAULT_COL_SEP,
};
use rusqlite::{Connection, OpenFlags};
use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// A JSON input document: a list of rows or a single row
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Row>),
    One(Row),
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("rdfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Convert JSON records and SQLite query results into RD data")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("col-sep")
                .long("col-sep")
                .global(true)
                .default_value(DEFAULT_COL_SEP)
                .help("Column separator, written after every value"),
        )
        .arg(
            Arg::new("line-sep")
                .long("line-sep")
                .global(true)
                .default_value("\\n")
                .help("Line separator between rows (\\n, \\r, \\t and \\\\ are interpreted)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .help("Write to a file instead of stdout"),
        )
        .subcommand(
            Command::new("json")
                .about("Convert a JSON array of objects, or a single object")
                .arg(
                    Arg::new("input")
                        .help("JSON file to read ('-' for stdin)")
                        .default_value("-"),
                ),
        )
        .subcommand(
            Command::new("sqlite")
                .about("Run a query against a SQLite database and stream its rows")
                .arg(Arg::new("database").help("Path to the database file").required(true))
                .arg(Arg::new("query").help("SQL query to run").required(true)),
        )
}

/// Interpret backslash escapes in a separator given on the command line
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Build separators from matches
fn extract_separators(matches: &ArgMatches) -> Separators {
    let mut seps = Separators::default();
    if let Some(col) = matches.get_one::<String>("col-sep") {
        seps = seps.with_column(unescape(col));
    }
    if let Some(line) = matches.get_one::<String>("line-sep") {
        seps = seps.with_line(unescape(line));
    }
    seps
}

fn read_input(input: &str) -> Result<String, anyhow::Error> {
    let mut text = String::new();
    if input == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
    } else {
        File::open(input)
            .and_then(|mut f| f.read_to_string(&mut text))
            .with_context(|| format!("failed to read '{}'", input))?;
    }
    Ok(text)
}

/// Handler for json command
fn json_handler(
    matches: &ArgMatches,
    seps: &Separators,
    out: &mut dyn Write,
) -> Result<(), anyhow::Error> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let text = read_input(input)?;

    let document: Option<Document> = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a JSON object, array of objects or null", input))?;

    let rendered = match &document {
        Some(Document::Many(rows)) => {
            debug!(rows = rows.len(), "formatting row list");
            format_map_list(Some(rows.as_slice()), seps)
        }
        Some(Document::One(row)) => format_map(Some(row), &seps.column),
        None => None,
    };

    if let Some(rd) = rendered {
        out.write_all(rd.as_bytes())?;
    }
    Ok(())
}

/// Handler for sqlite command
fn sqlite_handler(
    matches: &ArgMatches,
    seps: &Separators,
    out: &mut dyn Write,
) -> Result<(), anyhow::Error> {
    let (Some(database), Some(query)) = (
        matches.get_one::<String>("database"),
        matches.get_one::<String>("query"),
    ) else {
        bail!("both a database and a query are required");
    };

    let conn = Connection::open_with_flags(
        database,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open database '{}'", database))?;
    let mut stmt = conn
        .prepare(query)
        .with_context(|| format!("failed to prepare query: {}", query))?;

    let cursor = SqliteCursor::query(&mut stmt, [])?;
    let rows = write_result_set(out, Some(cursor), seps)?;
    info!(rows, database = %database, "wrote result set");
    Ok(())
}

fn dispatch(matches: &ArgMatches, out: &mut dyn Write) -> Result<(), anyhow::Error> {
    match matches.subcommand() {
        Some(("json", sub)) => json_handler(sub, &extract_separators(sub), out),
        Some(("sqlite", sub)) => sqlite_handler(sub, &extract_separators(sub), out),
        _ => bail!("unknown command"),
    }
}

/// Run the command. With `--output`, RD text goes to a temporary file next
/// to the target, which replaces the target only once the run succeeded.
fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let Some(path) = matches.get_one::<String>("output").map(Path::new) else {
        let mut out = BufWriter::new(io::stdout().lock());
        dispatch(matches, &mut out)?;
        out.flush()?;
        return Ok(());
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in '{}'", dir.display()))?;
    {
        let mut out = BufWriter::new(staged.as_file_mut());
        dispatch(matches, &mut out)?;
        out.flush()?;
    }
    staged
        .persist(path)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", Style::new().red().bold().apply_to("Error:"), e);
            ExitCode::FAILURE
        }
    }
}
