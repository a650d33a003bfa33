//! CLI entry point for the grade ledger.
//!
//! Provides subcommands for building a ledger from command-line arguments,
//! running an interactive entry session, and viewing an exported CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_ledger::output::{print_pretty, read_csv, render_text};
use grade_ledger::{Ledger, LedgerError};
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_ledger")]
#[command(about = "Record student marks, derive averages and grades, export to CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a ledger from the given students and print it
    Report {
        /// Student entry, e.g. "Asha=85,90,95" (repeatable, kept in order)
        #[arg(short, long = "student", value_name = "NAME=MARKS")]
        students: Vec<String>,

        /// CSV file to export the table to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the table as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Enter students one at a time from stdin
    Interactive {
        /// Default CSV file for `:export`
        #[arg(short, long, default_value = "students.csv")]
        output: PathBuf,
    },
    /// Print a previously exported CSV file
    Show {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_ledger.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_ledger.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            students,
            output,
            json,
        } => {
            let mut ledger = Ledger::new();
            for entry in &students {
                let Some((name, marks)) = entry.split_once('=') else {
                    error!(entry = %entry, "Expected NAME=MARKS, skipping");
                    continue;
                };
                if let Err(e) = ledger.submit(name, marks) {
                    error!(entry = %entry, error = %e, "Invalid student entry, skipping");
                }
            }

            let table = ledger.to_table();
            print_pretty(&table);
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("{}", render_text(&table));
            }

            if let Some(path) = output {
                export(&ledger, &path)?;
            }
        }
        Commands::Interactive { output } => {
            let stdin = io::stdin();
            interactive(stdin.lock(), io::stdout().lock(), &output)?;
        }
        Commands::Show { path } => {
            let table = read_csv(&path)?;
            info!(path = %path.display(), rows = table.len(), "Loaded CSV");
            println!("{}", render_text(&table));
        }
    }

    Ok(())
}

/// Exports the ledger, treating an empty ledger as a warning rather than a failure.
fn export(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    match ledger.export_csv(path) {
        Ok(()) => {
            info!(path = %path.display(), "Exported CSV");
            Ok(())
        }
        Err(e) if e.is_warning() => {
            warn!(error = %e, "No data to export");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Line-oriented entry loop: a name line followed by a marks line adds a
/// student. Lines starting with `:` are commands.
fn interactive<R: BufRead, W: Write>(input: R, mut out: W, default_output: &Path) -> Result<()> {
    let mut ledger = Ledger::new();
    let mut lines = input.lines();

    loop {
        write!(out, "Name: ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            let (command, arg) = command
                .split_once(char::is_whitespace)
                .map(|(c, a)| (c, a.trim()))
                .unwrap_or((command, ""));
            match command {
                "quit" | "q" => break,
                "table" => writeln!(out, "{}", render_text(&ledger.to_table()))?,
                "export" => {
                    let path = if arg.is_empty() {
                        default_output.to_path_buf()
                    } else {
                        PathBuf::from(arg)
                    };
                    match ledger.export_csv(&path) {
                        Ok(()) => writeln!(out, "Exported {} records to {}", ledger.len(), path.display())?,
                        Err(e) if e.is_warning() => writeln!(out, "Warning: {e}")?,
                        Err(e) => writeln!(out, "Export failed: {e}")?,
                    }
                }
                other => writeln!(out, "Unknown command :{other} (use :table, :export [PATH], :quit)")?,
            }
            continue;
        }

        write!(out, "Marks (comma-separated): ")?;
        out.flush()?;
        let Some(marks) = lines.next().transpose()? else {
            break;
        };

        match ledger.submit(line, &marks) {
            Ok(summary) => writeln!(
                out,
                "Added {}: average {:.2}, grade {}",
                summary.name, summary.average, summary.grade
            )?,
            Err(e) => writeln!(out, "Input error: {e}. Please enter a valid name and marks.")?,
        }
    }

    info!(records = ledger.len(), "Session finished");
    Ok(())
}
