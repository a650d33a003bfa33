//! Output formatting and persistence for the ledger table.
//!
//! Supports pretty-printing, JSON serialization, plain-text rendering, and
//! CSV export/re-import.

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{LedgerError, Result};
use crate::ledger::{HEADERS, Table, TableRow};

/// Logs a table using Rust's debug pretty-print format.
pub fn print_pretty(table: &Table) {
    debug!("{:#?}", table);
}

/// Logs a table as pretty-printed JSON.
pub fn print_json(table: &Table) -> anyhow::Result<()> {
    info!("{}", serde_json::to_string_pretty(table)?);
    Ok(())
}

/// Renders a table as left-aligned text columns separated by ` | `.
pub fn render_text(table: &Table) -> String {
    let cells: Vec<[String; 4]> = table
        .rows()
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.marks.clone(),
                row.average_text(),
                row.grade.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |fields: [&str; 4]| {
        fields
            .iter()
            .zip(widths)
            .map(|(field, width)| format!("{field:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(HEADERS)];
    lines.extend(
        cells
            .iter()
            .map(|[name, marks, average, grade]| {
                format_line([name.as_str(), marks.as_str(), average.as_str(), grade.as_str()])
            }),
    );
    lines.join("\n")
}

/// Writes a table to a CSV file at `path`, overwriting any existing file.
///
/// Fields containing a comma (such as the joined marks) are quoted.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    debug!(path = %path.display(), rows = table.len(), "Writing CSV");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record(HEADERS)?;
    for row in table.rows() {
        writer.write_record([
            row.name.as_str(),
            row.marks.as_str(),
            row.average_text().as_str(),
            row.grade.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads a CSV file previously written by [`write_csv`] back into a table.
///
/// # Errors
///
/// Returns [`LedgerError::Io`] if the file cannot be read and
/// [`LedgerError::InvalidInput`] if its header or rows do not match the
/// export format.
pub fn read_csv(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().from_reader(file);

    let headers = reader.headers()?;
    if headers.iter().ne(HEADERS) {
        return Err(LedgerError::invalid_input(format!(
            "unexpected CSV header {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: TableRow = result?;
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "Read CSV");
    Ok(Table::new(rows))
}
