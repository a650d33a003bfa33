//! The session ledger: an insertion-ordered collection of [`Record`]s and the
//! tabular projection used for display and export.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{LedgerError, Result};
use crate::output::write_csv;
use crate::parser::parse_submission;
use crate::record::utility::{format_average, join_marks, round2};
use crate::record::{Grade, Record};

/// Column headers of the tabular projection, in order.
pub const HEADERS: [&str; 4] = ["Name", "Marks", "Average", "Grade"];

/// One display row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "Name")]
    pub name: String,
    /// Marks joined with `", "`.
    #[serde(rename = "Marks")]
    pub marks: String,
    /// Average rounded to 2 decimal places.
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Grade")]
    pub grade: Grade,
}

impl TableRow {
    pub fn from_record(record: &Record) -> Self {
        TableRow {
            name: record.name().to_string(),
            marks: join_marks(record.marks()),
            average: round2(record.average()),
            grade: record.grade(),
        }
    }

    /// The average as written to screen and CSV, e.g. `90.0` or `51.67`.
    pub fn average_text(&self) -> String {
        format_average(self.average)
    }
}

/// Read-only snapshot of a ledger with columns `Name, Marks, Average, Grade`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Table { rows }
    }

    pub fn headers(&self) -> [&'static str; 4] {
        HEADERS
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a front end gets back after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub name: String,
    pub average: f64,
    pub grade: Grade,
}

impl From<&Record> for RecordSummary {
    fn from(record: &Record) -> Self {
        RecordSummary {
            name: record.name().to_string(),
            average: record.average(),
            grade: record.grade(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record and appends it. Duplicate names are kept.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] if the record cannot be built; the
    /// ledger is unchanged in that case.
    pub fn add(&mut self, name: impl Into<String>, marks: Vec<i64>) -> Result<&Record> {
        let record = Record::new(name, marks)?;
        info!(
            name = record.name(),
            average = record.average(),
            grade = %record.grade(),
            position = self.records.len(),
            "Record added"
        );
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Parses raw front-end input and adds the resulting record.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] for a blank name or marks that do
    /// not parse as integers. Nothing is added on error.
    pub fn submit(&mut self, name: &str, marks_text: &str) -> Result<RecordSummary> {
        let (name, marks) = parse_submission(name, marks_text).inspect_err(|e| {
            warn!(error = %e, "Submission rejected");
        })?;
        let record = self.add(name, marks)?;
        Ok(RecordSummary::from(record))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Projects the ledger into a table, one row per record in insertion order.
    pub fn to_table(&self) -> Table {
        Table::new(self.records.iter().map(TableRow::from_record).collect())
    }

    /// Writes the table projection to `path` as CSV, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyLedger`] without touching the filesystem when
    /// there are no records, and [`LedgerError::Io`] when the file cannot be
    /// written.
    #[tracing::instrument(skip(self, path), fields(file = %path.as_ref().display(), records = self.records.len()))]
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        if self.records.is_empty() {
            warn!("Export skipped, ledger is empty");
            return Err(LedgerError::EmptyLedger);
        }

        write_csv(path.as_ref(), &self.to_table())?;
        info!("Ledger exported");
        Ok(())
    }
}
