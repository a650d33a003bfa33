//! A single student's marks and the average and grade derived from them.
//!
//! Derived fields are computed once, at construction, and never change: a
//! different set of marks means a different [`Record`].

pub mod grade;
pub mod utility;

use serde::Serialize;
use tracing::debug;

use crate::error::{LedgerError, Result};
pub use grade::{Grade, grade};
use utility::mean;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: String,
    marks: Vec<i64>,
    average: f64,
    grade: Grade,
}

impl Record {
    /// Builds a record, deriving its average and grade.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] if `marks` is empty or `name` is
    /// blank.
    pub fn new(name: impl Into<String>, marks: Vec<i64>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::invalid_input("name must not be empty"));
        }
        if marks.is_empty() {
            return Err(LedgerError::invalid_input("at least one mark is required"));
        }

        let average = mean(&marks);
        let grade = grade(average);
        debug!(name = %name, count = marks.len(), average, %grade, "Record built");

        Ok(Record {
            name,
            marks,
            average,
            grade,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &[i64] {
        &self.marks
    }

    /// Full-precision mean of the marks.
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
