//! Parser for the text a front end collects: a student name and a
//! comma-separated list of integer marks.

use crate::error::{LedgerError, Result};

/// Parses comma-separated integer marks such as `"85, 90, 78"`.
///
/// Each token is trimmed and parsed as a decimal integer. Decimal scores are
/// rejected, not truncated.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidInput`] if any token fails to parse or the
/// input holds no marks. Nothing is partially accepted.
pub fn parse_marks(text: &str) -> Result<Vec<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LedgerError::invalid_input("no marks given"));
    }

    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| {
                LedgerError::invalid_input(format!("{token:?} is not an integer mark"))
            })
        })
        .collect()
}

/// Validates a raw `(name, marks)` submission and returns the trimmed name with
/// its parsed marks.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidInput`] if the trimmed name is empty or the
/// marks do not parse.
pub fn parse_submission(name: &str, marks_text: &str) -> Result<(String, Vec<i64>)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::invalid_input("name must not be empty"));
    }
    let marks = parse_marks(marks_text)?;
    Ok((name.to_string(), marks))
}
