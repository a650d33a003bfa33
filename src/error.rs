//! Error taxonomy for the ledger core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Name or marks rejected at the input boundary. The ledger is left untouched.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Export requested with no records. No file is written.
    #[error("nothing to export: the ledger has no records")]
    EmptyLedger,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` for conditions that should be shown as a warning rather
    /// than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, LedgerError::EmptyLedger)
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            LedgerError::Io(std::io::Error::from(err))
        } else {
            LedgerError::invalid_input(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
