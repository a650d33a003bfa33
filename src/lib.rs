pub mod error;
pub mod ledger;
pub mod output;
pub mod parser;
pub mod record;

pub use error::{LedgerError, Result};
pub use ledger::{Ledger, RecordSummary, Table, TableRow};
pub use record::{Grade, Record};
