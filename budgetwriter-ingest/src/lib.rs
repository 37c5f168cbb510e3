//! budgetwriter-ingest: provider CSV parsers and the month-keyed transaction aggregate.

pub mod aggregate;
pub mod error;
pub mod parsers;
pub mod reader;
pub mod types;

pub use aggregate::Aggregate;
pub use error::{IngestError, Result};
pub use parsers::{MappedRow, Provider};
pub use reader::TransactionReader;
pub use types::{Category, Entry, Month, MonthBucket};
