//! Feed provider CSV exports into one month-keyed [`Aggregate`].

use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::aggregate::Aggregate;
use crate::error::{IngestError, Result};
use crate::parsers::Provider;

/// Collects transactions from several CSV exports.
///
/// ```no_run
/// use budgetwriter_ingest::TransactionReader;
///
/// let mut reader = TransactionReader::new();
/// reader.add_csv("Capital One", "capital_one.csv")?;
/// reader.add_csv("Discover", "discover.csv")?;
/// let aggregate = reader.into_aggregate();
/// # Ok::<(), budgetwriter_ingest::IngestError>(())
/// ```
#[derive(Debug, Default)]
pub struct TransactionReader {
    aggregate: Aggregate,
}

impl TransactionReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append qualifying rows from `rows`, returning how many were appended.
    ///
    /// The first row is a header and is always skipped. The provider is
    /// resolved before any row is read, so an unknown provider leaves the
    /// aggregate untouched. Any row error aborts the call; rows appended
    /// before it stay.
    pub fn add<I>(&mut self, provider: &str, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = csv::Result<StringRecord>>,
    {
        let provider: Provider = provider.parse()?;
        self.add_rows(provider, rows)
    }

    /// Same as [`TransactionReader::add`], reading CSV text from `rdr`.
    pub fn add_reader<R: Read>(&mut self, provider: &str, rdr: R) -> Result<usize> {
        let provider: Provider = provider.parse()?;
        self.add_rows(provider, csv_reader(rdr).into_records())
    }

    /// Same as [`TransactionReader::add`], reading the CSV file at `path`.
    pub fn add_csv(&mut self, provider: &str, path: impl AsRef<Path>) -> Result<usize> {
        let provider: Provider = provider.parse()?;
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let added = self.add_rows(provider, csv_reader(file).into_records())?;
        debug!(provider = %provider, path = %path.display(), added, "read transactions");
        Ok(added)
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn into_aggregate(self) -> Aggregate {
        self.aggregate
    }

    fn add_rows<I>(&mut self, provider: Provider, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = csv::Result<StringRecord>>,
    {
        let mut rows = rows.into_iter();
        // The header's content is ignored, but a header that fails to read is not.
        if let Some(header) = rows.next() {
            header?;
        }

        let mut added = 0;
        for (idx, record) in rows.enumerate() {
            let record = record?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);

            if let Some(row) = provider.map_row(&record, line)? {
                self.aggregate.push(row.month, row.entry, row.category);
                added += 1;
            }
        }
        Ok(added)
    }
}

fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr)
}
