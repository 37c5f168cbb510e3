//! Provider dispatch: one column layout + inclusion rule per institution.

pub mod capital_one;
pub mod discover;

use csv::StringRecord;
use std::fmt;
use std::str::FromStr;

use crate::error::{IngestError, Result};
use crate::types::{Category, Entry, Month};

/// Institutions whose CSV exports we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    CapitalOne,
    Discover,
}

/// A qualifying row, ready to be appended to the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRow {
    pub month: Month,
    pub entry: Entry,
    pub category: Category,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::CapitalOne, Provider::Discover];

    pub fn name(self) -> &'static str {
        match self {
            Provider::CapitalOne => "Capital One",
            Provider::Discover => "Discover",
        }
    }

    /// Map one data row. `Ok(None)` means the row is skipped (credit or blank).
    ///
    /// `line` is only used for error messages.
    pub fn map_row(self, record: &StringRecord, line: u64) -> Result<Option<MappedRow>> {
        if is_blank(record) {
            return Ok(None);
        }
        match self {
            Provider::CapitalOne => capital_one::map_row(record, line),
            Provider::Discover => discover::map_row(record, line),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IngestError::UnsupportedProvider(s.to_string()))
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Fetch a column or fail with the provider's name and the row's line.
pub(crate) fn cell<'r>(
    record: &'r StringRecord,
    column: usize,
    provider: Provider,
    line: u64,
) -> Result<&'r str> {
    record.get(column).ok_or(IngestError::MissingColumn {
        provider: provider.name(),
        line,
        column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_name() {
        assert_eq!("Capital One".parse::<Provider>().unwrap(), Provider::CapitalOne);
        assert_eq!("Discover".parse::<Provider>().unwrap(), Provider::Discover);
        assert_eq!(" capital one ".parse::<Provider>().unwrap(), Provider::CapitalOne);
        assert_eq!("DISCOVER".parse::<Provider>().unwrap(), Provider::Discover);
    }

    #[test]
    fn test_unknown_provider_is_named_in_error() {
        let err = "Chase".parse::<Provider>().unwrap_err();
        match err {
            IngestError::UnsupportedProvider(name) => assert_eq!(name, "Chase"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_rows_are_skipped_for_every_provider() {
        let blank = StringRecord::from(vec!["", " ", ""]);
        for p in Provider::ALL {
            assert_eq!(p.map_row(&blank, 2).unwrap(), None);
            assert_eq!(p.map_row(&StringRecord::new(), 2).unwrap(), None);
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for p in Provider::ALL {
            assert_eq!(p.to_string().parse::<Provider>().unwrap(), p);
        }
    }
}
