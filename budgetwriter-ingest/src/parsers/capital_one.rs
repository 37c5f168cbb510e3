//! Capital One credit card CSV export.
//!
//! Header as of May 2024:
//!   Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit
//!
//! Credits leave the Debit column empty and are skipped.

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

use super::{MappedRow, Provider, cell};
use crate::error::{IngestError, Result};
use crate::types::{Category, Entry, Month};

const POSTED_DATE: usize = 1;
const DESCRIPTION: usize = 3;
const CATEGORY: usize = 4;
const DEBIT: usize = 5;

pub(crate) fn map_row(record: &StringRecord, line: u64) -> Result<Option<MappedRow>> {
    let p = Provider::CapitalOne;

    let debit = cell(record, DEBIT, p, line)?;
    if debit.is_empty() {
        return Ok(None);
    }

    let posted = cell(record, POSTED_DATE, p, line)?;
    let month = posted_month(posted).ok_or_else(|| IngestError::DateParse {
        provider: p.name(),
        line,
        value: posted.to_string(),
    })?;

    Ok(Some(MappedRow {
        month,
        entry: Entry::new(cell(record, DESCRIPTION, p, line)?, debit),
        category: Category::new(cell(record, CATEGORY, p, line)?),
    }))
}

/// ISO `YYYY-MM-DD`.
fn posted_month(s: &str) -> Option<Month> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
    Month::from_number(date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn test_debit_row_is_included() {
        let r = row(&["2024-05-02", "2024-05-03", "1234", "Coffee Shop", "Dining", "4.50", ""]);
        let mapped = map_row(&r, 2).unwrap().unwrap();
        assert_eq!(mapped.month, Month::May);
        assert_eq!(mapped.entry, Entry::new("Coffee Shop", "4.50"));
        assert_eq!(mapped.category, Category::new("Dining"));
    }

    #[test]
    fn test_credit_row_is_skipped() {
        let r = row(&["2024-05-04", "2024-05-05", "1234", "Refund", "Dining", "", "4.50"]);
        assert_eq!(map_row(&r, 3).unwrap(), None);
    }

    #[test]
    fn test_month_comes_from_posted_date() {
        // Transacted in April, posted in May.
        let r = row(&["2024-04-30", "2024-05-01", "1234", "Hotel", "Lodging", "210.00", ""]);
        assert_eq!(map_row(&r, 2).unwrap().unwrap().month, Month::May);
    }

    #[test]
    fn test_amount_text_is_preserved() {
        let r = row(&["2024-01-02", "2024-01-03", "1234", "Bookstore", "Merchandise", "1,024.10", ""]);
        assert_eq!(map_row(&r, 2).unwrap().unwrap().entry.amount, "1,024.10");
    }

    #[test]
    fn test_bad_posted_date_is_fatal() {
        let r = row(&["2024-05-02", "05/03/2024", "1234", "Coffee Shop", "Dining", "4.50", ""]);
        match map_row(&r, 7).unwrap_err() {
            IngestError::DateParse { provider, line, value } => {
                assert_eq!(provider, "Capital One");
                assert_eq!(line, 7);
                assert_eq!(value, "05/03/2024");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_is_fatal() {
        let r = row(&["2024-05-02", "2024-05-03", "1234"]);
        assert!(matches!(
            map_row(&r, 4).unwrap_err(),
            IngestError::MissingColumn { column: 5, line: 4, .. }
        ));
    }
}
