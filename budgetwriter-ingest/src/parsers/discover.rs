//! Discover credit card CSV export.
//!
//! Header as of May 2024:
//!   Trans. Date,Post Date,Description,Amount,Category
//!
//! Credits show up as negative amounts in the Amount column.

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

use super::{MappedRow, Provider, cell};
use crate::error::{IngestError, Result};
use crate::types::{Category, Entry, Month};

const POST_DATE: usize = 1;
const DESCRIPTION: usize = 2;
const AMOUNT: usize = 3;
const CATEGORY: usize = 4;

pub(crate) fn map_row(record: &StringRecord, line: u64) -> Result<Option<MappedRow>> {
    let p = Provider::Discover;

    let amount = cell(record, AMOUNT, p, line)?;
    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| IngestError::NumberParse {
            provider: p.name(),
            line,
            value: amount.to_string(),
        })?;
    if value.is_nan() || value < 0.0 {
        return Ok(None);
    }

    let posted = cell(record, POST_DATE, p, line)?;
    let month = post_month(posted).ok_or_else(|| IngestError::DateParse {
        provider: p.name(),
        line,
        value: posted.to_string(),
    })?;

    Ok(Some(MappedRow {
        month,
        entry: Entry::new(cell(record, DESCRIPTION, p, line)?, amount),
        category: Category::new(cell(record, CATEGORY, p, line)?),
    }))
}

/// `MM/DD/YYYY`.
fn post_month(s: &str) -> Option<Month> {
    let date = NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y").ok()?;
    Month::from_number(date.month())
}
