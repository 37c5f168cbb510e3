//! Cell layout of the monthly budget tabs.
//!
//! Each month has its own tab named after the month. Expenses start on
//! line 5: item and amount in K:L, category in P.

use anyhow::{Result, bail};
use budgetwriter_ingest::Month;
use regex::Regex;
use serde::Deserialize;

/// Largest row number a Google spreadsheet can hold.
pub const MAX_LINE: u32 = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// First column of the scanned expenses region; also the item column.
    pub first_column: String,
    /// First line of the expenses region (1-based).
    pub first_line: u32,
    pub last_column: String,
    /// Last column of the item/amount block.
    pub amount_column: String,
    pub category_column: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            first_column: "K".to_string(),
            first_line: 5,
            last_column: "P".to_string(),
            amount_column: "L".to_string(),
            category_column: "P".to_string(),
        }
    }
}

impl SheetLayout {
    pub fn validate(&self) -> Result<()> {
        let column_re = Regex::new(r"^[A-Z]{1,3}$")?;
        for (name, value) in [
            ("first_column", &self.first_column),
            ("last_column", &self.last_column),
            ("amount_column", &self.amount_column),
            ("category_column", &self.category_column),
        ] {
            if !column_re.is_match(value) {
                bail!("sheet.{name} must be a column letter like \"K\", got {value:?}");
            }
        }
        if self.first_line == 0 || self.first_line > MAX_LINE {
            bail!("sheet.first_line must be between 1 and {MAX_LINE}");
        }
        Ok(())
    }

    /// Region read to find the next free line, e.g. `May!K5:P`.
    pub fn scan_range(&self, month: Month) -> String {
        format!(
            "{}!{}{}:{}",
            month, self.first_column, self.first_line, self.last_column
        )
    }

    /// Item/amount block starting at `line`, e.g. `May!K12:L`.
    pub fn items_range(&self, month: Month, line: u32) -> String {
        format!(
            "{}!{}{}:{}",
            month, self.first_column, line, self.amount_column
        )
    }

    /// Category block starting at `line`, e.g. `May!P12:P`.
    pub fn category_range(&self, month: Month, line: u32) -> String {
        format!(
            "{}!{}{}:{}",
            month, self.category_column, line, self.category_column
        )
    }

    /// First line whose item cell is blank, given the rows read from
    /// [`SheetLayout::scan_range`]. Past the end when every row is filled.
    pub fn insertion_line(&self, rows: &[Vec<String>]) -> u32 {
        let blank = rows
            .iter()
            .position(|row| row.first().is_none_or(|cell| cell.trim().is_empty()))
            .unwrap_or(rows.len());
        u32::try_from(blank)
            .ok()
            .and_then(|b| self.first_line.checked_add(b))
            .unwrap_or(u32::MAX)
    }
}
