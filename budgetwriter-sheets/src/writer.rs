use anyhow::{Context, Result};
use budgetwriter_ingest::{Aggregate, Month, MonthBucket};
use tracing::info;

use crate::backend::{BatchUpdateValuesRequest, SheetsBackend, ValueRange};
use crate::layout::SheetLayout;

/// Formulas and numbers typed into cells are interpreted as if a user entered them.
pub const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWriteReport {
    pub month: Month,
    pub insertion_line: u32,
    pub rows: usize,
}

/// Appends an [`Aggregate`] below the existing expenses of each month tab.
///
/// Not idempotent: writing the same aggregate twice appends it twice.
pub struct SheetWriter<B> {
    backend: B,
    layout: SheetLayout,
}

impl<B: SheetsBackend> SheetWriter<B> {
    pub fn new(backend: B, layout: SheetLayout) -> Self {
        Self { backend, layout }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Build the batch update placing `bucket` at `line` of the month's tab.
    pub fn plan(&self, month: Month, bucket: &MonthBucket, line: u32) -> BatchUpdateValuesRequest {
        let items = bucket.entries().iter().map(|e| e.as_row()).collect();
        let categories = bucket.categories().iter().map(|c| c.as_row()).collect();

        BatchUpdateValuesRequest {
            value_input_option: VALUE_INPUT_OPTION.to_string(),
            data: vec![
                ValueRange::rows(self.layout.items_range(month, line), items),
                ValueRange::rows(self.layout.category_range(month, line), categories),
            ],
        }
    }

    pub async fn write(
        &self,
        spreadsheet_id: &str,
        aggregate: &Aggregate,
    ) -> Result<Vec<MonthWriteReport>> {
        let mut reports = Vec::new();

        for (month, bucket) in aggregate.iter() {
            if bucket.is_empty() {
                continue;
            }

            let scan = self.layout.scan_range(month);
            let existing = self
                .backend
                .get_values(spreadsheet_id, &scan)
                .await
                .with_context(|| format!("reading existing rows of {month}"))?;
            let line = self.layout.insertion_line(&existing);

            let request = self.plan(month, bucket, line);
            self.backend
                .batch_update(spreadsheet_id, &request)
                .await
                .with_context(|| format!("writing {month}"))?;

            info!(%month, line, rows = bucket.len(), "wrote month");
            reports.push(MonthWriteReport {
                month,
                insertion_line: line,
                rows: bucket.len(),
            });
        }

        Ok(reports)
    }
}
