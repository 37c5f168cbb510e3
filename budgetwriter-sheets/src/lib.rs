//! budgetwriter-sheets: write a month-keyed aggregate into the budget spreadsheet.

pub mod auth;
pub mod backend;
pub mod client;
pub mod layout;
pub mod writer;

pub use auth::{GoogleAuthPaths, SPREADSHEETS_SCOPE, access_token};
pub use backend::{BatchUpdateValuesRequest, SheetsBackend, ValueRange};
pub use client::SheetsClient;
pub use layout::SheetLayout;
pub use writer::{MonthWriteReport, SheetWriter};
