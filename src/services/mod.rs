//! Service layer for leftover-cli
//!
//! Pure logic on top of the models: derived figures, the action surface
//! used by front ends, and CSV import.

pub mod actions;
pub mod import;
pub mod summary;

pub use actions::{update, BudgetAction};
pub use import::{load_budget_csv, parse_budget_csv, ImportOptions, ImportedRows};
pub use summary::{chart_rows, percent_of, BudgetSummary, ChartRow};
