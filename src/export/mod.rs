//! Export module for leftover-cli
//!
//! - CSV: the `Section,Name,Amount` budget file that can be imported again
//! - JSON: a machine-readable snapshot with every derived figure

pub mod csv;
pub mod json;

pub use csv::{export_budget_csv, export_budget_csv_file, CSV_HEADER, DEFAULT_EXPORT_FILE};
pub use json::{export_budget_json, BudgetSnapshot, EXPORT_SCHEMA_VERSION};
