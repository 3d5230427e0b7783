//! JSON Export functionality
//!
//! Machine-readable snapshot of a budget: the rows plus every derived figure.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{BudgetState, LineItem, VariableItem};
use crate::services::BudgetSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of one budget
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSnapshot<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub incomes: &'a [LineItem],
    pub fixed: &'a [LineItem],
    pub variable: &'a [VariableItem],
    pub summary: BudgetSummary,
}

impl<'a> BudgetSnapshot<'a> {
    pub fn new(state: &'a BudgetState) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            incomes: state.incomes(),
            fixed: state.fixed(),
            variable: state.variable(),
            summary: BudgetSummary::compute(state),
        }
    }
}

/// Write the budget snapshot as JSON
pub fn export_budget_json<W: Write>(
    state: &BudgetState,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let snapshot = BudgetSnapshot::new(state);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &snapshot)?;
    } else {
        serde_json::to_writer(&mut *writer, &snapshot)?;
    }
    writeln!(writer)?;

    Ok(())
}
