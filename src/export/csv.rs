//! CSV Export functionality
//!
//! Writes the budget as `Section,Name,Amount` rows followed by the derived
//! totals. Fields are written as-is with no quoting, so a name containing a
//! comma shifts its row's columns; `services::import` reads the same shape.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;
use crate::services::BudgetSummary;

/// File name used when no export path is given
pub const DEFAULT_EXPORT_FILE: &str = "my_budget.csv";

/// First line of every export
pub const CSV_HEADER: &str = "Section,Name,Amount";

/// Export the budget rows and summary totals to CSV
pub fn export_budget_csv<W: Write>(state: &BudgetState, writer: &mut W) -> BudgetResult<()> {
    let summary = BudgetSummary::compute(state);

    writeln!(writer, "{}", CSV_HEADER).map_err(export_error)?;

    for income in state.incomes() {
        writeln!(
            writer,
            "Income,{},{}",
            income.name,
            income.amount.to_plain_string()
        )
        .map_err(export_error)?;
    }

    for fixed in state.fixed() {
        writeln!(
            writer,
            "Fixed,{},{}",
            fixed.name,
            fixed.amount.to_plain_string()
        )
        .map_err(export_error)?;
    }

    for variable in state.variable() {
        writeln!(
            writer,
            "Variable,{},Predicted: {}, Spent: {}",
            variable.name,
            variable.predicted.to_plain_string(),
            variable.spent.to_plain_string()
        )
        .map_err(export_error)?;
    }

    for (label, amount) in summary.labelled_totals() {
        writeln!(writer, ",{},{}", label, amount.to_plain_string()).map_err(export_error)?;
    }

    Ok(())
}

/// Export the budget to a file, creating or truncating it
pub fn export_budget_csv_file(state: &BudgetState, path: &Path) -> BudgetResult<()> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_budget_csv(state, &mut writer)?;
    writer.flush().map_err(export_error)?;

    info!(path = %path.display(), "exported budget CSV");
    Ok(())
}

fn export_error(e: std::io::Error) -> BudgetError {
    BudgetError::Export(e.to_string())
}
