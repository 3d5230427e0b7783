//! CSV import
//!
//! Reads the line-item rows back out of a file written by
//! `export::csv::export_budget_csv`. Only `Income` and `Fixed` rows are read
//! unless variable rows are asked for explicitly; summary rows are always
//! skipped. Nothing in here fails on bad content: short lines get empty
//! fields and unparseable amounts become zero.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, LineItem, Money, Section, VariableItem};

/// Import behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Also read `Variable` rows and replace the variable collection
    pub with_variable: bool,
}

/// Rows parsed from a budget CSV, applied to a state in one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedRows {
    pub incomes: Vec<LineItem>,
    pub fixed: Vec<LineItem>,
    /// `None` when variable rows were not imported
    pub variable: Option<Vec<VariableItem>>,
}

impl ImportedRows {
    /// Replace the state's collections with these rows
    pub fn apply_to(self, state: &mut BudgetState) {
        state.replace_incomes(self.incomes);
        state.replace_fixed(self.fixed);
        if let Some(variable) = self.variable {
            state.replace_variable(variable);
        }
    }
}

/// Parse budget CSV text
pub fn parse_budget_csv(text: &str, options: ImportOptions) -> ImportedRows {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    let mut rows = ImportedRows {
        variable: options.with_variable.then(Vec::new),
        ..ImportedRows::default()
    };
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping unreadable CSV line");
                skipped += 1;
                continue;
            }
        };

        let column = |i: usize| record.get(i).unwrap_or("");
        match Section::from_csv_tag(column(0)) {
            Some(Section::Income) => rows.incomes.push(line_item(&record)),
            Some(Section::Fixed) => rows.fixed.push(line_item(&record)),
            Some(Section::Variable) => match rows.variable.as_mut() {
                Some(variable) => variable.push(variable_item(&record)),
                None => skipped += 1,
            },
            None => skipped += 1,
        }
    }

    info!(
        incomes = rows.incomes.len(),
        fixed = rows.fixed.len(),
        variable = rows.variable.as_ref().map(Vec::len),
        skipped,
        "parsed budget CSV"
    );

    rows
}

/// Read and parse a budget CSV file.
///
/// No path, or a file that cannot be read, is not an error: the import is
/// skipped and `Ok(None)` returned. A path without a `.csv` extension is
/// rejected.
pub fn load_budget_csv(
    path: Option<&Path>,
    options: ImportOptions,
) -> BudgetResult<Option<ImportedRows>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(BudgetError::Import(format!(
            "Not a .csv file: {}",
            path.display()
        )));
    }

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read import file; skipping");
            return Ok(None);
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    Ok(Some(parse_budget_csv(&text, options)))
}

fn line_item(record: &StringRecord) -> LineItem {
    LineItem::new(
        record.get(1).unwrap_or(""),
        Money::parse_or_zero(record.get(2).unwrap_or("")),
    )
}

/// `Variable,<name>,Predicted: <p>, Spent: <s>` splits into four columns
/// because the composite amount is written unquoted. A bare number in the
/// third column is read as the prediction.
fn variable_item(record: &StringRecord) -> VariableItem {
    let labelled = |i: usize, label: &str| {
        let raw = record.get(i).unwrap_or("");
        let raw = raw.strip_prefix(label).unwrap_or(raw);
        Money::parse_or_zero(raw)
    };

    VariableItem::new(
        record.get(1).unwrap_or(""),
        labelled(2, "Predicted:"),
        labelled(3, "Spent:"),
    )
}
