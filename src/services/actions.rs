//! Budget actions
//!
//! Every user edit is a `BudgetAction` applied to an owned `BudgetState`.
//! Front ends translate their input into actions and re-render afterwards.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::BudgetResult;
use crate::models::{BudgetState, DaysMode, Field, Section};
use crate::services::import::ImportedRows;

/// A single edit to a budget
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    AddLine(Section),
    RemoveLine {
        section: Section,
        index: usize,
    },
    UpdateLine {
        section: Section,
        index: usize,
        field: Field,
        raw: String,
    },
    /// Accumulate onto a variable row's spent amount
    AddSpent {
        index: usize,
        raw: String,
    },
    SetLeftoverLastMonth(String),
    SetThreshold(String),
    SetToday(NaiveDate),
    SetPayDay(NaiveDate),
    SetDaysMode(DaysMode),
    /// Replace collections with the rows read from a CSV file
    Import(ImportedRows),
}

impl BudgetAction {
    /// Apply this action in place. On error the state is unchanged.
    pub fn apply(self, state: &mut BudgetState) -> BudgetResult<()> {
        debug!(action = ?self, "applying budget action");

        match self {
            Self::AddLine(section) => state.add_line(section),
            Self::RemoveLine { section, index } => state.remove_line(section, index)?,
            Self::UpdateLine {
                section,
                index,
                field,
                raw,
            } => state.update_line(section, index, field, &raw)?,
            Self::AddSpent { index, raw } => {
                state.add_spent(index, &raw)?;
            }
            Self::SetLeftoverLastMonth(raw) => state.set_leftover_last_month(&raw),
            Self::SetThreshold(raw) => state.set_threshold(&raw),
            Self::SetToday(date) => state.today = date,
            Self::SetPayDay(date) => state.pay_day = date,
            Self::SetDaysMode(mode) => state.days_mode = mode,
            Self::Import(rows) => rows.apply_to(state),
        }

        Ok(())
    }
}

/// Apply an action to an owned state and hand back the new state
pub fn update(mut state: BudgetState, action: BudgetAction) -> BudgetResult<BudgetState> {
    action.apply(&mut state)?;
    Ok(state)
}
