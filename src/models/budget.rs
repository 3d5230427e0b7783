//! Budget state: the three row collections and the scalar settings
//!
//! Every collection always holds at least one row, and its first row cannot be
//! removed. Totals are never stored here; see `services::summary`.

use chrono::NaiveDate;

use super::line_item::{BudgetLine, Field, LineItem, Section, VariableItem};
use super::money::Money;
use super::period::DaysMode;
use crate::error::{BudgetError, BudgetResult};

/// Everything the user can edit in one budgeting session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetState {
    incomes: Vec<LineItem>,
    fixed: Vec<LineItem>,
    variable: Vec<VariableItem>,
    /// Carry-in balance from the previous period
    pub leftover_last_month: Money,
    /// Minimum acceptable actual leftover
    pub threshold: Money,
    pub today: NaiveDate,
    pub pay_day: NaiveDate,
    pub days_mode: DaysMode,
}

impl BudgetState {
    /// Fresh state: one blank row per collection, zero scalars, both dates
    /// set to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            incomes: vec![LineItem::default()],
            fixed: vec![LineItem::default()],
            variable: vec![VariableItem::default()],
            leftover_last_month: Money::zero(),
            threshold: Money::zero(),
            today,
            pay_day: today,
            days_mode: DaysMode::default(),
        }
    }

    /// Fresh state dated with the local calendar date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Build a state from existing rows. Empty collections get a blank row.
    pub fn with_rows(
        today: NaiveDate,
        incomes: Vec<LineItem>,
        fixed: Vec<LineItem>,
        variable: Vec<VariableItem>,
    ) -> Self {
        let mut state = Self::new(today);
        state.replace_incomes(incomes);
        state.replace_fixed(fixed);
        state.replace_variable(variable);
        state
    }

    pub fn incomes(&self) -> &[LineItem] {
        &self.incomes
    }

    pub fn fixed(&self) -> &[LineItem] {
        &self.fixed
    }

    pub fn variable(&self) -> &[VariableItem] {
        &self.variable
    }

    /// Number of rows in a section
    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Income => self.incomes.len(),
            Section::Fixed => self.fixed.len(),
            Section::Variable => self.variable.len(),
        }
    }

    /// Append a blank row
    pub fn add_line(&mut self, section: Section) {
        match section {
            Section::Income => self.incomes.push(LineItem::default()),
            Section::Fixed => self.fixed.push(LineItem::default()),
            Section::Variable => self.variable.push(VariableItem::default()),
        }
    }

    /// Remove the row at `index`. The first row is protected.
    pub fn remove_line(&mut self, section: Section, index: usize) -> BudgetResult<()> {
        match section {
            Section::Income => remove_row(&mut self.incomes, section, index),
            Section::Fixed => remove_row(&mut self.fixed, section, index),
            Section::Variable => remove_row(&mut self.variable, section, index),
        }
    }

    /// Set one field of a row from raw input. Numeric fields coerce
    /// unparseable input to zero; names are stored as given.
    pub fn update_line(
        &mut self,
        section: Section,
        index: usize,
        field: Field,
        raw: &str,
    ) -> BudgetResult<()> {
        match section {
            Section::Income => update_row(&mut self.incomes, section, index, field, raw),
            Section::Fixed => update_row(&mut self.fixed, section, index, field, raw),
            Section::Variable => update_row(&mut self.variable, section, index, field, raw),
        }
    }

    /// Add to the spent amount of a variable row, returning the new total
    pub fn add_spent(&mut self, index: usize, raw: &str) -> BudgetResult<Money> {
        let item = self
            .variable
            .get_mut(index)
            .ok_or(BudgetError::RowNotFound {
                section: Section::Variable.csv_tag(),
                index,
            })?;
        item.add_spent(Money::parse_or_zero(raw));
        Ok(item.spent)
    }

    pub fn set_leftover_last_month(&mut self, raw: &str) {
        self.leftover_last_month = Money::parse_or_zero(raw);
    }

    pub fn set_threshold(&mut self, raw: &str) {
        self.threshold = Money::parse_or_zero(raw);
    }

    pub fn replace_incomes(&mut self, rows: Vec<LineItem>) {
        self.incomes = non_empty(rows);
    }

    pub fn replace_fixed(&mut self, rows: Vec<LineItem>) {
        self.fixed = non_empty(rows);
    }

    pub fn replace_variable(&mut self, rows: Vec<VariableItem>) {
        self.variable = non_empty(rows);
    }
}

fn non_empty<T: Default>(mut rows: Vec<T>) -> Vec<T> {
    if rows.is_empty() {
        rows.push(T::default());
    }
    rows
}

fn remove_row<T>(rows: &mut Vec<T>, section: Section, index: usize) -> BudgetResult<()> {
    if index == 0 {
        return Err(BudgetError::ProtectedRow {
            section: section.csv_tag(),
        });
    }
    if index >= rows.len() {
        return Err(BudgetError::RowNotFound {
            section: section.csv_tag(),
            index,
        });
    }
    rows.remove(index);
    Ok(())
}

fn update_row<T: BudgetLine>(
    rows: &mut [T],
    section: Section,
    index: usize,
    field: Field,
    raw: &str,
) -> BudgetResult<()> {
    let row = rows.get_mut(index).ok_or(BudgetError::RowNotFound {
        section: section.csv_tag(),
        index,
    })?;
    row.set_field(field, raw)
        .map_err(|field| BudgetError::InvalidField {
            section: section.csv_tag(),
            field: field.as_str(),
        })
}
