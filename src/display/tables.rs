//! Row tables for incomes, fixed and variable expenses

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{BudgetState, LineItem, Section, VariableItem};

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Predicted")]
    predicted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Table of income or fixed rows, numbered from 1
pub fn format_line_table(items: &[LineItem], settings: &Settings) -> String {
    let rows = items.iter().enumerate().map(|(i, item)| LineRow {
        number: i + 1,
        name: item.name.clone(),
        amount: settings.money(item.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Table of variable rows, numbered from 1
pub fn format_variable_table(items: &[VariableItem], settings: &Settings) -> String {
    let rows = items.iter().enumerate().map(|(i, item)| VariableRow {
        number: i + 1,
        name: item.name.clone(),
        predicted: settings.money(item.predicted),
        spent: settings.money(item.spent),
        remaining: if item.is_overspent() {
            format!("{} ⚠", settings.money(item.remaining()))
        } else {
            settings.money(item.remaining())
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Title and table for one section
pub fn format_section(state: &BudgetState, section: Section, settings: &Settings) -> String {
    let (title, table) = match section {
        Section::Income => ("Incomes", format_line_table(state.incomes(), settings)),
        Section::Fixed => ("Fixed Expenses", format_line_table(state.fixed(), settings)),
        Section::Variable => (
            "Variable Expenses",
            format_variable_table(state.variable(), settings),
        ),
    };
    format!("{}\n{}\n", title, table)
}

/// All three sections, one after another
pub fn format_all_sections(state: &BudgetState, settings: &Settings) -> String {
    [Section::Variable, Section::Fixed, Section::Income]
        .iter()
        .map(|section| format_section(state, *section, settings))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn state() -> BudgetState {
        BudgetState::with_rows(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            vec![
                LineItem::new("Salary", Money::from_units(2000)),
                LineItem::new("Side job", Money::from_cents(15050)),
            ],
            vec![LineItem::new("Rent", Money::from_units(800))],
            vec![VariableItem::new(
                "Dining",
                Money::from_units(50),
                Money::from_units(70),
            )],
        )
    }

    #[test]
    fn test_line_table_contents() {
        let settings = Settings::default();
        let table = format_line_table(state().incomes(), &settings);

        assert!(table.contains("Salary"));
        assert!(table.contains("€2000.00"));
        assert!(table.contains("€150.50"));
        assert!(table.contains("Amount"));
    }

    #[test]
    fn test_variable_table_flags_overspend() {
        let settings = Settings::default();
        let table = format_variable_table(state().variable(), &settings);

        assert!(table.contains("Dining"));
        assert!(table.contains("-€20.00 ⚠"));
    }

    #[test]
    fn test_all_sections_titles() {
        let text = format_all_sections(&state(), &Settings::default());
        assert!(text.contains("Variable Expenses"));
        assert!(text.contains("Fixed Expenses"));
        assert!(text.contains("Incomes"));
    }
}
