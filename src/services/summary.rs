//! Derived budget figures
//!
//! Everything here is a pure function of a `BudgetState` snapshot and is
//! recomputed on demand, so the figures can never drift from the rows.

use serde::Serialize;

use crate::models::{BudgetState, DaysMode, Money};

/// Totals and indicators shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub leftover_last_month: Money,
    pub threshold: Money,
    pub total_income: Money,
    pub total_fixed: Money,
    pub total_predicted: Money,
    pub total_spent: Money,
    /// Carry-in plus income, minus fixed costs and predicted variable costs
    pub predicted_leftover: Money,
    /// Carry-in plus income, minus fixed costs and actual variable spending
    pub actual_leftover: Money,
    pub days_mode: DaysMode,
    pub days_remaining: u32,
    /// Actual leftover per remaining day; `None` when no days remain
    pub daily_leftover: Option<Money>,
    pub is_below_threshold: bool,
    /// Fixed costs as a share of income (0 when there is no income)
    pub fixed_percent: f64,
    /// Predicted variable costs as a share of income (0 when there is no income)
    pub variable_percent: f64,
}

impl BudgetSummary {
    /// Compute every derived figure for the given state
    pub fn compute(state: &BudgetState) -> Self {
        let total_income: Money = state.incomes().iter().map(|i| i.amount).sum();
        let total_fixed: Money = state.fixed().iter().map(|f| f.amount).sum();
        let total_predicted: Money = state.variable().iter().map(|v| v.predicted).sum();
        let total_spent: Money = state.variable().iter().map(|v| v.spent).sum();

        let base = state.leftover_last_month + total_income - total_fixed;
        let predicted_leftover = base - total_predicted;
        let actual_leftover = base - total_spent;

        let days_remaining = state.days_mode.days_remaining(state.today, state.pay_day);
        let daily_leftover = actual_leftover.split_over(days_remaining);

        Self {
            leftover_last_month: state.leftover_last_month,
            threshold: state.threshold,
            total_income,
            total_fixed,
            total_predicted,
            total_spent,
            predicted_leftover,
            actual_leftover,
            days_mode: state.days_mode,
            days_remaining,
            daily_leftover,
            is_below_threshold: actual_leftover < state.threshold,
            fixed_percent: percent_of(total_fixed, total_income),
            variable_percent: percent_of(total_predicted, total_income),
        }
    }

    /// Labelled figures in the order they are written to CSV
    pub fn labelled_totals(&self) -> [(&'static str, Money); 8] {
        [
            ("Leftover Last Month", self.leftover_last_month),
            ("Total Income", self.total_income),
            ("Total Fixed", self.total_fixed),
            ("Total Predicted", self.total_predicted),
            ("Predicted Leftover", self.predicted_leftover),
            ("Total Spent", self.total_spent),
            ("Actual Leftover", self.actual_leftover),
            ("Threshold", self.threshold),
        ]
    }
}

/// One bar group of the predicted-vs-spent chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub name: String,
    pub predicted: Money,
    pub spent: Money,
}

/// Chart data: one row per variable expense, in row order
pub fn chart_rows(state: &BudgetState) -> Vec<ChartRow> {
    state
        .variable()
        .iter()
        .map(|v| ChartRow {
            name: v.name.clone(),
            predicted: v.predicted,
            spent: v.spent,
        })
        .collect()
}

/// `part` as a percentage of `whole`; 0 unless `whole` is positive
pub fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_positive() {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, Section, VariableItem};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_state() -> BudgetState {
        BudgetState::with_rows(
            date(2025, 1, 10),
            vec![LineItem::new("Salary", Money::from_units(2000))],
            vec![LineItem::new("Rent", Money::from_units(800))],
            vec![VariableItem::new(
                "Groceries",
                Money::from_units(300),
                Money::from_units(250),
            )],
        )
    }

    #[test]
    fn test_leftovers() {
        let summary = BudgetSummary::compute(&sample_state());

        assert_eq!(summary.total_income, Money::from_units(2000));
        assert_eq!(summary.total_fixed, Money::from_units(800));
        assert_eq!(summary.total_predicted, Money::from_units(300));
        assert_eq!(summary.total_spent, Money::from_units(250));
        assert_eq!(summary.predicted_leftover, Money::from_units(900));
        assert_eq!(summary.actual_leftover, Money::from_units(950));
    }

    #[test]
    fn test_actual_equals_predicted_plus_unspent() {
        let mut state = sample_state();
        state.add_line(Section::Variable);
        state
            .update_line(Section::Variable, 1, crate::models::Field::Predicted, "120.40")
            .unwrap();
        state.add_spent(1, "200.15").unwrap();
        state.set_leftover_last_month("33.3");

        let s = BudgetSummary::compute(&state);
        assert_eq!(
            s.actual_leftover,
            s.predicted_leftover + (s.total_predicted - s.total_spent)
        );
    }

    #[test]
    fn test_carry_in_counts() {
        let mut state = sample_state();
        state.set_leftover_last_month("100");
        let summary = BudgetSummary::compute(&state);
        assert_eq!(summary.predicted_leftover, Money::from_units(1000));
        assert_eq!(summary.actual_leftover, Money::from_units(1050));
    }

    #[test]
    fn test_daily_leftover_until_pay_day() {
        let mut state = sample_state();
        state.pay_day = date(2025, 1, 20);
        let summary = BudgetSummary::compute(&state);

        assert_eq!(summary.days_remaining, 10);
        assert_eq!(summary.daily_leftover, Some(Money::from_units(95)));
    }

    #[test]
    fn test_no_days_left_has_no_daily_figure() {
        let state = sample_state();
        let summary = BudgetSummary::compute(&state);

        assert_eq!(summary.days_remaining, 0);
        assert_eq!(summary.daily_leftover, None);
    }

    #[test]
    fn test_month_end_mode() {
        let mut state = sample_state();
        state.days_mode = DaysMode::MonthEnd;
        let summary = BudgetSummary::compute(&state);

        assert_eq!(summary.days_remaining, 21);
        assert_eq!(summary.daily_leftover, Some(Money::from_cents(4524)));
    }

    #[test]
    fn test_threshold() {
        let mut state = sample_state();
        state.set_threshold("950");
        assert!(!BudgetSummary::compute(&state).is_below_threshold);

        state.set_threshold("950.01");
        assert!(BudgetSummary::compute(&state).is_below_threshold);
    }

    #[test]
    fn test_negative_leftover_is_allowed() {
        let mut state = sample_state();
        state.add_spent(0, "5000").unwrap();
        let summary = BudgetSummary::compute(&state);
        assert!(summary.actual_leftover.is_negative());
        assert!(summary.is_below_threshold);
    }

    #[test]
    fn test_percentages() {
        let summary = BudgetSummary::compute(&sample_state());
        assert!((summary.fixed_percent - 40.0).abs() < 1e-9);
        assert!((summary.variable_percent - 15.0).abs() < 1e-9);
        assert!(summary.fixed_percent + summary.variable_percent <= 100.0);
    }

    #[test]
    fn test_zero_income_percentages() {
        let mut state = BudgetState::new(date(2025, 1, 10));
        state.replace_fixed(vec![LineItem::new("Rent", Money::from_units(800))]);
        let summary = BudgetSummary::compute(&state);

        assert_eq!(summary.fixed_percent, 0.0);
        assert_eq!(summary.variable_percent, 0.0);
    }

    #[test]
    fn test_totals_follow_edits() {
        let mut state = BudgetState::new(date(2025, 1, 10));
        state.update_line(Section::Income, 0, crate::models::Field::Amount, "100").unwrap();
        state.add_line(Section::Income);
        state.update_line(Section::Income, 1, crate::models::Field::Amount, "50").unwrap();
        state.add_line(Section::Income);
        state.update_line(Section::Income, 2, crate::models::Field::Amount, "25").unwrap();
        assert_eq!(BudgetSummary::compute(&state).total_income, Money::from_units(175));

        state.remove_line(Section::Income, 1).unwrap();
        assert!(state.remove_line(Section::Income, 0).is_err());
        assert_eq!(BudgetSummary::compute(&state).total_income, Money::from_units(125));
    }

    #[test]
    fn test_chart_rows() {
        let rows = chart_rows(&sample_state());
        assert_eq!(
            rows,
            vec![ChartRow {
                name: "Groceries".into(),
                predicted: Money::from_units(300),
                spent: Money::from_units(250),
            }]
        );
    }

    #[test]
    fn test_labelled_totals_order() {
        let summary = BudgetSummary::compute(&sample_state());
        let labels: Vec<_> = summary.labelled_totals().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels.first(), Some(&"Leftover Last Month"));
        assert_eq!(labels.last(), Some(&"Threshold"));
        assert_eq!(summary.labelled_totals()[6].1, Money::from_units(950));
    }
}
