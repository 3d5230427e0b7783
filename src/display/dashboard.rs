//! Dashboard: leftover figures, threshold status, income distribution and the
//! predicted-vs-spent chart.

use crate::config::Settings;
use crate::models::{BudgetState, DaysMode, Money};
use crate::services::{chart_rows, BudgetSummary, ChartRow};

use super::format::{format_bar, format_percent, left_align, separator, truncate, PLACEHOLDER};

const WIDTH: usize = 50;
const LABEL_WIDTH: usize = 22;
const CHART_NAME_WIDTH: usize = 14;

/// Daily leftover as `€x/day`, or the placeholder when no days remain
pub fn format_daily_leftover(summary: &BudgetSummary, settings: &Settings) -> String {
    match summary.daily_leftover {
        Some(daily) => format!("{}/day", settings.money(daily)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Threshold status line
pub fn format_threshold_status(summary: &BudgetSummary, settings: &Settings) -> String {
    if summary.is_below_threshold {
        format!(
            "⚠ Warning: Below threshold ({})!",
            settings.money(summary.threshold)
        )
    } else {
        format!("✓ Above threshold ({}), safe.", settings.money(summary.threshold))
    }
}

/// Leftover figures and threshold status
pub fn format_summary(summary: &BudgetSummary, settings: &Settings) -> String {
    let mut output = String::new();
    let line = |label: &str, value: String| format!("{}{}\n", left_align(label, LABEL_WIDTH), value);

    output.push_str("Budget Overview\n");
    output.push_str(&format!("{}\n", separator(WIDTH)));
    output.push_str(&line("Leftover (last month)", settings.money(summary.leftover_last_month)));
    output.push_str(&line("Total income", settings.money(summary.total_income)));
    output.push_str(&line("Total fixed", settings.money(summary.total_fixed)));
    output.push_str(&line("Total predicted", settings.money(summary.total_predicted)));
    output.push_str(&line("Total spent", settings.money(summary.total_spent)));
    output.push_str(&format!("{}\n", separator(WIDTH)));
    output.push_str(&line("Predicted leftover", settings.money(summary.predicted_leftover)));

    let marker = if summary.actual_leftover.is_negative() {
        "⚠"
    } else {
        "✓"
    };
    output.push_str(&line(
        "Actual leftover",
        format!("{} {}", settings.money(summary.actual_leftover), marker),
    ));

    let window = match summary.days_mode {
        DaysMode::PayDay => "until pay day",
        DaysMode::MonthEnd => "left this month",
    };
    output.push_str(&line(
        "Daily leftover",
        format!(
            "{} ({} days {})",
            format_daily_leftover(summary, settings),
            summary.days_remaining,
            window
        ),
    ));
    output.push('\n');
    output.push_str(&format_threshold_status(summary, settings));
    output.push('\n');

    output
}

/// Fixed and variable shares of income as progress bars
pub fn format_distribution(summary: &BudgetSummary, settings: &Settings) -> String {
    let width = settings.chart_width;
    let bar = |label: &str, pct: f64| {
        format!(
            "  {} {} {}\n",
            left_align(label, 9),
            format_bar(pct, 100.0, width),
            format_percent(pct)
        )
    };

    let mut output = String::from("Income Distribution\n");
    output.push_str(&bar("Fixed", summary.fixed_percent));
    output.push_str(&bar("Variable", summary.variable_percent));
    output
}

/// Bar chart of predicted against spent for each variable expense
pub fn format_chart(rows: &[ChartRow], settings: &Settings) -> String {
    let mut output = String::from("Variable: Predicted vs. Spent\n");

    if rows.is_empty() {
        output.push_str("  (no variable expenses)\n");
        return output;
    }

    let max = rows
        .iter()
        .flat_map(|r| [r.predicted, r.spent])
        .max()
        .unwrap_or_default()
        .as_f64();
    let width = settings.chart_width;
    let bar = |amount: Money| format_bar(amount.as_f64(), max, width);

    for row in rows {
        let name = if row.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            truncate(&row.name, CHART_NAME_WIDTH)
        };
        output.push_str(&format!(
            "  {} predicted {} {}\n",
            left_align(&name, CHART_NAME_WIDTH),
            bar(row.predicted),
            settings.money(row.predicted)
        ));
        output.push_str(&format!(
            "  {} spent     {} {}\n",
            left_align("", CHART_NAME_WIDTH),
            bar(row.spent),
            settings.money(row.spent)
        ));
    }

    output
}

/// The full dashboard for a state
pub fn format_dashboard(state: &BudgetState, settings: &Settings) -> String {
    let summary = BudgetSummary::compute(state);

    [
        format_summary(&summary, settings),
        format_distribution(&summary, settings),
        format_chart(&chart_rows(state), settings),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, VariableItem};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn state() -> BudgetState {
        BudgetState::with_rows(
            date(10),
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
    fn test_daily_placeholder_when_no_days() {
        let summary = BudgetSummary::compute(&state());
        assert_eq!(format_daily_leftover(&summary, &Settings::default()), "—");
    }

    #[test]
    fn test_daily_per_day() {
        let mut state = state();
        state.pay_day = date(20);
        let summary = BudgetSummary::compute(&state);
        assert_eq!(
            format_daily_leftover(&summary, &Settings::default()),
            "€95.00/day"
        );
    }

    #[test]
    fn test_threshold_status() {
        let settings = Settings::default();
        let mut state = state();
        assert!(format_threshold_status(&BudgetSummary::compute(&state), &settings)
            .contains("Above threshold (€0.00)"));

        state.set_threshold("1000");
        assert!(format_threshold_status(&BudgetSummary::compute(&state), &settings)
            .contains("Below threshold (€1000.00)"));
    }

    #[test]
    fn test_summary_figures() {
        let text = format_summary(&BudgetSummary::compute(&state()), &Settings::default());
        assert!(text.contains("€900.00"));
        assert!(text.contains("€950.00 ✓"));
        assert!(text.contains("0 days until pay day"));
    }

    #[test]
    fn test_distribution() {
        let text = format_distribution(&BudgetSummary::compute(&state()), &Settings::default());
        assert!(text.contains("40.0%"));
        assert!(text.contains("15.0%"));
    }

    #[test]
    fn test_chart_scales_to_largest() {
        let settings = Settings {
            chart_width: 10,
            ..Settings::default()
        };
        let text = format_chart(&chart_rows(&state()), &settings);

        assert!(text.contains("██████████ €300.00"));
        assert!(text.contains("████████░░ €250.00"));
    }

    #[test]
    fn test_dashboard_sections() {
        let text = format_dashboard(&state(), &Settings::default());
        assert!(text.contains("Budget Overview"));
        assert!(text.contains("Income Distribution"));
        assert!(text.contains("Predicted vs. Spent"));
    }
}
