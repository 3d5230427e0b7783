//! One-shot budget report
//!
//! Loads a budget CSV, applies the figures given on the command line and
//! prints the tables and dashboard (or a JSON snapshot).

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::display::{format_all_sections, format_dashboard};
use crate::error::BudgetResult;
use crate::export::{export_budget_csv_file, export_budget_json};
use crate::models::period::parse_date;
use crate::models::{BudgetState, DaysMode};
use crate::services::{load_budget_csv, update, BudgetAction};

/// Arguments of the `report` command
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Budget CSV file to load
    pub file: PathBuf,

    /// Date to report on (defaults to today)
    #[arg(long)]
    pub today: Option<String>,

    /// Next pay day (defaults to the report date)
    #[arg(long)]
    pub pay_day: Option<String>,

    /// Leftover carried in from last month
    #[arg(long, allow_hyphen_values = true)]
    pub leftover: Option<String>,

    /// Safety threshold (defaults to the configured threshold)
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<String>,

    /// Count remaining days to the end of the month instead of to pay day
    #[arg(long)]
    pub month_end: bool,

    /// Also read variable expense rows from the file
    #[arg(long)]
    pub with_variable: bool,

    /// Print a JSON snapshot instead of tables
    #[arg(long)]
    pub json: bool,

    /// Write the budget back out as CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `report` command, writing to stdout
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> BudgetResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(settings, args, &mut out)
}

/// Build the state for a report and render it to `out`
pub fn write_report<W: Write>(
    settings: &Settings,
    args: ReportArgs,
    out: &mut W,
) -> BudgetResult<()> {
    let state = build_state(settings, &args)?;

    if let Some(path) = &args.output {
        export_budget_csv_file(&state, path)?;
        writeln!(out, "Budget exported to: {}", path.display())?;
    }

    if args.json {
        export_budget_json(&state, out, true)?;
    } else {
        writeln!(out, "{}", format_all_sections(&state, settings))?;
        write!(out, "{}", format_dashboard(&state, settings))?;
    }

    Ok(())
}

fn build_state(settings: &Settings, args: &ReportArgs) -> BudgetResult<BudgetState> {
    let mut state = match &args.today {
        Some(date) => BudgetState::new(parse_date(date, &settings.date_format)?),
        None => BudgetState::today(),
    };
    state.threshold = settings.default_threshold;

    let mut actions = vec![BudgetAction::SetDaysMode(if args.month_end {
        DaysMode::MonthEnd
    } else {
        settings.days_mode
    })];

    if let Some(date) = &args.pay_day {
        actions.push(BudgetAction::SetPayDay(parse_date(
            date,
            &settings.date_format,
        )?));
    }
    if let Some(raw) = &args.leftover {
        actions.push(BudgetAction::SetLeftoverLastMonth(raw.clone()));
    }
    if let Some(raw) = &args.threshold {
        actions.push(BudgetAction::SetThreshold(raw.clone()));
    }

    let mut options = settings.import_options();
    options.with_variable |= args.with_variable;
    match load_budget_csv(Some(&args.file), options)? {
        Some(rows) => actions.push(BudgetAction::Import(rows)),
        None => warn!(file = %args.file.display(), "nothing imported, reporting a blank budget"),
    }

    for action in actions {
        state = update(state, action)?;
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::BudgetSummary;
    use tempfile::TempDir;

    const BUDGET: &str = "Section,Name,Amount\n\
                          Income,Salary,2000\n\
                          Fixed,Rent,800\n\
                          Variable,Groceries,Predicted: 300, Spent: 250\n";

    fn args(dir: &TempDir) -> ReportArgs {
        let file = dir.path().join("budget.csv");
        std::fs::write(&file, BUDGET).unwrap();
        ReportArgs {
            file,
            today: Some("2025-01-10".into()),
            pay_day: Some("2025-01-20".into()),
            ..ReportArgs::default()
        }
    }

    #[test]
    fn test_build_state_from_file() {
        let dir = TempDir::new().unwrap();
        let state = build_state(&Settings::default(), &args(&dir)).unwrap();

        assert_eq!(state.incomes()[0].amount, Money::from_units(2000));
        // Variable rows stay blank unless asked for
        assert!(state.variable()[0].predicted.is_zero());

        let summary = BudgetSummary::compute(&state);
        assert_eq!(summary.days_remaining, 10);
        assert_eq!(summary.actual_leftover, Money::from_units(1200));
    }

    #[test]
    fn test_build_state_with_variable_and_figures() {
        let dir = TempDir::new().unwrap();
        let args = ReportArgs {
            with_variable: true,
            leftover: Some("-100".into()),
            threshold: Some("1000".into()),
            ..args(&dir)
        };
        let state = build_state(&Settings::default(), &args).unwrap();

        let summary = BudgetSummary::compute(&state);
        assert_eq!(summary.actual_leftover, Money::from_units(850));
        assert!(summary.is_below_threshold);
    }

    #[test]
    fn test_month_end_mode() {
        let dir = TempDir::new().unwrap();
        let args = ReportArgs {
            month_end: true,
            ..args(&dir)
        };
        let state = build_state(&Settings::default(), &args).unwrap();
        assert_eq!(state.days_mode, DaysMode::MonthEnd);
    }

    #[test]
    fn test_missing_file_reports_blank_budget() {
        let dir = TempDir::new().unwrap();
        let args = ReportArgs {
            file: dir.path().join("missing.csv"),
            today: Some("2025-01-10".into()),
            ..ReportArgs::default()
        };
        let state = build_state(&Settings::default(), &args).unwrap();
        assert_eq!(state.len(crate::models::Section::Income), 1);
        assert!(state.incomes()[0].amount.is_zero());
    }

    #[test]
    fn test_write_report_text() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        write_report(&Settings::default(), args(&dir), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Salary"));
        assert!(text.contains("Budget Overview"));
        assert!(text.contains("€120.00/day"));
    }

    #[test]
    fn test_write_report_json_and_output() {
        let dir = TempDir::new().unwrap();
        let exported = dir.path().join("copy.csv");
        let args = ReportArgs {
            json: true,
            output: Some(exported.clone()),
            ..args(&dir)
        };
        let mut out = Vec::new();
        write_report(&Settings::default(), args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"schema_version\""));
        assert!(std::fs::read_to_string(exported)
            .unwrap()
            .contains("Income,Salary,2000"));
    }
}
