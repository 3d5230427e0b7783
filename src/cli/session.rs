//! Interactive budgeting session
//!
//! One session is one budget: it starts blank, every input line is one edit
//! or query, and the state is dropped when the session ends. Only `export`
//! writes anything to disk.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::display::{
    format_all_sections, format_daily_leftover, format_dashboard, format_section,
};
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_budget_csv_file;
use crate::models::period::parse_date;
use crate::models::{BudgetState, DaysMode, Field, Section};
use crate::services::{load_budget_csv, BudgetAction, BudgetSummary};

const PROMPT: &str = "leftover> ";

/// One parsed session line
#[derive(Parser, Debug)]
#[command(
    name = "leftover>",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Edit income rows
    #[command(subcommand)]
    Income(RowCommand),

    /// Edit fixed expense rows
    #[command(subcommand)]
    Fixed(RowCommand),

    /// Edit variable expense rows
    #[command(subcommand)]
    Variable(RowCommand),

    /// Add to the spent amount of a variable row
    Spent {
        /// Variable row number (from 1)
        row: usize,
        /// Amount to add
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the leftover carried in from last month
    Leftover {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the safety threshold
    Threshold {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set today's date
    Today { date: String },

    /// Set the pay day
    #[command(alias = "pay-day")]
    Payday { date: String },

    /// Count remaining days to pay day or to month end
    Mode {
        /// "payday" or "month-end"
        mode: String,
    },

    /// Show the row tables
    #[command(alias = "ls")]
    List,

    /// Show the dashboard
    #[command(alias = "dashboard")]
    Show,

    /// Export the budget to CSV
    Export {
        /// Output file (defaults to the configured export file name)
        file: Option<PathBuf>,
    },

    /// Replace incomes and fixed expenses from a CSV file
    Import {
        /// CSV file to read; without one nothing happens
        file: Option<PathBuf>,

        /// Also replace variable expenses
        #[arg(long)]
        with_variable: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Row edits shared by the three sections
#[derive(Subcommand, Debug)]
pub enum RowCommand {
    /// Append a blank row
    Add,

    /// Remove a row (row 1 is kept)
    #[command(alias = "remove")]
    Rm { row: usize },

    /// Set a field: name, amount, predicted or spent
    Set {
        row: usize,
        field: String,
        /// New value. Unquoted words are joined with single spaces; quote a
        /// name to keep its spacing exactly, e.g. "Rent   (flat)"
        #[arg(allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
        value: Vec<String>,
    },

    /// Show this section's rows
    #[command(alias = "ls")]
    List,
}

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running session over one budget
pub struct Session<'s> {
    state: BudgetState,
    settings: &'s Settings,
}

impl<'s> Session<'s> {
    /// Blank budget dated today, with threshold and day mode from settings
    pub fn new(settings: &'s Settings) -> Self {
        let mut state = BudgetState::today();
        state.threshold = settings.default_threshold;
        state.days_mode = settings.days_mode;
        Self::with_state(state, settings)
    }

    pub fn with_state(state: BudgetState, settings: &'s Settings) -> Self {
        Self { state, settings }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> BudgetResult<()> {
        writeln!(out, "Budget session started. Type 'help' for commands.")?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(BudgetError::Io(e)) => return Err(BudgetError::Io(e)),
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Execute one input line
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> BudgetResult<Flow> {
        let words = shell_words::split(line)
            .map_err(|e| BudgetError::Validation(format!("Could not read command: {}", e)))?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Help output and usage errors are shown, not raised
                write!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        self.dispatch(command, out)
    }

    fn dispatch<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> BudgetResult<Flow> {
        match command {
            SessionCommand::Income(cmd) => self.row_command(Section::Income, cmd, out)?,
            SessionCommand::Fixed(cmd) => self.row_command(Section::Fixed, cmd, out)?,
            SessionCommand::Variable(cmd) => self.row_command(Section::Variable, cmd, out)?,
            SessionCommand::Spent { row, amount } => {
                let index = row_index(Section::Variable, row)?;
                self.apply(
                    BudgetAction::AddSpent { index, raw: amount },
                    Section::Variable,
                )?;
                let item = &self.state.variable()[index];
                writeln!(
                    out,
                    "{} spent: {} of {}",
                    display_name(&item.name, row),
                    self.settings.money(item.spent),
                    self.settings.money(item.predicted)
                )?;
                self.status(out)?;
            }
            SessionCommand::Leftover { amount } => {
                self.apply(BudgetAction::SetLeftoverLastMonth(amount), Section::Income)?;
                self.status(out)?;
            }
            SessionCommand::Threshold { amount } => {
                self.apply(BudgetAction::SetThreshold(amount), Section::Income)?;
                self.status(out)?;
            }
            SessionCommand::Today { date } => {
                let date = parse_date(&date, &self.settings.date_format)?;
                self.apply(BudgetAction::SetToday(date), Section::Income)?;
                self.status(out)?;
            }
            SessionCommand::Payday { date } => {
                let date = parse_date(&date, &self.settings.date_format)?;
                self.apply(BudgetAction::SetPayDay(date), Section::Income)?;
                self.status(out)?;
            }
            SessionCommand::Mode { mode } => {
                let mode: DaysMode = mode.parse()?;
                self.apply(BudgetAction::SetDaysMode(mode), Section::Income)?;
                writeln!(out, "Counting remaining days by: {}", mode)?;
                self.status(out)?;
            }
            SessionCommand::List => write!(out, "{}", format_all_sections(&self.state, self.settings))?,
            SessionCommand::Show => write!(out, "{}", format_dashboard(&self.state, self.settings))?,
            SessionCommand::Export { file } => {
                let path = file.unwrap_or_else(|| PathBuf::from(&self.settings.export_file_name));
                export_budget_csv_file(&self.state, &path)?;
                writeln!(out, "Exported budget to: {}", path.display())?;
            }
            SessionCommand::Import {
                file,
                with_variable,
            } => self.import_file(file.as_deref(), with_variable, out)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Replace collections from a budget CSV. No file, or one that cannot
    /// be read, leaves the budget as it is.
    pub fn import_file<W: Write>(
        &mut self,
        file: Option<&Path>,
        with_variable: bool,
        out: &mut W,
    ) -> BudgetResult<()> {
        let mut options = self.settings.import_options();
        options.with_variable |= with_variable;

        let Some(rows) = load_budget_csv(file, options)? else {
            writeln!(out, "Nothing imported.")?;
            return Ok(());
        };

        writeln!(
            out,
            "Imported {} income and {} fixed rows{}.",
            rows.incomes.len(),
            rows.fixed.len(),
            rows.variable
                .as_ref()
                .map(|v| format!(" and {} variable rows", v.len()))
                .unwrap_or_default()
        )?;
        self.apply(BudgetAction::Import(rows), Section::Income)?;
        self.status(out)
    }

    fn row_command<W: Write>(
        &mut self,
        section: Section,
        cmd: RowCommand,
        out: &mut W,
    ) -> BudgetResult<()> {
        match cmd {
            RowCommand::Add => {
                self.apply(BudgetAction::AddLine(section), section)?;
                writeln!(
                    out,
                    "Added {} row {}.",
                    section,
                    self.state.len(section)
                )?;
            }
            RowCommand::Rm { row } => {
                let index = row_index(section, row)?;
                self.apply(BudgetAction::RemoveLine { section, index }, section)?;
                writeln!(out, "Removed {} row {}.", section, row)?;
                self.status(out)?;
            }
            RowCommand::Set { row, field, value } => {
                let index = row_index(section, row)?;
                let field: Field = field.parse()?;
                self.apply(
                    BudgetAction::UpdateLine {
                        section,
                        index,
                        field,
                        raw: value.join(" "),
                    },
                    section,
                )?;
                writeln!(out, "Updated {} row {} {}.", section, row, field)?;
                self.status(out)?;
            }
            RowCommand::List => {
                write!(out, "{}", format_section(&self.state, section, self.settings))?
            }
        }
        Ok(())
    }

    /// Apply an action, reporting row numbers from 1 in errors
    fn apply(&mut self, action: BudgetAction, section: Section) -> BudgetResult<()> {
        action.apply(&mut self.state).map_err(|e| match e {
            BudgetError::RowNotFound { index, .. } => BudgetError::RowNotFound {
                section: section.csv_tag(),
                index: index + 1,
            },
            other => other,
        })
    }

    /// One-line recap of the leftover figures after an edit
    fn status<W: Write>(&self, out: &mut W) -> BudgetResult<()> {
        let summary = BudgetSummary::compute(&self.state);
        let warning = if summary.is_below_threshold {
            "  ⚠ below threshold"
        } else {
            ""
        };
        writeln!(
            out,
            "Predicted {} | Actual {} | Daily {}{}",
            self.settings.money(summary.predicted_leftover),
            self.settings.money(summary.actual_leftover),
            format_daily_leftover(&summary, self.settings),
            warning
        )?;
        Ok(())
    }
}

/// Session rows are numbered from 1
fn row_index(section: Section, row: usize) -> BudgetResult<usize> {
    row.checked_sub(1).ok_or(BudgetError::RowNotFound {
        section: section.csv_tag(),
        index: row,
    })
}

fn display_name(name: &str, row: usize) -> String {
    if name.is_empty() {
        format!("Row {}", row)
    } else {
        name.to_string()
    }
}
