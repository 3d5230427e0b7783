//! leftover-cli - Terminal budgeting for what is left until pay day
//!
//! This library holds one month's budget in memory: incomes, fixed expenses
//! and variable expenses, plus the figures derived from them (totals,
//! predicted and actual leftover, daily leftover until pay day, threshold
//! warning). Budgets are saved and loaded as a simple CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, rows, the spending window and the budget state
//! - `services`: Derived figures, budget actions and CSV import
//! - `export`: CSV and JSON export
//! - `display`: Tables and dashboard for the terminal
//! - `cli`: The interactive session and one-shot report
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use leftover_cli::models::{BudgetState, Section};
//! use leftover_cli::services::BudgetSummary;
//!
//! let mut state = BudgetState::today();
//! state.update_line(Section::Income, 0, "amount".parse()?, "2000")?;
//! let summary = BudgetSummary::compute(&state);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
