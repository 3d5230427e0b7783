//! Core data models for leftover-cli
//!
//! This module contains the data structures of a single budgeting session:
//! money amounts, line items, the spending window, and the budget state.

pub mod budget;
pub mod line_item;
pub mod money;
pub mod period;

pub use budget::BudgetState;
pub use line_item::{BudgetLine, Field, LineItem, Section, VariableItem};
pub use money::Money;
pub use period::DaysMode;
