//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget model.

pub mod report;
pub mod session;

pub use report::{handle_report_command, write_report, ReportArgs};
pub use session::{Flow, RowCommand, Session, SessionCommand};
