//! Display formatting for terminal output
//!
//! Renders the budget rows as tables and the derived figures as a dashboard
//! with progress bars and a text bar chart.

pub mod dashboard;
pub mod format;
pub mod tables;

pub use dashboard::{
    format_chart, format_daily_leftover, format_dashboard, format_distribution, format_summary,
};
pub use tables::{format_all_sections, format_section};
