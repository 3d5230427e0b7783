//! Configuration module for leftover-cli
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LeftoverPaths;
pub use settings::Settings;
