//! Configuration system for the par-shot screenshot engine.
//!
//! This crate provides configuration loading, saving, and default values
//! for code screenshots. It includes:
//!
//! - The capture [`Config`] struct and its defaults
//! - Diff divider color settings
//! - YAML persistence with atomic writes
//! - Allow-listed `${VAR}` substitution for output paths
//! - Typed [`ConfigError`] values for load/save/validation failures

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::validation::MAX_SELECTION_PADDING;
pub use config::{ALLOWED_ENV_VARS, Config, DiffColors, expand_path, substitute_variables};
pub use error::ConfigError;
pub use types::LogLevel;
