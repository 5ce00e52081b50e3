//! Screenshot configuration management.
//!
//! # Sub-modules
//!
//! - [`config_struct`]: Core `Config` struct, `DiffColors` and their `Default` impls
//! - [`persistence`]: `impl Config` methods for load/save/path resolution
//! - [`validation`]: `impl Config` methods for normalization and validation
//! - [`env_vars`]: Environment-variable allowlist and `~`/`${VAR}` path expansion

pub mod config_struct;
pub mod env_vars;
pub mod persistence;
pub mod validation;

pub use config_struct::{Config, DiffColors};
pub use env_vars::{ALLOWED_ENV_VARS, expand_path, is_env_var_allowed, substitute_variables};
