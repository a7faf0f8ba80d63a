//! Common error messages used across the codebase.
//! Centralizes error message strings to ensure consistency and simplify maintenance.

/// Reported when a failure carries no readable message.
pub const UNKNOWN_ERROR: &str = "unknown error";

// Input errors
pub fn input_required(name: &str) -> String {
  format!("Input required and not supplied: {name}")
}

// Config file errors
pub(crate) fn config_read_failed(path: impl std::fmt::Display) -> String {
  format!("failed to read {path}")
}

pub(crate) fn config_invalid_toml(path: impl std::fmt::Display) -> String {
  format!("invalid TOML in {path}")
}

// Script file errors
pub(crate) fn script_read_failed(path: impl std::fmt::Display) -> String {
  format!("failed to read {path}")
}
