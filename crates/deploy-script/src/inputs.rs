use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::config::InputConfig;
use crate::utils::error_messages::input_required;

pub const SCRIPT_ID: &str = "script_id";
pub const FILE: &str = "file";
pub const DEPLOY_KEY: &str = "deploy_key";
pub const API_KEY: &str = "api_key";
pub const BASE: &str = "base";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
  pub required: bool,
  pub trim_whitespace: bool,
}

impl InputOptions {
  #[must_use]
  pub fn required() -> Self {
    Self {
      required: true,
      trim_whitespace: true,
    }
  }

  #[must_use]
  pub fn optional() -> Self {
    Self {
      required: false,
      trim_whitespace: true,
    }
  }
}

/// Source of named action inputs.
pub trait Inputs {
  /// Read the input `name`. Optional inputs that are not set read as `""`.
  ///
  /// # Errors
  /// Fails when a required input resolves to an empty value.
  fn get_input(&self, name: &str, options: InputOptions) -> Result<String>;
}

/// Name of the environment variable the CI host passes `name` through.
#[must_use]
pub fn input_env_name(name: &str) -> String {
  format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Inputs resolved from command-line overrides, `INPUT_*` variables and config files,
/// in that order of precedence.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
  overrides: BTreeMap<String, String>,
  config: InputConfig,
}

impl ActionInputs {
  pub fn new(overrides: BTreeMap<String, String>, config: InputConfig) -> Self {
    Self { overrides, config }
  }

  fn lookup(&self, name: &str) -> Option<String> {
    if let Some(value) = self.overrides.get(name)
      && !value.trim().is_empty()
    {
      return Some(value.clone());
    }
    if let Ok(value) = std::env::var(input_env_name(name))
      && !value.trim().is_empty()
    {
      return Some(value);
    }
    self
      .config
      .get(name)
      .filter(|v| !v.trim().is_empty())
      .map(str::to_string)
  }
}

impl Inputs for ActionInputs {
  fn get_input(&self, name: &str, options: InputOptions) -> Result<String> {
    let raw = self.lookup(name).unwrap_or_default();
    let value = if options.trim_whitespace {
      raw.trim().to_string()
    } else {
      raw
    };
    if options.required && value.is_empty() {
      bail!(input_required(name));
    }
    Ok(value)
  }
}
