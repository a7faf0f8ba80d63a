use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use toml::Value as TomlValue;

use crate::log_warn;
use crate::utils::error_messages::{config_invalid_toml, config_read_failed};

/// Keys accepted in a config file. These mirror the action input names.
pub const KNOWN_KEYS: &[&str] = &["script_id", "file", "deploy_key", "api_key", "base"];

/// File name of the project config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".deploy-script.toml";

const XDG_PREFIX: &str = "deploy-script";
const GLOBAL_CONFIG_FILE: &str = "deploy-script.toml";

/// Input defaults loaded from config files.
///
/// Every field is optional; a value here only applies when neither a
/// command-line override nor an `INPUT_*` variable provides one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
  #[serde(default)]
  pub script_id: Option<String>,
  #[serde(default)]
  pub file: Option<String>,
  #[serde(default)]
  pub deploy_key: Option<String>,
  #[serde(default)]
  pub api_key: Option<String>,
  /// Base URL override for the API.
  #[serde(default)]
  pub base: Option<String>,
}

impl InputConfig {
  /// Look up the configured value for an input name.
  #[must_use]
  pub fn get(&self, name: &str) -> Option<&str> {
    let slot = match name {
      "script_id" => &self.script_id,
      "file" => &self.file,
      "deploy_key" => &self.deploy_key,
      "api_key" => &self.api_key,
      "base" => &self.base,
      _ => return None,
    };
    slot.as_deref()
  }
}

/// Resolve the global config file path.
///
/// # Errors
/// Returns an error if the XDG config home cannot be resolved.
pub fn global_config_path() -> Result<PathBuf> {
  let xdg = xdg::BaseDirectories::with_prefix(XDG_PREFIX);
  let config_home = xdg
    .get_config_home()
    .ok_or_else(|| anyhow::anyhow!("unable to resolve XDG config home"))?;
  Ok(config_home.join(GLOBAL_CONFIG_FILE))
}

/// Load and merge input defaults from the global and project config files.
///
/// Missing files are skipped. Project values override global ones key by key.
///
/// # Errors
/// Returns an error if a present config file cannot be read, is not valid TOML,
/// or holds a value of the wrong type.
pub fn load_config(cwd: &Path) -> Result<InputConfig> {
  let mut merged = toml::Table::new();

  if let Ok(global_path) = global_config_path()
    && global_path.exists()
  {
    merge_file(&mut merged, &global_path)?;
  }

  let project_path = cwd.join(PROJECT_CONFIG_FILE);
  if project_path.exists() {
    merge_file(&mut merged, &project_path)?;
  }

  let cfg: InputConfig = TomlValue::Table(merged)
    .try_into()
    .context("failed to parse merged config")?;
  Ok(cfg)
}

fn merge_file(merged: &mut toml::Table, path: &Path) -> Result<()> {
  let data = fs::read_to_string(path).with_context(|| config_read_failed(path.display()))?;
  let val: TomlValue = toml::from_str(&data).with_context(|| config_invalid_toml(path.display()))?;
  let TomlValue::Table(table) = val else {
    return Ok(());
  };
  for (key, value) in table {
    if KNOWN_KEYS.contains(&key.as_str()) {
      // Scalars only: last file wins
      merged.insert(key, value);
    } else {
      log_warn!(
        "warning: unknown config key '{}' in {} (known keys: {})",
        key,
        path.display(),
        KNOWN_KEYS.join(", ")
      );
    }
  }
  Ok(())
}
