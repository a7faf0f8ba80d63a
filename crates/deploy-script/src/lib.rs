use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

pub mod action;
pub mod bunny;
pub mod config;
pub mod inputs;
pub mod platform;
pub mod script;
pub mod utils;

use crate::bunny::BunnyPlatform;
use crate::config::load_config;
use crate::inputs::{API_KEY, ActionInputs, BASE, DEPLOY_KEY, FILE, SCRIPT_ID};
use crate::script::FsScriptSource;
use crate::utils::workflow::{Reporter, WorkflowReporter};

/// Deploy a script to bunny.net Edge Scripting.
///
/// Inputs are read from `INPUT_*` variables as set by GitHub Actions. Flags override them.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Id of the script to deploy
  #[arg(long)]
  script_id: Option<String>,

  /// Path of the script file to upload
  #[arg(long)]
  file: Option<String>,

  /// Deployment key of the script
  #[arg(long)]
  deploy_key: Option<String>,

  /// Account API key
  #[arg(long)]
  api_key: Option<String>,

  /// Base URL of the API
  #[arg(long)]
  base: Option<String>,

  /// Print diagnostics
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  fn overrides(&self) -> BTreeMap<String, String> {
    [
      (SCRIPT_ID, &self.script_id),
      (FILE, &self.file),
      (DEPLOY_KEY, &self.deploy_key),
      (API_KEY, &self.api_key),
      (BASE, &self.base),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.clone().map(|v| (name.to_string(), v)))
    .collect()
  }
}

pub fn parse() -> Cli {
  Cli::parse()
}

fn load_inputs(cli: &Cli) -> Result<ActionInputs> {
  let cwd = std::env::current_dir().context("failed to resolve working directory")?;
  let config = load_config(&cwd)?;
  Ok(ActionInputs::new(cli.overrides(), config))
}

pub async fn run() -> ExitCode {
  let cli = parse();
  utils::log::init_diagnostics(cli.verbose);

  let mut reporter = WorkflowReporter::detect();
  match load_inputs(&cli) {
    Ok(inputs) => action::run(&inputs, &FsScriptSource, &BunnyPlatform, &mut reporter).await,
    Err(err) => reporter.set_failed(&action::failure_message(&err)),
  }
  reporter.exit_code()
}
