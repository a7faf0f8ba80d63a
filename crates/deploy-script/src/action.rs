//! The deploy step: read inputs, load the script, deploy it, report the outcome.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::Path;

use anyhow::Result;
use futures::FutureExt as _;

use crate::inputs::{API_KEY, BASE, DEPLOY_KEY, FILE, InputOptions, Inputs, SCRIPT_ID};
use crate::log_info;
use crate::platform::Platform;
use crate::script::ScriptSource;
use crate::utils::error_messages::UNKNOWN_ERROR;
use crate::utils::log::t;
use crate::utils::workflow::Reporter;

/// Run one deployment and report a failure through `reporter`.
///
/// Never returns an error and never lets a panic escape. On success nothing is reported.
pub async fn run<I, S, P, R>(inputs: &I, source: &S, platform: &P, reporter: &mut R)
where
  I: Inputs,
  S: ScriptSource,
  P: Platform,
  R: Reporter,
{
  let outcome = AssertUnwindSafe(deploy(inputs, source, platform, reporter))
    .catch_unwind()
    .await;
  let message = match outcome {
    Ok(Ok(())) => return,
    Ok(Err(err)) => failure_message(&err),
    Err(payload) => panic_message(&*payload),
  };
  reporter.set_failed(&message);
}

/// Deploy the configured script. The first failing step aborts the rest.
///
/// # Errors
/// Returns the error of the step that failed: reading inputs, building the client,
/// reading the script or the deploy call itself.
pub async fn deploy<I, S, P, R>(inputs: &I, source: &S, platform: &P, reporter: &mut R) -> Result<()>
where
  I: Inputs,
  S: ScriptSource,
  P: Platform,
  R: Reporter,
{
  let script_id = inputs.get_input(SCRIPT_ID, InputOptions::required())?;
  let file = inputs.get_input(FILE, InputOptions::required())?;
  let deploy_key = inputs.get_input(DEPLOY_KEY, InputOptions::optional())?;
  let api_key = inputs.get_input(API_KEY, InputOptions::optional())?;
  let base = inputs.get_input(BASE, InputOptions::optional())?;

  for secret in [&deploy_key, &api_key] {
    if !secret.is_empty() {
      reporter.add_mask(secret);
    }
  }

  let credential = platform.new_credential(&deploy_key, &api_key);
  let base = (!base.is_empty()).then_some(base.as_str());
  let client = platform.create_client(base, credential)?;
  if let Some(base) = base {
    log_info!("Use API base {}", t::url(base));
  }

  let path = Path::new(&file);
  log_info!("Read script {}", t::path(path.display()));
  let contents = source.read_script(path).await?;

  log_info!("Deploy script {}", t::id(&script_id));
  platform.deploy_script(&client, &script_id, &contents).await?;
  Ok(())
}

/// The message reported for a failed run.
///
/// Joins the non-empty messages of the error chain. Falls back to a generic
/// message when none of them says anything.
#[must_use]
pub fn failure_message(err: &anyhow::Error) -> String {
  let parts: Vec<String> = err
    .chain()
    .map(ToString::to_string)
    .filter(|m| !m.trim().is_empty())
    .collect();
  if parts.is_empty() {
    UNKNOWN_ERROR.to_string()
  } else {
    parts.join(": ")
  }
}

/// The message reported for a panicked run.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
  let text = payload
    .downcast_ref::<&str>()
    .map(|s| (*s).to_string())
    .or_else(|| payload.downcast_ref::<String>().cloned());
  match text {
    Some(text) if !text.trim().is_empty() => text,
    _ => UNKNOWN_ERROR.to_string(),
  }
}
