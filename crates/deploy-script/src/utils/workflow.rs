//! CI signaling through GitHub workflow commands.
//!
//! A failure is one `::error::` line plus a failing exit status. Success is the
//! absence of both. Outside of GitHub Actions the same signals degrade to a red
//! line on stderr.

use std::process::ExitCode;

use crate::log_error;

/// Channel the runner reports its outcome through.
pub trait Reporter {
  /// Mark the step as failed with `message` as its sole diagnostic.
  fn set_failed(&mut self, message: &str);

  /// Register a secret so the host redacts it from any later output.
  fn add_mask(&mut self, _secret: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
  GitHub,
  Terminal,
}

#[derive(Debug)]
pub struct WorkflowReporter {
  mode: Mode,
  failed: bool,
}

impl WorkflowReporter {
  /// Use workflow commands when running inside GitHub Actions.
  #[must_use]
  pub fn detect() -> Self {
    let on_actions = std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true");
    Self {
      mode: if on_actions { Mode::GitHub } else { Mode::Terminal },
      failed: false,
    }
  }

  #[must_use]
  pub fn has_failed(&self) -> bool {
    self.failed
  }

  #[must_use]
  pub fn exit_code(&self) -> ExitCode {
    if self.failed {
      ExitCode::FAILURE
    } else {
      ExitCode::SUCCESS
    }
  }
}

impl Reporter for WorkflowReporter {
  fn set_failed(&mut self, message: &str) {
    self.failed = true;
    match self.mode {
      Mode::GitHub => anstream::println!("{}", issue_command("error", message)),
      Mode::Terminal => log_error!("{}", message),
    }
  }

  fn add_mask(&mut self, secret: &str) {
    if self.mode == Mode::GitHub && !secret.is_empty() {
      anstream::println!("{}", issue_command("add-mask", secret));
    }
  }
}

/// Format a workflow command line such as `::error::message`.
#[must_use]
pub fn issue_command(command: &str, message: &str) -> String {
  format!("::{command}::{}", escape_data(message))
}

/// Escape command data so multi-line values stay on one command line.
#[must_use]
pub fn escape_data(value: &str) -> String {
  value
    .replace('%', "%25")
    .replace('\r', "%0D")
    .replace('\n', "%0A")
}
