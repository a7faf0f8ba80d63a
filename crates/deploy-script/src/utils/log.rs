/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;
  pub fn id(value: impl Display) -> String {
    format!("{}", value.to_string().blue())
  }

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn url(u: impl Display) -> String {
    format!("{}", u.to_string().magenta())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }
}

// User-facing lines. info = neutral, warn/error = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.
// Diagnostics that are not meant for the CI log go through the `log` crate instead.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Warn,
  Error,
}

pub fn emit(level: LogLevel, text: String) {
  match level {
    LogLevel::Info => anstream::println!("{}", text),
    LogLevel::Warn | LogLevel::Error => anstream::eprintln!("{}", text),
  }
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Info,
      format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Warn,
      $crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_error {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Error,
      $crate::utils::log::t::err(format!($fmt $(, $args )*))
    );
  }};
}

/// Initialize `env_logger` for diagnostics.
///
/// `RUST_LOG` wins when set. Otherwise the runner's debug flag (`RUNNER_DEBUG=1`)
/// enables `debug`, `verbose` enables `info`, and the default is `warn`.
pub fn init_diagnostics(verbose: bool) {
  let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v.trim() == "1");
  let _ = env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or(default_filter(verbose, runner_debug)),
  )
  .format_timestamp_secs()
  .try_init();
}

fn default_filter(verbose: bool, runner_debug: bool) -> &'static str {
  if runner_debug {
    "debug"
  } else if verbose {
    "info"
  } else {
    "warn"
  }
}
