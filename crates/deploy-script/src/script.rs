use std::future::Future;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::error_messages::script_read_failed;

/// Where script sources are read from.
pub trait ScriptSource {
  /// Read the script at `path` as UTF-8 text.
  fn read_script(&self, path: &Path) -> impl Future<Output = Result<String>>;
}

/// Reads scripts from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScriptSource;

impl ScriptSource for FsScriptSource {
  async fn read_script(&self, path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
      .await
      .with_context(|| script_read_failed(path.display()))
  }
}
