#![allow(dead_code)]
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::{Builder, TempDir};

const INPUT_VARS: &[&str] = &[
  "INPUT_SCRIPT_ID",
  "INPUT_FILE",
  "INPUT_DEPLOY_KEY",
  "INPUT_API_KEY",
  "INPUT_BASE",
];

/// Isolated working directory and config home for one test.
#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
  xdg_home: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = Builder::new()
      .prefix("deploy-script-test-")
      .tempdir_in(tmp_root())
      .expect("temp dir");
    let xdg_home = Builder::new()
      .prefix("xdg-")
      .tempdir_in(tmp_root())
      .expect("xdg dir");
    Self { temp, xdg_home }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn xdg_home(&self) -> &Path {
    self.xdg_home.path()
  }

  pub fn write_file(&self, rel: &str, contents: &str) -> Result<PathBuf> {
    let path = self.path().join(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, contents)?;
    Ok(path)
  }

  /// The binary as a GitHub Actions step would run it, with no inputs set.
  pub fn action(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("deploy-script")?;
    cmd.current_dir(self.path());
    cmd.env("XDG_CONFIG_HOME", self.xdg_home());
    cmd.env("GITHUB_ACTIONS", "true");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("RUNNER_DEBUG");
    for var in INPUT_VARS {
      cmd.env_remove(var);
    }
    Ok(cmd)
  }
}

pub fn tmp_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/deploy-script -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|p| p.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}
