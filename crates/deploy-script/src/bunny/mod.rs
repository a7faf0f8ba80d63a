//! Client for the bunny.net Edge Scripting API.

mod client;
mod credential;

pub use client::{BunnyClient, DEFAULT_BASE_URL, Error};
pub use credential::{Credential, new_api_key, new_deploy_key};

use anyhow::Result;

use crate::platform::Platform;

/// bunny.net as the deployment target.
#[derive(Debug, Clone, Copy, Default)]
pub struct BunnyPlatform;

impl Platform for BunnyPlatform {
  type Credential = Credential;
  type Client = BunnyClient;

  fn new_credential(&self, deploy_key: &str, api_key: &str) -> Credential {
    Credential::from_keys(deploy_key, api_key)
  }

  fn create_client(&self, base: Option<&str>, credential: Credential) -> Result<BunnyClient> {
    Ok(BunnyClient::new(base, credential)?)
  }

  async fn deploy_script(&self, client: &BunnyClient, script_id: &str, contents: &str) -> Result<()> {
    client.deploy_script(script_id, contents).await?;
    Ok(())
  }
}
