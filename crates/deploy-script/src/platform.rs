use std::future::Future;

use anyhow::Result;

/// The remote platform a script is deployed to.
///
/// The runner only builds a credential, builds a client, and deploys through it.
/// Everything else (transport, endpoints, auth headers) stays behind this trait.
pub trait Platform {
  type Credential;
  type Client;

  /// Build a credential from the supplied keys. Either key may be empty,
  /// precedence between them is the implementation's call.
  fn new_credential(&self, deploy_key: &str, api_key: &str) -> Self::Credential;

  /// Build a client against `base`, or the platform default when `None`.
  ///
  /// # Errors
  /// Returns an error if the client cannot be constructed.
  fn create_client(&self, base: Option<&str>, credential: Self::Credential) -> Result<Self::Client>;

  /// Deploy `contents` as the script `script_id`.
  fn deploy_script(
    &self,
    client: &Self::Client,
    script_id: &str,
    contents: &str,
  ) -> impl Future<Output = Result<()>>;
}
