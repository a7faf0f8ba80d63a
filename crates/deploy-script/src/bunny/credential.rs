use std::fmt;

use reqwest::RequestBuilder;

const DEPLOY_KEY_HEADER: &str = "DeploymentKey";
const API_KEY_HEADER: &str = "AccessKey";

/// Authentication for API requests.
///
/// `Debug` output never includes the token.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Credential {
  /// No authentication header is sent.
  #[default]
  Anonymous,
  /// Script-scoped deployment key.
  DeployKey(String),
  /// Account-wide API access key.
  ApiKey(String),
}

pub fn new_deploy_key(token: impl Into<String>) -> Credential {
  Credential::DeployKey(token.into())
}

pub fn new_api_key(token: impl Into<String>) -> Credential {
  Credential::ApiKey(token.into())
}

impl Credential {
  /// Pick a credential from the supplied keys: deploy key, then API key, else anonymous.
  #[must_use]
  pub fn from_keys(deploy_key: &str, api_key: &str) -> Self {
    let deploy_key = deploy_key.trim();
    let api_key = api_key.trim();
    if !deploy_key.is_empty() {
      new_deploy_key(deploy_key)
    } else if !api_key.is_empty() {
      new_api_key(api_key)
    } else {
      Self::Anonymous
    }
  }

  pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    match self {
      Self::Anonymous => request,
      Self::DeployKey(token) => request.header(DEPLOY_KEY_HEADER, token),
      Self::ApiKey(token) => request.header(API_KEY_HEADER, token),
    }
  }
}

impl fmt::Debug for Credential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Anonymous => f.write_str("Anonymous"),
      Self::DeployKey(_) => f.write_str("DeployKey(***)"),
      Self::ApiKey(_) => f.write_str("ApiKey(***)"),
    }
  }
}
