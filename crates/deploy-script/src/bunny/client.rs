use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::credential::Credential;

pub const DEFAULT_BASE_URL: &str = "https://api.bunny.net";

const USER_AGENT: &str = concat!("deploy-script/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum Error {
  #[error("invalid base URL '{base}': {reason}")]
  InvalidBase { base: String, reason: String },

  #[error(transparent)]
  Http(#[from] reqwest::Error),

  #[error("{step} failed with status {status}: {message}")]
  Api {
    step: &'static str,
    status: StatusCode,
    message: String,
  },
}

#[derive(Serialize)]
struct CodeBody<'a> {
  #[serde(rename = "Code")]
  code: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
  #[serde(rename = "Message", default)]
  message: Option<String>,
}

/// Authenticated handle on the Edge Scripting API.
#[derive(Debug, Clone)]
pub struct BunnyClient {
  http: reqwest::Client,
  base: Url,
  credential: Credential,
}

impl BunnyClient {
  /// Build a client for `base`, or the public API when no override is given.
  ///
  /// # Errors
  /// Returns an error if the base URL does not parse or cannot carry a path.
  pub fn new(base: Option<&str>, credential: Credential) -> Result<Self, Error> {
    let raw = base
      .map(str::trim)
      .filter(|b| !b.is_empty())
      .unwrap_or(DEFAULT_BASE_URL);
    let base = Url::parse(raw).map_err(|err| invalid_base(raw, err))?;
    if base.cannot_be_a_base() {
      return Err(invalid_base(raw, "URL cannot carry a path"));
    }
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self {
      http,
      base,
      credential,
    })
  }

  #[must_use]
  pub fn base(&self) -> &Url {
    &self.base
  }

  /// Upload `code` as the script's source, then publish it.
  ///
  /// # Errors
  /// Returns the first failing request. Publishing is skipped when the upload fails.
  pub async fn deploy_script(&self, script_id: &str, code: &str) -> Result<(), Error> {
    self.upload_code(script_id, code).await?;
    self.publish(script_id).await
  }

  pub async fn upload_code(&self, script_id: &str, code: &str) -> Result<(), Error> {
    let url = self.script_url(script_id, "code")?;
    self.post("upload", url, &CodeBody { code }).await
  }

  pub async fn publish(&self, script_id: &str) -> Result<(), Error> {
    let url = self.script_url(script_id, "publish")?;
    self.post("publish", url, &serde_json::json!({})).await
  }

  fn script_url(&self, script_id: &str, action: &str) -> Result<Url, Error> {
    let mut url = self.base.clone();
    url
      .path_segments_mut()
      .map_err(|()| invalid_base(self.base.as_str(), "URL cannot carry a path"))?
      .pop_if_empty()
      .extend(["compute", "script", script_id, action]);
    Ok(url)
  }

  async fn post(&self, step: &'static str, url: Url, body: &impl Serialize) -> Result<(), Error> {
    log::debug!("POST {url}");
    let response = self
      .credential
      .authorize(self.http.post(url))
      .json(body)
      .send()
      .await?;
    let status = response.status();
    log::debug!("{step} -> {status}");
    if status.is_success() {
      return Ok(());
    }
    let text = response.text().await.unwrap_or_default();
    Err(Error::Api {
      step,
      status,
      message: api_error_message(status, &text),
    })
  }
}

fn invalid_base(base: &str, reason: impl std::fmt::Display) -> Error {
  Error::InvalidBase {
    base: base.to_string(),
    reason: reason.to_string(),
  }
}

/// Prefer the API's `Message` field, then the raw body, then the status reason.
fn api_error_message(status: StatusCode, body: &str) -> String {
  if let Ok(ApiErrorBody {
    message: Some(message),
  }) = serde_json::from_str::<ApiErrorBody>(body)
    && !message.trim().is_empty()
  {
    return message.trim().to_string();
  }
  let body = body.trim();
  if !body.is_empty() {
    return body.to_string();
  }
  status
    .canonical_reason()
    .unwrap_or("request failed")
    .to_string()
}
