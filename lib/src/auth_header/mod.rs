//! Attaches a TOTP code as an API key header to outgoing requests.
//!
//! Only requests to protected paths carry the header. When no code can be produced
//! the request goes out without it and the remote service decides what to do.

use crate::otp::{LenientTOTPGenerator, TOTPGenerator};
use chrono::{DateTime, Utc};
use log::{debug, error};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

pub const DEFAULT_HEADER_NAME: &str = "X-API-KEY";
pub const DEFAULT_PROTECTED_PATHS: &[&str] = &["/bonjour", "/api/bonjour/export_today"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthHeaderConfig {
  pub header_name: String,
  pub protected_paths: Vec<String>,
}

impl Default for AuthHeaderConfig {
  fn default() -> Self {
    AuthHeaderConfig {
      header_name: DEFAULT_HEADER_NAME.to_string(),
      protected_paths: DEFAULT_PROTECTED_PATHS.iter().map(ToString::to_string).collect(),
    }
  }
}

#[derive(Debug)]
pub enum CodeSource {
  Strict(TOTPGenerator),
  Lenient(LenientTOTPGenerator),
}

impl CodeSource {
  pub fn code_at(&self, at: DateTime<Utc>) -> Option<String> {
    match self {
      CodeSource::Strict(generator) => match generator.generate(at) {
        Ok(code) => Some(code),
        Err(err) => {
          error!("Unable to generate TOTP code: {}", err);
          None
        }
      },
      CodeSource::Lenient(generator) => generator.generate(at),
    }
  }
}

impl From<TOTPGenerator> for CodeSource {
  fn from(generator: TOTPGenerator) -> Self {
    CodeSource::Strict(generator)
  }
}

impl From<LenientTOTPGenerator> for CodeSource {
  fn from(generator: LenientTOTPGenerator) -> Self {
    CodeSource::Lenient(generator)
  }
}

#[derive(Debug)]
pub struct ApiKeyHeader {
  config: AuthHeaderConfig,
  source: CodeSource,
}

impl ApiKeyHeader {
  pub fn new<S: Into<CodeSource>>(config: AuthHeaderConfig, source: S) -> ApiKeyHeader {
    ApiKeyHeader {
      config,
      source: source.into(),
    }
  }

  pub fn header_name(&self) -> &str {
    &self.config.header_name
  }

  pub fn requires_code(&self, path: &str) -> bool {
    let path = normalize_path(path);

    self
      .config
      .protected_paths
      .iter()
      .any(|protected| normalize_path(protected) == path)
  }

  /// Header name and value to attach to a request for `path`, if any.
  pub fn header_for(&self, path: &str, at: DateTime<Utc>) -> Option<(String, String)> {
    if !self.requires_code(path) {
      return None;
    }
    match self.source.code_at(at) {
      Some(code) => {
        debug!("{} header for {}: {}", self.config.header_name, path, code);
        Some((self.config.header_name.clone(), code))
      }
      None => {
        debug!("Sending {} without {} header", path, self.config.header_name);
        None
      }
    }
  }

  pub fn header_now(&self, path: &str) -> Option<(String, String)> {
    self.header_for(path, Utc::now())
  }
}

// "bonjour", "/bonjour/" and "/bonjour?x=1" all name the same endpoint
fn normalize_path(path: &str) -> String {
  let path = path.split(['?', '#']).next().unwrap_or_default();
  let path = path.trim_matches('/');

  format!("/{}", path)
}
