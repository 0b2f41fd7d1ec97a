use crate::auth_header::{ApiKeyHeader, AuthHeaderConfig, CodeSource};
use crate::otp::{LenientTOTPGenerator, TOTPConfig, TOTPGenerator};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use zeroize::{Zeroize, ZeroizeOnDrop};

mod error;

#[cfg(test)]
mod tests;

pub use self::error::*;

pub const SECRET_ENV: &str = "BONJOUR_OTP_SECRET";

/// Base32 encoded shared secret as it appears in the configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_blank(&self) -> bool {
    self.0.trim().is_empty()
  }
}

impl From<String> for SecretString {
  fn from(secret: String) -> Self {
    SecretString(secret)
  }
}

impl From<&str> for SecretString {
  fn from(secret: &str) -> Self {
    SecretString(secret.to_string())
  }
}

impl fmt::Debug for SecretString {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.is_blank() {
      write!(f, "<none>")
    } else {
      write!(f, "<redacted>")
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  pub secret: SecretString,
  /// Decode the secret up front and refuse to start on a bad one. When `false`
  /// requests are sent without code instead.
  pub strict: bool,
  pub totp: TOTPConfig,
  pub header: AuthHeaderConfig,
}

impl Config {
  pub fn override_secret(&mut self, maybe_secret: Option<String>) {
    if let Some(secret) = maybe_secret {
      self.secret = secret.into();
    }
  }

  pub fn apply_env(&mut self) {
    match env::var(SECRET_ENV) {
      Ok(secret) => {
        debug!("Using TOTP secret from {}", SECRET_ENV);
        self.override_secret(Some(secret));
      }
      Err(env::VarError::NotUnicode(_)) => warn!("Ignoring {}: not valid unicode", SECRET_ENV),
      Err(env::VarError::NotPresent) => (),
    }
  }

  pub fn has_secret(&self) -> bool {
    !self.secret.is_blank()
  }

  pub fn generator(&self) -> ConfigResult<TOTPGenerator> {
    if !self.has_secret() {
      return Err(ConfigError::MissingSecret);
    }
    Ok(TOTPGenerator::new(self.secret.as_str(), self.totp)?)
  }

  pub fn lenient_generator(&self) -> LenientTOTPGenerator {
    LenientTOTPGenerator::new(self.secret.as_str(), self.totp)
  }

  pub fn header_provider(&self) -> ConfigResult<ApiKeyHeader> {
    let source: CodeSource = if self.strict {
      self.generator()?.into()
    } else {
      self.lenient_generator().into()
    };

    Ok(ApiKeyHeader::new(self.header.clone(), source))
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      secret: SecretString::default(),
      strict: true,
      totp: TOTPConfig::default(),
      header: AuthHeaderConfig::default(),
    }
  }
}

pub fn config_file() -> PathBuf {
  let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
  dirs::config_dir()
    .map(|configs| configs.join("bonjour-otp"))
    .unwrap_or_else(|| home_dir.join(".bonjour-otp"))
    .join("config.toml")
}

pub fn parse_config(content: &str) -> ConfigResult<Config> {
  let config = toml::from_str::<Config>(content)?;
  config.totp.validate()?;
  Ok(config)
}

pub fn read_config<P: AsRef<Path>>(config_file: P) -> ConfigResult<Option<Config>> {
  match File::open(config_file.as_ref()) {
    Ok(mut file) => {
      let mut content = String::new();

      file.read_to_string(&mut content)?;

      let config = parse_config(&content);
      content.zeroize();

      Ok(Some(config?))
    }
    Err(ref err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(err) => Err(err.into()),
  }
}
