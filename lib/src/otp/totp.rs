use super::hotp::hotp;
use super::{OTPError, OTPResult, OTPSecret};
use chrono::{DateTime, Utc};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use zeroize::Zeroize;

pub const DEFAULT_DIGITS: u8 = 6;
pub const DEFAULT_PERIOD: u32 = 30;
pub const MAX_DIGITS: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TOTPConfig {
  pub digits: u8,
  pub period: u32,
}

impl TOTPConfig {
  pub fn new(digits: u8, period: u32) -> OTPResult<TOTPConfig> {
    let config = TOTPConfig { digits, period };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> OTPResult<()> {
    if self.digits == 0 || self.digits > MAX_DIGITS {
      return Err(OTPError::InvalidDigits(self.digits));
    }
    if self.period == 0 {
      return Err(OTPError::InvalidPeriod(self.period));
    }
    Ok(())
  }
}

impl Default for TOTPConfig {
  fn default() -> Self {
    TOTPConfig {
      digits: DEFAULT_DIGITS,
      period: DEFAULT_PERIOD,
    }
  }
}

/// Time based one time passwords (RFC 6238, HMAC-SHA1 only).
///
/// The secret is decoded and checked once on construction, so a generator that
/// exists is always able to produce codes for any time after the unix epoch.
#[derive(Clone, Debug)]
pub struct TOTPGenerator {
  secret: OTPSecret,
  config: TOTPConfig,
}

impl TOTPGenerator {
  pub fn new(secret_base32: &str, config: TOTPConfig) -> OTPResult<TOTPGenerator> {
    Self::with_secret(secret_base32.parse()?, config)
  }

  pub fn with_secret(secret: OTPSecret, config: TOTPConfig) -> OTPResult<TOTPGenerator> {
    config.validate()?;
    Ok(TOTPGenerator { secret, config })
  }

  pub fn config(&self) -> &TOTPConfig {
    &self.config
  }

  /// Index of the time step `timestamp` falls into.
  pub fn counter(&self, timestamp: u64) -> u64 {
    timestamp / u64::from(self.config.period)
  }

  /// First second of the step after the one `timestamp` falls into.
  pub fn valid_until(&self, timestamp: u64) -> u64 {
    (self.counter(timestamp) + 1) * u64::from(self.config.period)
  }

  pub fn generate_at(&self, timestamp: u64) -> OTPResult<String> {
    hotp(self.secret.as_bytes(), self.counter(timestamp), self.config.digits)
  }

  pub fn generate(&self, at: DateTime<Utc>) -> OTPResult<String> {
    self.generate_at(unix_seconds(at)?)
  }

  pub fn generate_now(&self) -> OTPResult<String> {
    self.generate(Utc::now())
  }
}

/// Generator that never fails on construction.
///
/// The base32 secret is only decoded on first use. If it turns out to be unusable
/// every generation yields `None`, which callers treat as "send the request without
/// a code". Use `try_generate` to find out why no code is available.
pub struct LenientTOTPGenerator {
  secret_base32: String,
  config: TOTPConfig,
  generator: OnceLock<OTPResult<TOTPGenerator>>,
}

impl LenientTOTPGenerator {
  pub fn new<S: Into<String>>(secret_base32: S, config: TOTPConfig) -> LenientTOTPGenerator {
    LenientTOTPGenerator {
      secret_base32: secret_base32.into(),
      config,
      generator: OnceLock::new(),
    }
  }

  pub fn config(&self) -> &TOTPConfig {
    &self.config
  }

  fn generator(&self) -> OTPResult<&TOTPGenerator> {
    self
      .generator
      .get_or_init(|| {
        let result = TOTPGenerator::new(&self.secret_base32, self.config);
        if let Err(err) = &result {
          error!("TOTP secret unusable, requests will be sent without code: {}", err);
        }
        result
      })
      .as_ref()
      .map_err(|err| err.clone())
  }

  pub fn try_generate_at(&self, timestamp: u64) -> OTPResult<String> {
    self.generator()?.generate_at(timestamp)
  }

  pub fn try_generate(&self, at: DateTime<Utc>) -> OTPResult<String> {
    self.generator()?.generate(at)
  }

  pub fn generate(&self, at: DateTime<Utc>) -> Option<String> {
    match self.try_generate(at) {
      Ok(code) => Some(code),
      Err(err) => {
        debug!("No TOTP code available: {}", err);
        None
      }
    }
  }

  pub fn generate_now(&self) -> Option<String> {
    self.generate(Utc::now())
  }
}

impl fmt::Debug for LenientTOTPGenerator {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("LenientTOTPGenerator")
      .field("config", &self.config)
      .field("decoded", &self.generator.get().map(Result::is_ok))
      .finish()
  }
}

impl Drop for LenientTOTPGenerator {
  fn drop(&mut self) {
    self.secret_base32.zeroize();
  }
}

pub fn unix_seconds(at: DateTime<Utc>) -> OTPResult<u64> {
  let timestamp = at.timestamp();

  u64::try_from(timestamp).map_err(|_| OTPError::TimeBeforeEpoch(timestamp))
}
