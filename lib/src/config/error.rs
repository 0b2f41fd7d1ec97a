use crate::otp::OTPError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("IO: {0}")]
  IO(#[from] std::io::Error),
  #[error("Invalid config file: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("No TOTP secret configured")]
  MissingSecret,
  #[error("OTP: {0}")]
  OTP(#[from] OTPError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
