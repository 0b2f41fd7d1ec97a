use super::{parse_config, read_config, Config, ConfigError};
use crate::otp::{OTPError, TOTPConfig};
use chrono::{TimeZone, Utc};
use spectral::prelude::*;
use std::fs;
use tempfile::tempdir;

const FULL_CONFIG: &str = r#"
secret = "gezd gnbv gy3t qojq gezd gnbv gy3t qojq"
strict = false

[totp]
digits = 8
period = 30

[header]
header_name = "X-OTP"
protected_paths = ["/bonjour"]
"#;

#[test]
fn test_defaults() {
  let config = parse_config("").unwrap();

  assert_that(&config).is_equal_to(Config::default());
  assert_that(&config.strict).is_true();
  assert_that(&config.has_secret()).is_false();
  assert_that(&config.totp).is_equal_to(TOTPConfig { digits: 6, period: 30 });
  assert_that(&config.header.header_name.as_str()).is_equal_to("X-API-KEY");
}

#[test]
fn test_full_config() {
  let config = parse_config(FULL_CONFIG).unwrap();

  assert_that(&config.strict).is_false();
  assert_that(&config.totp).is_equal_to(TOTPConfig { digits: 8, period: 30 });
  assert_that(&config.header.protected_paths).is_equal_to(vec!["/bonjour".to_string()]);

  let header = config.header_provider().unwrap();
  assert_that(&header.header_for("/bonjour", Utc.timestamp_opt(59, 0).unwrap()))
    .is_equal_to(Some(("X-OTP".to_string(), "94287082".to_string())));
}

#[test]
fn test_partial_totp_section() {
  let config = parse_config("secret = \"MZXW6YTB\"\n[totp]\nperiod = 60\n").unwrap();

  assert_that(&config.totp).is_equal_to(TOTPConfig { digits: 6, period: 60 });
}

#[test]
fn test_invalid_config() {
  assert_that(&matches!(parse_config("strict = \"yes\""), Err(ConfigError::Toml(_)))).is_true();
  assert_that(&matches!(
    parse_config("[totp]\ndigits = 12\n"),
    Err(ConfigError::OTP(OTPError::InvalidDigits(12)))
  ))
  .is_true();
}

#[test]
fn test_secret_is_redacted() {
  let config = parse_config(FULL_CONFIG).unwrap();
  let debug = format!("{:?}", config);

  assert_that(&debug.contains("<redacted>")).is_true();
  assert_that(&debug.to_lowercase().contains("gezd")).is_false();
  assert_that(&format!("{:?}", Config::default()).contains("<none>")).is_true();
}

#[test]
fn test_strict_mode() {
  assert_that(&matches!(Config::default().generator(), Err(ConfigError::MissingSecret))).is_true();
  assert_that(&matches!(Config::default().header_provider(), Err(ConfigError::MissingSecret))).is_true();

  let mut config = Config::default();
  config.override_secret(Some("1NVALID!".to_string()));
  assert_that(&matches!(
    config.header_provider(),
    Err(ConfigError::OTP(OTPError::InvalidBase32 { character: '1', position: 0 }))
  ))
  .is_true();

  config.override_secret(None);
  assert_that(&config.secret.as_str()).is_equal_to("1NVALID!");
}

#[test]
fn test_lenient_mode() {
  let mut config = Config::default();
  config.strict = false;
  config.override_secret(Some("1NVALID!".to_string()));

  let header = config.header_provider().unwrap();

  assert_that(&header.header_now("/bonjour")).is_none();
  assert_that(&config.lenient_generator().try_generate_at(59)).is_err();
}

#[test]
fn test_read_config() {
  let dir = tempdir().unwrap();
  let config_file = dir.path().join("config.toml");

  assert_that(&read_config(&config_file).unwrap()).is_none();

  fs::write(&config_file, FULL_CONFIG).unwrap();
  let config = read_config(&config_file).unwrap().unwrap();

  assert_that(&config.has_secret()).is_true();
  assert_that(&config.generator().unwrap().generate_at(59)).is_ok_containing("94287082".to_string());

  fs::write(&config_file, "secret = ").unwrap();
  assert_that(&matches!(read_config(&config_file), Err(ConfigError::Toml(_)))).is_true();
}
