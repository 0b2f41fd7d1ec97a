use super::{ApiKeyHeader, AuthHeaderConfig, DEFAULT_HEADER_NAME};
use crate::otp::{LenientTOTPGenerator, TOTPConfig, TOTPGenerator};
use chrono::{TimeZone, Utc};
use spectral::prelude::*;

const SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

fn strict_header() -> ApiKeyHeader {
  ApiKeyHeader::new(
    AuthHeaderConfig::default(),
    TOTPGenerator::new(SECRET, TOTPConfig::default()).unwrap(),
  )
}

#[test]
fn test_default_config() {
  let config = AuthHeaderConfig::default();

  assert_that(&config.header_name.as_str()).is_equal_to(DEFAULT_HEADER_NAME);
  assert_that(&config.protected_paths).is_equal_to(vec![
    "/bonjour".to_string(),
    "/api/bonjour/export_today".to_string(),
  ]);
}

#[test]
fn test_requires_code() {
  let header = strict_header();

  assert_that(&header.requires_code("/bonjour")).is_true();
  assert_that(&header.requires_code("bonjour")).is_true();
  assert_that(&header.requires_code("/bonjour/")).is_true();
  assert_that(&header.requires_code("/api/bonjour/export_today?email=a%40b.c")).is_true();
  assert_that(&header.requires_code("/api/bonjour/check_registration")).is_false();
  assert_that(&header.requires_code("/bonjour/other")).is_false();
  assert_that(&header.requires_code("")).is_false();
}

#[test]
fn test_header_for_protected_path() {
  let header = strict_header();
  let at = Utc.timestamp_opt(59, 0).unwrap();

  assert_that(&header.header_name()).is_equal_to("X-API-KEY");
  assert_that(&header.header_for("/bonjour", at)).is_equal_to(Some(("X-API-KEY".to_string(), "287082".to_string())));
  assert_that(&header.header_for("/api/bonjour/request_registration", at)).is_none();
  assert_that(&header.header_now("/bonjour")).is_some();
}

#[test]
fn test_header_omitted_without_code() {
  let header = ApiKeyHeader::new(
    AuthHeaderConfig::default(),
    LenientTOTPGenerator::new("1NVALID!", TOTPConfig::default()),
  );

  assert_that(&header.header_for("/bonjour", Utc.timestamp_opt(59, 0).unwrap())).is_none();
  assert_that(&header.header_now("/api/bonjour/export_today")).is_none();
}

#[test]
fn test_strict_source_before_epoch() {
  let header = strict_header();

  assert_that(&header.header_for("/bonjour", Utc.timestamp_opt(-30, 0).unwrap())).is_none();
}

#[test]
fn test_custom_header() {
  let header = ApiKeyHeader::new(
    AuthHeaderConfig {
      header_name: "X-OTP".to_string(),
      protected_paths: vec!["/absences".to_string()],
    },
    LenientTOTPGenerator::new(SECRET.to_lowercase(), TOTPConfig::new(8, 30).unwrap()),
  );
  let at = Utc.timestamp_opt(59, 0).unwrap();

  assert_that(&header.header_for("/absences", at)).is_equal_to(Some(("X-OTP".to_string(), "94287082".to_string())));
  assert_that(&header.header_for("/bonjour", at)).is_none();
}
