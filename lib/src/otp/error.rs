use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OTPError {
  InvalidBase32 { character: char, position: usize },
  EmptySecret,
  InvalidDigits(u8),
  InvalidPeriod(u32),
  InvalidKey(String),
  TimeBeforeEpoch(i64),
}

impl fmt::Display for OTPError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      OTPError::InvalidBase32 { character, position } => write!(
        f,
        "Invalid base32 character {:?} at position {}",
        character, position
      )?,
      OTPError::EmptySecret => write!(f, "Secret is empty after decoding")?,
      OTPError::InvalidDigits(digits) => write!(f, "Invalid number of digits: {}. Expected 1 to 10", digits)?,
      OTPError::InvalidPeriod(period) => write!(f, "Invalid period: {}. Expected at least one second", period)?,
      OTPError::InvalidKey(error) => write!(f, "Invalid HMAC key: {}", error)?,
      OTPError::TimeBeforeEpoch(timestamp) => write!(f, "Timestamp {} is before the unix epoch", timestamp)?,
    }

    Ok(())
  }
}

impl std::error::Error for OTPError {}

pub type OTPResult<T> = Result<T, OTPError>;

error_convert_from!(hmac::digest::InvalidLength, OTPError, InvalidKey(display));
