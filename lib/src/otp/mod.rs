use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub mod base32;
mod error;
mod hotp;
mod totp;


pub use self::error::*;
pub use self::hotp::{format_code, hotp, truncate, SHA1_DIGEST_LEN};
pub use self::totp::{
  unix_seconds, LenientTOTPGenerator, TOTPConfig, TOTPGenerator, DEFAULT_DIGITS, DEFAULT_PERIOD, MAX_DIGITS,
};

/// Decoded shared secret. Wiped from memory when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct OTPSecret(Vec<u8>);

impl OTPSecret {
  pub fn from_bytes(bytes: Vec<u8>) -> OTPResult<OTPSecret> {
    if bytes.is_empty() {
      return Err(OTPError::EmptySecret);
    }
    Ok(OTPSecret(bytes))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub(crate) fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl FromStr for OTPSecret {
  type Err = OTPError;

  fn from_str(s: &str) -> OTPResult<Self> {
    Self::from_bytes(base32::decode(s)?)
  }
}

// Never print the secret itself
impl fmt::Debug for OTPSecret {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "OTPSecret({} bytes)", self.0.len())
  }
}
