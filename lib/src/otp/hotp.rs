use super::OTPResult;
use byteorder::{BigEndian, ByteOrder};
use hmac::{Hmac, Mac};
use sha1::Sha1;

pub const SHA1_DIGEST_LEN: usize = 20;

/// Counter based one time password (RFC 4226) with HMAC-SHA1.
pub fn hotp(secret: &[u8], counter: u64, digits: u8) -> OTPResult<String> {
  let mut mac = Hmac::<Sha1>::new_from_slice(secret)?;
  mac.update(&counter.to_be_bytes());

  let mut digest = [0u8; SHA1_DIGEST_LEN];
  digest.copy_from_slice(&mac.finalize().into_bytes());

  Ok(format_code(truncate(&digest), digits))
}

/// Dynamic truncation: 31 bits read at the offset given by the low nibble of the last byte.
pub fn truncate(digest: &[u8; SHA1_DIGEST_LEN]) -> u32 {
  let offset = (digest[SHA1_DIGEST_LEN - 1] & 0xf) as usize;

  BigEndian::read_u32(&digest[offset..offset + 4]) & 0x7fff_ffff
}

pub fn format_code(value: u32, digits: u8) -> String {
  // 10^20 and up no longer fits, but every u32 is already below that
  let code = match 10_u64.checked_pow(u32::from(digits)) {
    Some(modulus) => u64::from(value) % modulus,
    None => u64::from(value),
  };

  format!("{:01$}", code, digits as usize)
}
