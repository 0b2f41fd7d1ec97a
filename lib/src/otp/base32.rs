//! RFC 4648 base32 as it is used for shared TOTP secrets.
//!
//! Decoding is lenient about presentation: lower case letters, `=` padding and
//! spaces are accepted anywhere in the input. Trailing bits that do not fill a
//! whole byte are dropped.

use super::{OTPError, OTPResult};

pub fn decode(input: &str) -> OTPResult<Vec<u8>> {
  let mut output = Vec::with_capacity(input.len() * 5 / 8);
  let mut buffer: u32 = 0;
  let mut bits: u32 = 0;

  let cleaned = input
    .chars()
    .flat_map(char::to_uppercase)
    .filter(|ch| *ch != '=' && *ch != ' ');

  for (position, character) in cleaned.enumerate() {
    let value = symbol_value(character).ok_or(OTPError::InvalidBase32 { character, position })?;

    buffer = (buffer << 5) | value;
    bits += 5;

    if bits >= 8 {
      output.push((buffer >> (bits - 8)) as u8);
      bits -= 8;
    }
  }

  Ok(output)
}

/// Padded base32 encoding, the inverse of `decode`.
pub fn encode(bytes: &[u8]) -> String {
  data_encoding::BASE32.encode(bytes)
}

fn symbol_value(ch: char) -> Option<u32> {
  match ch {
    'A'..='Z' => Some(ch as u32 - 'A' as u32),
    '2'..='7' => Some(ch as u32 - '2' as u32 + 26),
    _ => None,
  }
}
