use super::time_at;
use anyhow::{anyhow, Context, Result};
use bonjour_otp_lib::config::{Config, SECRET_ENV};
use bonjour_otp_lib::otp::{unix_seconds, LenientTOTPGenerator, TOTPConfig, TOTPGenerator};
use clap::Args;
use log::debug;
use std::env;

#[derive(Debug, Args)]
pub struct CodeCommand {
  #[clap(long, help = "Base32 secret, overrides config and environment")]
  secret: Option<String>,
  #[clap(long)]
  digits: Option<u8>,
  #[clap(long, help = "Time step in seconds")]
  period: Option<u32>,
  #[clap(long, help = "Unix timestamp to generate the code for")]
  at: Option<i64>,
  #[clap(long, help = "Print nothing instead of failing on a bad secret")]
  lenient: bool,
}

impl CodeCommand {
  pub fn run(self, maybe_config: Option<Config>) -> Result<()> {
    let base = maybe_config.as_ref().map(|config| config.totp).unwrap_or_default();
    let totp_config = TOTPConfig::new(
      self.digits.unwrap_or(base.digits),
      self.period.unwrap_or(base.period),
    )?;
    let secret = self
      .secret
      .or_else(|| env::var(SECRET_ENV).ok())
      .or_else(|| maybe_config.as_ref().map(|config| config.secret.as_str().to_string()))
      .filter(|secret| !secret.trim().is_empty())
      .ok_or_else(|| anyhow!("No secret given, use --secret, {} or the config file", SECRET_ENV))?;
    let at = time_at(self.at)?;

    if self.lenient {
      if let Some(code) = LenientTOTPGenerator::new(secret, totp_config).generate(at) {
        println!("{}", code);
      }
      return Ok(());
    }

    let generator = TOTPGenerator::new(&secret, totp_config).context("Invalid secret")?;
    let code = generator.generate(at)?;

    debug!("Valid until {}", generator.valid_until(unix_seconds(at)?));
    println!("{}", code);

    Ok(())
  }
}
