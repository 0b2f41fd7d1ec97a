mod code;
mod decode;
mod encode;
mod header;

use anyhow::{anyhow, Result};
use bonjour_otp_lib::config::{config_file, read_config, Config};
use chrono::{DateTime, TimeZone, Utc};
use clap::Subcommand;
use log::debug;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum MainCommand {
  #[clap(about = "Print the current TOTP code")]
  Code(code::CodeCommand),
  #[clap(about = "Print the API key header for a request path")]
  Header(header::HeaderCommand),
  #[clap(about = "Encode a raw seed as base32 secret")]
  Encode(encode::EncodeCommand),
  #[clap(about = "Decode a base32 secret to hex")]
  Decode(decode::DecodeCommand),
}

impl MainCommand {
  pub fn run(self, maybe_config_file: Option<PathBuf>) -> Result<()> {
    match self {
      MainCommand::Code(cmd) => cmd.run(load_config(maybe_config_file)?),
      MainCommand::Header(cmd) => cmd.run(load_config(maybe_config_file)?),
      MainCommand::Encode(cmd) => cmd.run(),
      MainCommand::Decode(cmd) => cmd.run(),
    }
  }
}

fn load_config(maybe_config_file: Option<PathBuf>) -> Result<Option<Config>> {
  let config_file = maybe_config_file.unwrap_or_else(config_file);

  debug!("Reading config from {}", config_file.to_string_lossy());

  let mut maybe_config = read_config(&config_file)?;
  if let Some(config) = maybe_config.as_mut() {
    config.apply_env();
  }

  Ok(maybe_config)
}

fn time_at(maybe_timestamp: Option<i64>) -> Result<DateTime<Utc>> {
  match maybe_timestamp {
    Some(timestamp) => Utc
      .timestamp_opt(timestamp, 0)
      .single()
      .ok_or_else(|| anyhow!("Timestamp out of range: {}", timestamp)),
    None => Ok(Utc::now()),
  }
}
