use super::time_at;
use anyhow::{anyhow, Result};
use bonjour_otp_lib::config::Config;
use clap::Args;

#[derive(Debug, Args)]
pub struct HeaderCommand {
  #[clap(long, default_value = "/bonjour")]
  path: String,
  #[clap(long, help = "Unix timestamp to generate the code for")]
  at: Option<i64>,
}

impl HeaderCommand {
  pub fn run(self, maybe_config: Option<Config>) -> Result<()> {
    let config = maybe_config.ok_or_else(|| anyhow!("No config file found"))?;
    let header = config.header_provider()?;

    if let Some((name, value)) = header.header_for(&self.path, time_at(self.at)?) {
      println!("{}: {}", name, value);
    }

    Ok(())
  }
}
