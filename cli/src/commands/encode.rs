use anyhow::Result;
use bonjour_otp_lib::otp::base32;
use clap::Args;

#[derive(Debug, Args)]
pub struct EncodeCommand {
  #[clap(help = "Raw seed, used byte for byte")]
  seed: String,
}

impl EncodeCommand {
  pub fn run(self) -> Result<()> {
    println!("{}", base32::encode(self.seed.as_bytes()));

    Ok(())
  }
}
