use anyhow::Result;
use bonjour_otp_lib::otp::base32;
use clap::Args;
use data_encoding::HEXLOWER;

#[derive(Debug, Args)]
pub struct DecodeCommand {
  secret: String,
}

impl DecodeCommand {
  pub fn run(self) -> Result<()> {
    let bytes = base32::decode(&self.secret)?;

    println!("{}", HEXLOWER.encode(&bytes));

    Ok(())
  }
}
