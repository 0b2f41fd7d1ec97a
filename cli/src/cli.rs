use clap::Parser;
use std::path::PathBuf;

use crate::commands::MainCommand;

#[derive(Debug, Parser)]
#[clap(name = "bonjour-otp", about = "TOTP codes for the Bonjour API", version = clap::crate_version!())]
pub struct Args {
  #[clap(short, long, help = "Enable debug logs")]
  pub debug: bool,

  #[clap(short, long, help = "Config file to use instead of the default location")]
  pub config: Option<PathBuf>,

  #[clap(subcommand)]
  pub sub_command: MainCommand,
}
