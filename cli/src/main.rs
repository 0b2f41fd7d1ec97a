use clap::Parser;
use log::error;
use std::process;

mod cli;
mod commands;

fn main() {
  let args = cli::Args::parse();

  let mut log_builder = env_logger::Builder::from_default_env();

  if args.debug {
    log_builder.filter(None, log::LevelFilter::Debug);
  } else {
    log_builder.filter(None, log::LevelFilter::Error);
  }
  log_builder.target(env_logger::Target::Stderr);
  log_builder.init();

  if let Err(err) = args.sub_command.run(args.config) {
    error!("{:#}", err);
    process::exit(1)
  }
}
