#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "nbtdoc", about = "Named binary tag document tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Keys(cmd::keys::Args),
	Convert(cmd::convert::Args),
	Check(cmd::check::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nbtdoc::nbt::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Keys(args) => cmd::keys::run(args),
		Commands::Convert(args) => cmd::convert::run(args),
		Commands::Check(args) => cmd::check::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_env("NBTDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
