use std::fs;
use std::path::PathBuf;

use nbtdoc::nbt::{Compression, DEFAULT_LEVEL, DecodeOptions, EncodeOptions, Result, to_bytes_with};

use crate::cmd::util::read_document;

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	pub output: PathBuf,
	/// Output envelope: gzip, zlib, or none.
	#[arg(long, default_value = "gzip")]
	pub compression: String,
	/// Deflate level, 0 to 9.
	#[arg(long, default_value_t = DEFAULT_LEVEL)]
	pub level: u32,
}

/// Re-encode a document with a different envelope.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		compression,
		level,
	} = args;

	let compression = compression.parse::<Compression>()?;
	let (source, document) = read_document(&input, &DecodeOptions::default())?;
	let bytes = to_bytes_with(
		&document,
		&EncodeOptions {
			compression,
			level,
			..EncodeOptions::default()
		},
	)?;
	fs::write(&output, &bytes)?;

	println!("input: {} ({source})", input.display());
	println!("output: {} ({compression})", output.display());
	println!("bytes: {}", bytes.len());

	Ok(())
}
