use std::path::PathBuf;

use nbtdoc::nbt::{Compression, DecodeOptions, NbtError, Result, from_bytes_with, to_bytes};

use crate::cmd::util::read_document;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Decode strictly and verify the document re-encodes to identical bytes.
///
/// Bytes are compared rather than trees so NaN payloads count as unchanged.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let opt = DecodeOptions::strict();
	let (compression, document) = read_document(&path, &opt)?;
	let first = to_bytes(&document, Compression::None)?;
	let second = to_bytes(&from_bytes_with(&first, &opt)?, Compression::None)?;

	println!("path: {}", path.display());
	println!("compression: {compression}");
	println!("strict_decode: ok");
	if first != second {
		println!("round_trip: mismatch");
		return Err(NbtError::RoundTripMismatch {
			first: first.len(),
			second: second.len(),
		});
	}
	println!("round_trip: ok");

	Ok(())
}
