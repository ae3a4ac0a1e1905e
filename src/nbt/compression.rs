use std::borrow::Cow;
use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;

use flate2::bufread::GzDecoder;
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::{Decompress, FlushDecompress, Status};

use crate::nbt::{NbtError, Result};

/// gzip member magic.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
/// Default deflate level ("best speed").
pub const DEFAULT_LEVEL: u32 = 1;
const MAX_LEVEL: u32 = 9;
const CHUNK: usize = 8192;
/// Fixed gzip header plus trailer.
const GZIP_FRAME_LEN: usize = 18;

/// Envelope compression applied around an encoded tag tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	#[default]
	None,
	/// gzip-framed deflate stream.
	Gzip,
	/// zlib-framed deflate stream.
	Zlib,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
			Self::Zlib => "zlib",
		}
	}

	/// Guess the envelope of `bytes` from its leading magic.
	///
	/// A raw document starts with a discriminant in `0..=12`, which never collides with either magic.
	/// A lone leading magic byte is reported as its envelope so truncation surfaces as such.
	pub fn detect(bytes: &[u8]) -> Self {
		match bytes {
			[first] if *first == GZIP_MAGIC[0] => return Self::Gzip,
			[cmf] if is_zlib_cmf(*cmf) => return Self::Zlib,
			_ => {}
		}
		if bytes.starts_with(&GZIP_MAGIC) {
			return Self::Gzip;
		}
		if is_zlib_header(bytes) {
			return Self::Zlib;
		}
		Self::None
	}
}

impl fmt::Display for Compression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Compression {
	type Err = NbtError;

	fn from_str(mode: &str) -> Result<Self> {
		match mode {
			"none" => Ok(Self::None),
			"gzip" => Ok(Self::Gzip),
			"zlib" => Ok(Self::Zlib),
			_ => Err(NbtError::UnsupportedCompression { mode: mode.to_owned() }),
		}
	}
}

fn is_zlib_header(bytes: &[u8]) -> bool {
	let [cmf, flg, ..] = bytes else {
		return false;
	};
	is_zlib_cmf(*cmf) && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0
}

fn is_zlib_cmf(cmf: u8) -> bool {
	let method = cmf & 0x0F;
	let window = cmf >> 4;
	method == 8 && (1..=7).contains(&window)
}

/// Detect and undo envelope compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: &[u8], limit: usize) -> Result<(Compression, Cow<'_, [u8]>)> {
	let mode = Compression::detect(raw);
	tracing::debug!(compression = mode.as_str(), input_len = raw.len(), "detected envelope");
	if mode == Compression::None {
		return Ok((mode, Cow::Borrowed(raw)));
	}

	let out = decompress(raw, mode, limit)?;
	tracing::debug!(compression = mode.as_str(), output_len = out.len(), "decompressed envelope");
	Ok((mode, Cow::Owned(out)))
}

/// Inflate `raw` framed as `mode`, failing once output passes `limit` bytes.
///
/// Input that ends before the envelope is complete fails with [`NbtError::UnexpectedEnd`].
pub fn decompress(raw: &[u8], mode: Compression, limit: usize) -> Result<Vec<u8>> {
	match mode {
		Compression::None => Ok(raw.to_vec()),
		Compression::Gzip => inflate_gzip(raw, limit),
		Compression::Zlib => inflate_zlib(raw, limit),
	}
}

fn inflate_gzip(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	if raw.len() < GZIP_FRAME_LEN {
		return Err(truncated(raw));
	}

	let mut decoder = GzDecoder::new(raw);
	let mut out = Vec::new();
	let mut buf = [0_u8; CHUNK];

	loop {
		let read = match decoder.read(&mut buf) {
			Ok(read) => read,
			Err(_) if decoder.get_ref().is_empty() => return Err(truncated(raw)),
			Err(err) => return Err(err.into()),
		};
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(NbtError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

fn inflate_zlib(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut inflater = Decompress::new(true);
	let mut out = Vec::new();

	loop {
		let consumed = inflater.total_in() as usize;
		let produced = inflater.total_out();
		out.reserve(CHUNK);
		let status = inflater
			.decompress_vec(&raw[consumed..], &mut out, FlushDecompress::None)
			.map_err(io::Error::other)?;

		if out.len() > limit {
			return Err(NbtError::DecompressedTooLarge { limit });
		}
		if status == Status::StreamEnd {
			return Ok(out);
		}

		let stalled = inflater.total_in() as usize == consumed && inflater.total_out() == produced;
		if stalled {
			if consumed == raw.len() {
				return Err(truncated(raw));
			}
			return Err(io::Error::new(io::ErrorKind::InvalidData, "zlib stream stopped making progress").into());
		}
	}
}

fn truncated(raw: &[u8]) -> NbtError {
	NbtError::UnexpectedEnd {
		at: raw.len() as u64,
		need: 1,
	}
}

/// Frame `bytes` as `mode` at deflate `level` (clamped to 9).
pub fn compress(bytes: &[u8], mode: Compression, level: u32) -> Result<Vec<u8>> {
	let level = flate2::Compression::new(level.min(MAX_LEVEL));
	let out = match mode {
		Compression::None => return Ok(bytes.to_vec()),
		Compression::Gzip => {
			let mut encoder = GzEncoder::new(Vec::new(), level);
			encoder.write_all(bytes)?;
			encoder.finish()?
		}
		Compression::Zlib => {
			let mut encoder = ZlibEncoder::new(Vec::new(), level);
			encoder.write_all(bytes)?;
			encoder.finish()?
		}
	};
	tracing::debug!(compression = mode.as_str(), input_len = bytes.len(), output_len = out.len(), "compressed envelope");
	Ok(out)
}
