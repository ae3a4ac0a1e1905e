//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file into memory.
pub fn read_fixture(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()))
}

/// Big-endian byte builder for hand-assembled tag streams.
#[derive(Debug, Default, Clone)]
pub struct Wire {
	bytes: Vec<u8>,
}

impl Wire {
	/// Start an empty stream.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one byte.
	pub fn u8(mut self, value: u8) -> Self {
		self.bytes.push(value);
		self
	}

	/// Append a big-endian `i16`.
	pub fn i16(mut self, value: i16) -> Self {
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a big-endian `i32`.
	pub fn i32(mut self, value: i32) -> Self {
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a big-endian `i64`.
	pub fn i64(mut self, value: i64) -> Self {
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a big-endian binary32 bit pattern.
	pub fn f32(mut self, value: f32) -> Self {
		self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
		self
	}

	/// Append a big-endian binary64 bit pattern.
	pub fn f64(mut self, value: f64) -> Self {
		self.bytes.extend_from_slice(&value.to_bits().to_be_bytes());
		self
	}

	/// Append a `u16`-length-prefixed string.
	pub fn string(mut self, value: &str) -> Self {
		let len = u16::try_from(value.len()).expect("test string fits u16 prefix");
		self.bytes.extend_from_slice(&len.to_be_bytes());
		self.bytes.extend_from_slice(value.as_bytes());
		self
	}

	/// Append raw bytes.
	pub fn raw(mut self, value: &[u8]) -> Self {
		self.bytes.extend_from_slice(value);
		self
	}

	/// Append a member header: discriminant then name.
	pub fn header(self, kind: u8, name: &str) -> Self {
		self.u8(kind).string(name)
	}

	/// Append the End discriminant.
	pub fn end(self) -> Self {
		self.u8(0)
	}

	/// Finish and return the bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}
