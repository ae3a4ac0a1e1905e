use thiserror::Error;

use crate::nbt::TagKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while reading, writing, and enveloping tag documents.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Stream write failure or compression collaborator failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected end of stream at offset {at}, need {need} bytes")]
	UnexpectedEnd {
		/// Byte offset where the read was attempted.
		at: u64,
		/// Requested bytes.
		need: usize,
	},
	/// Discriminant byte does not name a kind valid in this position.
	#[error("unknown tag kind {id}")]
	UnknownTagKind {
		/// Offending discriminant byte.
		id: u8,
	},
	/// List element kind disagrees with the kind chosen by the first element.
	#[error("unsupported list element kind {found} at index {index} (list kind is {expected})")]
	UnsupportedKind {
		/// Kind of the list's first element.
		expected: TagKind,
		/// Kind of the mismatching element.
		found: TagKind,
		/// Position of the mismatching element.
		index: usize,
	},
	/// Requested envelope compression mode is not recognized.
	#[error("unsupported compression mode {mode:?} (expected gzip, zlib, or none)")]
	UnsupportedCompression {
		/// User-provided mode string.
		mode: String,
	},
	/// Root discriminant was End, so the document holds no root tag.
	#[error("empty document")]
	EmptyDocument,
	/// Length or count prefix was negative.
	#[error("negative length prefix {len}")]
	NegativeLength {
		/// Parsed signed length.
		len: i64,
	},
	/// String payload does not fit the 16-bit length prefix.
	#[error("string of {len} bytes exceeds the 65535 byte limit")]
	StringTooLong {
		/// Encoded UTF-8 length.
		len: usize,
	},
	/// Array or list payload does not fit its length prefix.
	#[error("length {len} does not fit the length prefix")]
	LengthOverflow {
		/// Element count that overflowed.
		len: usize,
	},
	/// String payload bytes are not valid UTF-8.
	#[error("invalid utf-8 string payload at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the string payload.
		at: u64,
	},
	/// Compound contained the same member name twice.
	#[error("duplicate compound key {name:?}")]
	DuplicateKey {
		/// Repeated member name.
		name: String,
	},
	/// Container nesting exceeded the configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Decompression output exceeded the configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Re-encoding a decoded document produced different bytes.
	#[error("re-encoded document differs from its first encoding ({first} bytes, then {second} bytes)")]
	RoundTripMismatch {
		/// Length of the first encoding.
		first: usize,
		/// Length of the encoding after decoding it again.
		second: usize,
	},
	/// JSON output could not be serialized.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
