use std::fmt;

use crate::nbt::{NbtError, Result};

/// One-byte discriminant identifying a tag's kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagKind {
	/// Compound terminator, empty-list element kind, and empty-document marker.
	End = 0,
	/// Signed 8-bit integer.
	Byte = 1,
	/// Signed 16-bit integer.
	Short = 2,
	/// Signed 32-bit integer.
	Int = 3,
	/// Signed 64-bit integer.
	Long = 4,
	/// IEEE-754 binary32.
	Float = 5,
	/// IEEE-754 binary64.
	Double = 6,
	/// Raw byte sequence.
	ByteArray = 7,
	/// UTF-8 string.
	String = 8,
	/// Homogeneous sequence of unnamed tags.
	List = 9,
	/// Named mapping of tags.
	Compound = 10,
	/// Sequence of signed 32-bit integers.
	IntArray = 11,
	/// Sequence of signed 64-bit integers.
	LongArray = 12,
}

impl TagKind {
	/// Every kind in discriminant order.
	pub const ALL: [TagKind; 13] = [
		Self::End,
		Self::Byte,
		Self::Short,
		Self::Int,
		Self::Long,
		Self::Float,
		Self::Double,
		Self::ByteArray,
		Self::String,
		Self::List,
		Self::Compound,
		Self::IntArray,
		Self::LongArray,
	];

	/// Map a wire discriminant to its kind.
	pub fn from_id(id: u8) -> Result<Self> {
		Self::ALL.get(usize::from(id)).copied().ok_or(NbtError::UnknownTagKind { id })
	}

	/// Return the wire discriminant.
	pub fn id(self) -> u8 {
		self as u8
	}

	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::End => "end",
			Self::Byte => "byte",
			Self::Short => "short",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::ByteArray => "byte_array",
			Self::String => "string",
			Self::List => "list",
			Self::Compound => "compound",
			Self::IntArray => "int_array",
			Self::LongArray => "long_array",
		}
	}

	/// Whether tags of this kind own child tags.
	pub fn is_container(self) -> bool {
		matches!(self, Self::List | Self::Compound)
	}
}

impl fmt::Display for TagKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<u8> for TagKind {
	type Error = NbtError;

	fn try_from(id: u8) -> Result<Self> {
		Self::from_id(id)
	}
}
