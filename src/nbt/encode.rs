use std::io::Write;

use crate::nbt::bytes::{MAX_STRING_LEN, Writer};
use crate::nbt::compression::DEFAULT_LEVEL;
use crate::nbt::decode::DEFAULT_MAX_DEPTH;
use crate::nbt::{Compound, Compression, List, NbtError, Result, Tag, TagKind};

/// Envelope and validation settings for writing documents.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Envelope compression applied to the encoded tree.
	pub compression: Compression,
	/// Compression level, 0 (store) to 9 (smallest). Ignored for [`Compression::None`].
	pub level: u32,
	/// Maximum list/compound nesting depth accepted by validation.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			compression: Compression::None,
			level: DEFAULT_LEVEL,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl EncodeOptions {
	/// Default settings with the given envelope compression.
	pub fn with_compression(compression: Compression) -> Self {
		Self {
			compression,
			..Self::default()
		}
	}
}

/// Write discriminant, name, and payload of a named tag.
///
/// The whole tree is validated first, so an invalid tree leaves `writer` untouched.
pub fn encode_member<W: Write>(writer: &mut Writer<W>, name: &str, tag: &Tag) -> Result<()> {
	if name.len() > MAX_STRING_LEN {
		return Err(NbtError::StringTooLong { len: name.len() });
	}
	tag.validate(DEFAULT_MAX_DEPTH)?;
	write_member(writer, name, tag)
}

/// Write only the payload of a tag, as done for list elements.
///
/// The whole tree is validated first, so an invalid tree leaves `writer` untouched.
pub fn encode_element<W: Write>(writer: &mut Writer<W>, tag: &Tag) -> Result<()> {
	tag.validate(DEFAULT_MAX_DEPTH)?;
	write_element(writer, tag)
}

/// Write a named tag that has already been validated.
pub(crate) fn write_member<W: Write>(writer: &mut Writer<W>, name: &str, tag: &Tag) -> Result<()> {
	writer.write_u8(tag.kind().id())?;
	writer.write_string(name)?;
	write_element(writer, tag)
}

fn write_element<W: Write>(writer: &mut Writer<W>, tag: &Tag) -> Result<()> {
	match tag {
		Tag::Byte(value) => writer.write_u8(*value as u8),
		Tag::Short(value) => writer.write_i16(*value),
		Tag::Int(value) => writer.write_i32(*value),
		Tag::Long(value) => writer.write_i64(*value),
		Tag::Float(value) => writer.write_f32(*value),
		Tag::Double(value) => writer.write_f64(*value),
		Tag::ByteArray(value) => writer.write_bytes(value),
		Tag::String(value) => writer.write_string(value),
		Tag::List(list) => write_list(writer, list),
		Tag::Compound(compound) => write_compound(writer, compound),
		Tag::IntArray(value) => writer.write_int_array(value),
		Tag::LongArray(value) => writer.write_long_array(value),
	}
}

fn write_list<W: Write>(writer: &mut Writer<W>, list: &List) -> Result<()> {
	let kind = list.check_homogeneous()?;
	writer.write_u8(kind.id())?;
	writer.write_len_i32(list.len())?;
	for item in list {
		write_element(writer, item)?;
	}
	Ok(())
}

fn write_compound<W: Write>(writer: &mut Writer<W>, compound: &Compound) -> Result<()> {
	for (name, item) in compound {
		write_member(writer, name, item)?;
	}
	writer.write_u8(TagKind::End.id())
}

#[cfg(test)]
mod tests;
