use std::io::Read;

use crate::nbt::bytes::Reader;
use crate::nbt::tag::enter;
use crate::nbt::{Compound, List, NbtError, Result, Tag, TagKind};

/// Reference nesting ceiling for list and compound containers.
pub const DEFAULT_MAX_DEPTH: u32 = 512;
const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
const LIST_PREALLOC_LIMIT: usize = 1024;

/// Runtime limits and behavior switches for tag decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum list/compound nesting depth.
	pub max_depth: u32,
	/// Maximum size of a decompressed envelope.
	pub max_decompressed_bytes: usize,
	/// Fail on a repeated compound member name instead of keeping the later value.
	pub reject_duplicate_keys: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			max_decompressed_bytes: MAX_DECOMPRESSED_BYTES,
			reject_duplicate_keys: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects duplicate compound keys.
	pub fn strict() -> Self {
		Self {
			reject_duplicate_keys: true,
			..Self::default()
		}
	}
}

/// Read a member header and its payload.
///
/// Returns `None` when the discriminant is End, which carries no name or payload.
pub fn decode_member<R: Read>(reader: &mut Reader<R>, opt: &DecodeOptions) -> Result<Option<(String, Tag)>> {
	let kind = TagKind::from_id(reader.read_u8()?)?;
	if kind == TagKind::End {
		return Ok(None);
	}

	let name = reader.read_string()?;
	let tag = decode_payload(reader, kind, opt)?;
	Ok(Some((name, tag)))
}

/// Read the payload of a tag whose kind is already known.
pub fn decode_payload<R: Read>(reader: &mut Reader<R>, kind: TagKind, opt: &DecodeOptions) -> Result<Tag> {
	decode_impl(reader, kind, opt, 0)
}

fn decode_impl<R: Read>(reader: &mut Reader<R>, kind: TagKind, opt: &DecodeOptions, depth: u32) -> Result<Tag> {
	Ok(match kind {
		TagKind::End => return Err(NbtError::UnknownTagKind { id: kind.id() }),
		TagKind::Byte => Tag::Byte(reader.read_u8()? as i8),
		TagKind::Short => Tag::Short(reader.read_i16()?),
		TagKind::Int => Tag::Int(reader.read_i32()?),
		TagKind::Long => Tag::Long(reader.read_i64()?),
		TagKind::Float => Tag::Float(reader.read_f32()?),
		TagKind::Double => Tag::Double(reader.read_f64()?),
		TagKind::ByteArray => Tag::ByteArray(reader.read_bytes()?),
		TagKind::String => Tag::String(reader.read_string()?),
		TagKind::List => Tag::List(decode_list(reader, opt, enter(depth, opt.max_depth)?)?),
		TagKind::Compound => Tag::Compound(decode_compound(reader, opt, enter(depth, opt.max_depth)?)?),
		TagKind::IntArray => Tag::IntArray(reader.read_int_array()?),
		TagKind::LongArray => Tag::LongArray(reader.read_long_array()?),
	})
}

fn decode_list<R: Read>(reader: &mut Reader<R>, opt: &DecodeOptions, depth: u32) -> Result<List> {
	let element_id = reader.read_u8()?;
	let count = reader.read_len_i32()?;
	if count == 0 {
		return Ok(List::new());
	}

	let kind = TagKind::from_id(element_id)?;
	let mut list = List::with_capacity(count.min(LIST_PREALLOC_LIMIT));
	for _ in 0..count {
		list.push(decode_impl(reader, kind, opt, depth)?);
	}
	Ok(list)
}

fn decode_compound<R: Read>(reader: &mut Reader<R>, opt: &DecodeOptions, depth: u32) -> Result<Compound> {
	let mut compound = Compound::new();
	loop {
		let kind = TagKind::from_id(reader.read_u8()?)?;
		if kind == TagKind::End {
			return Ok(compound);
		}

		let name = reader.read_string()?;
		let tag = decode_impl(reader, kind, opt, depth)?;
		if opt.reject_duplicate_keys && compound.contains_key(&name) {
			return Err(NbtError::DuplicateKey { name });
		}
		compound.insert(name, tag);
	}
}
