use crate::nbt::bytes::MAX_STRING_LEN;
use crate::nbt::{Compound, List, NbtError, Result, TagKind};

/// One node of a tag tree.
///
/// Names are held by the surrounding context: compound keys, or [`crate::nbt::Document::name`] for the root.
/// List elements are unnamed.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
	/// Signed 8-bit integer.
	Byte(i8),
	/// Signed 16-bit integer.
	Short(i16),
	/// Signed 32-bit integer.
	Int(i32),
	/// Signed 64-bit integer.
	Long(i64),
	/// IEEE-754 binary32.
	Float(f32),
	/// IEEE-754 binary64.
	Double(f64),
	/// Raw byte sequence.
	ByteArray(Vec<u8>),
	/// UTF-8 string of at most 65535 bytes.
	String(String),
	/// Homogeneous sequence of unnamed tags.
	List(List),
	/// Named mapping of tags.
	Compound(Compound),
	/// Sequence of signed 32-bit integers.
	IntArray(Vec<i32>),
	/// Sequence of signed 64-bit integers.
	LongArray(Vec<i64>),
}

impl Tag {
	/// Wire kind of this tag.
	pub fn kind(&self) -> TagKind {
		match self {
			Self::Byte(_) => TagKind::Byte,
			Self::Short(_) => TagKind::Short,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Float(_) => TagKind::Float,
			Self::Double(_) => TagKind::Double,
			Self::ByteArray(_) => TagKind::ByteArray,
			Self::String(_) => TagKind::String,
			Self::List(_) => TagKind::List,
			Self::Compound(_) => TagKind::Compound,
			Self::IntArray(_) => TagKind::IntArray,
			Self::LongArray(_) => TagKind::LongArray,
		}
	}

	/// Byte payload.
	pub fn as_i8(&self) -> Option<i8> {
		match self {
			Self::Byte(value) => Some(*value),
			_ => None,
		}
	}

	/// Short payload.
	pub fn as_i16(&self) -> Option<i16> {
		match self {
			Self::Short(value) => Some(*value),
			_ => None,
		}
	}

	/// Int payload.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Long payload.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Long(value) => Some(*value),
			_ => None,
		}
	}

	/// Float payload.
	pub fn as_f32(&self) -> Option<f32> {
		match self {
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// Double payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Double(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Byte array payload.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::ByteArray(value) => Some(value),
			_ => None,
		}
	}

	/// List payload.
	pub fn as_list(&self) -> Option<&List> {
		match self {
			Self::List(value) => Some(value),
			_ => None,
		}
	}

	/// Mutable list payload.
	pub fn as_list_mut(&mut self) -> Option<&mut List> {
		match self {
			Self::List(value) => Some(value),
			_ => None,
		}
	}

	/// Compound payload.
	pub fn as_compound(&self) -> Option<&Compound> {
		match self {
			Self::Compound(value) => Some(value),
			_ => None,
		}
	}

	/// Mutable compound payload.
	pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
		match self {
			Self::Compound(value) => Some(value),
			_ => None,
		}
	}

	/// Int array payload.
	pub fn as_int_array(&self) -> Option<&[i32]> {
		match self {
			Self::IntArray(value) => Some(value),
			_ => None,
		}
	}

	/// Long array payload.
	pub fn as_long_array(&self) -> Option<&[i64]> {
		match self {
			Self::LongArray(value) => Some(value),
			_ => None,
		}
	}

	/// Check that this tree can be written: homogeneous lists, lengths that fit their prefixes,
	/// and container nesting of at most `max_depth`.
	pub fn validate(&self, max_depth: u32) -> Result<()> {
		validate_impl(self, max_depth, 0)
	}

	/// Count nodes per kind and measure container nesting.
	pub fn stats(&self) -> TagStats {
		let mut stats = TagStats::default();
		stats.visit(self, 0);
		stats
	}
}

fn validate_impl(tag: &Tag, max_depth: u32, depth: u32) -> Result<()> {
	match tag {
		Tag::String(value) => check_string(value),
		Tag::ByteArray(value) => check_len_i32(value.len()),
		Tag::IntArray(value) => check_len_i32(value.len()),
		Tag::List(list) => {
			let depth = enter(depth, max_depth)?;
			check_len_i32(list.len())?;
			list.check_homogeneous()?;
			list.iter().try_for_each(|item| validate_impl(item, max_depth, depth))
		}
		Tag::Compound(compound) => {
			let depth = enter(depth, max_depth)?;
			for (name, item) in compound {
				check_string(name)?;
				validate_impl(item, max_depth, depth)?;
			}
			Ok(())
		}
		Tag::Byte(_) | Tag::Short(_) | Tag::Int(_) | Tag::Long(_) | Tag::Float(_) | Tag::Double(_) | Tag::LongArray(_) => Ok(()),
	}
}

/// Step one container level deeper, failing once `max_depth` is passed.
pub(crate) fn enter(depth: u32, max_depth: u32) -> Result<u32> {
	if depth >= max_depth {
		return Err(NbtError::DepthExceeded { max_depth });
	}
	Ok(depth + 1)
}

fn check_string(value: &str) -> Result<()> {
	if value.len() > MAX_STRING_LEN {
		return Err(NbtError::StringTooLong { len: value.len() });
	}
	Ok(())
}

fn check_len_i32(len: usize) -> Result<()> {
	if i32::try_from(len).is_err() {
		return Err(NbtError::LengthOverflow { len });
	}
	Ok(())
}

/// Node counts and nesting depth of a tag tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStats {
	/// Total number of tags, root included.
	pub nodes: usize,
	/// Deepest container nesting (a root compound with scalar members is 1).
	pub max_depth: u32,
	counts: [usize; 13],
}

impl TagStats {
	/// Number of tags of `kind`.
	pub fn count(&self, kind: TagKind) -> usize {
		self.counts[usize::from(kind.id())]
	}

	/// Non-zero `(kind, count)` pairs in discriminant order.
	pub fn counts(&self) -> impl Iterator<Item = (TagKind, usize)> + '_ {
		TagKind::ALL.iter().map(|kind| (*kind, self.count(*kind))).filter(|(_, count)| *count > 0)
	}

	fn visit(&mut self, tag: &Tag, depth: u32) {
		self.nodes += 1;
		self.counts[usize::from(tag.kind().id())] += 1;
		match tag {
			Tag::List(list) => {
				self.max_depth = self.max_depth.max(depth + 1);
				for item in list {
					self.visit(item, depth + 1);
				}
			}
			Tag::Compound(compound) => {
				self.max_depth = self.max_depth.max(depth + 1);
				for (_, item) in compound {
					self.visit(item, depth + 1);
				}
			}
			_ => {}
		}
	}
}

macro_rules! tag_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Tag {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

tag_from! {
	i8 => Byte,
	i16 => Short,
	i32 => Int,
	i64 => Long,
	f32 => Float,
	f64 => Double,
	Vec<u8> => ByteArray,
	String => String,
	List => List,
	Compound => Compound,
	Vec<i32> => IntArray,
	Vec<i64> => LongArray,
}

impl From<&str> for Tag {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<bool> for Tag {
	fn from(value: bool) -> Self {
		Self::Byte(i8::from(value))
	}
}

#[cfg(test)]
mod tests;
