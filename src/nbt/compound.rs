use indexmap::IndexMap;
use indexmap::map::{Iter, IterMut, Keys};

use crate::nbt::{List, Tag};

/// Named mapping of tags with unique keys.
///
/// Members keep insertion order, which is also the order they are written in.
/// Equality ignores member order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
	entries: IndexMap<String, Tag>,
}

macro_rules! typed_getter {
	($(#[$meta:meta])* $name:ident, $accessor:ident, $ty:ty) => {
		$(#[$meta])*
		pub fn $name(&self, name: &str) -> Option<$ty> {
			self.get(name).and_then(Tag::$accessor)
		}
	};
}

impl Compound {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a member, returning the value it replaced.
	///
	/// A replaced member keeps its original position.
	pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<Tag>) -> Option<Tag> {
		self.entries.insert(name.into(), tag.into())
	}

	/// Member named `name`.
	pub fn get(&self, name: &str) -> Option<&Tag> {
		self.entries.get(name)
	}

	/// Mutable member named `name`.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
		self.entries.get_mut(name)
	}

	/// Remove a member, preserving the order of the rest.
	pub fn remove(&mut self, name: &str) -> Option<Tag> {
		self.entries.shift_remove(name)
	}

	/// Whether a member named `name` exists.
	pub fn contains_key(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the compound has no members.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate `(name, tag)` pairs in insertion order.
	pub fn iter(&self) -> Iter<'_, String, Tag> {
		self.entries.iter()
	}

	/// Iterate `(name, tag)` pairs mutably in insertion order.
	pub fn iter_mut(&mut self) -> IterMut<'_, String, Tag> {
		self.entries.iter_mut()
	}

	/// Iterate member names in insertion order.
	pub fn keys(&self) -> Keys<'_, String, Tag> {
		self.entries.keys()
	}

	typed_getter!(
		/// Byte member value.
		get_i8, as_i8, i8
	);
	typed_getter!(
		/// Short member value.
		get_i16, as_i16, i16
	);
	typed_getter!(
		/// Int member value.
		get_i32, as_i32, i32
	);
	typed_getter!(
		/// Long member value.
		get_i64, as_i64, i64
	);
	typed_getter!(
		/// Float member value.
		get_f32, as_f32, f32
	);
	typed_getter!(
		/// Double member value.
		get_f64, as_f64, f64
	);
	typed_getter!(
		/// String member value.
		get_str, as_str, &str
	);
	typed_getter!(
		/// Byte array member value.
		get_bytes, as_bytes, &[u8]
	);
	typed_getter!(
		/// List member value.
		get_list, as_list, &List
	);
	typed_getter!(
		/// Nested compound member value.
		get_compound, as_compound, &Compound
	);
	typed_getter!(
		/// Int array member value.
		get_int_array, as_int_array, &[i32]
	);
	typed_getter!(
		/// Long array member value.
		get_long_array, as_long_array, &[i64]
	);
}

impl<K: Into<String>, T: Into<Tag>> FromIterator<(K, T)> for Compound {
	fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(name, tag)| (name.into(), tag.into())).collect(),
		}
	}
}

impl<K: Into<String>, T: Into<Tag>> Extend<(K, T)> for Compound {
	fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
		self.entries.extend(iter.into_iter().map(|(name, tag)| (name.into(), tag.into())));
	}
}

impl IntoIterator for Compound {
	type Item = (String, Tag);
	type IntoIter = indexmap::map::IntoIter<String, Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Compound {
	type Item = (&'a String, &'a Tag);
	type IntoIter = Iter<'a, String, Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
