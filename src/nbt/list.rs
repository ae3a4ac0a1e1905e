use std::slice;

use crate::nbt::{NbtError, Result, Tag, TagKind};

/// Ordered sequence of unnamed tags that all share one kind.
///
/// The element kind is taken from the first element; an empty list has kind [`TagKind::End`].
/// [`List::push`] does not check the kind, mismatches are reported when the list is validated or written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
	items: Vec<Tag>,
}

impl List {
	/// Create an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Kind shared by the elements, or [`TagKind::End`] when empty.
	pub fn element_kind(&self) -> TagKind {
		self.items.first().map_or(TagKind::End, Tag::kind)
	}

	/// Append an element without checking its kind.
	pub fn push(&mut self, tag: impl Into<Tag>) {
		self.items.push(tag.into());
	}

	/// Append an element, rejecting it if its kind differs from the list's.
	pub fn try_push(&mut self, tag: impl Into<Tag>) -> Result<()> {
		let tag = tag.into();
		if !self.items.is_empty() && tag.kind() != self.element_kind() {
			return Err(NbtError::UnsupportedKind {
				expected: self.element_kind(),
				found: tag.kind(),
				index: self.items.len(),
			});
		}
		self.items.push(tag);
		Ok(())
	}

	/// Verify every element shares the first element's kind and return that kind.
	pub fn check_homogeneous(&self) -> Result<TagKind> {
		let expected = self.element_kind();
		match self.items.iter().position(|item| item.kind() != expected) {
			Some(index) => Err(NbtError::UnsupportedKind {
				expected,
				found: self.items[index].kind(),
				index,
			}),
			None => Ok(expected),
		}
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Element at `index`.
	pub fn get(&self, index: usize) -> Option<&Tag> {
		self.items.get(index)
	}

	/// Mutable element at `index`.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
		self.items.get_mut(index)
	}

	/// Remove and return the element at `index`, shifting later elements down.
	pub fn remove(&mut self, index: usize) -> Option<Tag> {
		(index < self.items.len()).then(|| self.items.remove(index))
	}

	/// Iterate elements in order.
	pub fn iter(&self) -> slice::Iter<'_, Tag> {
		self.items.iter()
	}

	/// Iterate elements mutably in order.
	pub fn iter_mut(&mut self) -> slice::IterMut<'_, Tag> {
		self.items.iter_mut()
	}

	/// Borrow elements as a slice.
	pub fn as_slice(&self) -> &[Tag] {
		&self.items
	}

	/// Consume the list into its elements.
	pub fn into_vec(self) -> Vec<Tag> {
		self.items
	}

	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
		}
	}
}

impl From<Vec<Tag>> for List {
	fn from(items: Vec<Tag>) -> Self {
		Self { items }
	}
}

impl<T: Into<Tag>> FromIterator<T> for List {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl IntoIterator for List {
	type Item = Tag;
	type IntoIter = std::vec::IntoIter<Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a List {
	type Item = &'a Tag;
	type IntoIter = slice::Iter<'a, Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
