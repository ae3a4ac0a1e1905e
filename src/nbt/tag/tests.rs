use crate::nbt::{Compound, List, NbtError, Tag, TagKind};

fn nested_lists(levels: u32) -> Tag {
	let mut tag = Tag::Int(1);
	for _ in 0..levels {
		tag = Tag::List(List::from(vec![tag]));
	}
	tag
}

#[test]
fn kind_follows_variant() {
	assert_eq!(Tag::from(3_i8).kind(), TagKind::Byte);
	assert_eq!(Tag::from(3_i16).kind(), TagKind::Short);
	assert_eq!(Tag::from(3_i32).kind(), TagKind::Int);
	assert_eq!(Tag::from(3_i64).kind(), TagKind::Long);
	assert_eq!(Tag::from(1.0_f32).kind(), TagKind::Float);
	assert_eq!(Tag::from(1.0_f64).kind(), TagKind::Double);
	assert_eq!(Tag::from(vec![1_u8]).kind(), TagKind::ByteArray);
	assert_eq!(Tag::from("text").kind(), TagKind::String);
	assert_eq!(Tag::from(List::new()).kind(), TagKind::List);
	assert_eq!(Tag::from(Compound::new()).kind(), TagKind::Compound);
	assert_eq!(Tag::from(vec![1_i32]).kind(), TagKind::IntArray);
	assert_eq!(Tag::from(vec![1_i64]).kind(), TagKind::LongArray);
	assert_eq!(Tag::from(true), Tag::Byte(1));
}

#[test]
fn accessors_only_match_their_variant() {
	let tag = Tag::Short(7);
	assert_eq!(tag.as_i16(), Some(7));
	assert_eq!(tag.as_i32(), None);
	assert_eq!(Tag::from("abc").as_str(), Some("abc"));
	assert!(Tag::Int(0).as_compound().is_none());
}

#[test]
fn compound_equality_ignores_member_order() {
	let left: Compound = [("a", Tag::Int(1)), ("b", Tag::Int(2))].into_iter().collect();
	let right: Compound = [("b", Tag::Int(2)), ("a", Tag::Int(1))].into_iter().collect();
	assert_eq!(left, right);
	assert_eq!(left.keys().map(String::as_str).collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn compound_replace_keeps_position() {
	let mut compound = Compound::new();
	compound.insert("x", 1_i32);
	compound.insert("y", 2_i32);
	let old = compound.insert("x", 3_i32);
	assert_eq!(old, Some(Tag::Int(1)));
	assert_eq!(compound.keys().map(String::as_str).collect::<Vec<_>>(), ["x", "y"]);
	assert_eq!(compound.get_i32("x"), Some(3));
	assert_eq!(compound.remove("x"), Some(Tag::Int(3)));
	assert!(!compound.contains_key("x"));
}

#[test]
fn list_kind_comes_from_first_element() {
	let mut list = List::new();
	assert_eq!(list.element_kind(), TagKind::End);
	list.push(5_i16);
	assert_eq!(list.element_kind(), TagKind::Short);

	let err = list.try_push(5_i32).expect_err("mixed kinds");
	assert!(matches!(
		err,
		NbtError::UnsupportedKind {
			expected: TagKind::Short,
			found: TagKind::Int,
			index: 1
		}
	));
	assert_eq!(list.len(), 1);
}

#[test]
fn validate_rejects_mixed_lists() {
	let list: List = vec![Tag::Int(1), Tag::Int(2), Tag::Long(3)].into();
	let mut root = Compound::new();
	root.insert("values", list);

	let err = Tag::Compound(root).validate(512).expect_err("mixed list");
	assert!(matches!(err, NbtError::UnsupportedKind { index: 2, .. }));
}

#[test]
fn validate_rejects_long_names_and_strings() {
	let mut root = Compound::new();
	root.insert("k".repeat(65_536), 1_i8);
	let err = Tag::Compound(root).validate(512).expect_err("long key");
	assert!(matches!(err, NbtError::StringTooLong { len: 65_536 }));

	let err = Tag::from("v".repeat(70_000)).validate(512).expect_err("long string");
	assert!(matches!(err, NbtError::StringTooLong { len: 70_000 }));
}

#[test]
fn validate_enforces_depth() {
	nested_lists(4).validate(4).expect("depth 4 allowed");
	let err = nested_lists(5).validate(4).expect_err("depth 5 rejected");
	assert!(matches!(err, NbtError::DepthExceeded { max_depth: 4 }));
}

#[test]
fn stats_count_nodes_and_depth() {
	let mut inner = Compound::new();
	inner.insert("name", "x");
	let mut root = Compound::new();
	root.insert("inner", inner);
	root.insert("ints", vec![1_i32, 2, 3]);
	root.insert("list", nested_lists(2));

	let stats = Tag::Compound(root).stats();
	assert_eq!(stats.nodes, 7);
	assert_eq!(stats.max_depth, 3);
	assert_eq!(stats.count(TagKind::Compound), 2);
	assert_eq!(stats.count(TagKind::List), 2);
	assert_eq!(stats.count(TagKind::Int), 1);
	assert_eq!(stats.counts().count(), 5);
}
