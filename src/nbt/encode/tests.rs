use nbtdoc_testkit::Wire;

use crate::nbt::bytes::Writer;
use crate::nbt::{Compound, List, NbtError, Tag, TagKind, encode_element, encode_member};

fn element_bytes(tag: &Tag) -> crate::nbt::Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_element(&mut Writer::new(&mut out), tag)?;
	Ok(out)
}

#[test]
fn encodes_concrete_member() {
	let mut root = Compound::new();
	root.insert("a", 10_i16);

	let mut out = Vec::new();
	encode_member(&mut Writer::new(&mut out), "root", &Tag::Compound(root)).expect("encode succeeds");
	assert_eq!(
		out,
		[0x0A, 0x00, 0x04, b'r', b'o', b'o', b't', 0x02, 0x00, 0x01, b'a', 0x00, 0x0A, 0x00]
	);
}

#[test]
fn length_prefixes_are_exact() {
	let text = "abcdefg";
	assert_eq!(element_bytes(&Tag::from(text)).expect("string").len(), 2 + text.len());
	assert_eq!(element_bytes(&Tag::ByteArray(vec![0; 13])).expect("bytes").len(), 4 + 13);
	assert_eq!(element_bytes(&Tag::IntArray(vec![0; 5])).expect("ints").len(), 4 + 4 * 5);
	assert_eq!(element_bytes(&Tag::LongArray(vec![0; 3])).expect("longs").len(), 8 + 8 * 3);
	assert_eq!(element_bytes(&Tag::from("")).expect("empty string"), [0x00, 0x00]);
}

#[test]
fn empty_list_has_canonical_form() {
	let mut list: List = vec![Tag::Int(1)].into();
	list.remove(0);
	assert_eq!(element_bytes(&Tag::List(list)).expect("empty list"), [0, 0, 0, 0, 0]);
}

#[test]
fn mixed_list_fails_before_writing() {
	let list: List = vec![Tag::Int(1), Tag::Short(2)].into();
	let mut out = Vec::new();
	let err = encode_element(&mut Writer::new(&mut out), &Tag::List(list)).expect_err("mixed list");
	assert!(matches!(
		err,
		NbtError::UnsupportedKind {
			expected: TagKind::Int,
			found: TagKind::Short,
			index: 1
		}
	));
	assert!(out.is_empty(), "no bytes should be written");
}

#[test]
fn list_elements_are_unnamed_payloads() {
	let mut first = Compound::new();
	first.insert("x", 1_i8);
	let list: List = vec![Tag::Compound(first), Tag::Compound(Compound::new())].into();

	let expected = Wire::new().u8(10).i32(2).header(1, "x").u8(1).end().end().build();
	assert_eq!(element_bytes(&Tag::List(list)).expect("list"), expected);
}

#[test]
fn compound_members_follow_insertion_order() {
	let mut root = Compound::new();
	root.insert("z", 1_i8);
	root.insert("a", 2_i8);
	root.insert("m", 3_i8);

	let expected = Wire::new().header(1, "z").u8(1).header(1, "a").u8(2).header(1, "m").u8(3).end().build();
	assert_eq!(element_bytes(&Tag::Compound(root)).expect("compound"), expected);
}

#[test]
fn scalars_are_big_endian() {
	assert_eq!(element_bytes(&Tag::Byte(-1)).expect("byte"), [0xFF]);
	assert_eq!(element_bytes(&Tag::Short(0x0102)).expect("short"), [0x01, 0x02]);
	assert_eq!(element_bytes(&Tag::Int(-2)).expect("int"), [0xFF, 0xFF, 0xFF, 0xFE]);
	assert_eq!(element_bytes(&Tag::Float(1.0)).expect("float"), 1.0_f32.to_bits().to_be_bytes());
	assert_eq!(element_bytes(&Tag::Double(-2.5)).expect("double"), (-2.5_f64).to_bits().to_be_bytes());
	assert_eq!(element_bytes(&Tag::Long(1)).expect("long"), [0, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn nested_mixed_list_fails_before_writing() {
	let valid: List = vec![Tag::Int(1)].into();
	let mixed: List = vec![Tag::Int(1), Tag::Short(2)].into();
	let outer = Tag::List(vec![Tag::List(valid), Tag::List(mixed)].into());

	let mut out = Vec::new();
	let err = encode_element(&mut Writer::new(&mut out), &outer).expect_err("nested mixed list");
	assert!(matches!(
		err,
		NbtError::UnsupportedKind {
			expected: TagKind::Int,
			found: TagKind::Short,
			index: 1
		}
	));
	assert!(out.is_empty(), "no bytes should be written");
}

#[test]
fn member_with_invalid_child_writes_nothing() {
	let mut root = Compound::new();
	root.insert("first", 1_i32);
	root.insert("mixed", List::from(vec![Tag::Long(1), Tag::from("two")]));

	let mut out = Vec::new();
	let err = encode_member(&mut Writer::new(&mut out), "root", &Tag::Compound(root)).expect_err("mixed child");
	assert!(matches!(err, NbtError::UnsupportedKind { index: 1, .. }));
	assert!(out.is_empty(), "no bytes should be written");
}

#[test]
fn member_name_too_long_writes_nothing() {
	let name = "n".repeat(70_000);
	let mut out = Vec::new();
	let err = encode_member(&mut Writer::new(&mut out), &name, &Tag::Byte(1)).expect_err("long name");
	assert!(matches!(err, NbtError::StringTooLong { len: 70_000 }));
	assert!(out.is_empty(), "no bytes should be written");
}
