#![allow(missing_docs)]

use nbtdoc::nbt::{Compound, Compression, Document, List, Tag, from_bytes, to_bytes};
use proptest::collection::vec;
use proptest::prelude::*;

fn scalar(nan: bool) -> impl Strategy<Value = Tag> {
	let float = any::<f32>().prop_filter("NaN never compares equal", move |value| nan || !value.is_nan());
	let double = any::<f64>().prop_filter("NaN never compares equal", move |value| nan || !value.is_nan());
	let float = if nan { prop_oneof![float, Just(f32::NAN)].boxed() } else { float.boxed() };
	let double = if nan { prop_oneof![double, Just(-f64::NAN)].boxed() } else { double.boxed() };

	prop_oneof![
		any::<i8>().prop_map(Tag::Byte),
		any::<i16>().prop_map(Tag::Short),
		any::<i32>().prop_map(Tag::Int),
		any::<i64>().prop_map(Tag::Long),
		float.prop_map(Tag::Float),
		double.prop_map(Tag::Double),
		vec(any::<u8>(), 0..16).prop_map(Tag::ByteArray),
		".{0,12}".prop_map(Tag::String),
		vec(any::<i32>(), 0..8).prop_map(Tag::IntArray),
		vec(any::<i64>(), 0..8).prop_map(Tag::LongArray),
	]
}

fn tree(nan: bool) -> impl Strategy<Value = Tag> {
	scalar(nan).prop_recursive(4, 48, 6, |inner| {
		prop_oneof![
			// list elements must share a kind, so repeat one generated element
			(inner.clone(), 0..5_usize).prop_map(|(item, count)| Tag::List(List::from(vec![item; count]))),
			vec(("[a-z]{0,6}", inner), 0..6).prop_map(|members| Tag::Compound(members.into_iter().collect::<Compound>())),
		]
	})
}

proptest! {
	#[test]
	fn encode_then_decode_is_identity(name in ".{0,8}", root in tree(false)) {
		let document = Document::new(name, root);
		for mode in [Compression::None, Compression::Gzip] {
			let bytes = to_bytes(&document, mode).expect("encode succeeds");
			let decoded = from_bytes(&bytes).expect("decode succeeds");
			prop_assert_eq!(&decoded, &document);
		}
	}

	#[test]
	fn reencoding_is_byte_stable_with_nan(name in ".{0,8}", root in tree(true)) {
		let document = Document::new(name, root);
		for mode in [Compression::None, Compression::Zlib] {
			let bytes = to_bytes(&document, mode).expect("encode succeeds");
			let decoded = from_bytes(&bytes).expect("decode succeeds");
			let raw = to_bytes(&document, Compression::None).expect("raw encode");
			prop_assert_eq!(to_bytes(&decoded, Compression::None).expect("re-encode succeeds"), raw);
		}
	}
}
