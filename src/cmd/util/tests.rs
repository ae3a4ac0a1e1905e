use std::collections::BTreeMap;

use nbtdoc::nbt::NbtError;

use crate::cmd::util::{emit_json, name_label};

#[test]
fn emit_json_propagates_serialization_failure() {
	let mut payload = BTreeMap::new();
	payload.insert((1_u8, 2_u8), "tuple keys are not valid json object keys");

	let err = emit_json(&payload).expect_err("non-string map key");
	assert!(matches!(err, NbtError::Json(_)));
}

#[test]
fn name_label_quotes_names() {
	assert_eq!(name_label(""), "\"\"");
	assert_eq!(name_label("Level"), "\"Level\"");
}
