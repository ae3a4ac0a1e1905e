use std::path::PathBuf;

use nbtdoc::nbt::{DecodeOptions, Result, Tag};

use crate::cmd::util::{emit_json, read_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// List the root compound's members and their kinds.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let (_, document) = read_document(&path, &DecodeOptions::default())?;
	let members: Vec<KeyJson> = match &document.root {
		Tag::Compound(root) => root
			.iter()
			.map(|(name, tag)| KeyJson {
				name: name.clone(),
				kind: tag.kind().as_str(),
				len: container_len(tag),
			})
			.collect(),
		_ => Vec::new(),
	};

	if json {
		emit_json(&KeysJson {
			path: path.display().to_string(),
			root_kind: document.root.kind().as_str(),
			keys: members,
		})?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("root_kind: {}", document.root.kind());
	for member in members {
		match member.len {
			Some(len) => println!("  {} {} [{len}]", member.kind, member.name),
			None => println!("  {} {}", member.kind, member.name),
		}
	}

	Ok(())
}

fn container_len(tag: &Tag) -> Option<usize> {
	match tag {
		Tag::List(list) => Some(list.len()),
		Tag::Compound(compound) => Some(compound.len()),
		Tag::ByteArray(value) => Some(value.len()),
		Tag::IntArray(value) => Some(value.len()),
		Tag::LongArray(value) => Some(value.len()),
		_ => None,
	}
}

#[derive(serde::Serialize)]
struct KeyJson {
	name: String,
	kind: &'static str,
	len: Option<usize>,
}

#[derive(serde::Serialize)]
struct KeysJson {
	path: String,
	root_kind: &'static str,
	keys: Vec<KeyJson>,
}
