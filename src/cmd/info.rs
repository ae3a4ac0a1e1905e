use std::path::PathBuf;

use nbtdoc::nbt::{DecodeOptions, Result};

use crate::cmd::util::{emit_json, name_label, read_document};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print envelope, root, and node statistics for a document.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let (compression, document) = read_document(&path, &DecodeOptions::default())?;
	let stats = document.root.stats();

	if json {
		emit_json(&InfoJson {
			path: path.display().to_string(),
			compression: compression.as_str(),
			root_name: document.name.clone(),
			root_kind: document.root.kind().as_str(),
			nodes: stats.nodes,
			max_depth: stats.max_depth,
			kinds: stats
				.counts()
				.map(|(kind, count)| KindCountJson {
					kind: kind.as_str(),
					count,
				})
				.collect(),
		})?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {compression}");
	println!("root_name: {}", name_label(&document.name));
	println!("root_kind: {}", document.root.kind());
	println!("nodes: {}", stats.nodes);
	println!("max_depth: {}", stats.max_depth);
	println!("kinds:");
	for (kind, count) in stats.counts() {
		println!("  {kind}: {count}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: &'static str,
	count: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	root_name: String,
	root_kind: &'static str,
	nodes: usize,
	max_depth: u32,
	kinds: Vec<KindCountJson>,
}
