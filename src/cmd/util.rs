use std::fs;
use std::path::Path;

use nbtdoc::nbt::{Compression, DecodeOptions, Document, Result, decode_document};

/// Read and decode a document file, reporting its detected envelope.
pub(crate) fn read_document(path: &Path, opt: &DecodeOptions) -> Result<(Compression, Document)> {
	let raw = fs::read(path)?;
	tracing::info!(path = %path.display(), bytes = raw.len(), "read document");
	decode_document(&raw, opt)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

/// Render a possibly empty name for text output.
pub(crate) fn name_label(name: &str) -> String {
	if name.is_empty() { "\"\"".to_owned() } else { format!("{name:?}") }
}

#[cfg(test)]
mod tests;
