use std::io::{Read, Write};

use crate::nbt::bytes::{MAX_STRING_LEN, Reader, Writer};
use crate::nbt::compression::{compress, decode_bytes};
use crate::nbt::decode::decode_payload;
use crate::nbt::encode::write_member;
use crate::nbt::{Compression, DecodeOptions, EncodeOptions, NbtError, Result, Tag, TagKind};

/// A decoded document: the single named root tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	/// Root tag name, often empty.
	pub name: String,
	/// Root tag, usually a compound.
	pub root: Tag,
}

impl Document {
	/// Build a document from a root name and tag.
	pub fn new(name: impl Into<String>, root: impl Into<Tag>) -> Self {
		Self {
			name: name.into(),
			root: root.into(),
		}
	}

	/// Read one root tag from an uncompressed stream.
	///
	/// A root discriminant of End yields [`NbtError::EmptyDocument`]. Bytes after the root tag are left unread.
	pub fn read_from<R: Read>(stream: R, opt: &DecodeOptions) -> Result<Self> {
		let mut reader = Reader::new(stream);
		let kind = TagKind::from_id(reader.read_u8()?)?;
		if kind == TagKind::End {
			return Err(NbtError::EmptyDocument);
		}

		let name = reader.read_string()?;
		let root = decode_payload(&mut reader, kind, opt)?;
		Ok(Self { name, root })
	}

	/// Validate, then write the root tag with its header to an uncompressed stream.
	pub fn write_to<W: Write>(&self, stream: W, max_depth: u32) -> Result<()> {
		self.validate(max_depth)?;
		let mut writer = Writer::new(stream);
		write_member(&mut writer, &self.name, &self.root)
	}

	/// Check the document can be written without producing a partial stream.
	pub fn validate(&self, max_depth: u32) -> Result<()> {
		if self.name.len() > MAX_STRING_LEN {
			return Err(NbtError::StringTooLong { len: self.name.len() });
		}
		self.root.validate(max_depth)
	}
}

/// Decode a possibly compressed document with default options.
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
	from_bytes_with(bytes, &DecodeOptions::default())
}

/// Decode a possibly compressed document.
pub fn from_bytes_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Document> {
	decode_document(bytes, opt).map(|(_, document)| document)
}

/// Decode a possibly compressed document, also reporting the detected envelope.
pub fn decode_document(bytes: &[u8], opt: &DecodeOptions) -> Result<(Compression, Document)> {
	let (compression, raw) = decode_bytes(bytes, opt.max_decompressed_bytes)?;
	let document = Document::read_from(&*raw, opt)?;
	Ok((compression, document))
}

/// Encode a document, naming the envelope by its label (`gzip`, `zlib`, or `none`).
///
/// An unknown label fails before anything is encoded.
pub fn encode_document(document: &Document, mode: &str) -> Result<Vec<u8>> {
	let compression = mode.parse::<Compression>()?;
	to_bytes(document, compression)
}

/// Encode a document and wrap it in the given envelope.
pub fn to_bytes(document: &Document, compression: Compression) -> Result<Vec<u8>> {
	to_bytes_with(document, &EncodeOptions::with_compression(compression))
}

/// Encode a document with explicit envelope and validation settings.
pub fn to_bytes_with(document: &Document, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let mut raw = Vec::new();
	document.write_to(&mut raw, opt.max_depth)?;
	if opt.compression == Compression::None {
		return Ok(raw);
	}
	compress(&raw, opt.compression, opt.level)
}
