mod bytes;
mod compound;
mod compression;
mod decode;
mod document;
mod encode;
mod error;
mod kind;
mod list;
mod tag;

/// Big-endian primitive stream codec.
pub use bytes::{MAX_STRING_LEN, Reader, Writer};
/// Named member mapping.
pub use compound::Compound;
/// Envelope compression detection and framing.
pub use compression::{Compression, DEFAULT_LEVEL, GZIP_MAGIC, compress, decode_bytes, decompress};
/// Recursive payload decoding entry points and options.
pub use decode::{DEFAULT_MAX_DEPTH, DecodeOptions, decode_member, decode_payload};
/// Document envelope entry points.
pub use document::{Document, decode_document, encode_document, from_bytes, from_bytes_with, to_bytes, to_bytes_with};
/// Recursive payload encoding entry points and options.
pub use encode::{EncodeOptions, encode_element, encode_member};
/// Error and result aliases.
pub use error::{NbtError, Result};
/// Wire discriminants.
pub use kind::TagKind;
/// Homogeneous unnamed sequence.
pub use list::List;
/// Tag tree node and summary statistics.
pub use tag::{Tag, TagStats};
