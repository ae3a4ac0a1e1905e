//! Public library API for reading and writing named binary tag documents.

/// Tag tree model, big-endian codec, and compressed document envelope.
pub mod nbt;
