/// Strict decode and round-trip verification command.
pub mod check;
/// Envelope conversion command.
pub mod convert;
/// Document summary command.
pub mod info;
/// Top-level member listing command.
pub mod keys;
/// Shared file and output helpers.
pub(crate) mod util;
