//! Stream framer: wraps a kernel session with the main header and main
//! footer, owning the one [`crate::teleport::Teleport`] shared across
//! header, block, and footer reads for the life of a stream.
//!
//! Mirrors the split between `frame/compress.rs` and `frame/decompress.rs`,
//! both built over shared types from `frame/types.rs` and `frame/header.rs`
//! — here, `types.rs` and `header.rs` play those roles and
//! `compress.rs`/`decompress.rs` hold the two directions' driver structs.

pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

pub use compress::Compressor;
pub use decompress::Decompressor;

/// Framing phase shared by [`Compressor`] and [`Decompressor`]: read/write
/// the main header, run the kernel over the block stream, read/write the
/// main footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StreamPhase {
    #[default]
    Header,
    Body,
    Footer,
    Done,
}
