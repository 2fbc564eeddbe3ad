//! Fatal, unrecoverable stream errors.
//!
//! Shaped after `Lz4FError` (`frame/types.rs`): a plain `#[derive(Debug,
//! Clone, Copy, PartialEq, Eq)]` enum with a hand-written `Display` and
//! `std::error::Error` impl, rather than reaching for `thiserror` — a CLI
//! layer built on top of this crate might reasonably pull that in, but the
//! library surface itself doesn't need it.
//!
//! Every variant here maps to a single fatal outcome at the
//! [`crate::status::Status`] level (`Status::Error`); the breakdown into
//! specific reasons lets tests and callers assert on *why* a stream was
//! rejected, not just that it was.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedStreamError {
    /// The main header's algorithm id byte names a kernel this crate
    /// doesn't implement.
    UnknownAlgorithm,
    /// Reserved bits `[6..7]` of the parameter byte are set.
    ReservedParameterBitsSet,
    /// The main header, a block signature, or the main footer was expected
    /// at this offset but the stream ended first.
    Truncated,
    /// A full-size main footer was read but its bytes don't match the
    /// terminal marker — the stream is corrupt or was cut mid-footer and
    /// padded by something else.
    FooterMismatch,
    /// At flush, `teleport.available() - footer_overhead` underflowed:
    /// treated as a fatal error rather than an unchecked wraparound.
    FlushAccountingUnderflow,
}

impl MalformedStreamError {
    fn message(self) -> &'static str {
        match self {
            MalformedStreamError::UnknownAlgorithm => "unknown algorithm id in main header",
            MalformedStreamError::ReservedParameterBitsSet => {
                "reserved bits of the parameter byte are set"
            }
            MalformedStreamError::Truncated => {
                "stream ended before an expected header, signature, or footer"
            }
            MalformedStreamError::FooterMismatch => {
                "main footer bytes don't match the expected terminal marker"
            }
            MalformedStreamError::FlushAccountingUnderflow => {
                "flush-time input accounting underflowed: footer overhead exceeds available input"
            }
        }
    }
}

impl fmt::Display for MalformedStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for MalformedStreamError {}
