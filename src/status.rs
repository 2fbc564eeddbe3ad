//! The streaming API's status contract.
//!
//! Mirrors the shape of `lz4f_decompress`'s driver return value (which
//! returns `(consumed, produced, next_hint)`) but surfaces an explicit enum
//! instead of a byte-count hint — a status enum reads better at this call
//! site than an opaque hint integer, and distinguishes stall-on-input from
//! stall-on-output, which a single hint number can't.

use crate::error::MalformedStreamError;

/// Outcome of one call into [`crate::chameleon`] / [`crate::swift`]'s
/// `init` / `continue_stream` / `finish`.
///
/// `Info*` variants are non-terminal: the driver loop re-enters `continue`
/// without changing buffers. `StallOn*` variants ask the caller to refill or
/// drain the named buffer before re-entering. `Finished` is terminal.
/// `Error` is terminal and fatal — the state must not be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Finished,
    StallOnInput,
    StallOnOutput,
    InfoNewBlock,
    InfoEfficiencyCheck,
    Error(MalformedStreamError),
}

impl Status {
    pub fn is_stall(self) -> bool {
        matches!(self, Status::StallOnInput | Status::StallOnOutput)
    }

    pub fn is_info(self) -> bool {
        matches!(self, Status::InfoNewBlock | Status::InfoEfficiencyCheck)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Finished | Status::Error(_))
    }
}
