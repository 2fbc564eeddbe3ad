//! The Swift kernel: a smaller, 4096-entry dictionary hashed from the top 12
//! bits of the same multiplicative hash Chameleon uses. Lower compression
//! ratio than Chameleon, traded for a dictionary a quarter the size and
//! friendlier to small caches.

use super::engine;

pub use crate::status::Status;

pub const SLOTS: usize = 4096;
pub const HASH_SHIFT: u32 = 4;

pub type DecodeState = engine::DecodeState<SLOTS, HASH_SHIFT>;
pub type EncodeState = engine::EncodeState<SLOTS, HASH_SHIFT>;

pub use engine::ENCODE_MIN_OUTPUT_LOOKAHEAD;
