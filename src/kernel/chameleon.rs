//! The Chameleon kernel: a 65536-entry dictionary hashed from the full
//! 32-bit word.

use super::engine;

pub use crate::status::Status;

pub const SLOTS: usize = 65536;
pub const HASH_SHIFT: u32 = 0;

pub type DecodeState = engine::DecodeState<SLOTS, HASH_SHIFT>;
pub type EncodeState = engine::EncodeState<SLOTS, HASH_SHIFT>;

pub use engine::ENCODE_MIN_OUTPUT_LOOKAHEAD;
