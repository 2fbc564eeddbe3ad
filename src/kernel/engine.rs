//! The phase-driven decode/encode drivers shared by the Chameleon and Swift
//! kernels.
//!
//! Both kernels run the identical block framer and differ only in dictionary
//! width and hash shift, so this module generalizes over those two numbers
//! with const generics — the same move `dictionary.rs` already makes for the
//! table itself. `kernel::chameleon` and `kernel::swift` each instantiate
//! this engine and re-export it under their own names, so the two kernels
//! stay distinct types to callers.
//!
//! The driving loop (`'drive: loop { match self.phase { ... } }`) mirrors the
//! `'sm: loop { match dctx.stage { ... } }` shape in `frame/decompress.rs`
//! — a labeled loop over a small stage enum, falling through to the next
//! stage in the same iteration when a stage completes without needing to
//! suspend.
//!
//! The teleport is a parameter of `process`, not a field of the kernel
//! state: the reference Chameleon decode kernel's `density_chameleon_decode_process`
//! takes its `density_memory_teleport` the same way, since one teleport is
//! shared across the main header, every kernel block, and the main footer
//! for the life of a stream (see `stream/mod.rs`).

use crate::dictionary::Dictionary;
use crate::error::MalformedStreamError;
use crate::hash::hash;
use crate::kernel::{BlockCounter, CheckOutcome, Phase, MIN_OUTPUT_LOOKAHEAD, PROCESS_UNIT_SIZE};
use crate::signature::Signature;
use crate::status::Status;
use crate::teleport::Teleport;

/// Worst-case encoded size of one block: an 8-byte signature plus 256 bytes
/// of all-literal body. The encoder needs this much output headroom before
/// starting a block, since it can't know the compressed size in advance.
pub const ENCODE_MIN_OUTPUT_LOOKAHEAD: usize = 8 + PROCESS_UNIT_SIZE;

const RESERVED_PARAMETER_BITS: u8 = 0b1100_0000;

fn reset_dictionary_cycle_shift(parameter_byte: u8) -> Result<u8, MalformedStreamError> {
    if parameter_byte & RESERVED_PARAMETER_BITS != 0 {
        return Err(MalformedStreamError::ReservedParameterBitsSet);
    }
    Ok(parameter_byte & 0b0011_1111)
}

/// Decode-side state for a `SLOTS`-entry, `SHIFT`-hashed kernel.
pub struct DecodeState<const SLOTS: usize, const SHIFT: u32> {
    dictionary: Dictionary<SLOTS>,
    counter: BlockCounter,
    phase: Phase,
    signature: Signature,
    body_remaining: u32,
    end_data_overhead: u64,
}

impl<const SLOTS: usize, const SHIFT: u32> DecodeState<SLOTS, SHIFT> {
    /// `end_data_overhead` is the number of trailing bytes (the main footer)
    /// the caller guarantees sit after this kernel's share of the stream;
    /// flush-time accounting subtracts it before treating a less-than-full-
    /// block remainder as a verbatim tail.
    pub fn init(parameter_byte: u8, end_data_overhead: u64) -> Result<Self, MalformedStreamError> {
        let shift = reset_dictionary_cycle_shift(parameter_byte)?;
        Ok(Self {
            dictionary: Dictionary::new(),
            counter: BlockCounter::new(shift),
            phase: Phase::PrepareNewBlock,
            signature: Signature::default(),
            body_remaining: 0,
            end_data_overhead,
        })
    }

    /// Drive the state machine with whatever of `direct` remains unconsumed,
    /// merged through `teleport` with any carry from a previous call, writing
    /// decoded bytes into `out[*out_pos..]` and advancing `out_pos`.
    ///
    /// `flush` tells the driver no further input will ever arrive beyond
    /// what's already staged or in `direct`: a less-than-full-block
    /// remainder is then a verbatim tail rather than a stall.
    pub fn process(
        &mut self,
        teleport: &mut Teleport,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
        flush: bool,
    ) -> Status {
        'drive: loop {
            match self.phase {
                Phase::PrepareNewBlock => {
                    if out.len() - *out_pos < MIN_OUTPUT_LOOKAHEAD {
                        return Status::StallOnOutput;
                    }
                    match self.counter.check() {
                        CheckOutcome::EfficiencyCheck => return Status::InfoEfficiencyCheck,
                        CheckOutcome::NewBlock { reset_dictionary } => {
                            if reset_dictionary {
                                self.dictionary.reset();
                            }
                            return Status::InfoNewBlock;
                        }
                        CheckOutcome::Ready => {
                            self.phase = Phase::Signature;
                            continue 'drive;
                        }
                    }
                }

                Phase::Signature => {
                    if flush {
                        let available = teleport.available(*direct);
                        let remaining = match available.checked_sub(self.end_data_overhead) {
                            Some(n) => n,
                            None => {
                                return Status::Error(
                                    MalformedStreamError::FlushAccountingUnderflow,
                                )
                            }
                        };
                        if remaining < PROCESS_UNIT_SIZE as u64 {
                            return self.finish_tail(teleport, direct, out, out_pos);
                        }
                    }
                    let mut bytes = [0u8; Signature::WIRE_SIZE];
                    match teleport.read(direct, Signature::WIRE_SIZE) {
                        Some(window) => bytes.copy_from_slice(window.as_bytes()),
                        None => return Status::StallOnInput,
                    }
                    teleport.cursor_advance(direct, Signature::WIRE_SIZE);
                    self.signature = Signature::from_le_bytes(bytes);
                    self.body_remaining = self.signature.body_len();
                    self.counter.on_signature_read();
                    self.phase = Phase::Body;
                    continue 'drive;
                }

                Phase::Body => {
                    let available = teleport.available(*direct);
                    if available < self.body_remaining as u64 {
                        if flush {
                            return Status::Error(MalformedStreamError::Truncated);
                        }
                        return Status::StallOnInput;
                    }

                    let mut body = [0u8; PROCESS_UNIT_SIZE];
                    let body_len = self.body_remaining as usize;
                    match teleport.read(direct, body_len) {
                        Some(window) => body[..body_len].copy_from_slice(window.as_bytes()),
                        None => return Status::StallOnInput,
                    }
                    teleport.cursor_advance(direct, body_len);

                    let mut cursor = 0usize;
                    for shift in 0..64u32 {
                        let word = if self.signature.test(shift) {
                            let index = u16::from_le_bytes([body[cursor], body[cursor + 1]]);
                            cursor += 2;
                            self.dictionary.lookup(index)
                        } else {
                            let w = u32::from_le_bytes([
                                body[cursor],
                                body[cursor + 1],
                                body[cursor + 2],
                                body[cursor + 3],
                            ]);
                            cursor += 4;
                            let index = hash(w, SHIFT);
                            self.dictionary.store(index, w);
                            w
                        };
                        let start = *out_pos + shift as usize * 4;
                        out[start..start + 4].copy_from_slice(&word.to_le_bytes());
                    }
                    *out_pos += PROCESS_UNIT_SIZE;
                    self.phase = Phase::PrepareNewBlock;
                    continue 'drive;
                }
            }
        }
    }

    fn finish_tail(
        &mut self,
        teleport: &mut Teleport,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
    ) -> Status {
        let available = teleport.available(*direct);
        let tail_len = match available.checked_sub(self.end_data_overhead) {
            Some(n) => n,
            None => return Status::Error(MalformedStreamError::FlushAccountingUnderflow),
        };
        let tail_len = tail_len as usize;
        if out.len() - *out_pos < tail_len {
            return Status::StallOnOutput;
        }
        if !teleport.copy(direct, &mut out[*out_pos..*out_pos + tail_len]) {
            return Status::Error(MalformedStreamError::Truncated);
        }
        *out_pos += tail_len;
        Status::Finished
    }
}

/// Encode-side state for a `SLOTS`-entry, `SHIFT`-hashed kernel.
pub struct EncodeState<const SLOTS: usize, const SHIFT: u32> {
    dictionary: Dictionary<SLOTS>,
    counter: BlockCounter,
    phase: Phase,
}

impl<const SLOTS: usize, const SHIFT: u32> EncodeState<SLOTS, SHIFT> {
    pub fn init(parameter_byte: u8) -> Result<Self, MalformedStreamError> {
        let shift = reset_dictionary_cycle_shift(parameter_byte)?;
        Ok(Self {
            dictionary: Dictionary::new(),
            counter: BlockCounter::new(shift),
            phase: Phase::PrepareNewBlock,
        })
    }

    /// Drive the state machine. `flush` tells the driver to emit whatever
    /// input remains (fewer than 256 bytes) as a verbatim tail and finish,
    /// rather than stalling for a full block.
    pub fn process(
        &mut self,
        teleport: &mut Teleport,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
        flush: bool,
    ) -> Status {
        'drive: loop {
            match self.phase {
                Phase::PrepareNewBlock | Phase::Body => {
                    if out.len() - *out_pos < ENCODE_MIN_OUTPUT_LOOKAHEAD {
                        return Status::StallOnOutput;
                    }
                    match self.counter.check() {
                        CheckOutcome::EfficiencyCheck => return Status::InfoEfficiencyCheck,
                        CheckOutcome::NewBlock { reset_dictionary } => {
                            if reset_dictionary {
                                self.dictionary.reset();
                            }
                            return Status::InfoNewBlock;
                        }
                        CheckOutcome::Ready => {
                            self.phase = Phase::Signature;
                            continue 'drive;
                        }
                    }
                }

                Phase::Signature => {
                    let available = teleport.available(*direct);
                    if available < PROCESS_UNIT_SIZE as u64 {
                        if flush {
                            return self.finish_tail(teleport, direct, out, out_pos);
                        }
                        return Status::StallOnInput;
                    }

                    let mut input = [0u8; PROCESS_UNIT_SIZE];
                    match teleport.read(direct, PROCESS_UNIT_SIZE) {
                        Some(window) => input.copy_from_slice(window.as_bytes()),
                        None => return Status::StallOnInput,
                    }
                    teleport.cursor_advance(direct, PROCESS_UNIT_SIZE);

                    let mut signature = Signature::default();
                    let mut body = [0u8; PROCESS_UNIT_SIZE];
                    let mut body_len = 0usize;
                    for shift in 0..64u32 {
                        let base = shift as usize * 4;
                        let word = u32::from_le_bytes([
                            input[base],
                            input[base + 1],
                            input[base + 2],
                            input[base + 3],
                        ]);
                        let index = hash(word, SHIFT);
                        if self.dictionary.lookup(index) == word {
                            signature.set(shift);
                            body[body_len..body_len + 2].copy_from_slice(&index.to_le_bytes());
                            body_len += 2;
                        } else {
                            self.dictionary.store(index, word);
                            body[body_len..body_len + 4].copy_from_slice(&word.to_le_bytes());
                            body_len += 4;
                        }
                    }

                    let sig_bytes = signature.to_le_bytes();
                    out[*out_pos..*out_pos + Signature::WIRE_SIZE].copy_from_slice(&sig_bytes);
                    *out_pos += Signature::WIRE_SIZE;
                    out[*out_pos..*out_pos + body_len].copy_from_slice(&body[..body_len]);
                    *out_pos += body_len;

                    self.counter.on_signature_read();
                    self.phase = Phase::PrepareNewBlock;
                    continue 'drive;
                }
            }
        }
    }

    fn finish_tail(
        &mut self,
        teleport: &mut Teleport,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
    ) -> Status {
        let tail_len = teleport.available(*direct) as usize;
        if out.len() - *out_pos < tail_len {
            return Status::StallOnOutput;
        }
        if !teleport.copy(direct, &mut out[*out_pos..*out_pos + tail_len]) {
            return Status::Error(MalformedStreamError::Truncated);
        }
        *out_pos += tail_len;
        Status::Finished
    }
}
