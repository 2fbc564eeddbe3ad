//! Shared kernel plumbing: the block framer (§4.E) and the phase enum driving
//! both kernel variants' state machines (§4.F).
//!
//! `chameleon` and `swift` each instantiate this against their own
//! dictionary width; see those modules for the decode/encode drivers
//! themselves.

mod engine;

pub mod chameleon;
pub mod swift;

/// Bytes in one block body when every word is a literal: `64 * 4`.
pub const PROCESS_UNIT_SIZE: usize = 256;

/// Output headroom the block framer requires before starting a new block —
/// one full block body, so a block is always written atomically.
pub const MIN_OUTPUT_LOOKAHEAD: usize = PROCESS_UNIT_SIZE;

/// Signature count within a reset cycle at which an `INFO_EFFICIENCY_CHECK`
/// is raised (once per cycle).
pub const PREFERRED_EFFICIENCY_CHECK_SIGNATURES: u32 = 64;

/// Signature count marking the end of a "preferred" block group — the
/// cadence at which periodic dictionary resets are considered.
pub const PREFERRED_BLOCK_SIGNATURES: u32 = 256;

/// Processing phase of a kernel session, shared by decode and encode.
///
/// Mirrors `DecompressStage` (`frame/types.rs`) in spirit: a small
/// `#[derive(Default)]` enum driven by a labeled-loop `match` in the
/// state-machine driver (`continue 'drive` playing the role of
/// `continue 'sm`), a portable stand-in for a `switch`-fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    PrepareNewBlock,
    Signature,
    Body,
}

/// Result of consulting the block framer before starting a new block. The
/// output-headroom stall is checked by the caller directly (decode and
/// encode measure required headroom differently), so it isn't a variant
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    EfficiencyCheck,
    NewBlock { reset_dictionary: bool },
    Ready,
}

/// The counters the block framer consults: how far into the current
/// "preferred block group" of signatures we are, whether this group's
/// efficiency check already fired, and the periodic dictionary-reset
/// cadence decoded from the parameter byte.
///
/// Shared by both the decode and encode kernel states — the framer's
/// bookkeeping is identical on both sides of the codec by construction,
/// which is what keeps the two dictionaries in lock-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCounter {
    signatures_count: u32,
    efficiency_checked: bool,
    reset_cycle: u64,
    reset_shift: u8,
}

impl BlockCounter {
    pub fn new(reset_dictionary_cycle_shift: u8) -> Self {
        let reset_cycle = if reset_dictionary_cycle_shift > 0 {
            (1u64 << reset_dictionary_cycle_shift) - 1
        } else {
            0
        };
        Self {
            signatures_count: 0,
            efficiency_checked: false,
            reset_cycle,
            reset_shift: reset_dictionary_cycle_shift,
        }
    }

    pub fn on_signature_read(&mut self) {
        self.signatures_count += 1;
    }

    /// The block framer's `check_state`, minus the output-lookahead test
    /// (callers know their own output headroom and check it themselves,
    /// since decode and encode measure "available" differently).
    pub fn check(&mut self) -> CheckOutcome {
        match self.signatures_count {
            PREFERRED_EFFICIENCY_CHECK_SIGNATURES => {
                if !self.efficiency_checked {
                    self.efficiency_checked = true;
                    return CheckOutcome::EfficiencyCheck;
                }
            }
            PREFERRED_BLOCK_SIGNATURES => {
                self.signatures_count = 0;
                self.efficiency_checked = false;
                let mut reset_dictionary = false;
                if self.reset_cycle > 0 {
                    self.reset_cycle -= 1;
                } else if self.reset_shift > 0 {
                    reset_dictionary = true;
                    self.reset_cycle = (1u64 << self.reset_shift) - 1;
                }
                return CheckOutcome::NewBlock { reset_dictionary };
            }
            _ => {}
        }
        CheckOutcome::Ready
    }
}
