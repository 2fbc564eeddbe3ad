//! Compression side of the stream framer: `new` (init), `process` (continue,
//! folding `flush` in), and `finish` (drive to completion with no further
//! input), encode direction.

use super::header;
use super::types::{Algorithm, Parameters, MAIN_FOOTER_SIZE, MAIN_HEADER_SIZE};
use super::StreamPhase;
use crate::error::MalformedStreamError;
use crate::kernel::{chameleon, swift};
use crate::status::Status;
use crate::teleport::Teleport;

enum KernelEncode {
    Chameleon(chameleon::EncodeState),
    Swift(swift::EncodeState),
}

impl KernelEncode {
    fn process(
        &mut self,
        teleport: &mut Teleport,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
        flush: bool,
    ) -> Status {
        match self {
            KernelEncode::Chameleon(s) => s.process(teleport, direct, out, out_pos, flush),
            KernelEncode::Swift(s) => s.process(teleport, direct, out, out_pos, flush),
        }
    }
}

/// Drives a single stream's compression across suspensions. `params` is
/// known up front (unlike decoding, where it's read from the header), so the
/// kernel is constructed eagerly and only the header/footer bytes are
/// staged through [`StreamPhase`].
pub struct Compressor {
    teleport: Teleport,
    phase: StreamPhase,
    params: Parameters,
    kernel: KernelEncode,
}

impl Compressor {
    /// Fails if `params.parameter_byte` has reserved bits `[6..7]` set — the
    /// same condition [`Decompressor`] surfaces as `Status::Error` once it
    /// reads the equivalent byte back out of a stream's main header.
    pub fn new(params: Parameters) -> Result<Self, MalformedStreamError> {
        let kernel = match params.algorithm {
            Algorithm::Chameleon => {
                KernelEncode::Chameleon(chameleon::EncodeState::init(params.parameter_byte)?)
            }
            Algorithm::Swift => {
                KernelEncode::Swift(swift::EncodeState::init(params.parameter_byte)?)
            }
        };
        Ok(Self {
            teleport: Teleport::new(),
            phase: StreamPhase::Header,
            params,
            kernel,
        })
    }

    /// Drive the compressor with whatever of `direct` remains unconsumed,
    /// writing framed, compressed bytes into `out[*out_pos..]`. `flush`
    /// signals no more input will ever arrive, so the final partial block
    /// and the main footer should be emitted.
    pub fn process(
        &mut self,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
        flush: bool,
    ) -> Status {
        'drive: loop {
            match self.phase {
                StreamPhase::Header => {
                    if out.len() - *out_pos < MAIN_HEADER_SIZE {
                        return Status::StallOnOutput;
                    }
                    let header = header::encode_main_header(self.params);
                    out[*out_pos..*out_pos + MAIN_HEADER_SIZE].copy_from_slice(&header);
                    *out_pos += MAIN_HEADER_SIZE;
                    self.phase = StreamPhase::Body;
                    continue 'drive;
                }

                StreamPhase::Body => {
                    let status = self
                        .kernel
                        .process(&mut self.teleport, direct, out, out_pos, flush);
                    if status == Status::Finished {
                        self.phase = StreamPhase::Footer;
                        continue 'drive;
                    }
                    return status;
                }

                StreamPhase::Footer => {
                    if out.len() - *out_pos < MAIN_FOOTER_SIZE {
                        return Status::StallOnOutput;
                    }
                    let footer = header::encode_main_footer();
                    out[*out_pos..*out_pos + MAIN_FOOTER_SIZE].copy_from_slice(&footer);
                    *out_pos += MAIN_FOOTER_SIZE;
                    self.phase = StreamPhase::Done;
                    return Status::Finished;
                }

                StreamPhase::Done => return Status::Finished,
            }
        }
    }

    /// Drive the compressor to completion with no further input: equivalent
    /// to calling `process` with an empty `direct` and `flush = true`
    /// repeatedly until a terminal status, for callers who have nothing left
    /// to stream and just want the trailing block plus the main footer
    /// flushed out.
    pub fn finish(&mut self, out: &mut [u8], out_pos: &mut usize) -> Status {
        let mut empty: &[u8] = &[];
        loop {
            match self.process(&mut empty, out, out_pos, true) {
                Status::InfoNewBlock | Status::InfoEfficiencyCheck => continue,
                other => return other,
            }
        }
    }
}
