//! Decompression side of the stream framer: `new` (init), `process`
//! (continue, folding `flush` in), and `finish` (drive to completion with no
//! further input), decode direction.

use super::header;
use super::types::{Algorithm, Parameters, BLOCK_FOOTER_SIZE, MAIN_FOOTER_SIZE, MAIN_HEADER_SIZE};
use super::StreamPhase;
use crate::error::MalformedStreamError;
use crate::kernel::{chameleon, swift};
use crate::status::Status;
use crate::teleport::Teleport;

enum KernelDecode {
    Chameleon(chameleon::DecodeState),
    Swift(swift::DecodeState),
}

impl KernelDecode {
    fn process(
        &mut self,
        teleport: &mut Teleport,
        direct: &mut &[u8],
        out: &mut [u8],
        out_pos: &mut usize,
        flush: bool,
    ) -> Status {
        match self {
            KernelDecode::Chameleon(s) => s.process(teleport, direct, out, out_pos, flush),
            KernelDecode::Swift(s) => s.process(teleport, direct, out, out_pos, flush),
        }
    }
}

/// Drives a single stream's decompression across suspensions. Owns the
/// teleport shared by the main header, the kernel's blocks, and the main
/// footer: the kernel itself never sees the footer bytes, but they're
/// drained through the same staging buffer.
pub struct Decompressor {
    teleport: Teleport,
    phase: StreamPhase,
    kernel: Option<KernelDecode>,
}

impl Decompressor {
    pub fn new() -> Self {
        Self {
            teleport: Teleport::new(),
            phase: StreamPhase::Header,
            kernel: None,
        }
    }

    /// Drive the decompressor with whatever of `direct` remains unconsumed,
    /// writing decoded bytes into `out[*out_pos..]`. `flush` signals no more
    /// input will ever arrive.
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
                    let window = match self.teleport.read(direct, MAIN_HEADER_SIZE) {
                        Some(w) => w,
                        None => {
                            if flush {
                                return Status::Error(MalformedStreamError::Truncated);
                            }
                            return Status::StallOnInput;
                        }
                    };
                    let mut bytes = [0u8; MAIN_HEADER_SIZE];
                    bytes.copy_from_slice(window.as_bytes());
                    self.teleport.cursor_advance(direct, MAIN_HEADER_SIZE);

                    let params = match header::decode_main_header(&bytes) {
                        Ok(p) => p,
                        Err(e) => return Status::Error(e),
                    };
                    let end_data_overhead = (BLOCK_FOOTER_SIZE + MAIN_FOOTER_SIZE) as u64;
                    let kernel = match init_kernel(params, end_data_overhead) {
                        Ok(k) => k,
                        Err(e) => return Status::Error(e),
                    };
                    self.kernel = Some(kernel);
                    self.phase = StreamPhase::Body;
                    continue 'drive;
                }

                StreamPhase::Body => {
                    let kernel = self
                        .kernel
                        .as_mut()
                        .expect("kernel is initialized before entering Body phase");
                    let status = kernel.process(&mut self.teleport, direct, out, out_pos, flush);
                    if status == Status::Finished {
                        self.phase = StreamPhase::Footer;
                        continue 'drive;
                    }
                    return status;
                }

                StreamPhase::Footer => {
                    let window = match self.teleport.read(direct, MAIN_FOOTER_SIZE) {
                        Some(w) => w,
                        None => {
                            if flush {
                                return Status::Error(MalformedStreamError::Truncated);
                            }
                            return Status::StallOnInput;
                        }
                    };
                    let mut bytes = [0u8; MAIN_FOOTER_SIZE];
                    bytes.copy_from_slice(window.as_bytes());
                    self.teleport.cursor_advance(direct, MAIN_FOOTER_SIZE);

                    match header::verify_main_footer(&bytes) {
                        Ok(()) => {
                            self.phase = StreamPhase::Done;
                            return Status::Finished;
                        }
                        Err(e) => return Status::Error(e),
                    }
                }

                StreamPhase::Done => return Status::Finished,
            }
        }
    }

    /// Drive the decompressor to completion with no further input:
    /// equivalent to calling `process` with an empty `direct` and
    /// `flush = true` repeatedly until a terminal status, for callers who
    /// have handed over every byte of the stream already.
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

impl Default for Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

fn init_kernel(
    params: Parameters,
    end_data_overhead: u64,
) -> Result<KernelDecode, MalformedStreamError> {
    match params.algorithm {
        Algorithm::Chameleon => {
            chameleon::DecodeState::init(params.parameter_byte, end_data_overhead)
                .map(KernelDecode::Chameleon)
        }
        Algorithm::Swift => swift::DecodeState::init(params.parameter_byte, end_data_overhead)
            .map(KernelDecode::Swift),
    }
}
