//! Main header / main footer wire codec.
//!
//! Shaped after the `read_le32`/`write_le32` helpers and frame header
//! encode/decode routines in `frame/header.rs`: small free functions over a
//! byte slice, no intermediate cursor type.

use super::types::{Algorithm, Parameters, MAIN_FOOTER_MAGIC, MAIN_FOOTER_SIZE, MAIN_HEADER_SIZE};
use crate::error::MalformedStreamError;

/// Encode the main header: `[algorithm_id, parameter_byte, 0, 0]`.
pub fn encode_main_header(params: Parameters) -> [u8; MAIN_HEADER_SIZE] {
    let mut header = [0u8; MAIN_HEADER_SIZE];
    header[0] = params.algorithm.to_byte();
    header[1] = params.parameter_byte;
    header
}

/// Decode a main header from an exactly-`MAIN_HEADER_SIZE`-byte slice.
pub fn decode_main_header(bytes: &[u8]) -> Result<Parameters, MalformedStreamError> {
    debug_assert_eq!(bytes.len(), MAIN_HEADER_SIZE);
    let algorithm = Algorithm::from_byte(bytes[0])?;
    Ok(Parameters::new(algorithm, bytes[1]))
}

/// Encode the main footer: a fixed 8-byte terminal marker.
pub fn encode_main_footer() -> [u8; MAIN_FOOTER_SIZE] {
    MAIN_FOOTER_MAGIC
}

/// Verify an exactly-`MAIN_FOOTER_SIZE`-byte slice is the terminal marker.
pub fn verify_main_footer(bytes: &[u8]) -> Result<(), MalformedStreamError> {
    debug_assert_eq!(bytes.len(), MAIN_FOOTER_SIZE);
    if bytes == MAIN_FOOTER_MAGIC {
        Ok(())
    } else {
        Err(MalformedStreamError::FooterMismatch)
    }
}
