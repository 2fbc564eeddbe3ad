//! Stream framer types and wire-layout constants.
//!
//! Mirrors `frame/types.rs`'s constant/enum layer: small `#[repr(u8)]` public
//! enums plus a handful of `pub const` size constants, rather than folding
//! everything into the header codec itself.

use crate::error::MalformedStreamError;

/// Which kernel a stream was written with. Corresponds to the main header's
/// one-byte algorithm id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Algorithm {
    Chameleon = 0,
    Swift = 1,
}

impl Algorithm {
    pub fn from_byte(byte: u8) -> Result<Self, MalformedStreamError> {
        match byte {
            0 => Ok(Algorithm::Chameleon),
            1 => Ok(Algorithm::Swift),
            _ => Err(MalformedStreamError::UnknownAlgorithm),
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// Main header: 1 byte algorithm id, 1 byte parameter, 2 reserved padding
/// bytes. 4 bytes keeps the header itself word-aligned without claiming any
/// meaning for the padding beyond reservation for future use.
pub const MAIN_HEADER_SIZE: usize = 4;

/// No per-block footer payload is defined for Chameleon/Swift beyond the
/// `INFO_NEW_BLOCK` signal itself.
pub const BLOCK_FOOTER_SIZE: usize = 0;

/// 8-byte little-endian terminal marker closing the stream.
pub const MAIN_FOOTER_SIZE: usize = 8;
pub const MAIN_FOOTER_MAGIC: [u8; MAIN_FOOTER_SIZE] = *b"CHMLNEND";

/// Parameters threading the main header through `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    pub algorithm: Algorithm,
    pub parameter_byte: u8,
}

impl Parameters {
    pub fn new(algorithm: Algorithm, parameter_byte: u8) -> Self {
        Self {
            algorithm,
            parameter_byte,
        }
    }
}
