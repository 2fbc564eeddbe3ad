//! The 64-bit signature word labelling each of a block's 64 body words as
//! compressed (1) or literal (0).
//!
//! A thin newtype over a plain `u64` rather than a `bitflags!` set: the
//! crate this codec is otherwise shaped after never reaches for `bitflags`
//! anywhere in its own tree, and the 64 bits here aren't individually named
//! options anyway — each describes "word `i` of this block", not a fixed
//! flag. The bit layout itself matches the reference Chameleon decode
//! kernel's signature-to-body-length mapping.

/// LSB = word 0 of the block body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signature(u64);

impl Signature {
    pub const BITS: u32 = 64;
    pub const WIRE_SIZE: usize = 8;

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Whether word `shift` of the block is a compressed (dictionary) word.
    #[inline]
    pub fn test(self, shift: u32) -> bool {
        (self.0 >> shift) & 1 == 1
    }

    /// Mark word `shift` as compressed.
    #[inline]
    pub fn set(&mut self, shift: u32) {
        self.0 |= 1 << shift;
    }

    pub fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Body length in bytes for this signature: each of the 64 words costs 2
    /// bytes if compressed (a 16-bit index) or 4 if literal.
    pub fn body_len(self) -> u32 {
        Self::BITS * 4 - self.popcount() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_literal_has_zero_popcount_and_max_body() {
        let sig = Signature::from_bits(0);
        assert_eq!(sig.popcount(), 0);
        assert_eq!(sig.body_len(), 256);
        assert!(!sig.test(0));
        assert!(!sig.test(63));
    }

    #[test]
    fn all_compressed_has_min_body() {
        let sig = Signature::from_bits(u64::MAX);
        assert_eq!(sig.popcount(), 64);
        assert_eq!(sig.body_len(), 128);
        assert!(sig.test(0));
        assert!(sig.test(63));
    }

    #[test]
    fn set_marks_individual_bits() {
        let mut sig = Signature::from_bits(0);
        sig.set(5);
        sig.set(63);
        assert!(sig.test(5));
        assert!(sig.test(63));
        assert!(!sig.test(4));
        assert_eq!(sig.popcount(), 2);
        assert_eq!(sig.body_len(), 256 - 4);
    }

    #[test]
    fn wire_round_trip_is_little_endian() {
        let sig = Signature::from_bits(0x0102_0304_0506_0708);
        let bytes = sig.to_le_bytes();
        assert_eq!(bytes, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(Signature::from_le_bytes(bytes), sig);
    }
}
