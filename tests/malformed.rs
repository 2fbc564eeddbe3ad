//! Fatal malformed-stream detection: every `MalformedStreamError` variant is
//! reachable through the public streaming API and is reported as
//! `Status::Error`, never a panic.

use chameleon_codec::{Algorithm, Compressor, Decompressor, MalformedStreamError, Parameters, Status};

fn decode_all(data: &[u8]) -> Status {
    let mut dec = Decompressor::new();
    let mut out = vec![0u8; data.len() * 4 + 4096];
    let mut pos = 0;
    let mut direct = data;
    loop {
        match dec.process(&mut direct, &mut out, &mut pos, true) {
            Status::InfoNewBlock | Status::InfoEfficiencyCheck => continue,
            terminal => return terminal,
        }
    }
}

fn compress_valid_stream(data: &[u8], params: Parameters) -> Vec<u8> {
    let mut comp = Compressor::new(params).unwrap();
    let mut out = vec![0u8; data.len() * 2 + 4096];
    let mut pos = 0;
    let mut direct = data;
    loop {
        match comp.process(&mut direct, &mut out, &mut pos, true) {
            Status::InfoNewBlock | Status::InfoEfficiencyCheck => continue,
            Status::Finished => break,
            other => panic!("unexpected compress status: {other:?}"),
        }
    }
    out.truncate(pos);
    out
}

#[test]
fn unknown_algorithm_id_is_rejected() {
    let stream = [2u8, 0, 0, 0, b'C', b'H', b'M', b'L', b'N', b'E', b'N', b'D'];
    assert_eq!(
        decode_all(&stream),
        Status::Error(MalformedStreamError::UnknownAlgorithm)
    );
}

#[test]
fn reserved_parameter_bits_are_rejected() {
    let stream = [0u8, 0b1000_0000, 0, 0, b'C', b'H', b'M', b'L', b'N', b'E', b'N', b'D'];
    assert_eq!(
        decode_all(&stream),
        Status::Error(MalformedStreamError::ReservedParameterBitsSet)
    );
}

#[test]
fn truncated_header_is_rejected() {
    let stream = [0u8, 0];
    assert_eq!(
        decode_all(&stream),
        Status::Error(MalformedStreamError::Truncated)
    );
}

#[test]
fn corrupted_footer_is_rejected() {
    let params = Parameters::new(Algorithm::Chameleon, 0);
    let mut stream = compress_valid_stream(b"hello, world", params);
    let last = stream.len() - 1;
    stream[last] ^= 0xFF;
    assert_eq!(
        decode_all(&stream),
        Status::Error(MalformedStreamError::FooterMismatch)
    );
}

#[test]
fn truncated_block_body_is_rejected_once_flushed() {
    // A full 256-byte input produces one signature + a 256-byte body; keep
    // only the header, the signature, and a few body bytes, with no footer
    // at all. While more input might still be coming, that's a stall, not
    // an error; only once the caller flushes with nothing left does the
    // short body become a fatal truncation.
    let params = Parameters::new(Algorithm::Chameleon, 0);
    let data: Vec<u8> = (0u8..=255).collect();
    let stream = compress_valid_stream(&data, params);
    let cut = 4 + 8 + 10;
    let partial = &stream[..cut];

    let mut dec = Decompressor::new();
    let mut out = vec![0u8; 4096];
    let mut pos = 0;
    let mut direct = partial;
    assert_eq!(
        dec.process(&mut direct, &mut out, &mut pos, false),
        Status::StallOnInput
    );
    assert_eq!(
        dec.process(&mut direct, &mut out, &mut pos, true),
        Status::Error(MalformedStreamError::Truncated)
    );
}

#[test]
fn reserved_parameter_bits_are_rejected_by_the_encoder() {
    let params = Parameters::new(Algorithm::Chameleon, 0b1000_0000);
    assert_eq!(
        Compressor::new(params).unwrap_err(),
        MalformedStreamError::ReservedParameterBitsSet
    );
}

#[test]
fn header_present_but_footer_missing_is_flush_accounting_underflow() {
    // Header plus a few stray bytes, no room left for the 8-byte footer
    // once flushed: the footer-overhead subtraction underflows.
    let stream = [0u8, 0, 0, 0, 1, 2, 3];
    assert_eq!(
        decode_all(&stream),
        Status::Error(MalformedStreamError::FlushAccountingUnderflow)
    );
}

#[test]
fn errors_are_reported_without_panicking_across_all_prefixes() {
    let params = Parameters::new(Algorithm::Swift, 0);
    let data: Vec<u8> = (0u32..4000).map(|i| (i * 17) as u8).collect();
    let stream = compress_valid_stream(&data, params);
    for cut in (0..stream.len()).step_by(37) {
        let _ = decode_all(&stream[..cut]);
    }
}
