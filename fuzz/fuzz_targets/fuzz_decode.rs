#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8modem::{ReadError, ReadOptions, decode_bytes, encode_to_bytes, raw, read_string};

#[derive(Debug, Arbitrary)]
struct Input {
    null_terminated: bool,
    char_length: Option<u8>,
    byte_length: Option<u8>,
    bytes: Vec<u8>,
}

fn check(input: &Input) {
    let bytes = input.bytes.as_slice();
    let decoded = decode_bytes(bytes);

    // On well-formed input the decoder must agree with the standard library.
    if let Ok(s) = core::str::from_utf8(bytes) {
        assert_eq!(decoded.as_deref(), Ok(s));
    }

    if let Ok(s) = &decoded {
        let encoded = encode_to_bytes(s, false);
        assert_eq!(decode_bytes(&encoded).as_deref(), Ok(s.as_str()));
    }

    // The raw decoder accepts a superset of what the strict one does.
    let code_points = raw::decode_bytes(bytes);
    if let Ok(s) = &decoded {
        let expected: Vec<u32> = s.chars().map(u32::from).collect();
        assert_eq!(code_points.as_deref(), Ok(expected.as_slice()));
    }
    if let Ok(cps) = &code_points {
        assert_eq!(raw::byte_length(cps), raw::encode_to_bytes(cps, false).len());
    }

    // Reading to end of input sees exactly what the bulk decoder sees, except
    // that a cut-off tail is reported as unfinished input.
    let until_eof = ReadOptions::default().with_stop_at_eof(true);
    match (read_string(bytes, until_eof), &decoded) {
        (Ok(read), Ok(bulk)) => assert_eq!(&read, bulk),
        (Err(ReadError::Decode(_)), Err(_)) => {}
        (read, bulk) => panic!("reader {read:?} disagrees with decoder {bulk:?}"),
    }

    // With limits the reader yields a prefix of the unlimited read.
    let options = ReadOptions {
        null_terminated: input.null_terminated,
        stop_at_eof: true,
        char_length: input.char_length.map(usize::from),
        byte_length: input.byte_length.map(usize::from),
    };
    if let (Ok(limited), Ok(full)) = (read_string(bytes, options), &decoded) {
        assert!(full.starts_with(&limited));
        if let Some(max) = options.char_length {
            assert!(limited.chars().count() <= max);
        }
        if let Some(max) = options.byte_length {
            assert!(limited.len() < max + 4);
        }
    }
}

fuzz_target!(|input: Input| check(&input));
