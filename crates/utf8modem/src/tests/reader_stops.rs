//! Stop conditions and failure modes of the streaming reader.

use alloc::{collections::VecDeque, string::String, vec::Vec};
use core::convert::Infallible;

use rstest::rstest;

use crate::{
    ByteSource, DecodeError, IterSource, ReadError, ReadOptions, StopReason, Utf8Reader,
    read_string,
};

/// Reads from `input` and reports the result, the stop reason, and what is
/// left in the source.
fn run(
    input: &[u8],
    options: ReadOptions,
) -> (Result<String, ReadError<Infallible>>, Option<StopReason>, Vec<u8>) {
    let mut source = input;
    let mut reader = Utf8Reader::new(&mut source, options);
    let result = reader.read_string();
    let reason = reader.stop_reason();
    (result, reason, source.to_vec())
}

#[rstest]
#[case::null_terminator(
    &[0x41, 0x00, 0x42],
    ReadOptions::default().with_null_terminated(true),
    "A",
    StopReason::NullTerminator,
    &[0x42],
)]
#[case::byte_budget_finishes_character(
    &[0xC2, 0xA9, 0x41],
    ReadOptions::default().with_byte_length(1),
    "©",
    StopReason::ByteLimit,
    &[0x41],
)]
#[case::byte_budget_exact(
    b"abcdef",
    ReadOptions::default().with_byte_length(3),
    "abc",
    StopReason::ByteLimit,
    b"def",
)]
#[case::byte_budget_zero(
    b"abc",
    ReadOptions::default().with_byte_length(0),
    "",
    StopReason::ByteLimit,
    b"abc",
)]
#[case::char_budget(
    "a€😀b".as_bytes(),
    ReadOptions::default().with_char_length(3),
    "a€😀",
    StopReason::CharLimit,
    b"b",
)]
#[case::end_of_input(
    "é€".as_bytes(),
    ReadOptions::default().with_stop_at_eof(true),
    "é€",
    StopReason::EndOfInput,
    &[],
)]
#[case::nul_without_null_terminated(
    &[0x41, 0x00, 0x42],
    ReadOptions::default().with_stop_at_eof(true),
    "A\0B",
    StopReason::EndOfInput,
    &[],
)]
#[case::terminator_before_budget(
    &[0x41, 0x00, 0x42],
    ReadOptions::default().with_null_terminated(true).with_byte_length(2),
    "A",
    StopReason::NullTerminator,
    &[0x42],
)]
#[case::byte_budget_before_char_budget(
    "ééé".as_bytes(),
    ReadOptions::default().with_byte_length(4).with_char_length(2),
    "éé",
    StopReason::ByteLimit,
    "é".as_bytes(),
)]
fn stops(
    #[case] input: &[u8],
    #[case] options: ReadOptions,
    #[case] expected: &str,
    #[case] reason: StopReason,
    #[case] rest: &[u8],
) {
    let (result, got_reason, got_rest) = run(input, options);
    assert_eq!(result.as_deref(), Ok(expected));
    assert_eq!(got_reason, Some(reason));
    assert_eq!(got_rest, rest);
}

#[test]
fn exhausted_source_without_stop_at_eof_fails() {
    let (result, reason, rest) = run(b"ab", ReadOptions::default());
    assert_eq!(result, Err(ReadError::UnexpectedEof));
    assert_eq!(reason, None);
    assert!(rest.is_empty());
}

#[test]
fn copyright_sign_consumes_both_bytes() {
    let mut source: &[u8] = &[0xC2, 0xA9];
    let mut reader = Utf8Reader::new(&mut source, ReadOptions::default().with_byte_length(1));
    assert_eq!(reader.read_string().as_deref(), Ok("©"));
    assert_eq!(reader.bytes_consumed(), 2);
    assert_eq!(reader.chars_read(), 1);
    assert!(source.is_empty());
}

#[test]
fn terminator_is_not_charged_to_budget() {
    let mut source: &[u8] = b"ab\0";
    let options = ReadOptions::default().with_null_terminated(true);
    let mut reader = Utf8Reader::new(&mut source, options);
    assert_eq!(reader.read_string().as_deref(), Ok("ab"));
    assert_eq!(reader.bytes_consumed(), 2);
}

#[test]
fn reader_is_fused_after_stop_and_failure() {
    let options = ReadOptions::default().with_char_length(1);
    let mut reader = Utf8Reader::new(&b"xyz"[..], options);
    assert_eq!(reader.next_code_point(), Ok(Some(u32::from('x'))));
    assert_eq!(reader.next_code_point(), Ok(None));
    assert_eq!(reader.next_code_point(), Ok(None));
    assert_eq!(reader.into_inner(), b"yz");

    let mut reader = Utf8Reader::new(&[0x80, 0x41][..], ReadOptions::default());
    assert_eq!(
        reader.next_code_point(),
        Err(ReadError::Decode(DecodeError::InvalidLeadByte(0x80)))
    );
    assert!(reader.is_failed());
    assert_eq!(reader.stop_reason(), None);
    assert_eq!(reader.next_code_point(), Ok(None));
}

#[test]
fn iterates_chars() {
    let options = ReadOptions::default().with_stop_at_eof(true);
    let chars: Result<Vec<char>, _> = Utf8Reader::new("h€y".as_bytes(), options).collect();
    assert_eq!(chars, Ok(alloc::vec!['h', '€', 'y']));
}

#[test]
fn iterator_rejects_surrogate_then_ends() {
    let options = ReadOptions::default().with_stop_at_eof(true);
    let mut reader = Utf8Reader::new(&[0x41, 0xED, 0xB2, 0x80, 0x42][..], options);
    assert_eq!(reader.next(), Some(Ok('A')));
    assert_eq!(
        reader.next(),
        Some(Err(ReadError::Decode(DecodeError::InvalidCodePoint(0xDC80))))
    );
    assert_eq!(reader.next(), None);
}

#[test]
fn reads_from_other_sources() {
    let options = ReadOptions::default().with_null_terminated(true);

    let mut deque: VecDeque<u8> = "one\0two\0".bytes().collect();
    assert_eq!(read_string(&mut deque, options).as_deref(), Ok("one"));
    assert_eq!(read_string(&mut deque, options).as_deref(), Ok("two"));
    assert!(deque.is_empty());

    let iter = IterSource::new("€\0".bytes());
    assert_eq!(read_string(iter, options).as_deref(), Ok("€"));
}

/// Hands out `data` and then fails instead of reporting end of input.
struct Flaky<'a> {
    data: &'a [u8],
}

impl ByteSource for Flaky<'_> {
    type Error = &'static str;

    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let data = self.data;
        let Some((&byte, rest)) = data.split_first() else {
            return Err("connection reset");
        };
        self.data = rest;
        Ok(Some(byte))
    }
}

#[test]
fn source_errors_propagate() {
    let options = ReadOptions::default().with_stop_at_eof(true);

    let flaky = Flaky { data: b"ok" };
    assert_eq!(
        read_string(flaky, options),
        Err(ReadError::Source("connection reset"))
    );

    // a failure in the middle of a character is still the source's error
    let flaky = Flaky { data: &[0xE2, 0x82] };
    assert_eq!(
        read_string(flaky, options),
        Err(ReadError::Source("connection reset"))
    );
}
