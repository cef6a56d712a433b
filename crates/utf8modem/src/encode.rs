//! Code points to UTF-8 bytes.
//!
//! Encoding is total: every `u32` maps to 1–4 bytes by magnitude alone. There is
//! no range check, so surrogates encode like any other three byte value and
//! values above U+1F_FFFF lose their high bits in the four byte tier.
#![allow(clippy::cast_possible_truncation)]

use alloc::{vec, vec::Vec};

use crate::{group::GroupSize, sink::ByteSink};

/// Payload bits of a continuation byte.
const CONTINUATION_MASK: u32 = 0x3F;

/// Counts the bytes the encoder will produce for `code_points` without
/// encoding anything.
pub(crate) fn byte_length_of<I>(code_points: I) -> usize
where
    I: IntoIterator<Item = u32>,
{
    let mut count = 0;
    let mut extra = 0;
    for code_point in code_points {
        count += 1;
        if code_point > 0x7F {
            extra += GroupSize::of_code_point(code_point).len() - 1;
        }
    }
    count + extra
}

/// Number of bytes the UTF-8 encoding of `s` occupies.
///
/// Always equal to the length of [`encode_to_bytes(s, false)`](encode_to_bytes).
///
/// ```rust
/// assert_eq!(utf8modem::byte_length("A"), 1);
/// assert_eq!(utf8modem::byte_length("é€😀"), 2 + 3 + 4);
/// ```
#[must_use]
pub fn byte_length(s: &str) -> usize {
    byte_length_of(s.chars().map(u32::from))
}

#[inline]
fn continuation(bits: u32) -> u8 {
    0x80 | (bits & CONTINUATION_MASK) as u8
}

/// Encodes one code point into the front of `dst`, returning the number of
/// bytes written.
///
/// # Panics
///
/// Panics if `dst` is shorter than the code point's [`GroupSize`]. A four byte
/// buffer always suffices.
///
/// ```rust
/// let mut buf = [0u8; 4];
/// let n = utf8modem::encode_code_point(0x20AC, &mut buf);
/// assert_eq!(&buf[..n], [0xE2, 0x82, 0xAC]);
/// ```
#[inline]
pub fn encode_code_point(code_point: u32, dst: &mut [u8]) -> usize {
    let size = GroupSize::of_code_point(code_point);
    assert!(
        dst.len() >= size.len(),
        "encoding U+{code_point:04X} needs {} bytes, but the buffer has {}",
        size.len(),
        dst.len(),
    );

    match size {
        GroupSize::One => {
            dst[0] = code_point as u8;
        }
        GroupSize::Two => {
            dst[0] = 0xC0 | ((code_point >> 6) & 0x1F) as u8;
            dst[1] = continuation(code_point);
        }
        GroupSize::Three => {
            dst[0] = 0xE0 | ((code_point >> 12) & 0x0F) as u8;
            dst[1] = continuation(code_point >> 6);
            dst[2] = continuation(code_point);
        }
        GroupSize::Four => {
            dst[0] = 0xF0 | ((code_point >> 18) & 0x07) as u8;
            dst[1] = continuation(code_point >> 12);
            dst[2] = continuation(code_point >> 6);
            dst[3] = continuation(code_point);
        }
    }

    size.len()
}

/// Buffer mode: one exact-size allocation, filled through a cursor.
pub(crate) fn encode_all_to_bytes<I>(code_points: I, null_terminate: bool) -> Vec<u8>
where
    I: IntoIterator<Item = u32>,
    I::IntoIter: Clone,
{
    let code_points = code_points.into_iter();
    let len = byte_length_of(code_points.clone()) + usize::from(null_terminate);
    let mut out = vec![0u8; len];

    let mut cursor = 0;
    for code_point in code_points {
        cursor += encode_code_point(code_point, &mut out[cursor..]);
    }
    if null_terminate {
        out[cursor] = 0;
        cursor += 1;
    }

    debug_assert_eq!(cursor, out.len(), "byte length disagrees with encoder");
    out
}

/// Streaming mode: each code point goes through a 4 byte scratch buffer and
/// then byte by byte into the sink.
pub(crate) fn encode_all_to_sink<I, K>(
    code_points: I,
    mut sink: K,
    null_terminate: bool,
) -> Result<(), K::Error>
where
    I: IntoIterator<Item = u32>,
    K: ByteSink,
{
    let mut scratch = [0u8; 4];
    for code_point in code_points {
        let n = encode_code_point(code_point, &mut scratch);
        for &byte in &scratch[..n] {
            sink.write_byte(byte)?;
        }
    }
    if null_terminate {
        sink.write_byte(0)?;
    }
    Ok(())
}

/// Encodes `s` into a newly allocated buffer of exactly
/// [`byte_length(s)`](byte_length) bytes, plus one trailing `0` byte if
/// `null_terminate` is set.
///
/// ```rust
/// assert_eq!(utf8modem::encode_to_bytes("é", false), [0xC3, 0xA9]);
/// assert_eq!(utf8modem::encode_to_bytes("A", true), [0x41, 0x00]);
/// ```
#[must_use]
pub fn encode_to_bytes(s: &str, null_terminate: bool) -> Vec<u8> {
    encode_all_to_bytes(s.chars().map(u32::from), null_terminate)
}

/// Encodes `s` into `sink` one byte at a time, followed by a `0` byte if
/// `null_terminate` is set.
///
/// Pass `&mut sink` to keep using the sink afterwards.
///
/// # Errors
///
/// Stops at and returns the first error reported by the sink. Bytes written
/// before the failure stay written.
pub fn encode_to_sink<K: ByteSink>(s: &str, sink: K, null_terminate: bool) -> Result<(), K::Error> {
    encode_all_to_sink(s.chars().map(u32::from), sink, null_terminate)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("A", &[0x41])]
    #[case("é", &[0xC3, 0xA9])]
    #[case("€", &[0xE2, 0x82, 0xAC])]
    #[case("😀", &[0xF0, 0x9F, 0x98, 0x80])]
    #[case("\0", &[0x00])]
    #[case("", &[])]
    fn encodes_known_scenarios(#[case] s: &str, #[case] expected: &[u8]) {
        assert_eq!(encode_to_bytes(s, false), expected);
        assert_eq!(byte_length(s), expected.len());
    }

    #[rstest]
    #[case(0x7F, &[0x7F])]
    #[case(0x80, &[0xC2, 0x80])]
    #[case(0x7FF, &[0xDF, 0xBF])]
    #[case(0x800, &[0xE0, 0xA0, 0x80])]
    #[case(0xD800, &[0xED, 0xA0, 0x80])]
    #[case(0xFFFF, &[0xEF, 0xBF, 0xBF])]
    #[case(0x1_0000, &[0xF0, 0x90, 0x80, 0x80])]
    #[case(0x10_FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
    #[case(0x1F_FFFF, &[0xF7, 0xBF, 0xBF, 0xBF])]
    fn encodes_tier_boundaries(#[case] code_point: u32, #[case] expected: &[u8]) {
        let mut buf = [0u8; 4];
        let n = encode_code_point(code_point, &mut buf);
        assert_eq!(&buf[..n], expected);
    }

    #[test]
    fn four_byte_tier_drops_bits_above_21() {
        let mut buf = [0u8; 4];
        assert_eq!(encode_code_point(0x20_0041, &mut buf), 4);
        assert_eq!(buf, [0xF0, 0x80, 0x81, 0x81]);
    }

    #[test]
    #[should_panic(expected = "needs 3 bytes")]
    fn short_destination_panics() {
        let mut buf = [0u8; 2];
        encode_code_point(0x20AC, &mut buf);
    }

    #[test]
    fn null_terminated_buffer_appends_one_zero() {
        let plain = encode_to_bytes("a€", false);
        let terminated = encode_to_bytes("a€", true);
        assert_eq!(terminated.len(), plain.len() + 1);
        assert_eq!(&terminated[..plain.len()], plain.as_slice());
        assert_eq!(terminated.last(), Some(&0));
    }

    #[test]
    fn allocation_is_exact() {
        let bytes = encode_to_bytes("héllo wörld €😀", true);
        assert_eq!(bytes.capacity(), bytes.len());
    }

    #[test]
    fn sink_matches_buffer() {
        let mut sink = Vec::new();
        encode_to_sink("a€😀", &mut sink, true).unwrap();
        assert_eq!(sink, encode_to_bytes("a€😀", true));
    }

    #[test]
    fn matches_str_bytes() {
        let s = "zero \0 ascii ~ latin ÿ bmp \u{FFFD} astral \u{10FFFF}";
        assert_eq!(encode_to_bytes(s, false), s.as_bytes());
        assert_eq!(byte_length(s), s.len());
    }
}
