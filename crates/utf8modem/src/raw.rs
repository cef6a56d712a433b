//! Non-validating variants over raw `u32` code points.
//!
//! A Rust `String` can only hold Unicode scalar values. These functions apply
//! the byte-shape rules and nothing else: surrogates (U+D800..U+DFFF) and
//! values up to U+1F_FFFF round-trip through them unchanged, and the encoder
//! keeps only the low 21 bits of anything larger.
//!
//! ```rust
//! use utf8modem::raw;
//!
//! let lone_surrogate = [0x61, 0xD800, 0x62];
//! let bytes = raw::encode_to_bytes(&lone_surrogate, false);
//! assert_eq!(bytes, [0x61, 0xED, 0xA0, 0x80, 0x62]);
//! assert_eq!(raw::decode_bytes(&bytes), Ok(lone_surrogate.to_vec()));
//! assert!(utf8modem::decode_bytes(&bytes).is_err());
//! ```

use alloc::vec::Vec;
use core::ops::RangeBounds;

use crate::{
    decode::{decode_into, slice_range},
    encode::{byte_length_of, encode_all_to_bytes, encode_all_to_sink},
    error::{DecodeError, ReadError},
    options::ReadOptions,
    reader::Utf8Reader,
    sink::ByteSink,
    source::ByteSource,
};

/// Number of bytes the encoding of `code_points` occupies.
#[must_use]
pub fn byte_length(code_points: &[u32]) -> usize {
    byte_length_of(code_points.iter().copied())
}

/// Encodes `code_points` into an exact-size buffer, plus one trailing `0` byte
/// if `null_terminate` is set.
#[must_use]
pub fn encode_to_bytes(code_points: &[u32], null_terminate: bool) -> Vec<u8> {
    encode_all_to_bytes(code_points.iter().copied(), null_terminate)
}

/// Encodes `code_points` into `sink` one byte at a time.
///
/// # Errors
///
/// Returns the first error reported by the sink.
pub fn encode_to_sink<K: ByteSink>(
    code_points: &[u32],
    sink: K,
    null_terminate: bool,
) -> Result<(), K::Error> {
    encode_all_to_sink(code_points.iter().copied(), sink, null_terminate)
}

/// Decodes `bytes` into code points without range checks.
///
/// # Errors
///
/// As for [`crate::decode_bytes`], except that
/// [`DecodeError::InvalidCodePoint`] never occurs.
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<u32>, DecodeError> {
    decode_into(bytes)
}

/// Decodes the sub-range `range` of `bytes` into code points.
///
/// # Errors
///
/// As for [`decode_bytes`].
///
/// # Panics
///
/// Panics if `range` is out of bounds for `bytes`.
pub fn decode_range<R: RangeBounds<usize>>(
    bytes: &[u8],
    range: R,
) -> Result<Vec<u32>, DecodeError> {
    decode_into(slice_range(bytes, range))
}

/// Reads code points from `source` under the stop conditions in `options`.
///
/// # Errors
///
/// As for [`crate::read_string`], except that
/// [`DecodeError::InvalidCodePoint`] never occurs.
pub fn read_code_points<S: ByteSource>(
    source: S,
    options: ReadOptions,
) -> Result<Vec<u32>, ReadError<S::Error>> {
    Utf8Reader::new(source, options).read_into()
}
