//! UTF-8 bytes to code points.
//!
//! Bulk decoding walks the input twice: a sizing pass that classifies every
//! lead byte and counts characters, then a decode pass that validates the
//! continuation bytes. An invalid lead byte anywhere in the input is therefore
//! reported before any continuation error that precedes it.

use alloc::string::String;
use core::ops::{Bound, RangeBounds};

use bstr::BStr;

use crate::{
    buffer::DecodeBuf,
    error::DecodeError,
    group::{GroupSize, classify_lead_byte, is_continuation_byte},
};

/// How much of a rejected input the debug log shows.
const LOG_WINDOW: usize = 16;

/// Reconstructs the code point encoded by one complete group.
///
/// `group` holds the lead byte followed by its continuation bytes; its length
/// is taken as the group size, so classify the lead byte first. A one byte
/// group decodes to the byte itself.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidContinuationByte`] for the first byte after
/// the lead that is not shaped `10xxxxxx`.
///
/// # Panics
///
/// Panics if `group` is empty or longer than four bytes.
///
/// ```rust
/// use utf8modem::{DecodeError, decode_sequence};
///
/// assert_eq!(decode_sequence(&[0xE2, 0x82, 0xAC]), Ok(0x20AC));
/// assert_eq!(
///     decode_sequence(&[0xC3, 0x41]),
///     Err(DecodeError::InvalidContinuationByte(0x41)),
/// );
/// ```
#[inline]
pub fn decode_sequence(group: &[u8]) -> Result<u32, DecodeError> {
    let (Some(size), Some((&lead, continuation))) =
        (GroupSize::from_len(group.len()), group.split_first())
    else {
        panic!("a UTF-8 group is 1 to 4 bytes, got {}", group.len());
    };

    if size == GroupSize::One {
        return Ok(u32::from(lead));
    }

    let mut code_point = u32::from(lead & size.lead_mask());
    for &byte in continuation {
        if !is_continuation_byte(byte) {
            return Err(DecodeError::InvalidContinuationByte(byte));
        }
        code_point = (code_point << 6) | u32::from(byte & 0x3F);
    }
    Ok(code_point)
}

/// Counts the characters in `bytes` by hopping from lead byte to lead byte.
///
/// Only lead bytes are inspected; continuation bytes and a final group that
/// runs past the end are left for the decoder to reject.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLeadByte`] for the first position that should
/// start a character but cannot.
///
/// ```rust
/// assert_eq!(utf8modem::char_count("aé€".as_bytes()), Ok(3));
/// ```
pub fn char_count(bytes: &[u8]) -> Result<usize, DecodeError> {
    let mut pos = 0;
    let mut count = 0;
    while let Some(&lead) = bytes.get(pos) {
        pos += classify_lead_byte(lead)?.len();
        count += 1;
    }
    Ok(count)
}

pub(crate) fn decode_into<B: DecodeBuf>(bytes: &[u8]) -> Result<B, DecodeError> {
    decode_passes(bytes).inspect_err(|err| {
        log::debug!(
            "rejected {} byte UTF-8 input: {err}; starts {:?}",
            bytes.len(),
            BStr::new(&bytes[..bytes.len().min(LOG_WINDOW)]),
        );
    })
}

fn decode_passes<B: DecodeBuf>(bytes: &[u8]) -> Result<B, DecodeError> {
    let chars = char_count(bytes)?;
    let mut out = B::with_capacity(chars, bytes.len());

    let mut pos = 0;
    while let Some(&lead) = bytes.get(pos) {
        let size = classify_lead_byte(lead)?;
        let group = bytes
            .get(pos..pos + size.len())
            .ok_or(DecodeError::UnfinishedBuffer)?;
        out.push_code_point(decode_sequence(group)?)?;
        pos += size.len();
    }
    Ok(out)
}

/// Resolves `range` against `bytes` like slice indexing does.
pub(crate) fn slice_range<R: RangeBounds<usize>>(bytes: &[u8], range: R) -> &[u8] {
    let bounds: (Bound<usize>, Bound<usize>) =
        (range.start_bound().cloned(), range.end_bound().cloned());
    &bytes[bounds]
}

/// Decodes a whole byte buffer into a `String`.
///
/// # Errors
///
/// Fails on the first malformed sequence, with no partial output:
/// - [`DecodeError::InvalidLeadByte`] for a byte that cannot start a character,
/// - [`DecodeError::InvalidContinuationByte`] for a malformed continuation,
/// - [`DecodeError::UnfinishedBuffer`] when the last character is cut short,
/// - [`DecodeError::InvalidCodePoint`] for surrogates and values above
///   U+10FFFF, which a `String` cannot hold (see [`raw::decode_bytes`] to keep
///   them).
///
/// [`raw::decode_bytes`]: crate::raw::decode_bytes
///
/// ```rust
/// use utf8modem::{DecodeError, decode_bytes};
///
/// assert_eq!(decode_bytes(&[0x41, 0xC3, 0xA9]).as_deref(), Ok("Aé"));
/// assert_eq!(decode_bytes(&[0xE2, 0x82]), Err(DecodeError::UnfinishedBuffer));
/// ```
pub fn decode_bytes(bytes: &[u8]) -> Result<String, DecodeError> {
    decode_into(bytes)
}

/// Decodes the sub-range `range` of `bytes`.
///
/// A character that starts inside the range but ends past it is reported as
/// [`DecodeError::UnfinishedBuffer`], even if `bytes` continues.
///
/// # Errors
///
/// As for [`decode_bytes`].
///
/// # Panics
///
/// Panics if `range` is out of bounds for `bytes`, like slice indexing.
///
/// ```rust
/// let bytes = b"<\xE2\x82\xAC>";
/// assert_eq!(utf8modem::decode_range(bytes, 1..4).as_deref(), Ok("€"));
/// ```
pub fn decode_range<R: RangeBounds<usize>>(bytes: &[u8], range: R) -> Result<String, DecodeError> {
    decode_into(slice_range(bytes, range))
}
