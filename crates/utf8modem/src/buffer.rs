use alloc::{string::String, vec::Vec};

use crate::error::DecodeError;

/// Accumulator for decoded code points.
///
/// - `String`: strict text; rejects surrogates and values above U+10FFFF.
/// - `Vec<u32>`: raw code points; keeps whatever the bytes decode to.
pub(crate) trait DecodeBuf: Default {
    /// Pre-sizes the buffer for `chars` code points decoded from `bytes` bytes.
    fn with_capacity(chars: usize, bytes: usize) -> Self;

    fn push_code_point(&mut self, code_point: u32) -> Result<(), DecodeError>;
}

impl DecodeBuf for String {
    // valid input re-encodes to exactly as many bytes as it came from
    fn with_capacity(_chars: usize, bytes: usize) -> Self {
        String::with_capacity(bytes)
    }

    #[inline]
    fn push_code_point(&mut self, code_point: u32) -> Result<(), DecodeError> {
        let ch = char::from_u32(code_point).ok_or(DecodeError::InvalidCodePoint(code_point))?;
        self.push(ch);
        Ok(())
    }
}

impl DecodeBuf for Vec<u32> {
    fn with_capacity(chars: usize, _bytes: usize) -> Self {
        Vec::with_capacity(chars)
    }

    #[inline]
    fn push_code_point(&mut self, code_point: u32) -> Result<(), DecodeError> {
        self.push(code_point);
        Ok(())
    }
}
