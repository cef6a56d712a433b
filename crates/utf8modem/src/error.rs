use thiserror::Error;

/// A malformed UTF-8 sequence.
///
/// Every variant is fatal to the decode in progress: decoders stop at the first
/// one they meet and return no partial output.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte cannot start any UTF-8 sequence, e.g. a lone continuation byte
    /// (`10xxxxxx`) or `11111xxx`.
    #[error("Invalid byte at start of character: 0x{0:02X}")]
    InvalidLeadByte(u8),
    /// A byte inside a multi-byte group does not have the `10xxxxxx` shape.
    #[error("Invalid byte 0x{0:02X} inside a character.")]
    InvalidContinuationByte(u8),
    /// A multi-byte group runs past the end of the decoded byte range.
    #[error("Unfinished character at end of byte array.")]
    UnfinishedBuffer,
    /// The byte source ran dry in the middle of a multi-byte group.
    #[error("Unfinished character at end of input.")]
    UnfinishedInput,
    /// The bytes are well formed but decode to a surrogate or to a value above
    /// U+10FFFF, which a Rust `String` cannot hold.
    ///
    /// Only the strict (`String` / `char`) APIs report this; see
    /// [`raw`](crate::raw) for the non-validating ones.
    #[error("Invalid code point U+{0:04X}")]
    InvalidCodePoint(u32),
}

impl DecodeError {
    /// Returns the offending byte, if the error is about one particular byte.
    #[must_use]
    pub fn byte(&self) -> Option<u8> {
        match *self {
            Self::InvalidLeadByte(b) | Self::InvalidContinuationByte(b) => Some(b),
            Self::UnfinishedBuffer | Self::UnfinishedInput | Self::InvalidCodePoint(_) => None,
        }
    }
}

/// Failure of a streaming read.
///
/// `E` is the error type of the underlying [`ByteSource`](crate::ByteSource);
/// in-memory sources use [`Infallible`](core::convert::Infallible).
#[derive(Error, Debug, PartialEq)]
pub enum ReadError<E> {
    /// The bytes read so far are not valid UTF-8.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The source ended between characters while no stop condition allowed it.
    ///
    /// Set [`ReadOptions::stop_at_eof`](crate::ReadOptions::stop_at_eof) to
    /// treat end of input as a normal stop instead.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// The source itself failed.
    #[error("source error: {0}")]
    Source(E),
}

impl<E> ReadError<E> {
    /// Returns the decoding error, if this is one.
    #[must_use]
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(err) => Some(err),
            Self::UnexpectedEof | Self::Source(_) => None,
        }
    }
}
