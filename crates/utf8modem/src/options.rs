/// Stop conditions for the streaming reader.
///
/// Each condition is checked before every character; whichever is met first
/// ends the read. With every option at its default the reader only stops on a
/// decoding error or, as a failure, at end of input.
///
/// # Examples
///
/// ```rust
/// use utf8modem::ReadOptions;
///
/// // A C-style string field of at most 64 bytes.
/// let options = ReadOptions {
///     null_terminated: true,
///     byte_length: Some(64),
///     ..Default::default()
/// };
/// assert_eq!(options, ReadOptions::default().with_null_terminated(true).with_byte_length(64));
/// ```
///
/// # Default
///
/// All flags `false`, both budgets unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadOptions {
    /// Stop at a `0` byte.
    ///
    /// The terminator is taken from the source but does not appear in the
    /// output and does not count toward [`byte_length`](Self::byte_length).
    /// When `false`, a `0` byte decodes to U+0000 like any other character.
    ///
    /// # Default
    ///
    /// `false`
    pub null_terminated: bool,

    /// Treat an exhausted source as a normal stop.
    ///
    /// When `false`, running out of input between characters is reported as
    /// [`ReadError::UnexpectedEof`](crate::ReadError::UnexpectedEof). Running
    /// out in the middle of a character is always a decoding error.
    ///
    /// # Default
    ///
    /// `false`
    pub stop_at_eof: bool,

    /// Stop after this many characters.
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub char_length: Option<usize>,

    /// Stop once this many bytes have been consumed.
    ///
    /// The budget is checked before each character and the reader always
    /// finishes a character it has started, so the bytes actually consumed may
    /// exceed the budget by up to three.
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub byte_length: Option<usize>,
}

impl ReadOptions {
    /// Sets [`null_terminated`](Self::null_terminated).
    #[must_use]
    pub const fn with_null_terminated(mut self, null_terminated: bool) -> Self {
        self.null_terminated = null_terminated;
        self
    }

    /// Sets [`stop_at_eof`](Self::stop_at_eof).
    #[must_use]
    pub const fn with_stop_at_eof(mut self, stop_at_eof: bool) -> Self {
        self.stop_at_eof = stop_at_eof;
        self
    }

    /// Limits the read to `chars` characters.
    #[must_use]
    pub const fn with_char_length(mut self, chars: usize) -> Self {
        self.char_length = Some(chars);
        self
    }

    /// Limits the read to about `bytes` bytes; see
    /// [`byte_length`](Self::byte_length).
    #[must_use]
    pub const fn with_byte_length(mut self, bytes: usize) -> Self {
        self.byte_length = Some(bytes);
        self
    }
}
