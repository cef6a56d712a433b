//! Incremental UTF-8 reader over a pull-based [`ByteSource`].
//!
//! Unlike the bulk decoder the reader does not know how much input there is.
//! It pulls one byte at a time and stops on whichever comes first of the
//! configured [`ReadOptions`] conditions:
//!
//! 1. byte or character budget reached,
//! 2. source exhausted (only a stop with `stop_at_eof`, otherwise a failure),
//! 3. a `0` byte (only with `null_terminated`).
//!
//! Budgets are checked before a character is started. Once the lead byte is
//! classified the whole group is charged to the byte budget and the reader
//! commits to reading it, so a character is never split by `byte_length`.

use alloc::string::String;

use crate::{
    buffer::DecodeBuf,
    decode::decode_sequence,
    error::{DecodeError, ReadError},
    group::{GroupSize, classify_lead_byte},
    options::ReadOptions,
    source::ByteSource,
};

/// Why a read ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// [`ReadOptions::byte_length`] bytes have been consumed.
    ByteLimit,
    /// [`ReadOptions::char_length`] characters have been read.
    CharLimit,
    /// The source is exhausted and [`ReadOptions::stop_at_eof`] is set.
    EndOfInput,
    /// A `0` byte was read and [`ReadOptions::null_terminated`] is set.
    NullTerminator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    Reading,
    Done(StopReason),
    Failed,
}

/// What one turn of the state machine produced.
enum Step {
    Char(u32),
    Stop(StopReason),
}

/// A streaming UTF-8 decoder over a [`ByteSource`].
///
/// The reader is an `Iterator` of `char`s; [`read_string`](Self::read_string)
/// collects them. Once it has stopped or failed it only yields `None`.
///
/// # Examples
///
/// ```rust
/// use utf8modem::{ReadOptions, StopReason, Utf8Reader};
///
/// let mut input: &[u8] = b"key\0value\0";
/// let mut reader = Utf8Reader::new(&mut input, ReadOptions::default().with_null_terminated(true));
/// assert_eq!(reader.read_string().as_deref(), Ok("key"));
/// assert_eq!(reader.stop_reason(), Some(StopReason::NullTerminator));
/// assert_eq!(input, b"value\0");
/// ```
#[derive(Debug)]
pub struct Utf8Reader<S> {
    source: S,
    options: ReadOptions,
    bytes_consumed: usize,
    chars_read: usize,
    state: ReadState,
}

impl<S: ByteSource> Utf8Reader<S> {
    /// Creates a reader pulling from `source`.
    ///
    /// Pass `&mut source` to keep the source and continue reading from it after
    /// the reader is done.
    pub fn new(source: S, options: ReadOptions) -> Self {
        Self {
            source,
            options,
            bytes_consumed: 0,
            chars_read: 0,
            state: ReadState::Reading,
        }
    }

    /// The options this reader was created with.
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Bytes charged to the byte budget so far: every byte of every decoded
    /// character. A null terminator is not counted.
    pub fn bytes_consumed(&self) -> usize {
        self.bytes_consumed
    }

    /// Characters decoded so far.
    pub fn chars_read(&self) -> usize {
        self.chars_read
    }

    /// Why the reader stopped, or `None` while it is still reading or after it
    /// failed.
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.state {
            ReadState::Done(reason) => Some(reason),
            ReadState::Reading | ReadState::Failed => None,
        }
    }

    /// Whether the last read ended with an error.
    pub fn is_failed(&self) -> bool {
        self.state == ReadState::Failed
    }

    /// Returns the source, positioned right after the last byte read.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Decodes the next character as a raw code point.
    ///
    /// Returns `Ok(None)` once a stop condition is met, and from then on. No
    /// range check is applied; see [`raw::read_code_points`].
    ///
    /// [`raw::read_code_points`]: crate::raw::read_code_points
    ///
    /// # Errors
    ///
    /// - [`ReadError::Decode`] for an invalid lead or continuation byte, or
    ///   [`DecodeError::UnfinishedInput`] if the source ends mid-character,
    /// - [`ReadError::UnexpectedEof`] if the source ends between characters
    ///   and `stop_at_eof` is not set,
    /// - [`ReadError::Source`] if the source fails.
    ///
    /// After an error the reader is failed and yields `Ok(None)`.
    pub fn next_code_point(&mut self) -> Result<Option<u32>, ReadError<S::Error>> {
        if self.state != ReadState::Reading {
            return Ok(None);
        }

        match self.step() {
            Ok(Step::Char(code_point)) => {
                self.chars_read += 1;
                Ok(Some(code_point))
            }
            Ok(Step::Stop(reason)) => {
                log::trace!(
                    "utf-8 read stopped ({reason:?}) after {} bytes, {} chars",
                    self.bytes_consumed,
                    self.chars_read,
                );
                self.state = ReadState::Done(reason);
                Ok(None)
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Reads characters until a stop condition and returns them as a string.
    ///
    /// Characters already taken through the iterator are not included.
    ///
    /// # Errors
    ///
    /// As for [`next_code_point`](Self::next_code_point), plus
    /// [`DecodeError::InvalidCodePoint`] for surrogates and values above
    /// U+10FFFF. No partial string is returned on failure.
    pub fn read_string(&mut self) -> Result<String, ReadError<S::Error>> {
        self.read_into()
    }

    pub(crate) fn read_into<B: DecodeBuf>(&mut self) -> Result<B, ReadError<S::Error>> {
        let mut out = B::default();
        while let Some(code_point) = self.next_code_point()? {
            if let Err(err) = out.push_code_point(code_point) {
                let err = ReadError::Decode(err);
                self.fail(&err);
                return Err(err);
            }
        }
        Ok(out)
    }

    /// One turn: budgets, lead byte, continuation bytes, decode.
    fn step(&mut self) -> Result<Step, ReadError<S::Error>> {
        if self
            .options
            .byte_length
            .is_some_and(|max| self.bytes_consumed >= max)
        {
            return Ok(Step::Stop(StopReason::ByteLimit));
        }
        if self
            .options
            .char_length
            .is_some_and(|max| self.chars_read >= max)
        {
            return Ok(Step::Stop(StopReason::CharLimit));
        }

        let Some(lead) = self.source.next_byte().map_err(ReadError::Source)? else {
            return if self.options.stop_at_eof {
                Ok(Step::Stop(StopReason::EndOfInput))
            } else {
                Err(ReadError::UnexpectedEof)
            };
        };

        if lead == 0 && self.options.null_terminated {
            return Ok(Step::Stop(StopReason::NullTerminator));
        }

        let size = classify_lead_byte(lead)?;
        self.bytes_consumed += size.len();
        if size == GroupSize::One {
            return Ok(Step::Char(u32::from(lead)));
        }

        let mut group = [lead, 0, 0, 0];
        for slot in &mut group[1..size.len()] {
            *slot = self
                .source
                .next_byte()
                .map_err(ReadError::Source)?
                .ok_or(DecodeError::UnfinishedInput)?;
        }
        Ok(Step::Char(decode_sequence(&group[..size.len()])?))
    }

    fn fail(&mut self, err: &ReadError<S::Error>) {
        self.state = ReadState::Failed;
        match err {
            ReadError::Decode(err) => log::debug!(
                "utf-8 read failed after {} bytes: {err}",
                self.bytes_consumed
            ),
            ReadError::UnexpectedEof => log::debug!(
                "utf-8 source ended after {} chars without a stop condition",
                self.chars_read
            ),
            ReadError::Source(_) => log::debug!(
                "utf-8 source failed after {} bytes",
                self.bytes_consumed
            ),
        }
    }
}

impl<S: ByteSource> Iterator for Utf8Reader<S> {
    type Item = Result<char, ReadError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let code_point = match self.next_code_point() {
            Ok(Some(code_point)) => code_point,
            Ok(None) => return None,
            Err(err) => return Some(Err(err)),
        };
        Some(char::from_u32(code_point).ok_or_else(|| {
            let err = ReadError::Decode(DecodeError::InvalidCodePoint(code_point));
            self.fail(&err);
            err
        }))
    }
}

/// Reads one string from `source` under the stop conditions in `options`.
///
/// # Errors
///
/// As for [`Utf8Reader::read_string`].
///
/// # Examples
///
/// ```rust
/// use utf8modem::{ReadError, ReadOptions, read_string};
///
/// // With the default options the source must not run dry.
/// assert_eq!(read_string(&b"abc"[..], ReadOptions::default()), Err(ReadError::UnexpectedEof));
///
/// let options = ReadOptions::default().with_stop_at_eof(true);
/// assert_eq!(read_string(&b"abc"[..], options).as_deref(), Ok("abc"));
///
/// // A byte budget of 1 still finishes the two byte character it started.
/// let options = ReadOptions::default().with_byte_length(1);
/// assert_eq!(read_string(&[0xC2, 0xA9][..], options).as_deref(), Ok("©"));
/// ```
pub fn read_string<S: ByteSource>(
    source: S,
    options: ReadOptions,
) -> Result<String, ReadError<S::Error>> {
    Utf8Reader::new(source, options).read_string()
}
