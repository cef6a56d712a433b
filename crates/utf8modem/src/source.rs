//! Pull-based byte sources for the streaming reader.
//!
//! The reader only ever asks for one byte at a time, so a source is anything
//! that can answer "next byte, or exhausted". In-memory sources cannot fail and
//! use [`Infallible`] as their error type.

use alloc::collections::VecDeque;
use core::{convert::Infallible, fmt};

/// A source of bytes read one at a time.
///
/// By default, this is implemented for byte slices (which advance as they are
/// read), [`VecDeque<u8>`], [`IterSource`], `IoSource` (with the `std`
/// feature) and mutable references to any of these.
pub trait ByteSource {
    /// Error reported by the underlying transport.
    type Error;

    /// Pulls the next byte, or `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the byte could not be read.
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

// lets callers keep ownership of the source and inspect it after a read
impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).next_byte()
    }
}

impl ByteSource for &[u8] {
    type Error = Infallible;

    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let Some((&b, rest)) = self.split_first() else {
            return Ok(None);
        };
        *self = rest;
        Ok(Some(b))
    }
}

impl ByteSource for VecDeque<u8> {
    type Error = Infallible;

    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.pop_front())
    }
}

/// Adapts any byte iterator into a [`ByteSource`].
#[derive(Clone)]
pub struct IterSource<I> {
    inner: I,
}

impl<I: Iterator<Item = u8>> IterSource<I> {
    /// Wraps `iter`; the source is exhausted when the iterator is.
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter(),
        }
    }

    /// Returns the wrapped iterator with whatever it has left.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator<Item = u8>> ByteSource for IterSource<I> {
    type Error = Infallible;

    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.inner.next())
    }
}

impl<I> fmt::Debug for IterSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterSource").finish_non_exhaustive()
    }
}

/// Wraps an [`std::io::Read`] implementation so it can be used as a
/// [`ByteSource`].
///
/// Each byte is a separate `read` call on the inner reader, so wrap files and
/// sockets in a [`std::io::BufReader`] first. Reads interrupted by a signal are
/// retried.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    fn next_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        loop {
            return match self.inner.read(&mut buf) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(buf[0])),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => Err(e),
            };
        }
    }
}
