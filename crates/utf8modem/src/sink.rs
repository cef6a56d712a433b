//! Push-based byte sinks for the streaming encoder.

use alloc::{collections::VecDeque, vec::Vec};
use core::convert::Infallible;

/// A destination for bytes written one at a time.
///
/// Implemented for [`Vec<u8>`], [`VecDeque<u8>`], `IoSink` (with the `std`
/// feature) and mutable references to any of these.
pub trait ByteSink {
    /// Error reported by the underlying transport.
    type Error;

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the byte could not be written.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<K: ByteSink + ?Sized> ByteSink for &mut K {
    type Error = K::Error;

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }
}

impl ByteSink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

impl ByteSink for VecDeque<u8> {
    type Error = Infallible;

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push_back(byte);
        Ok(())
    }
}

/// Wraps an [`std::io::Write`] implementation so it can be used as a
/// [`ByteSink`].
///
/// Every byte is a separate `write_all` call; wrap unbuffered writers in a
/// [`std::io::BufWriter`]. Flushing is left to the caller.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    type Error = std::io::Error;

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.write_all(&[byte])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put<K: ByteSink>(mut sink: K, bytes: &[u8]) -> Result<(), K::Error> {
        bytes.iter().try_for_each(|&b| sink.write_byte(b))
    }

    #[test]
    fn vec_and_deque_append() {
        let mut vec = Vec::from([1u8]);
        put(&mut vec, &[2, 3]).unwrap();
        assert_eq!(vec, [1, 2, 3]);

        let mut deque = VecDeque::new();
        put(&mut deque, &[4, 5]).unwrap();
        assert_eq!(deque.pop_front(), Some(4));
        assert_eq!(deque.pop_front(), Some(5));
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_sink_writes_through() {
        let mut sink = IoSink::new(std::io::Cursor::new(Vec::new()));
        put(&mut sink, b"ok").unwrap();
        assert_eq!(sink.into_inner().into_inner(), b"ok");
    }
}
