//! A minimal UTF-8 codec with a bounded streaming reader.
//!
//! Encoding turns code points into 1–4 bytes each by magnitude alone; decoding
//! reverses it using only the byte-shape rules (lead byte high bits, `10xxxxxx`
//! continuation bytes). On top of that:
//!
//! - [`encode_to_bytes`] allocates exactly [`byte_length`] bytes (plus an
//!   optional null terminator); [`encode_to_sink`] writes byte by byte into any
//!   [`ByteSink`].
//! - [`decode_bytes`] / [`decode_range`] decode a whole buffer, failing fast on
//!   the first malformed sequence.
//! - [`Utf8Reader`] / [`read_string`] pull from any [`ByteSource`] one byte at a
//!   time and stop at end of input, a null byte, a byte budget or a character
//!   budget, as configured by [`ReadOptions`].
//!
//! The `String` APIs reject code points a `char` cannot hold. The [`raw`]
//! module offers the same operations over `u32` code points without that
//! check.
//!
//! ```rust
//! use utf8modem::{ReadOptions, decode_bytes, encode_to_bytes, read_string};
//!
//! let bytes = encode_to_bytes("Grüße, €5", true);
//! assert_eq!(decode_bytes(&bytes[..bytes.len() - 1]).as_deref(), Ok("Grüße, €5"));
//!
//! let options = ReadOptions::default().with_null_terminated(true);
//! assert_eq!(read_string(bytes.as_slice(), options).as_deref(), Ok("Grüße, €5"));
//! ```
//!
//! # Features
//!
//! - `std` (default): [`IoSource`] and [`IoSink`] adapters for
//!   `std::io::Read` / `std::io::Write`.
//! - `serde`: `Serialize` / `Deserialize` for [`ReadOptions`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod decode;
mod encode;
mod error;
mod group;
mod options;
pub mod raw;
mod reader;
mod sink;
mod source;

#[cfg(test)]
mod tests;

pub use decode::{char_count, decode_bytes, decode_range, decode_sequence};
pub use encode::{byte_length, encode_code_point, encode_to_bytes, encode_to_sink};
pub use error::{DecodeError, ReadError};
pub use group::{GroupSize, classify_lead_byte, is_continuation_byte};
pub use options::ReadOptions;
pub use reader::{StopReason, Utf8Reader, read_string};
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::ByteSink;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, IterSource};
