//! Group sizes: how many bytes one encoded character occupies.
//!
//! On encode the size follows from the code point's magnitude, on decode from
//! the high-bit pattern of the lead byte. Both directions agree on the classic
//! four tiers:
//!
//! | code point        | lead byte  | size |
//! |-------------------|------------|------|
//! | `< 0x80`          | `0xxxxxxx` | 1    |
//! | `< 0x800`         | `110xxxxx` | 2    |
//! | `< 0x1_0000`      | `1110xxxx` | 3    |
//! | everything else   | `11110xxx` | 4    |

use crate::error::DecodeError;

/// Number of bytes (1–4) that make up one encoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GroupSize {
    /// A single ASCII byte.
    One = 1,
    /// Lead byte `110xxxxx` plus one continuation byte.
    Two = 2,
    /// Lead byte `1110xxxx` plus two continuation bytes.
    Three = 3,
    /// Lead byte `11110xxx` plus three continuation bytes.
    Four = 4,
}

#[allow(clippy::len_without_is_empty)]
impl GroupSize {
    /// The size the encoder uses for `code_point`.
    ///
    /// Values are not range checked: anything from `0x1_0000` up lands in the
    /// four byte tier.
    #[inline]
    #[must_use]
    pub const fn of_code_point(code_point: u32) -> Self {
        if code_point < 0x80 {
            Self::One
        } else if code_point < 0x800 {
            Self::Two
        } else if code_point < 0x1_0000 {
            Self::Three
        } else {
            Self::Four
        }
    }

    /// The size as a byte count.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self as usize
    }

    /// Mask selecting the payload bits of a lead byte of this size.
    #[inline]
    pub(crate) const fn lead_mask(self) -> u8 {
        match self {
            Self::One => 0x7F,
            Self::Two => 0x1F,
            Self::Three => 0x0F,
            Self::Four => 0x07,
        }
    }

    pub(crate) const fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }
}

/// Determines how many bytes make up the character that `byte` starts.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLeadByte`] for continuation bytes
/// (`10xxxxxx`) and for `11111xxx`.
///
/// # Examples
///
/// ```rust
/// use utf8modem::{DecodeError, GroupSize, classify_lead_byte};
///
/// assert_eq!(classify_lead_byte(b'A'), Ok(GroupSize::One));
/// assert_eq!(classify_lead_byte(0xE2), Ok(GroupSize::Three));
/// assert_eq!(classify_lead_byte(0xFF), Err(DecodeError::InvalidLeadByte(0xFF)));
/// ```
#[inline]
pub fn classify_lead_byte(byte: u8) -> Result<GroupSize, DecodeError> {
    if byte & 0x80 == 0 {
        Ok(GroupSize::One)
    } else if byte & 0xE0 == 0xC0 {
        Ok(GroupSize::Two)
    } else if byte & 0xF0 == 0xE0 {
        Ok(GroupSize::Three)
    } else if byte & 0xF8 == 0xF0 {
        Ok(GroupSize::Four)
    } else {
        Err(DecodeError::InvalidLeadByte(byte))
    }
}

/// Whether `byte` has the continuation shape `10xxxxxx`.
#[inline]
#[must_use]
pub const fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
