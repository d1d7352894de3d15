//! Fixed-width groups: two bytes become three digits, a trailing byte two.

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet::BASE;

/// A unit of input bytes together with its fixed digit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Two bytes, combined big-endian.
    Pair(u16),
    /// A single trailing byte.
    Singleton(u8),
}

impl Group {
    /// Number of digits the group occupies in an encoding.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Pair(_) => 3,
            Self::Singleton(_) => 2,
        }
    }

    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Self::Pair(v) => u32::from(v),
            Self::Singleton(v) => u32::from(v),
        }
    }

    /// Splits `data` into pairs, followed by a singleton if the length is odd.
    pub fn split(data: &[u8]) -> impl Iterator<Item = Self> + '_ {
        let pairs = data.chunks_exact(2);
        let tail = pairs.remainder().first().copied().map(Self::Singleton);
        pairs
            .map(|pair| Self::Pair(u16::from_be_bytes([pair[0], pair[1]])))
            .chain(tail)
    }

    /// The group's base45 digits, least significant first.
    #[allow(clippy::cast_possible_truncation)]
    pub fn digits(self) -> impl Iterator<Item = u8> {
        let mut value = self.value();
        (0..self.width()).map(move |_| {
            let digit = value % BASE;
            value /= BASE;
            digit as u8
        })
    }

    /// Rebuilds a group from a decoded value and the number of digits it was
    /// read from. Returns `None` if the value does not fit the group's bytes.
    #[must_use]
    pub fn from_value(value: u32, width: usize) -> Option<Self> {
        match width {
            3 => u16::try_from(value).ok().map(Self::Pair),
            2 => u8::try_from(value).ok().map(Self::Singleton),
            _ => None,
        }
    }

    pub fn write(self, out: &mut Vec<u8>) {
        match self {
            Self::Pair(v) => out.extend_from_slice(&v.to_be_bytes()),
            Self::Singleton(v) => out.push(v),
        }
    }
}

/// Folds least-significant-first digits back into their value.
#[must_use]
pub fn fold(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .fold(0, |value, &digit| value * BASE + u32::from(digit))
}
