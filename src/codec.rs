//! Encode and decode byte payloads as [base45](https://datatracker.ietf.org/doc/rfc9285/) text.
//!
//! Input bytes are taken two at a time. Each pair is read as a big-endian
//! 16-bit value and written as three base45 digits, least significant digit
//! first. An odd trailing byte is written as two digits. Every group occupies
//! a fixed number of symbols, so decoding needs no separators: the symbol
//! count alone tells whether the last group holds one byte or two.
//!
//! ```
//! use base45::{decode, encode};
//! let encoded = encode(b"Hello!!");
//! assert_eq!(encoded, "%69 VD92EX0");
//! assert_eq!(decode(&encoded).unwrap(), b"Hello!!");
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::alphabet;
use crate::group::{self, Group};

/// Ways in which a string of valid symbols can still fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The symbol count leaves a remainder of one when divided by three.
    Length(usize),
    /// A group decodes to a value too large for the bytes it stands for.
    GroupOverflow { group: usize, value: u32 },
}

/// The errors that can be returned when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character that is not part of the alphabet.
    InvalidSymbol { symbol: char, index: usize },
    /// The symbols do not form a valid encoding.
    MalformedEncoding(Malformed),
}

impl From<Malformed> for Error {
    fn from(malformed: Malformed) -> Self {
        Self::MalformedEncoding(malformed)
    }
}

impl core::fmt::Display for Malformed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Length(length) => write!(f, "invalid length {length}"),
            Self::GroupOverflow { group, value } => {
                write!(f, "group {group} decodes to out of range value {value}")
            }
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSymbol { symbol, index } => {
                write!(f, "invalid symbol {symbol:?} at index {index}")
            }
            Self::MalformedEncoding(malformed) => write!(f, "malformed encoding: {malformed}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Malformed {}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSymbol { .. } => None,
            Self::MalformedEncoding(malformed) => Some(malformed),
        }
    }
}

/// Number of symbols produced when encoding `bytes` bytes.
///
/// ```
/// assert_eq!(base45::codec::encoded_len(0), 0);
/// assert_eq!(base45::codec::encoded_len(5), 8);
/// ```
#[must_use]
pub const fn encoded_len(bytes: usize) -> usize {
    bytes / 2 * 3 + bytes % 2 * 2
}

/// Number of bytes an encoding of `symbols` symbols decodes to, or `None` if
/// no encoding has that many symbols.
///
/// ```
/// assert_eq!(base45::codec::decoded_len(8), Some(5));
/// assert_eq!(base45::codec::decoded_len(7), None);
/// ```
#[must_use]
pub const fn decoded_len(symbols: usize) -> Option<usize> {
    match symbols % 3 {
        0 => Some(symbols / 3 * 2),
        2 => Some(symbols / 3 * 2 + 1),
        _ => None,
    }
}

/// Encodes a byte payload into a base45 String. Every payload, including the
/// empty one, can be encoded.
///
/// # Examples
///
/// ```
/// use base45::encode;
/// assert_eq!(encode(b"AB"), "BB8");
/// assert_eq!(encode(&[0xff]), "U5");
/// assert_eq!(encode(&[]), "");
/// ```
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(encoded_len(data.len()));
    for group in Group::split(data) {
        encoded.extend(group.digits().map(alphabet::symbol_of));
    }
    encoded
}

/// Decodes a base45 String back into a byte payload.
///
/// Groups are recognized by position only: the text is cut into runs of
/// three symbols, and a final run of two symbols is the odd trailing byte.
///
/// # Examples
///
/// ```
/// use base45::decode;
/// assert_eq!(decode("BB8").unwrap(), b"AB");
/// assert_eq!(decode("K10").unwrap(), vec![0x00, 0x41]);
/// assert_eq!(decode("").unwrap(), b"");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] for the first character outside the
/// alphabet. Returns [`Error::MalformedEncoding`] if the number of symbols is
/// one more than a multiple of three, or if a group decodes to a value that
/// does not fit in two bytes (three symbols) or one byte (two symbols).
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    let digits = encoded
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            alphabet::digit_of(symbol).ok_or(Error::InvalidSymbol { symbol, index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let length = decoded_len(digits.len()).ok_or(Malformed::Length(digits.len()))?;
    let mut decoded = Vec::with_capacity(length);
    for (index, digits) in digits.chunks(3).enumerate() {
        let value = group::fold(digits);
        Group::from_value(value, digits.len())
            .ok_or(Malformed::GroupOverflow { group: index, value })?
            .write(&mut decoded);
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xoshiro::rand_core::{RngCore, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    fn make_message(seed: u64, length: usize) -> Vec<u8> {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut message = vec![0; length];
        rng.fill_bytes(&mut message);
        message
    }

    #[test]
    fn test_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"AB", "BB8"),
            (b"Hello!!", "%69 VD92EX0"),
            (b"base-45", "UJCLQE7W581"),
            (b"ietf!", "QED8WEX0"),
            (&[0x00, 0x00], "000"),
            (&[0xff, 0xff], "FGW"),
            (&[0xff], "U5"),
        ];
        for (data, encoded) in vectors {
            assert_eq!(encode(data), encoded);
            assert_eq!(decode(encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_zeros() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "00");
        assert_eq!(encode(&[0, 0]), "000");
        assert_eq!(encode(&[0, 0, 0]), "00000");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("00").unwrap(), vec![0]);
        assert_eq!(decode("000").unwrap(), vec![0, 0]);
        assert_eq!(decode("00000").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_small_pair_keeps_both_bytes() {
        // a leading zero byte gives a pair value below 256
        let data = hex::decode("0041").unwrap();
        assert_eq!(encode(&data), "K10");
        assert_eq!(decode("K10").unwrap(), data);

        let data = hex::decode("00ff0041ff").unwrap();
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_all_single_bytes() {
        for byte in 0..=u8::MAX {
            let encoded = encode(&[byte]);
            let expected: String = [
                alphabet::symbol_of(byte % 45),
                alphabet::symbol_of(byte / 45),
            ]
            .into_iter()
            .collect();
            assert_eq!(encoded, expected);
            assert_eq!(decode(&encoded).unwrap(), vec![byte]);
        }
    }

    #[test]
    fn test_all_pairs() {
        for value in 0..=u16::MAX {
            let data = value.to_be_bytes();
            let encoded = encode(&data);
            assert_eq!(encoded.len(), 3);
            assert_eq!(decode(&encoded).unwrap(), data);
        }
    }

    #[test]
    fn test_round_trip() {
        for length in 0..=10 {
            let message = make_message(length as u64, length);
            let encoded = encode(&message);
            assert_eq!(encoded.len(), encoded_len(length));
            assert_eq!(encoded.len(), 3 * (length / 2) + 2 * (length % 2));
            assert!(encoded.chars().all(|c| alphabet::digit_of(c).is_some()));
            assert_eq!(decoded_len(encoded.len()), Some(length));
            assert_eq!(decode(&encoded).unwrap(), message);
        }
        let message = make_message(45, 10_000);
        assert_eq!(decode(&encode(&message)).unwrap(), message);
    }

    #[test]
    fn test_concatenation() {
        // encodings of even-length prefixes concatenate
        for seed in 0..100 {
            let message = make_message(seed, 9);
            let (head, tail) = message.split_at(4);
            assert_eq!(encode(&message), encode(head) + &encode(tail));
        }
    }

    #[test]
    fn test_invalid_length() {
        for encoded in ["1", "1234", "1234567", "0000000000"] {
            assert_eq!(
                decode(encoded).unwrap_err(),
                Error::MalformedEncoding(Malformed::Length(encoded.len()))
            );
        }
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            decode("a").unwrap_err(),
            Error::InvalidSymbol {
                symbol: 'a',
                index: 0
            }
        );
        assert_eq!(
            decode("A#").unwrap_err(),
            Error::InvalidSymbol {
                symbol: '#',
                index: 1
            }
        );
        assert_eq!(
            decode("12=456789").unwrap_err(),
            Error::InvalidSymbol {
                symbol: '=',
                index: 2
            }
        );
        // index counts symbols, not bytes
        assert_eq!(
            decode("₿₿0").unwrap_err(),
            Error::InvalidSymbol {
                symbol: '₿',
                index: 0
            }
        );
        assert_eq!(
            decode("00₿").unwrap_err(),
            Error::InvalidSymbol {
                symbol: '₿',
                index: 2
            }
        );
        // symbols are checked before the length
        assert!(matches!(
            decode("1234a").unwrap_err(),
            Error::InvalidSymbol { index: 4, .. }
        ));
        assert!(matches!(
            decode("abcd").unwrap_err(),
            Error::InvalidSymbol { index: 0, .. }
        ));
    }

    #[test]
    fn test_group_overflow() {
        assert_eq!(
            decode(":::").unwrap_err(),
            Error::MalformedEncoding(Malformed::GroupOverflow {
                group: 0,
                value: 91124
            })
        );
        // 65536 = 16 + 16 * 45 + 32 * 45 * 45
        assert_eq!(
            decode("000GGW").unwrap_err(),
            Error::MalformedEncoding(Malformed::GroupOverflow {
                group: 1,
                value: 65536
            })
        );
        assert_eq!(decode("FGW").unwrap(), vec![0xff, 0xff]);

        // trailing singletons stop at 255
        assert_eq!(decode("U5").unwrap(), vec![0xff]);
        assert_eq!(
            decode("000V5").unwrap_err(),
            Error::MalformedEncoding(Malformed::GroupOverflow {
                group: 1,
                value: 256
            })
        );
        assert_eq!(
            decode("::").unwrap_err(),
            Error::MalformedEncoding(Malformed::GroupOverflow {
                group: 0,
                value: 2024
            })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            decode("A#").unwrap_err().to_string(),
            "invalid symbol '#' at index 1"
        );
        assert_eq!(
            decode("1234").unwrap_err().to_string(),
            "malformed encoding: invalid length 4"
        );
        assert_eq!(
            decode(":::").unwrap_err().to_string(),
            "malformed encoding: group 0 decodes to out of range value 91124"
        );
    }
}
