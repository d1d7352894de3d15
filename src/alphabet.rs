//! Mapping between base45 digits and the symbols that represent them.
//!
//! ```
//! use base45::alphabet::{digit_of, symbol_of};
//! assert_eq!(symbol_of(11), 'B');
//! assert_eq!(digit_of('B'), Some(11));
//! assert_eq!(digit_of('b'), None);
//! ```

use crate::constants::{ALPHABET, DIGITS};

/// Number of symbols in the alphabet, and therefore the numeric base.
#[allow(clippy::cast_possible_truncation)]
pub const BASE: u32 = ALPHABET.len() as u32;

/// Returns the digit represented by `symbol`, or `None` if `symbol` is not
/// part of the alphabet.
#[must_use]
pub fn digit_of(symbol: char) -> Option<u8> {
    DIGITS.get(&symbol).copied()
}

/// Returns the symbol representing `digit`.
///
/// # Panics
///
/// Panics if `digit` is not below [`BASE`]. Digits produced by the codec are
/// always reduced modulo [`BASE`] first.
#[must_use]
pub fn symbol_of(digit: u8) -> char {
    char::from(ALPHABET[usize::from(digit)])
}
