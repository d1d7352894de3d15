//! `base45` is a crate to encode binary data as text drawn from the 45
//! symbols of the QR code alphanumeric mode. The output stays inside that
//! character set, so a QR code can carry it more compactly than Base64.
//!
//! # Encode binary data
//! ```
//! let encoded = base45::encode(b"base-45");
//! assert_eq!(encoded, "UJCLQE7W581");
//! ```
//!
//! # Decode it again
//!
//! Decoding rejects symbols outside the alphabet as well as symbol counts and
//! group values that no payload encodes to.
//! ```
//! use base45::codec::Malformed;
//! use base45::{decode, Error};
//! assert_eq!(decode("UJCLQE7W581").unwrap(), b"base-45");
//! assert_eq!(
//!     decode("ujclqe7w581").unwrap_err(),
//!     Error::InvalidSymbol { symbol: 'u', index: 0 }
//! );
//! assert_eq!(
//!     decode("UJCL").unwrap_err(),
//!     Error::MalformedEncoding(Malformed::Length(4))
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod alphabet;
pub mod codec;
pub mod constants;
pub mod group;

pub use self::codec::decode;
pub use self::codec::encode;
pub use self::codec::Error;
