//! `base41` implements the Base41 binary-to-text encoding. Every two bytes of
//! payload become three characters between `)` and `Q`, none of which need quoting
//! in a shell or escaping in most text protocols.
//!
//! # Encode binary data
//! ```
//! let encoded = base41::encode(&[26, 168, 48, 178, 7, 162, 52, 188, 199, 36]).unwrap();
//! assert_eq!(encoded, "BABA.DEDA.DECA.");
//! ```
//!
//! # Decode it again
//! ```
//! let decoded = base41::decode("BABA.DEDA.DECA.").unwrap();
//! assert_eq!(decoded, [26, 168, 48, 178, 7, 162, 52, 188, 199, 36]);
//! ```
//!
//! # Reject malformed input
//!
//! Payloads must have an even length and text a length divisible by three. For
//! compatibility [`decode`] keeps the low 16 bits of codewords that overflow them;
//! [`Mode::Strict`] turns those into errors.
//! ```
//! use base41::{base41::decode_with, Error, Mode};
//! assert_eq!(base41::encode(b"odd").unwrap_err(), Error::InvalidLength);
//! assert_eq!(base41::decode("QQQ").unwrap(), [56, 13]);
//! assert_eq!(
//!     decode_with("QQQ", Mode::Strict).unwrap_err(),
//!     Error::InvalidCodeword { position: 0 }
//! );
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod base41;
pub mod codeword;
pub mod constants;

#[cfg(test)]
mod test_utils;

pub use self::base41::decode;
pub use self::base41::encode;
pub use self::base41::Error;
pub use self::base41::Mode;
