//! Encode and decode byte payloads as Base41 text.
//!
//! Every two bytes become three characters from the 41-symbol alphabet `)*+,-./0-9:;<=>?@A-Q`
//! (code points 41 through 81), so encoded text is exactly one and a half times as long
//! as the payload. Payloads must have an even length and there is no padding.
//!
//! # Lenient decoding
//! ```
//! use base41::base41::{decode, encode};
//! let data = [26, 168, 48, 178, 7, 162, 52, 188, 199, 36];
//! let encoded = encode(&data).unwrap();
//! assert_eq!(encoded, "BABA.DEDA.DECA.");
//! assert_eq!(decode(&encoded).unwrap(), data);
//! ```
//!
//! # Strict decoding
//!
//! Three alphabet characters can spell numerals up to 68920, which is more than
//! two bytes hold. The default [`Mode::Lenient`] keeps the low 16 bits of such
//! codewords, while [`Mode::Strict`] rejects them along with any character outside
//! the alphabet.
//! ```
//! use base41::base41::{decode_with, Error, Mode};
//! assert_eq!(decode_with("QQQ", Mode::Lenient).unwrap(), vec![56, 13]);
//! assert_eq!(
//!     decode_with("QQQ", Mode::Strict).unwrap_err(),
//!     Error::InvalidCodeword { position: 0 }
//! );
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::codeword::{decode_triplet, encode_pair, is_alphabet, numeral};
use crate::constants::{PAIR_LEN, TRIPLET_LEN};

/// How much validation [`decode_with`] and [`decode_into`] perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Accept any byte-sized character and keep the low 16 bits of every codeword.
    #[default]
    Lenient,
    /// Accept only alphabet characters forming codewords that fit in 16 bits.
    Strict,
}

/// The errors that can be returned when encoding or decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The payload has an odd length, or the text length is not a multiple of three.
    InvalidLength,
    /// The character at `position` has a code point above 255 or, in
    /// [`Mode::Strict`], lies outside the alphabet.
    InvalidCharacter { position: usize },
    /// The codeword starting at `position` does not fit in 16 bits. Only reported
    /// in [`Mode::Strict`].
    InvalidCodeword { position: usize },
    /// The destination buffer cannot hold the output.
    OutputTooSmall,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "invalid length"),
            Self::InvalidCharacter { position } => {
                write!(f, "invalid character at position {position}")
            }
            Self::InvalidCodeword { position } => {
                write!(f, "codeword at position {position} exceeds 16 bits")
            }
            Self::OutputTooSmall => write!(f, "output buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Length of the text encoding a payload of `n` bytes, for even `n`.
///
/// ```
/// assert_eq!(base41::base41::encoded_len(10), 15);
/// ```
#[must_use]
pub const fn encoded_len(n: usize) -> usize {
    n / PAIR_LEN * TRIPLET_LEN
}

/// Length of the payload decoded from `n` characters, for `n` a multiple of three.
///
/// ```
/// assert_eq!(base41::base41::decoded_len(15), 10);
/// ```
#[must_use]
pub const fn decoded_len(n: usize) -> usize {
    n / TRIPLET_LEN * PAIR_LEN
}

/// Encodes a byte payload into a Base41 string.
///
/// # Examples
///
/// ```
/// use base41::base41::{encode, Error};
/// assert_eq!(encode(&[0, 0, 255, 255]).unwrap(), "))):QO");
/// assert_eq!(encode(&[]).unwrap(), "");
/// assert_eq!(encode(&[1]).unwrap_err(), Error::InvalidLength);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if `data` has an odd number of bytes.
pub fn encode(data: &[u8]) -> Result<String, Error> {
    if data.len() % PAIR_LEN != 0 {
        return Err(Error::InvalidLength);
    }
    let mut encoded = String::with_capacity(encoded_len(data.len()));
    for pair in data.chunks_exact(PAIR_LEN) {
        encoded.extend(encode_pair([pair[0], pair[1]]).map(char::from));
    }
    Ok(encoded)
}

/// Encodes `data` into the start of `out` and returns the number of bytes
/// written. The output is always ASCII.
///
/// ```
/// use base41::base41::encode_into;
/// let mut out = [0; 6];
/// assert_eq!(encode_into(&[26, 168, 48, 178], &mut out), Ok(6));
/// assert_eq!(&out, b"BABA.D");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if `data` has an odd number of bytes and
/// [`Error::OutputTooSmall`] if `out` is shorter than [`encoded_len`]. Nothing is
/// written in either case.
pub fn encode_into(data: &[u8], out: &mut [u8]) -> Result<usize, Error> {
    if data.len() % PAIR_LEN != 0 {
        return Err(Error::InvalidLength);
    }
    let len = encoded_len(data.len());
    let out = out.get_mut(..len).ok_or(Error::OutputTooSmall)?;
    for (pair, triplet) in data
        .chunks_exact(PAIR_LEN)
        .zip(out.chunks_exact_mut(TRIPLET_LEN))
    {
        triplet.copy_from_slice(&encode_pair([pair[0], pair[1]]));
    }
    Ok(len)
}

/// Decodes a Base41 string in [`Mode::Lenient`].
///
/// # Examples
///
/// ```
/// use base41::base41::{decode, Error};
/// assert_eq!(decode("BABA.D").unwrap(), vec![26, 168, 48, 178]);
/// assert_eq!(decode("").unwrap(), Vec::<u8>::new());
/// assert_eq!(decode("AB").unwrap_err(), Error::InvalidLength);
/// ```
///
/// # Errors
///
/// See [`decode_with`].
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    decode_with(encoded, Mode::Lenient)
}

/// Decodes a Base41 string, validating it according to `mode`.
///
/// Lengths and positions count characters, not UTF-8 bytes.
///
/// ```
/// use base41::base41::{decode_with, Error, Mode};
/// assert_eq!(
///     decode_with("AB€", Mode::Lenient).unwrap_err(),
///     Error::InvalidCharacter { position: 2 }
/// );
/// assert_eq!(
///     decode_with("BA a.D", Mode::Strict).unwrap_err(),
///     Error::InvalidCharacter { position: 2 }
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if the number of characters is not a multiple
/// of three, [`Error::InvalidCharacter`] for a character whose code point does not
/// fit in a byte, and in [`Mode::Strict`] also [`Error::InvalidCharacter`] for
/// characters outside the alphabet and [`Error::InvalidCodeword`] for codewords
/// above 16 bits.
pub fn decode_with(encoded: &str, mode: Mode) -> Result<Vec<u8>, Error> {
    let code_points = code_points(encoded)?;
    let mut decoded = alloc::vec![0; decoded_len(code_points.len())];
    decode_into(&code_points, &mut decoded, mode)?;
    Ok(decoded)
}

fn code_points(encoded: &str) -> Result<Cow<'_, [u8]>, Error> {
    if encoded.is_ascii() {
        if encoded.len() % TRIPLET_LEN != 0 {
            return Err(Error::InvalidLength);
        }
        return Ok(Cow::Borrowed(encoded.as_bytes()));
    }
    if encoded.chars().count() % TRIPLET_LEN != 0 {
        return Err(Error::InvalidLength);
    }
    encoded
        .chars()
        .enumerate()
        .map(|(position, c)| u8::try_from(c).map_err(|_| Error::InvalidCharacter { position }))
        .collect::<Result<Vec<_>, _>>()
        .map(Cow::Owned)
}

/// Decodes `encoded`, one code point per byte, into the start of `out` and returns
/// the number of bytes written.
///
/// ```
/// use base41::base41::{decode_into, Mode};
/// let mut out = [0; 4];
/// assert_eq!(decode_into(b"BABA.D", &mut out, Mode::Strict), Ok(4));
/// assert_eq!(out, [26, 168, 48, 178]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if `encoded.len()` is not a multiple of three,
/// [`Error::OutputTooSmall`] if `out` is shorter than [`decoded_len`], and in
/// [`Mode::Strict`] the validation errors described in [`decode_with`]. The input is
/// fully validated before anything is written to `out`.
pub fn decode_into(encoded: &[u8], out: &mut [u8], mode: Mode) -> Result<usize, Error> {
    if encoded.len() % TRIPLET_LEN != 0 {
        return Err(Error::InvalidLength);
    }
    let len = decoded_len(encoded.len());
    let out = out.get_mut(..len).ok_or(Error::OutputTooSmall)?;
    if mode == Mode::Strict {
        validate(encoded)?;
    }
    for (triplet, pair) in encoded
        .chunks_exact(TRIPLET_LEN)
        .zip(out.chunks_exact_mut(PAIR_LEN))
    {
        pair.copy_from_slice(&decode_triplet([triplet[0], triplet[1], triplet[2]]));
    }
    Ok(len)
}

fn validate(encoded: &[u8]) -> Result<(), Error> {
    for (index, triplet) in encoded.chunks_exact(TRIPLET_LEN).enumerate() {
        let start = index * TRIPLET_LEN;
        if let Some(offset) = triplet.iter().position(|&c| !is_alphabet(c)) {
            return Err(Error::InvalidCharacter {
                position: start + offset,
            });
        }
        if numeral([triplet[0], triplet[1], triplet[2]]) > i32::from(u16::MAX) {
            return Err(Error::InvalidCodeword { position: start });
        }
    }
    Ok(())
}
