//! The per-unit transform: one byte pair to one character triplet and back.
//!
//! Every codeword is independent of its neighbours, so the codec in
//! [`crate::base41`] is just these functions applied chunk by chunk.

use crate::constants::{ALPHABET_FIRST, ALPHABET_LAST, OFFSET, RADIX, RADIX_SQUARED};

/// Encodes a little-endian byte pair into three alphabet characters, least
/// significant digit first.
///
/// # Examples
///
/// ```
/// use base41::codeword::encode_pair;
/// assert_eq!(&encode_pair([26, 168]), b"BAB");
/// assert_eq!(&encode_pair([255, 255]), b":QO");
/// ```
#[must_use]
pub fn encode_pair(pair: [u8; 2]) -> [u8; 3] {
    let mut x = u16::from_le_bytes(pair);
    let c0 = digit_char(x % RADIX);
    x /= RADIX;
    let c1 = digit_char(x % RADIX);
    // x < 1599 here, so the last quotient is at most 38
    let c2 = digit_char(x / RADIX);
    [c0, c1, c2]
}

#[allow(clippy::cast_possible_truncation)]
fn digit_char(digit: u16) -> u8 {
    digit as u8 + OFFSET
}

/// Reconstructs the base-41 numeral of a triplet of code points.
///
/// Code points outside the alphabet give digits outside `0..41` (negative below
/// `)`), and the result may exceed `u16::MAX`.
///
/// ```
/// use base41::codeword::numeral;
/// assert_eq!(numeral(*b"BAB"), 43_034);
/// assert_eq!(numeral(*b"QQQ"), 68_920);
/// assert_eq!(numeral(*b")))"), 0);
/// ```
#[must_use]
pub fn numeral(triplet: [u8; 3]) -> i32 {
    let digit = |c: u8| i32::from(c) - i32::from(OFFSET);
    digit(triplet[0])
        + i32::from(RADIX) * digit(triplet[1])
        + i32::from(RADIX_SQUARED) * digit(triplet[2])
}

/// Decodes a triplet into its byte pair, keeping only the low 16 bits of the
/// numeral.
///
/// ```
/// use base41::codeword::decode_triplet;
/// assert_eq!(decode_triplet(*b"BAB"), [26, 168]);
/// // 68920 wraps to 3384
/// assert_eq!(decode_triplet(*b"QQQ"), [56, 13]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn decode_triplet(triplet: [u8; 3]) -> [u8; 2] {
    (numeral(triplet) as u16).to_le_bytes()
}

/// Whether `c` is the code point of one of the 41 alphabet characters.
#[must_use]
pub const fn is_alphabet(c: u8) -> bool {
    c >= ALPHABET_FIRST && c <= ALPHABET_LAST
}
