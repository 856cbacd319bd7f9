//! The numbers that define the Base41 format.
//!
//! Characters are not looked up in a table: a digit `d` in `0..41` is written as the
//! character with code point `d + OFFSET`, so the alphabet is the contiguous range
//! `)` (41) through `Q` (81).

/// Added to a digit to obtain its character code point.
pub const OFFSET: u8 = 41;

/// The numeral base.
pub const RADIX: u16 = 41;

/// Weight of the third digit of a codeword.
pub const RADIX_SQUARED: u16 = RADIX * RADIX;

/// Lowest code point of the alphabet, `)`.
pub const ALPHABET_FIRST: u8 = OFFSET;

/// Highest code point of the alphabet, `Q`.
pub const ALPHABET_LAST: u8 = OFFSET + 40;

/// Bytes per codeword on the binary side.
pub const PAIR_LEN: usize = 2;

/// Characters per codeword on the text side.
pub const TRIPLET_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_bounds() {
        assert_eq!(ALPHABET_FIRST, b')');
        assert_eq!(ALPHABET_LAST, b'Q');
        assert_eq!(usize::from(ALPHABET_LAST - ALPHABET_FIRST) + 1, usize::from(RADIX));
        assert_eq!(RADIX_SQUARED, 1681);
    }

    #[test]
    fn test_numeral_space_covers_u16() {
        let max_numeral = u32::from(RADIX) * u32::from(RADIX_SQUARED) - 1;
        assert_eq!(max_numeral, 68_920);
        assert!(max_numeral > u32::from(u16::MAX));
    }
}
