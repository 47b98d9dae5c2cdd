//! Balanced digit alphabets.
//!
//! An alphabet assigns each of its `BASE` symbols a contiguous digit value
//! starting at `MIN_DIGIT`. Symbols are addressed by their *offset* in the
//! alphabet (0..BASE), which is also the curve position the transducer
//! works with:
//! - [`Septenary`] - base -7, values -2..=4, symbols `=-01234`
//! - [`Quinary`] - base -5, values -1..=3, symbols `-0123`
//!
//! `-` stands for -1 and `=` ("double minus") for -2.

use std::fmt::Debug;
use std::hash::Hash;

/// A fixed balanced digit alphabet for a negative radix.
pub trait Alphabet: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// Magnitude of the (negative) radix.
    const BASE: u8;
    /// Value of the symbol at offset 0.
    const MIN_DIGIT: i8;
    /// Symbols in increasing value order. ASCII only.
    const SYMBOLS: &'static str;
    /// Short name used in error messages and `Debug` output.
    const NAME: &'static str;

    /// Offset of a symbol within the alphabet, if it belongs to it.
    #[inline]
    fn offset_of(symbol: char) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        Self::SYMBOLS.find(symbol).map(|i| i as u8)
    }

    /// Symbol at the given offset.
    ///
    /// # Panics
    /// Panics if `offset >= BASE`.
    #[inline]
    fn symbol(offset: u8) -> char {
        Self::SYMBOLS.as_bytes()[offset as usize] as char
    }

    /// Digit value of the symbol at the given offset.
    #[inline]
    fn value(offset: u8) -> i8 {
        offset as i8 + Self::MIN_DIGIT
    }

    /// Offset of the zero digit.
    #[inline]
    fn zero_offset() -> u8 {
        (-Self::MIN_DIGIT) as u8
    }
}

/// Base -7 alphabet of the flowsnake curve index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Septenary;

impl Alphabet for Septenary {
    const BASE: u8 = 7;
    const MIN_DIGIT: i8 = -2;
    const SYMBOLS: &'static str = "=-01234";
    const NAME: &'static str = "septenary";
}

/// Base -5 alphabet of the mandelsnake curve index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quinary;

impl Alphabet for Quinary {
    const BASE: u8 = 5;
    const MIN_DIGIT: i8 = -1;
    const SYMBOLS: &'static str = "-0123";
    const NAME: &'static str = "quinary";
}

const _: () = assert!(Septenary::SYMBOLS.len() == Septenary::BASE as usize);
const _: () = assert!(Quinary::SYMBOLS.len() == Quinary::BASE as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_symbol_roundtrip() {
        for offset in 0..Septenary::BASE {
            assert_eq!(Septenary::offset_of(Septenary::symbol(offset)), Some(offset));
        }
        for offset in 0..Quinary::BASE {
            assert_eq!(Quinary::offset_of(Quinary::symbol(offset)), Some(offset));
        }
    }

    #[test]
    fn test_digit_values() {
        let septenary: Vec<i8> = (0..7).map(Septenary::value).collect();
        assert_eq!(septenary, vec![-2, -1, 0, 1, 2, 3, 4]);

        let quinary: Vec<i8> = (0..5).map(Quinary::value).collect();
        assert_eq!(quinary, vec![-1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_symbol() {
        assert_eq!(Septenary::symbol(Septenary::zero_offset()), '0');
        assert_eq!(Quinary::symbol(Quinary::zero_offset()), '0');
    }

    #[test]
    fn test_foreign_symbols() {
        assert_eq!(Septenary::offset_of('9'), None);
        assert_eq!(Septenary::offset_of('+'), None);
        assert_eq!(Septenary::offset_of('é'), None);
        // '4' is a septenary digit but not a quinary one
        assert_eq!(Quinary::offset_of('4'), None);
        assert_eq!(Quinary::offset_of('='), None);
    }
}
