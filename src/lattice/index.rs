//! Positional (nesting) index of a cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lattice::LatticeError;

/// A positional index: base-B digits, most significant first, each pick
/// one of the B sub-cells of the enclosing super-cell.
///
/// Digit 0 is the centre sub-cell, so index 0 is the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct PositionalIndex(pub u64);

impl PositionalIndex {
    /// Index of the origin.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Base-`base` digits, most significant first. Zero is `[0]`.
    pub fn digits(&self, base: u8) -> Vec<u8> {
        let base = base as u64;
        let mut n = self.0;
        let mut digits = Vec::new();

        loop {
            digits.push((n % base) as u8);
            n /= base;
            if n == 0 {
                break;
            }
        }

        digits.reverse();
        digits
    }

    /// Rebuild an index from base-`base` digits, most significant first.
    pub fn from_digits(digits: &[u8], base: u8) -> Result<Self, LatticeError> {
        let mut n: u64 = 0;

        for (position, &digit) in digits.iter().enumerate() {
            if digit >= base {
                return Err(LatticeError::InvalidDigit { digit, position, base });
            }
            n = n
                .checked_mul(base as u64)
                .and_then(|n| n.checked_add(digit as u64))
                .ok_or(LatticeError::Overflow)?;
        }

        Ok(Self(n))
    }

    /// The digits written out in base `base` (at most 10).
    pub fn to_radix_string(&self, base: u8) -> String {
        self.digits(base)
            .into_iter()
            .map(|d| char::from(b'0' + d))
            .collect()
    }
}

impl From<u64> for PositionalIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PositionalIndex> for u64 {
    fn from(value: PositionalIndex) -> Self {
        value.0
    }
}

impl fmt::Display for PositionalIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_single_zero_digit() {
        assert_eq!(PositionalIndex::ORIGIN.digits(7), vec![0]);
        assert_eq!(PositionalIndex::ORIGIN.to_radix_string(5), "0");
    }

    #[test]
    fn digits_most_significant_first() {
        // 201 = 4 * 49 + 0 * 7 + 5
        assert_eq!(PositionalIndex(201).digits(7), vec![4, 0, 5]);
        assert_eq!(PositionalIndex(201).to_radix_string(7), "405");
        // 211 = 1 * 125 + 3 * 25 + 2 * 5 + 1
        assert_eq!(PositionalIndex(211).digits(5), vec![1, 3, 2, 1]);
    }

    #[test]
    fn from_digits_roundtrip() {
        for n in [0u64, 1, 6, 7, 48, 49, 12_345, u64::MAX] {
            for base in [5u8, 7] {
                let index = PositionalIndex(n);
                assert_eq!(PositionalIndex::from_digits(&index.digits(base), base), Ok(index));
            }
        }
    }

    #[test]
    fn from_digits_rejects_bad_digit() {
        assert_eq!(
            PositionalIndex::from_digits(&[1, 7], 7),
            Err(LatticeError::InvalidDigit { digit: 7, position: 1, base: 7 })
        );
    }

    #[test]
    fn from_digits_overflow() {
        // 30 base-7 digits exceed u64
        let digits = vec![6u8; 30];
        assert_eq!(PositionalIndex::from_digits(&digits, 7), Err(LatticeError::Overflow));
    }

    #[test]
    fn leading_zero_digits_are_harmless() {
        assert_eq!(PositionalIndex::from_digits(&[0, 0, 1, 0], 7), Ok(PositionalIndex(7)));
    }
}
