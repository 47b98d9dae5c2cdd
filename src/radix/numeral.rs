//! Balanced negative-radix numerals.
//!
//! A numeral over an [`Alphabet`] with base B represents
//! `sum(value(d_k) * (-B)^k)`, digits written most significant first.
//! Every `i64` has exactly one representation without a leading zero
//! symbol, so no separate sign marker is needed.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::radix::Alphabet;

/// Encode an integer as its canonical numeral string.
pub fn encode<A: Alphabet>(value: i64) -> String {
    digits_of::<A>(value).into_iter().map(A::symbol).collect()
}

/// Decode a numeral string back to an integer.
///
/// Surrounding whitespace is ignored. Leading zero symbols are accepted.
pub fn decode<A: Alphabet>(s: &str) -> Result<i64, ParseError> {
    let s = s.trim();
    let mut offsets = Vec::with_capacity(s.len());

    for (position, c) in s.chars().enumerate() {
        match A::offset_of(c) {
            Some(offset) => offsets.push(offset),
            None => {
                debug!(alphabet = A::NAME, symbol = %c, position, "rejected numeral symbol");
                return Err(ParseError::InvalidSymbol {
                    symbol: c,
                    position,
                    alphabet: A::NAME,
                    expected: A::SYMBOLS,
                });
            }
        }
    }

    value_of::<A>(&offsets)
}

/// Symbol offsets of the canonical representation, most significant first.
fn digits_of<A: Alphabet>(value: i64) -> Vec<u8> {
    // i128 so that `v - r` cannot overflow at i64::MIN
    let base = A::BASE as i128;
    let min = A::MIN_DIGIT as i128;
    let mut v = value as i128;
    let mut offsets = Vec::new();

    while v != 0 {
        let r = (v - min).rem_euclid(base) + min;
        offsets.push((r - min) as u8);
        v = (v - r) / -base;
    }

    if offsets.is_empty() {
        offsets.push(A::zero_offset());
    }
    offsets.reverse();
    offsets
}

/// Evaluate symbol offsets, most significant first.
fn value_of<A: Alphabet>(offsets: &[u8]) -> Result<i64, ParseError> {
    if offsets.is_empty() {
        return Err(ParseError::Empty);
    }

    // Partial sums may step just outside i64 before the last digit pulls
    // them back in. Past this bound they only grow, so stop there.
    const LIMIT: i128 = 8 * i64::MAX as i128;
    let radix = -(A::BASE as i128);
    let mut value: i128 = 0;

    for (position, &offset) in offsets.iter().enumerate() {
        if offset >= A::BASE {
            return Err(ParseError::InvalidDigit { digit: offset, position, base: A::BASE });
        }
        value = value * radix + A::value(offset) as i128;
        if value.abs() > LIMIT {
            return Err(ParseError::Overflow);
        }
    }

    i64::try_from(value).map_err(|_| ParseError::Overflow)
}

/// A signed integer tagged with the alphabet it is written in.
///
/// The integer is the semantic value; the digit string is always derived
/// from it, so two numerals compare equal exactly when their values do.
pub struct Numeral<A: Alphabet> {
    value: i64,
    alphabet: PhantomData<A>,
}

impl<A: Alphabet> Numeral<A> {
    /// The numeral `0`.
    pub const ZERO: Self = Self::new(0);

    /// Wrap an integer.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self { value, alphabet: PhantomData }
    }

    /// The integer value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Canonical symbol offsets, most significant first.
    ///
    /// Zero yields a single zero offset; any other value has a non-zero
    /// leading offset.
    pub fn digits(&self) -> Vec<u8> {
        digits_of::<A>(self.value)
    }

    /// Build a numeral from symbol offsets, most significant first.
    pub fn from_digits(offsets: &[u8]) -> Result<Self, ParseError> {
        value_of::<A>(offsets).map(Self::new)
    }

    /// Parse a numeral string.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        decode::<A>(s).map(Self::new)
    }

    /// Number of symbols in the canonical representation.
    pub fn len(&self) -> usize {
        self.digits().len()
    }

    /// Always false: even zero has one symbol.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if this numeral is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<A: Alphabet> Clone for Numeral<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Alphabet> Copy for Numeral<A> {}

impl<A: Alphabet> Default for Numeral<A> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<A: Alphabet> PartialEq for Numeral<A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<A: Alphabet> Eq for Numeral<A> {}

impl<A: Alphabet> PartialOrd for Numeral<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Alphabet> Ord for Numeral<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<A: Alphabet> Hash for Numeral<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<A: Alphabet> fmt::Debug for Numeral<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Numeral<{}>(\"{}\" = {})", A::NAME, self, self.value)
    }
}

impl<A: Alphabet> fmt::Display for Numeral<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offset in self.digits() {
            write!(f, "{}", A::symbol(offset))?;
        }
        Ok(())
    }
}

impl<A: Alphabet> FromStr for Numeral<A> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<A: Alphabet> From<i64> for Numeral<A> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<A: Alphabet> From<Numeral<A>> for i64 {
    fn from(numeral: Numeral<A>) -> Self {
        numeral.value
    }
}

impl<A: Alphabet> Serialize for Numeral<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, A: Alphabet> Deserialize<'de> for Numeral<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when reading a numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no symbols.
    #[error("empty numeral")]
    Empty,

    /// A character outside the alphabet was encountered.
    #[error("invalid {alphabet} symbol '{symbol}' at position {position} (expected one of \"{expected}\")")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        alphabet: &'static str,
        expected: &'static str,
    },

    /// A raw digit offset was not below the base.
    #[error("digit offset {digit} at position {position} is out of range for base {base}")]
    InvalidDigit { digit: u8, position: usize, base: u8 },

    /// The value does not fit in an `i64`.
    #[error("numeral does not fit in a 64-bit signed integer")]
    Overflow,
}

// ============================================================================
// Tests
// ============================================================================
