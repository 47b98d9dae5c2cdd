//! Balanced negative-radix numeral system.
//!
//! This module provides the codec used for curve indices:
//! - [`Alphabet`] - a fixed set of digit symbols and their values
//! - [`Numeral`] - a signed integer tagged with its alphabet, displayed
//!   as its canonical digit string
//! - [`encode`] / [`decode`] - the raw string codec

mod alphabet;
mod numeral;

pub use alphabet::{Alphabet, Quinary, Septenary};
pub use numeral::{decode, encode, Numeral, ParseError};
