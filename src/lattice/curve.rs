//! Positional digits <-> curve digits.
//!
//! The curve visits the B cells of every unit in a fixed order, but each
//! unit is entered rotated and possibly reversed relative to the canonical
//! frame of the positional index. An [`Orientation`] tracks that frame
//! while the digits are consumed from the most significant end; the
//! tiling's tables say how entering curve position `pos` changes it for
//! every deeper digit.

use tracing::trace;

use crate::lattice::{LatticeError, PositionalIndex, Tiling};
use crate::radix::{Numeral, ParseError};

/// Rotation and traversal sense of the unit currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    rotation: u8,
    sign: i8,
}

impl Orientation {
    /// Orientation before the first of `len` digits.
    ///
    /// The rotation depends on the length so that a leading zero digit
    /// (which only applies the drift) leaves the result unchanged.
    pub fn initial<T: Tiling>(len: usize) -> Self {
        let depth = len.saturating_sub(1) % T::ROTATIONS as usize;
        let rotation = (depth * T::DRIFT as usize % T::ROTATIONS as usize) as u8;
        Self {
            rotation,
            sign: T::POS_TO_SGN[T::DIR_TO_POS[0] as usize],
        }
    }

    /// Current rotation, in unit-direction steps.
    pub const fn rotation(&self) -> u8 {
        self.rotation
    }

    /// +1 for forward traversal, -1 for reversed.
    pub const fn sign(&self) -> i8 {
        self.sign
    }

    /// Canonical direction seen in this frame for geometric direction `d`.
    fn unrotate<T: Tiling>(&self, d: u8) -> u8 {
        if d == 0 {
            return 0;
        }
        let r = T::ROTATIONS;
        (d - 1 + r - self.rotation) % r + 1
    }

    /// Geometric direction for canonical direction `d` in this frame.
    fn rotate<T: Tiling>(&self, d: u8) -> u8 {
        if d == 0 {
            return 0;
        }
        let r = T::ROTATIONS;
        (d - 1 + self.rotation) % r + 1
    }

    /// Map between curve position and symbol offset. Self-inverse.
    fn mirror<T: Tiling>(&self, pos: u8) -> u8 {
        if self.sign < 0 {
            T::BASE - 1 - pos
        } else {
            pos
        }
    }

    /// Descend into the sub-unit at curve position `pos`.
    fn enter<T: Tiling>(&mut self, pos: u8) {
        let r = T::ROTATIONS;
        self.rotation = (self.rotation + r - T::DRIFT + T::POS_TO_ROT[pos as usize]) % r;
        self.sign *= T::POS_TO_SGN[pos as usize];
    }
}

fn check_digits(digits: &[u8], base: u8) -> Result<(), LatticeError> {
    match digits.iter().position(|&d| d >= base) {
        Some(position) => Err(LatticeError::InvalidDigit { digit: digits[position], position, base }),
        None => Ok(()),
    }
}

/// Translate positional digits into curve symbol offsets.
///
/// Both sequences are most significant first and have the same length.
pub fn positional_to_curve<T: Tiling>(digits: &[u8]) -> Result<Vec<u8>, LatticeError> {
    check_digits(digits, T::BASE)?;

    let mut orientation = Orientation::initial::<T>(digits.len());
    let symbols = digits
        .iter()
        .map(|&d| {
            let pos = T::DIR_TO_POS[orientation.unrotate::<T>(d) as usize];
            let symbol = orientation.mirror::<T>(pos);
            orientation.enter::<T>(pos);
            symbol
        })
        .collect();

    Ok(symbols)
}

/// Translate curve symbol offsets back into positional digits.
pub fn curve_to_positional<T: Tiling>(symbols: &[u8]) -> Result<Vec<u8>, LatticeError> {
    check_digits(symbols, T::BASE)?;

    let mut orientation = Orientation::initial::<T>(symbols.len());
    let digits = symbols
        .iter()
        .map(|&symbol| {
            let pos = orientation.mirror::<T>(symbol);
            let d = orientation.rotate::<T>(T::POS_TO_DIR[pos as usize]);
            orientation.enter::<T>(pos);
            d
        })
        .collect();

    Ok(digits)
}

/// Curve index of a positional index.
pub fn index_to_curve<T: Tiling>(index: PositionalIndex) -> crate::Result<Numeral<T::Alphabet>> {
    let symbols = positional_to_curve::<T>(&index.digits(T::BASE))?;
    let curve = Numeral::from_digits(&symbols).map_err(|e| match e {
        ParseError::Overflow => crate::Error::Lattice(LatticeError::Overflow),
        other => crate::Error::Parse(other),
    })?;
    trace!(tiling = T::NAME, index = index.value(), curve = curve.value(), "index to curve");
    Ok(curve)
}

/// Positional index of a curve index.
pub fn curve_to_index<T: Tiling>(curve: Numeral<T::Alphabet>) -> crate::Result<PositionalIndex> {
    let digits = curve_to_positional::<T>(&curve.digits())?;
    let index = PositionalIndex::from_digits(&digits, T::BASE)?;
    trace!(tiling = T::NAME, curve = curve.value(), index = index.value(), "curve to index");
    Ok(index)
}
