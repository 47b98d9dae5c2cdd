//! Tiling-independent indexing machinery.
//!
//! Both tilings index their cells the same way, so the algorithms live
//! here once, generic over a [`Tiling`]:
//! - [`PositionalIndex`] - base-B nesting index of a cell
//! - [`coord_to_index`] / [`index_to_coord`] - positional codec built on
//!   the tiling's twist/untwist
//! - [`curve`] - the orientation-tracking transducer between positional
//!   digits and curve digits
//!
//! A tiling supplies its coordinate type, its numeral alphabet, the ring
//! transform and a handful of small constant tables.

mod index;
mod mosaic;
pub mod curve;

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::radix::{Alphabet, Numeral};

pub use curve::{curve_to_index, curve_to_positional, index_to_curve, positional_to_curve, Orientation};
pub use index::PositionalIndex;
pub use mosaic::{coord_to_index, index_to_coord};

/// A lattice cell identified by two integer axes.
pub trait Cell: Copy + Debug + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// The root cell.
    const ORIGIN: Self;

    /// Build a cell from its two stored axes.
    fn from_axes(a: i64, b: i64) -> Self;

    /// The two stored axes.
    fn axes(self) -> (i64, i64);

    /// Component-wise subtraction, `None` on overflow.
    fn checked_sub(self, other: Self) -> Option<Self> {
        let (a, b) = self.axes();
        let (oa, ob) = other.axes();
        Some(Self::from_axes(a.checked_sub(oa)?, b.checked_sub(ob)?))
    }
}

/// A self-similar tiling traversed by a snake curve.
///
/// The tables are indexed as follows: a *direction* is an index into
/// `UNIT_DIRS` (0 is the centre cell), a *position* is the order in which
/// the curve visits the B cells of a unit.
pub trait Tiling: Copy + Debug + Default + Send + Sync + 'static {
    /// Cell coordinate type.
    type Coord: Cell + Add<Output = Self::Coord>;
    /// Alphabet of the curve index numeral.
    type Alphabet: Alphabet;

    /// Name used in logs and reports.
    const NAME: &'static str;
    /// Cells per unit; base of the positional index and of the numeral.
    const BASE: u8;
    /// Rotation modulus of the orientation state.
    const ROTATIONS: u8;
    /// Rotation lost per digit of depth.
    const DRIFT: u8;

    /// Offsets of the B cells of a unit, centre first.
    const UNIT_DIRS: &'static [Self::Coord];
    /// Direction selected by each residue of [`Tiling::residue`].
    const PROJ_TO_DIR: &'static [u8];
    /// Direction visited at each curve position.
    const POS_TO_DIR: &'static [u8];
    /// Curve position of each direction.
    const DIR_TO_POS: &'static [u8];
    /// Rotation picked up when entering each curve position.
    const POS_TO_ROT: &'static [u8];
    /// Traversal sense of each curve position.
    const POS_TO_SGN: &'static [i8];

    /// Residue (0..BASE) of the projection that identifies a cell's
    /// offset within its unit.
    fn residue(coord: Self::Coord) -> u8;

    /// Multiply by the twist unit. Callers keep the input within range.
    fn twist(coord: Self::Coord) -> Self::Coord;

    /// Divide by the twist unit, failing if the result is not a lattice
    /// point.
    fn untwist(coord: Self::Coord) -> Result<Self::Coord, LatticeError>;
}

/// Encode a coordinate straight to its curve index.
pub fn coord_to_curve<T: Tiling>(coord: T::Coord) -> crate::Result<Numeral<T::Alphabet>> {
    let index = coord_to_index::<T>(coord)?;
    index_to_curve::<T>(index)
}

/// Decode a curve index straight to its coordinate.
pub fn curve_to_coord<T: Tiling>(curve: Numeral<T::Alphabet>) -> crate::Result<T::Coord> {
    let index = curve_to_index::<T>(curve)?;
    Ok(index_to_coord::<T>(index))
}

// ============================================================================
// Geometry
// ============================================================================

/// A point in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `scale`.
    #[inline]
    pub fn scaled(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while moving between coordinates and indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// A cube coordinate whose components do not sum to zero.
    #[error("cube coordinate ({q}, {r}, {s}) is off the lattice: q + r + s must be 0")]
    OffLattice { q: i64, r: i64, s: i64 },

    /// Untwist produced a fractional coordinate.
    #[error("{tiling} coordinate ({a}, {b}) is not divisible by the twist unit")]
    NotDivisible { tiling: &'static str, a: i64, b: i64 },

    /// A result left the supported 64-bit range.
    #[error("index arithmetic overflowed the 64-bit range")]
    Overflow,

    /// The coordinate did not reduce to the origin.
    #[error("{tiling} coordinate did not reduce to the origin within {steps} steps")]
    NoConvergence { tiling: &'static str, steps: u32 },

    /// A raw digit was not below the base.
    #[error("digit {digit} at position {position} is out of range for base {base}")]
    InvalidDigit { digit: u8, position: usize, base: u8 },
}
