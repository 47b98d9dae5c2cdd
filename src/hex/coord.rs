//! Axial hexagonal coordinates and their ring transform.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. Viewed as Eisenstein integers, the cells form a
//! ring; `twist` multiplies by a unit of norm 7 (a rotation by a little
//! over 19 degrees and a scaling by sqrt(7)) and `untwist` divides by it.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::lattice::{Cell, LatticeError};

/// Twist in cube coordinates: rows give q', r', s'.
const TWIST: [[i128; 3]; 3] = [
    [11, 8, 2],
    [2, 11, 8],
    [8, 2, 11],
];
const TWIST_DIVISOR: i128 = 3;

/// Inverse of [`TWIST`].
const UNTWIST: [[i128; 3]; 3] = [
    [5, -4, 2],
    [2, 5, -4],
    [-4, 2, 5],
];
const UNTWIST_DIVISOR: i128 = 21;

/// A hexagonal cell in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HexCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl HexCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The seven unit offsets of a 7-cell unit, centre first.
    pub const UNIT_DIRS: [Self; 7] = [
        Self { q: 0, r: 0 },
        Self { q: 1, r: 0 },
        Self { q: 0, r: 1 },
        Self { q: -1, r: 1 },
        Self { q: -1, r: 0 },
        Self { q: 0, r: -1 },
        Self { q: 1, r: -1 },
    ];

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Create from cube coordinates, which must sum to zero.
    pub fn from_cube(q: i64, r: i64, s: i64) -> Result<Self, LatticeError> {
        if q as i128 + r as i128 + s as i128 != 0 {
            return Err(LatticeError::OffLattice { q, r, s });
        }
        Ok(Self { q, r })
    }

    /// Compute the implicit third axis: s = -q - r.
    ///
    /// Only meaningful while q + r fits in an `i64`.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Hexagonal distance between two coordinates.
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dq = self.q as i128 - other.q as i128;
        let dr = self.r as i128 - other.r as i128;
        let d = dq.unsigned_abs().max(dr.unsigned_abs()).max((dq + dr).unsigned_abs());
        u64::try_from(d).unwrap_or(u64::MAX)
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.hex_distance(other) == 1
    }

    /// Get all six neighbors, in unit-direction order.
    pub fn neighbors(&self) -> [Self; 6] {
        let mut out = [*self; 6];
        for (n, d) in out.iter_mut().zip(&Self::UNIT_DIRS[1..]) {
            *n = *self + *d;
        }
        out
    }

    /// Multiply by the twist unit: (q, r) -> (3q + 2r, r - 2q).
    ///
    /// # Panics
    /// Overflows (and panics in debug builds) for coordinates beyond
    /// roughly 2^61; see [`HexCoord::checked_twist`].
    #[inline]
    pub fn twist(self) -> Self {
        Self::new(3 * self.q + 2 * self.r, self.r - 2 * self.q)
    }

    /// Multiply by the twist unit, `None` if the result leaves `i64`.
    pub fn checked_twist(self) -> Option<Self> {
        self.transform(&TWIST, TWIST_DIVISOR).ok()
    }

    /// Divide by the twist unit.
    ///
    /// Exact exactly when q - 2r is a multiple of 7; otherwise the cell is
    /// not the image of any lattice point under [`HexCoord::twist`].
    pub fn untwist(self) -> Result<Self, LatticeError> {
        self.transform(&UNTWIST, UNTWIST_DIVISOR)
    }

    fn transform(self, m: &[[i128; 3]; 3], divisor: i128) -> Result<Self, LatticeError> {
        let (q, r) = (self.q as i128, self.r as i128);
        let cube = [q, r, -(q + r)];
        let row = |i: usize| m[i][0] * cube[0] + m[i][1] * cube[1] + m[i][2] * cube[2];
        let (q, r) = (row(0), row(1));

        if q % divisor != 0 || r % divisor != 0 {
            return Err(LatticeError::NotDivisible { tiling: "hex", a: self.q, b: self.r });
        }

        let narrow = |v: i128| i64::try_from(v / divisor).map_err(|_| LatticeError::Overflow);
        Ok(Self::new(narrow(q)?, narrow(r)?))
    }
}

impl Cell for HexCoord {
    const ORIGIN: Self = HexCoord::ORIGIN;

    fn from_axes(a: i64, b: i64) -> Self {
        Self::new(a, b)
    }

    fn axes(self) -> (i64, i64) {
        (self.q, self.r)
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
