//! Integer square coordinates and their ring transform.
//!
//! Viewed as Gaussian integers x + iy, `twist` multiplies by 1 - 2i (norm
//! 5) and `untwist` divides by it.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::lattice::{Cell, LatticeError};

const TWIST: [[i128; 2]; 2] = [
    [1, 2],
    [-2, 1],
];
const TWIST_DIVISOR: i128 = 1;

const UNTWIST: [[i128; 2]; 2] = [
    [1, -2],
    [2, 1],
];
const UNTWIST_DIVISOR: i128 = 5;

/// A square cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SquareCoord {
    pub x: i64,
    pub y: i64,
}

impl SquareCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// The five unit offsets of a 5-cell unit, centre first.
    ///
    /// ```text
    ///      -y
    ///       4
    /// -x  3 0 1  +x
    ///       2
    ///      +y
    /// ```
    pub const UNIT_DIRS: [Self; 5] = [
        Self { x: 0, y: 0 },
        Self { x: 1, y: 0 },
        Self { x: 0, y: 1 },
        Self { x: -1, y: 0 },
        Self { x: 0, y: -1 },
    ];

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs() == 1
    }

    /// True if the two cells share an edge or a corner.
    pub fn is_king_adjacent(&self, other: &Self) -> bool {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy) == 1
    }

    /// Multiply by the twist unit: (x, y) -> (x + 2y, y - 2x).
    ///
    /// # Panics
    /// Overflows (and panics in debug builds) for coordinates beyond
    /// roughly 2^61; see [`SquareCoord::checked_twist`].
    #[inline]
    pub fn twist(self) -> Self {
        Self::new(self.x + 2 * self.y, self.y - 2 * self.x)
    }

    /// Multiply by the twist unit, `None` if the result leaves `i64`.
    pub fn checked_twist(self) -> Option<Self> {
        self.transform(&TWIST, TWIST_DIVISOR).ok()
    }

    /// Divide by the twist unit.
    ///
    /// Exact exactly when 2x + y is a multiple of 5.
    pub fn untwist(self) -> Result<Self, LatticeError> {
        self.transform(&UNTWIST, UNTWIST_DIVISOR)
    }

    fn transform(self, m: &[[i128; 2]; 2], divisor: i128) -> Result<Self, LatticeError> {
        let (x, y) = (self.x as i128, self.y as i128);
        let nx = m[0][0] * x + m[0][1] * y;
        let ny = m[1][0] * x + m[1][1] * y;

        if nx % divisor != 0 || ny % divisor != 0 {
            return Err(LatticeError::NotDivisible { tiling: "square", a: self.x, b: self.y });
        }

        let narrow = |v: i128| i64::try_from(v / divisor).map_err(|_| LatticeError::Overflow);
        Ok(Self::new(narrow(nx)?, narrow(ny)?))
    }
}

impl Cell for SquareCoord {
    const ORIGIN: Self = SquareCoord::ORIGIN;

    fn from_axes(a: i64, b: i64) -> Self {
        Self::new(a, b)
    }

    fn axes(self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl Add for SquareCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for SquareCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for SquareCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for SquareCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
