//! Coordinate <-> positional index codec.
//!
//! A coordinate is peeled one digit at a time: the projection residue
//! names the unit offset of the cell inside its unit, removing that offset
//! leaves a multiple of the twist unit, and untwisting scales the
//! remainder down one level. The first digit peeled is the least
//! significant one.

use tracing::{debug, trace};

use crate::lattice::{Cell, LatticeError, PositionalIndex, Tiling};

/// Upper bound on reduction steps. Any `i64` coordinate reduces in far
/// fewer; hitting this means the tiling's tables are inconsistent.
const MAX_STEPS: u32 = 128;

/// Find the positional index of a coordinate.
pub fn coord_to_index<T: Tiling>(coord: T::Coord) -> Result<PositionalIndex, LatticeError> {
    let base = T::BASE as u64;
    let mut p = coord;
    let mut index: u64 = 0;
    // weight of the next digit; None once it no longer fits in u64
    let mut place: Option<u64> = Some(1);
    let mut steps: u32 = 0;

    while p != T::Coord::ORIGIN {
        if steps == MAX_STEPS {
            debug!(tiling = T::NAME, ?coord, "coordinate did not converge");
            return Err(LatticeError::NoConvergence { tiling: T::NAME, steps });
        }

        let d = T::PROJ_TO_DIR[T::residue(p) as usize];
        let rest = p.checked_sub(T::UNIT_DIRS[d as usize]).ok_or(LatticeError::Overflow)?;
        p = T::untwist(rest)?;

        if d != 0 {
            let weight = place
                .and_then(|w| w.checked_mul(d as u64))
                .ok_or(LatticeError::Overflow)?;
            index = index.checked_add(weight).ok_or(LatticeError::Overflow)?;
        }

        place = place.and_then(|w| w.checked_mul(base));
        steps += 1;
    }

    trace!(tiling = T::NAME, ?coord, index, digits = steps, "coordinate indexed");
    Ok(PositionalIndex(index))
}

/// Find the coordinate of a positional index.
///
/// Every `u64` index lands within a few times 10^10 of the origin, so the
/// twists cannot overflow.
pub fn index_to_coord<T: Tiling>(index: PositionalIndex) -> T::Coord {
    index
        .digits(T::BASE)
        .into_iter()
        .fold(T::Coord::ORIGIN, |p, d| T::twist(p) + T::UNIT_DIRS[d as usize])
}
