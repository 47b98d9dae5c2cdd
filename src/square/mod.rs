//! Mandelsnake: the square tiling and its snake curve.
//!
//! Five squares form a unit (a plus sign); five twisted units form the
//! next level. The curve index counts cells along the mandelsnake in base
//! -5 with the digits `-0123`. Consecutive curve cells touch at an edge
//! or a corner.
//!
//! The square curve keeps its frame from one level to the next (no
//! rotation drift), unlike the flowsnake.

mod coord;
mod geometry;

pub use coord::SquareCoord;
pub use geometry::{square_boundary, square_center};

use crate::lattice::{self, LatticeError, PositionalIndex, Tiling};
use crate::radix::{self, Numeral, ParseError, Quinary};

/// Curve index of a square cell.
pub type MandelIndex = Numeral<Quinary>;

/// Marker type carrying the mandelsnake tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mandelsnake;

impl Tiling for Mandelsnake {
    type Coord = SquareCoord;
    type Alphabet = Quinary;

    const NAME: &'static str = "square";
    const BASE: u8 = 5;
    const ROTATIONS: u8 = 4;
    const DRIFT: u8 = 0;

    const UNIT_DIRS: &'static [SquareCoord] = &SquareCoord::UNIT_DIRS;
    // residue of 2x + y (mod 5) -> direction
    const PROJ_TO_DIR: &'static [u8] = &[0, 2, 1, 3, 4];
    const POS_TO_DIR: &'static [u8] = &[1, 0, 2, 3, 4];
    const DIR_TO_POS: &'static [u8] = &[1, 0, 2, 3, 4];
    const POS_TO_ROT: &'static [u8] = &[3, 0, 3, 0, 2];
    const POS_TO_SGN: &'static [i8] = &[-1, 1, -1, -1, 1];

    fn residue(coord: SquareCoord) -> u8 {
        (2 * coord.x as i128 + coord.y as i128).rem_euclid(5) as u8
    }

    fn twist(coord: SquareCoord) -> SquareCoord {
        coord.twist()
    }

    fn untwist(coord: SquareCoord) -> Result<SquareCoord, LatticeError> {
        coord.untwist()
    }
}

const _: () = assert!(Mandelsnake::BASE == <Quinary as radix::Alphabet>::BASE);

/// Positional index of a square.
pub fn coord_to_index(coord: SquareCoord) -> Result<PositionalIndex, LatticeError> {
    lattice::coord_to_index::<Mandelsnake>(coord)
}

/// Square at a positional index.
pub fn index_to_coord(index: PositionalIndex) -> SquareCoord {
    lattice::index_to_coord::<Mandelsnake>(index)
}

/// Curve index of a positional index.
pub fn index_to_curve(index: PositionalIndex) -> crate::Result<MandelIndex> {
    lattice::index_to_curve::<Mandelsnake>(index)
}

/// Positional index of a curve index.
pub fn curve_to_index(curve: MandelIndex) -> crate::Result<PositionalIndex> {
    lattice::curve_to_index::<Mandelsnake>(curve)
}

/// Curve index of a square.
pub fn coord_to_curve(coord: SquareCoord) -> crate::Result<MandelIndex> {
    lattice::coord_to_curve::<Mandelsnake>(coord)
}

/// Square at a curve index.
pub fn curve_to_coord(curve: MandelIndex) -> crate::Result<SquareCoord> {
    lattice::curve_to_coord::<Mandelsnake>(curve)
}

/// Positional digits to curve symbol offsets, most significant first.
pub fn positional_to_curve(digits: &[u8]) -> Result<Vec<u8>, LatticeError> {
    lattice::positional_to_curve::<Mandelsnake>(digits)
}

/// Curve symbol offsets to positional digits, most significant first.
pub fn curve_to_positional(symbols: &[u8]) -> Result<Vec<u8>, LatticeError> {
    lattice::curve_to_positional::<Mandelsnake>(symbols)
}

/// Encode an integer with the `-0123` digits.
pub fn encode(value: i64) -> String {
    radix::encode::<Quinary>(value)
}

/// Decode a `-0123` numeral.
pub fn decode(s: &str) -> Result<i64, ParseError> {
    radix::decode::<Quinary>(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Orientation;
    use proptest::prelude::*;

    #[test]
    fn origin_maps_to_zero_everywhere() {
        assert_eq!(coord_to_index(SquareCoord::ORIGIN), Ok(PositionalIndex::ORIGIN));
        assert_eq!(index_to_curve(PositionalIndex::ORIGIN).unwrap().to_string(), "0");
        assert_eq!(curve_to_coord(MandelIndex::ZERO), Ok(SquareCoord::ORIGIN));
    }

    #[test]
    fn first_unit_direction() {
        let index = coord_to_index(SquareCoord::new(1, 0)).unwrap();
        assert_eq!(index, PositionalIndex(1));
        assert_eq!(index_to_coord(index), SquareCoord::UNIT_DIRS[1]);
        assert_eq!(index_to_curve(index).unwrap().to_string(), "-");
    }

    #[test]
    fn known_cells() {
        // (x, y), positional, curve
        let cases = [
            ((0, 1), 2, "1"),
            ((-1, 0), 3, "2"),
            ((0, -1), 4, "3"),
            ((1, 1), 13, "1-"),
            ((1, -2), 5, "-2"),
            ((3, -2), 69, "1-0"),
            ((-5, 7), 211, "--3-"),
        ];
        for ((x, y), index, symbols) in cases {
            let coord = SquareCoord::new(x, y);
            assert_eq!(coord_to_index(coord), Ok(PositionalIndex(index)), "{}", coord);
            let curve = coord_to_curve(coord).unwrap();
            assert_eq!(curve.to_string(), symbols, "{}", coord);
            assert_eq!(curve_to_coord(curve), Ok(coord));
        }
    }

    #[test]
    fn curve_neighbourhood_of_origin() {
        let expected = [
            (-3, (2, 1)),
            (-2, (2, 0)),
            (-1, (1, 0)),
            (0, (0, 0)),
            (1, (0, 1)),
            (2, (-1, 0)),
            (3, (0, -1)),
            (4, (0, -2)),
        ];
        for (value, (x, y)) in expected {
            assert_eq!(curve_to_coord(MandelIndex::new(value)), Ok(SquareCoord::new(x, y)), "curve {}", value);
        }
    }

    #[test]
    fn curve_steps_are_king_moves() {
        let mut prev = curve_to_coord(MandelIndex::new(-3000)).unwrap();
        for value in -2999..=3000 {
            let next = curve_to_coord(MandelIndex::new(value)).unwrap();
            assert!(prev.is_king_adjacent(&next), "curve {} -> {}: {} to {}", value - 1, value, prev, next);
            prev = next;
        }
    }

    #[test]
    fn orientation_has_no_drift() {
        for len in 1..10 {
            let o = Orientation::initial::<Mandelsnake>(len);
            assert_eq!((o.rotation(), o.sign()), (0, 1));
        }
    }

    #[test]
    fn leading_zero_digit_is_transparent() {
        let curve = positional_to_curve(&[1, 3, 2, 1]).unwrap();
        let padded = positional_to_curve(&[0, 1, 3, 2, 1]).unwrap();
        assert_eq!(padded[0], 1);
        assert_eq!(&padded[1..], &curve[..]);
    }

    #[test]
    fn malformed_curve_string() {
        assert!(matches!(decode("4"), Err(ParseError::InvalidSymbol { symbol: '4', .. })));
        assert!(matches!(decode("1=2"), Err(ParseError::InvalidSymbol { symbol: '=', position: 1, .. })));
    }

    #[test]
    fn coordinate_roundtrip_in_block() {
        for x in -40..=40 {
            for y in -40..=40 {
                let coord = SquareCoord::new(x, y);
                assert_eq!(index_to_coord(coord_to_index(coord).unwrap()), coord);
            }
        }
    }

    #[test]
    fn huge_coordinates_report_overflow() {
        assert_eq!(coord_to_index(SquareCoord::new(i64::MIN, i64::MAX)), Err(LatticeError::Overflow));
    }

    #[test]
    fn indices_beyond_i64_curve_range() {
        let err = index_to_curve(PositionalIndex(14_136_303_640_247_592_237)).unwrap_err();
        assert_eq!(err, crate::Error::Lattice(LatticeError::Overflow));
        assert!(index_to_curve(PositionalIndex(u64::MAX)).is_ok());

        let err = curve_to_index(MandelIndex::new(i64::MIN)).unwrap_err();
        assert_eq!(err, crate::Error::Lattice(LatticeError::Overflow));
        assert!(curve_to_index(MandelIndex::new(i64::MAX)).is_ok());
    }

    proptest! {
        #[test]
        fn prop_coordinate_roundtrip(x in -1_000_000i64..1_000_000, y in -1_000_000i64..1_000_000) {
            let coord = SquareCoord::new(x, y);
            let index = coord_to_index(coord).unwrap();
            prop_assert_eq!(index_to_coord(index), coord);
        }

        #[test]
        fn prop_transducer_roundtrip(digits in proptest::collection::vec(0u8..5, 1..20)) {
            let curve = positional_to_curve(&digits).unwrap();
            prop_assert_eq!(curve_to_positional(&curve).unwrap(), digits);
        }

        #[test]
        fn prop_curve_roundtrip(value in -1_000_000_000_000i64..1_000_000_000_000) {
            let curve = MandelIndex::new(value);
            let coord = curve_to_coord(curve).unwrap();
            prop_assert_eq!(coord_to_curve(coord).unwrap(), curve);
        }
    }
}
