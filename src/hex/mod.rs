//! Flowsnake: the hexagonal tiling and its Gosper-like curve.
//!
//! Seven hexes form a unit (the centre plus its six neighbours); seven
//! units, twisted, form the next level, and so on. The positional index
//! is the spiral honeycomb mosaic labelling of this nesting, and the curve
//! index counts cells along the flowsnake in base -7 with the digits
//! `=-01234`.
//!
//! ```
//! use snakes::hex::{self, HexCoord};
//!
//! let cell = HexCoord::new(1, 0);
//! let curve = hex::coord_to_curve(cell).unwrap();
//! assert_eq!(curve.to_string(), "1");
//! assert_eq!(hex::curve_to_coord(curve).unwrap(), cell);
//! ```

mod coord;
mod geometry;

pub use coord::HexCoord;
pub use geometry::{hex_boundary, hex_center};

use crate::lattice::{self, LatticeError, PositionalIndex, Tiling};
use crate::radix::{self, Numeral, ParseError, Septenary};

/// Curve index of a hex cell.
pub type FlowIndex = Numeral<Septenary>;

/// Marker type carrying the flowsnake tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flowsnake;

impl Tiling for Flowsnake {
    type Coord = HexCoord;
    type Alphabet = Septenary;

    const NAME: &'static str = "hex";
    const BASE: u8 = 7;
    const ROTATIONS: u8 = 6;
    const DRIFT: u8 = 1;

    const UNIT_DIRS: &'static [HexCoord] = &HexCoord::UNIT_DIRS;
    // residue of q - 2r (mod 7) -> direction
    const PROJ_TO_DIR: &'static [u8] = &[0, 1, 5, 6, 3, 2, 4];
    // the 7-hex path visits directions in this order; self-inverse
    const POS_TO_DIR: &'static [u8] = &[2, 3, 0, 1, 6, 5, 4];
    const DIR_TO_POS: &'static [u8] = &[2, 3, 0, 1, 6, 5, 4];
    // clockwise rotation of the sub-unit at each position
    const POS_TO_ROT: &'static [u8] = &[0, 4, 0, 2, 0, 0, 2];
    // sub-units traversed backwards
    const POS_TO_SGN: &'static [i8] = &[-1, 1, 1, -1, -1, -1, 1];

    fn residue(coord: HexCoord) -> u8 {
        (coord.q as i128 - 2 * coord.r as i128).rem_euclid(7) as u8
    }

    fn twist(coord: HexCoord) -> HexCoord {
        coord.twist()
    }

    fn untwist(coord: HexCoord) -> Result<HexCoord, LatticeError> {
        coord.untwist()
    }
}

const _: () = assert!(Flowsnake::BASE == <Septenary as radix::Alphabet>::BASE);

/// Positional index of a hex.
pub fn coord_to_index(coord: HexCoord) -> Result<PositionalIndex, LatticeError> {
    lattice::coord_to_index::<Flowsnake>(coord)
}

/// Hex at a positional index.
pub fn index_to_coord(index: PositionalIndex) -> HexCoord {
    lattice::index_to_coord::<Flowsnake>(index)
}

/// Curve index of a positional index.
pub fn index_to_curve(index: PositionalIndex) -> crate::Result<FlowIndex> {
    lattice::index_to_curve::<Flowsnake>(index)
}

/// Positional index of a curve index.
pub fn curve_to_index(curve: FlowIndex) -> crate::Result<PositionalIndex> {
    lattice::curve_to_index::<Flowsnake>(curve)
}

/// Curve index of a hex.
pub fn coord_to_curve(coord: HexCoord) -> crate::Result<FlowIndex> {
    lattice::coord_to_curve::<Flowsnake>(coord)
}

/// Hex at a curve index.
pub fn curve_to_coord(curve: FlowIndex) -> crate::Result<HexCoord> {
    lattice::curve_to_coord::<Flowsnake>(curve)
}

/// Positional digits to curve symbol offsets, most significant first.
pub fn positional_to_curve(digits: &[u8]) -> Result<Vec<u8>, LatticeError> {
    lattice::positional_to_curve::<Flowsnake>(digits)
}

/// Curve symbol offsets to positional digits, most significant first.
pub fn curve_to_positional(symbols: &[u8]) -> Result<Vec<u8>, LatticeError> {
    lattice::curve_to_positional::<Flowsnake>(symbols)
}

/// Encode an integer with the `=-01234` digits.
pub fn encode(value: i64) -> String {
    radix::encode::<Septenary>(value)
}

/// Decode a `=-01234` numeral.
pub fn decode(s: &str) -> Result<i64, ParseError> {
    radix::decode::<Septenary>(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Orientation;
    use crate::Error;
    use proptest::prelude::*;

    fn curve(s: &str) -> FlowIndex {
        s.parse().unwrap()
    }

    #[test]
    fn origin_maps_to_zero_everywhere() {
        assert_eq!(coord_to_index(HexCoord::ORIGIN), Ok(PositionalIndex::ORIGIN));
        assert_eq!(index_to_coord(PositionalIndex::ORIGIN), HexCoord::ORIGIN);
        assert_eq!(index_to_curve(PositionalIndex::ORIGIN).unwrap().to_string(), "0");
        assert_eq!(curve_to_coord(FlowIndex::ZERO), Ok(HexCoord::ORIGIN));
    }

    #[test]
    fn first_unit_direction() {
        let index = coord_to_index(HexCoord::new(1, 0)).unwrap();
        assert_eq!(index, PositionalIndex(1));
        // digit 1 enters curve position 3, symbol '1'
        assert_eq!(positional_to_curve(&[1]), Ok(vec![3]));
        assert_eq!(index_to_curve(index).unwrap().to_string(), "1");
    }

    #[test]
    fn unit_directions_are_their_own_digits() {
        for (d, dir) in HexCoord::UNIT_DIRS.iter().enumerate() {
            assert_eq!(coord_to_index(*dir), Ok(PositionalIndex(d as u64)));
        }
    }

    #[test]
    fn known_cells() {
        // (q, r), positional, curve
        let cases = [
            ((0, 1), 2, "="),
            ((-1, 0), 4, "4"),
            ((3, -2), 7, "22"),
            ((2, 3), 188, "144"),
            ((-5, 7), 201, "=2-"),
        ];
        for ((q, r), index, symbols) in cases {
            let coord = HexCoord::new(q, r);
            assert_eq!(coord_to_index(coord), Ok(PositionalIndex(index)), "{}", coord);
            assert_eq!(coord_to_curve(coord).unwrap().to_string(), symbols, "{}", coord);
            assert_eq!(curve_to_coord(curve(symbols)), Ok(coord));
        }
    }

    #[test]
    fn twisted_cell_keeps_trailing_zero() {
        // twist(1, 0) is the centre of the unit at direction 1, one level up
        let coord = HexCoord::new(1, 0).twist();
        let index = coord_to_index(coord).unwrap();
        assert_eq!(index.digits(7), vec![1, 0]);
        assert_eq!(index_to_coord(index), coord);
    }

    #[test]
    fn curve_neighbourhood_of_origin() {
        let expected = [
            (-3, (1, 1)),
            (-2, (0, 1)),
            (-1, (-1, 1)),
            (0, (0, 0)),
            (1, (1, 0)),
            (2, (1, -1)),
            (3, (0, -1)),
            (4, (-1, 0)),
            (5, (-2, 1)),
        ];
        for (value, (q, r)) in expected {
            assert_eq!(curve_to_coord(FlowIndex::new(value)), Ok(HexCoord::new(q, r)), "curve {}", value);
        }
    }

    #[test]
    fn curve_is_continuous() {
        let mut prev = curve_to_coord(FlowIndex::new(-3000)).unwrap();
        for value in -2999..=3000 {
            let next = curve_to_coord(FlowIndex::new(value)).unwrap();
            assert!(prev.is_adjacent(&next), "curve {} -> {}: {} to {}", value - 1, value, prev, next);
            prev = next;
        }
    }

    #[test]
    fn coordinate_roundtrip_in_block() {
        for q in -40..=40 {
            for r in -40..=40 {
                let coord = HexCoord::new(q, r);
                let index = coord_to_index(coord).unwrap();
                assert_eq!(index_to_coord(index), coord);
            }
        }
    }

    #[test]
    fn initial_orientation_depends_on_length() {
        assert_eq!(Orientation::initial::<Flowsnake>(1).rotation(), 0);
        assert_eq!(Orientation::initial::<Flowsnake>(3).rotation(), 2);
        assert_eq!(Orientation::initial::<Flowsnake>(8).rotation(), 1);
        assert_eq!(Orientation::initial::<Flowsnake>(5).sign(), 1);
    }

    #[test]
    fn leading_zero_digit_is_transparent() {
        let digits = [4, 0, 5];
        let padded = [0, 4, 0, 5];
        let curve = positional_to_curve(&digits).unwrap();
        let padded_curve = positional_to_curve(&padded).unwrap();
        assert_eq!(padded_curve[0], 2);
        assert_eq!(&padded_curve[1..], &curve[..]);
    }

    #[test]
    fn transducer_rejects_bad_digits() {
        assert_eq!(
            positional_to_curve(&[1, 9]),
            Err(LatticeError::InvalidDigit { digit: 9, position: 1, base: 7 })
        );
        assert!(curve_to_positional(&[7]).is_err());
    }

    #[test]
    fn malformed_curve_string() {
        assert!(matches!(decode("9"), Err(ParseError::InvalidSymbol { symbol: '9', .. })));
        assert!("1+2".parse::<FlowIndex>().is_err());
    }

    #[test]
    fn huge_coordinates_report_overflow() {
        let far = HexCoord::new(i64::MAX, 0);
        assert_eq!(coord_to_index(far), Err(LatticeError::Overflow));
        assert!(matches!(coord_to_curve(far), Err(Error::Lattice(LatticeError::Overflow))));
    }

    #[test]
    fn indices_beyond_i64_curve_range() {
        let err = index_to_curve(PositionalIndex(14_340_441_678_911_941_061)).unwrap_err();
        assert_eq!(err, Error::Lattice(LatticeError::Overflow));
        let err = curve_to_index(FlowIndex::new(i64::MIN)).unwrap_err();
        assert_eq!(err, Error::Lattice(LatticeError::Overflow));
    }

    #[test]
    fn largest_index_converts() {
        let index = PositionalIndex(u64::MAX);
        let coord = index_to_coord(index);
        assert_eq!(coord_to_index(coord), Ok(index));
    }

    proptest! {
        #[test]
        fn prop_coordinate_roundtrip(q in -1_000_000i64..1_000_000, r in -1_000_000i64..1_000_000) {
            let coord = HexCoord::new(q, r);
            let index = coord_to_index(coord).unwrap();
            prop_assert_eq!(index_to_coord(index), coord);
        }

        #[test]
        fn prop_index_roundtrip(n in 0u64..u64::MAX) {
            let index = PositionalIndex(n);
            prop_assert_eq!(coord_to_index(index_to_coord(index)), Ok(index));
        }

        #[test]
        fn prop_transducer_roundtrip(digits in proptest::collection::vec(0u8..7, 1..16)) {
            let curve = positional_to_curve(&digits).unwrap();
            prop_assert_eq!(curve.len(), digits.len());
            prop_assert_eq!(curve_to_positional(&curve).unwrap(), digits);
        }

        #[test]
        fn prop_curve_roundtrip(value in -1_000_000_000_000i64..1_000_000_000_000) {
            let curve = FlowIndex::new(value);
            let coord = curve_to_coord(curve).unwrap();
            prop_assert_eq!(coord_to_curve(coord).unwrap(), curve);
        }
    }
}
