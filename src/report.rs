//! Tiling selection and per-cell reports for the CLI, explorer and WASM
//! front ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hex::{self, Flowsnake};
use crate::lattice::{self, Cell, PositionalIndex, Point, Tiling};
use crate::radix::Numeral;
use crate::square::{self, Mandelsnake};

/// Which tiling a front end is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TilingKind {
    /// Hexagonal flowsnake
    #[default]
    Hex,
    /// Square mandelsnake
    Square,
}

impl TilingKind {
    /// Both tilings.
    pub const ALL: [TilingKind; 2] = [TilingKind::Hex, TilingKind::Square];

    /// Short name.
    pub const fn name(self) -> &'static str {
        match self {
            TilingKind::Hex => Flowsnake::NAME,
            TilingKind::Square => Mandelsnake::NAME,
        }
    }

    /// Base of the positional and curve indices.
    pub const fn base(self) -> u8 {
        match self {
            TilingKind::Hex => Flowsnake::BASE,
            TilingKind::Square => Mandelsnake::BASE,
        }
    }

    /// The other tiling.
    pub const fn toggled(self) -> Self {
        match self {
            TilingKind::Hex => TilingKind::Square,
            TilingKind::Square => TilingKind::Hex,
        }
    }

    /// Report for the cell at the given axes.
    pub fn locate(self, a: i64, b: i64) -> crate::Result<CellReport> {
        match self {
            TilingKind::Hex => CellReport::from_coord::<Flowsnake>(self, Cell::from_axes(a, b)),
            TilingKind::Square => CellReport::from_coord::<Mandelsnake>(self, Cell::from_axes(a, b)),
        }
    }

    /// Report for the cell at a curve index given as a numeral string.
    pub fn find(self, curve: &str) -> crate::Result<CellReport> {
        match self {
            TilingKind::Hex => CellReport::from_curve::<Flowsnake>(self, curve.parse()?),
            TilingKind::Square => CellReport::from_curve::<Mandelsnake>(self, curve.parse()?),
        }
    }

    /// Report for the cell at a curve index given as an integer.
    pub fn find_value(self, value: i64) -> crate::Result<CellReport> {
        match self {
            TilingKind::Hex => CellReport::from_curve::<Flowsnake>(self, Numeral::new(value)),
            TilingKind::Square => CellReport::from_curve::<Mandelsnake>(self, Numeral::new(value)),
        }
    }

    /// Report for the cell at a positional index.
    pub fn cell(self, index: u64) -> crate::Result<CellReport> {
        let index = PositionalIndex(index);
        match self {
            TilingKind::Hex => CellReport::from_index::<Flowsnake>(self, index),
            TilingKind::Square => CellReport::from_index::<Mandelsnake>(self, index),
        }
    }

    /// Drawing polygon of the cell at the given axes.
    pub fn boundary(self, a: i64, b: i64, scale: f64) -> Vec<Point> {
        match self {
            TilingKind::Hex => hex::hex_boundary(hex::HexCoord::new(a, b), scale).to_vec(),
            TilingKind::Square => square::square_boundary(square::SquareCoord::new(a, b), scale).to_vec(),
        }
    }
}

impl fmt::Display for TilingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TilingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "flowsnake" => Ok(TilingKind::Hex),
            "square" | "mandelsnake" => Ok(TilingKind::Square),
            other => Err(format!("unknown tiling '{}' (expected hex or square)", other)),
        }
    }
}

/// All three representations of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellReport {
    /// Tiling the cell belongs to.
    pub tiling: TilingKind,
    /// Stored axes: (q, r) for hex, (x, y) for square.
    pub coord: [i64; 2],
    /// Positional index.
    pub positional: u64,
    /// Positional index written in the tiling's base.
    pub positional_digits: String,
    /// Curve index as a balanced numeral.
    pub curve: String,
    /// Curve index as an integer.
    pub curve_value: i64,
}

impl CellReport {
    fn build<T: Tiling>(
        tiling: TilingKind,
        coord: T::Coord,
        index: PositionalIndex,
        curve: Numeral<T::Alphabet>,
    ) -> Self {
        let (a, b) = coord.axes();
        Self {
            tiling,
            coord: [a, b],
            positional: index.value(),
            positional_digits: index.to_radix_string(T::BASE),
            curve: curve.to_string(),
            curve_value: curve.value(),
        }
    }

    fn from_coord<T: Tiling>(tiling: TilingKind, coord: T::Coord) -> crate::Result<Self> {
        let index = lattice::coord_to_index::<T>(coord)?;
        let curve = lattice::index_to_curve::<T>(index)?;
        Ok(Self::build::<T>(tiling, coord, index, curve))
    }

    fn from_curve<T: Tiling>(tiling: TilingKind, curve: Numeral<T::Alphabet>) -> crate::Result<Self> {
        let index = lattice::curve_to_index::<T>(curve)?;
        let coord = lattice::index_to_coord::<T>(index);
        Ok(Self::build::<T>(tiling, coord, index, curve))
    }

    fn from_index<T: Tiling>(tiling: TilingKind, index: PositionalIndex) -> crate::Result<Self> {
        let coord = lattice::index_to_coord::<T>(index);
        let curve = lattice::index_to_curve::<T>(index)?;
        Ok(Self::build::<T>(tiling, coord, index, curve))
    }
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes = match self.tiling {
            TilingKind::Hex => "q, r",
            TilingKind::Square => "x, y",
        };
        writeln!(f, "tiling:     {}", self.tiling)?;
        writeln!(f, "coordinate: ({}) = ({}, {})", axes, self.coord[0], self.coord[1])?;
        writeln!(
            f,
            "positional: {} (base {}: {})",
            self.positional,
            self.tiling.base(),
            self.positional_digits
        )?;
        write!(f, "curve:      {} = {}", self.curve, self.curve_value)
    }
}
