//! # Lattice Snakes
//!
//! Cell indexing along two space-filling snake curves:
//!
//! - the **flowsnake** on the hexagonal lattice (base 7)
//! - the **mandelsnake** on the square lattice (base 5)
//!
//! Every cell has three interchangeable names: its lattice coordinate, its
//! positional index (which unit, sub-unit, ... it sits in) and its curve
//! index (how far along the snake it lies, written as a balanced
//! negative-radix numeral). Consecutive curve indices are always
//! neighbouring cells.

pub mod radix;
pub mod lattice;
pub mod hex;
pub mod square;
pub mod report;
mod error;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use error::{Error, Result};
pub use radix::{Alphabet, Numeral, ParseError, Quinary, Septenary};
pub use lattice::{Cell, LatticeError, Orientation, Point, PositionalIndex, Tiling};
pub use hex::{FlowIndex, Flowsnake, HexCoord};
pub use square::{MandelIndex, Mandelsnake, SquareCoord};
pub use report::{CellReport, TilingKind};

#[cfg(feature = "tui")]
pub use tui::run_explorer;
