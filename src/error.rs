//! Crate-level error type.

use thiserror::Error;

use crate::lattice::LatticeError;
use crate::radix::ParseError;

/// Any error a conversion can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A malformed numeral.
    #[error("malformed numeral: {0}")]
    Parse(#[from] ParseError),

    /// An invalid coordinate or an index outside the supported range.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

/// Result alias for conversions.
pub type Result<T> = std::result::Result<T, Error>;
