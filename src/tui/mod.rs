//! TUI explorer for the snake curves.
//!
//! Provides an interactive terminal view with:
//! - A lattice grid labelled with curve indices
//! - The coordinate, positional and curve index of the selected cell
//! - Stepping along the curve and switching tilings

mod app;
mod ui;

pub use app::{CellRole, ExplorerApp, GridCell, run_explorer};
