//! WebAssembly bindings for the snake curves.
//!
//! This module provides JavaScript-friendly wrappers around the core
//! conversions. Coordinates and indices cross the boundary as `BigInt`,
//! curve indices as numeral strings.

use wasm_bindgen::prelude::*;
use crate::{hex, square, FlowIndex, HexCoord, MandelIndex, PositionalIndex, SquareCoord, TilingKind};
use crate::lattice::Point;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&format!("{}", e))
}

fn parse_tiling(tiling: &str) -> Result<TilingKind, JsError> {
    tiling.parse::<TilingKind>().map_err(|e| JsError::new(&e))
}

fn flatten(points: &[Point]) -> js_sys::Float64Array {
    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    js_sys::Float64Array::from(flat.as_slice())
}

// ============================================================================
// Hex
// ============================================================================

/// Curve index numeral of hex (q, r).
#[wasm_bindgen]
pub fn hex_to_curve(q: i64, r: i64) -> Result<String, JsError> {
    hex::coord_to_curve(HexCoord::new(q, r))
        .map(|c| c.to_string())
        .map_err(js_err)
}

/// Hex at a curve index numeral, as `[q, r]`.
#[wasm_bindgen]
pub fn curve_to_hex(curve: &str) -> Result<Vec<i64>, JsError> {
    let curve: FlowIndex = curve.parse().map_err(js_err)?;
    let coord = hex::curve_to_coord(curve).map_err(js_err)?;
    Ok(vec![coord.q, coord.r])
}

/// Positional index of hex (q, r).
#[wasm_bindgen]
pub fn hex_to_index(q: i64, r: i64) -> Result<u64, JsError> {
    hex::coord_to_index(HexCoord::new(q, r))
        .map(|i| i.value())
        .map_err(js_err)
}

/// Hex at a positional index, as `[q, r]`.
#[wasm_bindgen]
pub fn index_to_hex(index: u64) -> Vec<i64> {
    let coord = hex::index_to_coord(PositionalIndex(index));
    vec![coord.q, coord.r]
}

/// Corners of hex (q, r) as `[x0, y0, x1, y1, ...]`.
#[wasm_bindgen]
pub fn hex_boundary(q: i64, r: i64, scale: f64) -> js_sys::Float64Array {
    flatten(&hex::hex_boundary(HexCoord::new(q, r), scale))
}

// ============================================================================
// Square
// ============================================================================

/// Curve index numeral of square (x, y).
#[wasm_bindgen]
pub fn square_to_curve(x: i64, y: i64) -> Result<String, JsError> {
    square::coord_to_curve(SquareCoord::new(x, y))
        .map(|c| c.to_string())
        .map_err(js_err)
}

/// Square at a curve index numeral, as `[x, y]`.
#[wasm_bindgen]
pub fn curve_to_square(curve: &str) -> Result<Vec<i64>, JsError> {
    let curve: MandelIndex = curve.parse().map_err(js_err)?;
    let coord = square::curve_to_coord(curve).map_err(js_err)?;
    Ok(vec![coord.x, coord.y])
}

/// Positional index of square (x, y).
#[wasm_bindgen]
pub fn square_to_index(x: i64, y: i64) -> Result<u64, JsError> {
    square::coord_to_index(SquareCoord::new(x, y))
        .map(|i| i.value())
        .map_err(js_err)
}

/// Square at a positional index, as `[x, y]`.
#[wasm_bindgen]
pub fn index_to_square(index: u64) -> Vec<i64> {
    let coord = square::index_to_coord(PositionalIndex(index));
    vec![coord.x, coord.y]
}

/// Corners of square (x, y) as `[x0, y0, x1, y1, ...]`.
#[wasm_bindgen]
pub fn square_boundary(x: i64, y: i64, scale: f64) -> js_sys::Float64Array {
    flatten(&square::square_boundary(SquareCoord::new(x, y), scale))
}

// ============================================================================
// Reports
// ============================================================================

/// Full report of a cell as JSON, for `tiling` "hex" or "square".
#[wasm_bindgen]
pub fn cell_report_json(tiling: &str, a: i64, b: i64) -> Result<String, JsError> {
    let report = parse_tiling(tiling)?.locate(a, b).map_err(js_err)?;
    serde_json::to_string(&report).map_err(js_err)
}

/// Curve walker for animating the snake from JavaScript.
#[wasm_bindgen]
pub struct WasmWalker {
    tiling: TilingKind,
    value: i64,
}

#[wasm_bindgen]
impl WasmWalker {
    /// Start a walker at curve index 0.
    #[wasm_bindgen(constructor)]
    pub fn new(tiling: &str) -> Result<WasmWalker, JsError> {
        Ok(Self { tiling: parse_tiling(tiling)?, value: 0 })
    }

    /// Advance `delta` steps and return the new cell as `[a, b]`.
    #[wasm_bindgen]
    pub fn step(&mut self, delta: i64) -> Result<Vec<i64>, JsError> {
        let value = self
            .value
            .checked_add(delta)
            .ok_or_else(|| JsError::new("curve index out of range"))?;
        let report = self.tiling.find_value(value).map_err(js_err)?;
        self.value = value;
        Ok(report.coord.to_vec())
    }

    /// Current curve index as an integer.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Current curve index as a numeral.
    #[wasm_bindgen]
    pub fn numeral(&self) -> String {
        match self.tiling {
            TilingKind::Hex => hex::encode(self.value),
            TilingKind::Square => square::encode(self.value),
        }
    }
}
