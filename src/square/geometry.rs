//! Planar geometry of square cells, for renderers.

use crate::lattice::Point;
use crate::square::SquareCoord;

/// Corner offsets from the cell centre.
const UNIT_CORNERS: [(f64, f64); 4] = [(0.5, 0.5), (0.5, -0.5), (-0.5, -0.5), (-0.5, 0.5)];

/// Centre of a square, scaled by `scale`.
pub fn square_center(coord: SquareCoord, scale: f64) -> Point {
    Point::new(coord.x as f64, coord.y as f64).scaled(scale)
}

/// The four corners of a square, scaled by `scale`.
pub fn square_boundary(coord: SquareCoord, scale: f64) -> [Point; 4] {
    let (x, y) = (coord.x as f64, coord.y as f64);
    UNIT_CORNERS.map(|(dx, dy)| Point::new(x + dx, y + dy).scaled(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_corners() {
        let corners = square_boundary(SquareCoord::new(2, -1), 1.0);
        assert_eq!(
            corners,
            [
                Point::new(2.5, -0.5),
                Point::new(2.5, -1.5),
                Point::new(1.5, -1.5),
                Point::new(1.5, -0.5),
            ]
        );
    }

    #[test]
    fn boundary_scales_exactly() {
        let coords = [SquareCoord::ORIGIN, SquareCoord::new(1, 0), SquareCoord::new(-7, 4)];
        for coord in coords {
            let unit = square_boundary(coord, 1.0);
            for scale in [1.0, 2.5, 3.0] {
                let scaled = square_boundary(coord, scale);
                for (s, u) in scaled.iter().zip(unit.iter()) {
                    assert_eq!(*s, u.scaled(scale));
                }
            }
            assert_eq!(square_center(coord, 2.5), square_center(coord, 1.0).scaled(2.5));
        }
    }
}
