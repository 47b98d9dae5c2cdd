//! Planar geometry of hex cells, for renderers.
//!
//! Pointy-top layout with unit circumradius: the centre of (q, r) sits at
//! (sqrt(3) * (q + r/2), 3r/2).

use crate::hex::HexCoord;
use crate::lattice::Point;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Corner offsets in axial units, clockwise on a y-down screen.
const UNIT_VERTICES: [(f64, f64); 6] = [
    (1.0 / 3.0, 1.0 / 3.0),
    (-1.0 / 3.0, 2.0 / 3.0),
    (-2.0 / 3.0, 1.0 / 3.0),
    (-1.0 / 3.0, -1.0 / 3.0),
    (1.0 / 3.0, -2.0 / 3.0),
    (2.0 / 3.0, -1.0 / 3.0),
];

fn axial_to_plane(q: f64, r: f64) -> Point {
    Point::new(SQRT_3 * (q + r / 2.0), 1.5 * r)
}

/// Centre of a hex, scaled by `scale`.
pub fn hex_center(coord: HexCoord, scale: f64) -> Point {
    axial_to_plane(coord.q as f64, coord.r as f64).scaled(scale)
}

/// The six corners of a hex, scaled by `scale`.
pub fn hex_boundary(coord: HexCoord, scale: f64) -> [Point; 6] {
    let (q, r) = (coord.q as f64, coord.r as f64);
    UNIT_VERTICES.map(|(vq, vr)| axial_to_plane(q + vq, r + vr).scaled(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn origin_center() {
        assert_eq!(hex_center(HexCoord::ORIGIN, 1.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn neighbor_centers_are_sqrt3_apart() {
        for d in &HexCoord::UNIT_DIRS[1..] {
            let c = hex_center(*d, 1.0);
            assert!(((c.x * c.x + c.y * c.y).sqrt() - SQRT_3).abs() < 1e-9);
        }
    }

    #[test]
    fn corners_at_unit_radius() {
        let coord = HexCoord::new(3, -5);
        let center = hex_center(coord, 1.0);
        for corner in hex_boundary(coord, 1.0) {
            let (dx, dy) = (corner.x - center.x, corner.y - center.y);
            assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn first_corner_of_origin() {
        // (1/3, 1/3) -> (sqrt(3)/2, 1/2)
        let corners = hex_boundary(HexCoord::ORIGIN, 1.0);
        assert!(close(corners[0], Point::new(SQRT_3 / 2.0, 0.5)));
    }

    #[test]
    fn boundary_scales_exactly() {
        let coords = [HexCoord::ORIGIN, HexCoord::new(1, 0), HexCoord::new(-4, 7), HexCoord::new(12, -3)];
        for coord in coords {
            let unit = hex_boundary(coord, 1.0);
            for scale in [1.0, 2.5, 10.0, 0.25] {
                let scaled = hex_boundary(coord, scale);
                for (s, u) in scaled.iter().zip(unit.iter()) {
                    assert_eq!(*s, u.scaled(scale));
                }
                assert_eq!(hex_center(coord, scale), hex_center(coord, 1.0).scaled(scale));
            }
        }
    }
}
