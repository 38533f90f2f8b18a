//! Polygon geometry - vertex generation, rotation, polygram connectivity
//!
//! Everything in this module is a pure function over `(f32, f32)` points.
//! Points are origin-centered; placing a shape in the world is the
//! caller's job (see [`rotate_point`], which rotates and translates in
//! one step).

use std::f32::consts::{PI, TAU};

/// Convert degrees to radians
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[allow(dead_code)]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Generate the vertices of a regular polygon, centered at the origin
///
/// The i-th vertex sits at angle `i * 2π/side_count` from the positive
/// x-axis, at distance `radius`.
///
/// # Panics
/// Panics if fewer than 3 sides are requested.
pub fn regular_polygon_points(side_count: usize, radius: f32) -> Vec<(f32, f32)> {
    assert!(side_count >= 3, "Regular polygon requires at least 3 sides");

    let dtheta = TAU / side_count as f32;

    (0..side_count)
        .map(|i| {
            let theta = i as f32 * dtheta;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Rotate an origin-centered point, then translate it to `center`
///
/// Rotation is counter-clockwise-positive, in degrees. An angle of
/// exactly zero skips the trig entirely and returns the translated point
/// bit-for-bit; callers rely on identity semantics for zero angles.
pub fn rotate_point(point: (f32, f32), center: (f32, f32), angle_deg: f32) -> (f32, f32) {
    if angle_deg == 0.0 {
        return (point.0 + center.0, point.1 + center.1);
    }

    let (sin, cos) = deg_to_rad(angle_deg).sin_cos();

    // 2D rotation matrix
    let x = point.0 * cos - point.1 * sin;
    let y = point.0 * sin + point.1 * cos;

    (x + center.0, y + center.1)
}

/// Vertex-index chains for the inscribed {n/2} star polygon
///
/// Connecting every 2nd vertex of an n-gon splits into two cases:
/// - odd n: one closed chain `(2i) mod n`, i = 0..n, touching every
///   vertex before it returns to vertex 0
/// - even n: two disjoint closed chains of n/2 vertices each, one
///   starting at vertex 0 (`(2i) mod n`) and one at vertex 1
///   (`(2i + 1) mod n`)
///
/// Each chain is a sequence of indices into the polygon's vertex list;
/// the renderer closes it back to its first entry.
pub fn polygram_chains(side_count: usize) -> Vec<Vec<usize>> {
    if side_count % 2 == 0 {
        let half = side_count / 2;
        vec![
            (0..half).map(|i| (i * 2) % side_count).collect(),
            (0..half).map(|i| (i * 2 + 1) % side_count).collect(),
        ]
    } else {
        vec![(0..side_count).map(|i| (i * 2) % side_count).collect()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_rad_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 0.001);
        assert!((rad_to_deg(PI) - 180.0).abs() < 0.001);
        assert!((rad_to_deg(deg_to_rad(73.5)) - 73.5).abs() < 0.001);
    }

    #[test]
    fn test_pentagon_points() {
        let points = regular_polygon_points(5, 100.0);
        assert_eq!(points.len(), 5);

        // Every vertex on the circumscribing circle
        for (x, y) in &points {
            let dist = (x * x + y * y).sqrt();
            assert!((dist - 100.0).abs() < 0.001);
        }

        // Consecutive vertices subtend 2π/5
        let expected = TAU / 5.0;
        for i in 0..5 {
            let (x1, y1) = points[i];
            let (x2, y2) = points[(i + 1) % 5];
            let delta = (y2.atan2(x2) - y1.atan2(x1)).rem_euclid(TAU);
            assert!((delta - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_first_point_on_x_axis() {
        let points = regular_polygon_points(7, 50.0);
        assert!((points[0].0 - 50.0).abs() < 0.001);
        assert!(points[0].1.abs() < 0.001);
    }

    #[test]
    #[should_panic]
    fn test_too_few_sides_panics() {
        regular_polygon_points(2, 100.0);
    }

    #[test]
    fn test_rotate_zero_is_exact_identity() {
        let p = (12.375, -8.625);
        let c = (300.0, 300.0);
        let (x, y) = rotate_point(p, c, 0.0);
        // Bit-exact, not just within tolerance
        assert_eq!(x, p.0 + c.0);
        assert_eq!(y, p.1 + c.1);
    }

    #[test]
    fn test_rotate_90_degrees() {
        let (x, y) = rotate_point((1.0, 0.0), (0.0, 0.0), 90.0);
        assert!(x.abs() < 0.001);
        assert!((y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_four_quarter_turns_compose_to_identity() {
        let start = (3.0, 4.0);
        let center = (10.0, 20.0);

        // Four 90° rotations about the origin, translating only on the
        // final step, must land back on the translated start point.
        let mut p = start;
        for _ in 0..3 {
            p = rotate_point(p, (0.0, 0.0), 90.0);
        }
        let (x, y) = rotate_point(p, center, 90.0);

        assert!((x - (start.0 + center.0)).abs() < 0.001);
        assert!((y - (start.1 + center.1)).abs() < 0.001);
    }

    #[test]
    fn test_pentagram_single_chain() {
        let chains = polygram_chains(5);
        assert_eq!(chains, vec![vec![0, 2, 4, 1, 3]]);
    }

    #[test]
    fn test_hexagram_two_chains() {
        let chains = polygram_chains(6);
        assert_eq!(chains, vec![vec![0, 2, 4], vec![1, 3, 5]]);
    }

    #[test]
    fn test_square_degenerate_chains() {
        // n = 4 degenerates to two 2-vertex chains (the diagonals)
        let chains = polygram_chains(4);
        assert_eq!(chains, vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_odd_chain_visits_every_vertex() {
        for n in [3usize, 5, 7, 9, 13] {
            let chains = polygram_chains(n);
            assert_eq!(chains.len(), 1);
            let mut sorted = chains[0].clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }
    }
}
