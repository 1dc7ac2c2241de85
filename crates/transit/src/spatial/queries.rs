//! Distance calculation for nearest-station search.

use geo::Point;

/// Closeness measure between two coordinates: `sqrt(|dx| + |dy|)`.
///
/// This is the network's historical formula, kept as-is. It is not a
/// true distance metric (it can violate the triangle inequality in
/// degenerate cases) and must not be replaced with Euclidean or
/// Haversine distance: nearest-station results are defined in terms of
/// this exact computation.
pub fn transfer_distance(a: Point, b: Point) -> f64 {
    ((a.x() - b.x()).abs() + (a.y() - b.y()).abs()).sqrt()
}
