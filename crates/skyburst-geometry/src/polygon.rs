//! Direction extraction from arbitrary polygons.

use skyburst_common::Vector2D;

/// Mean of all vertices, or `None` for an empty list.
#[must_use]
pub fn centroid(vertices: &[Vector2D]) -> Option<Vector2D> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(Vector2D::ZERO, |acc, &v| acc + v);
    let n = vertices.len() as f32;
    Some(Vector2D::new(sum.x / n, sum.y / n))
}

/// Unit directions from the centroid to each vertex, in vertex order.
///
/// Vertices coincident with the centroid are skipped, so the result may be
/// shorter than the input (or empty).
#[must_use]
pub fn unit_directions(vertices: &[Vector2D]) -> Vec<Vector2D> {
    let Some(center) = centroid(vertices) else {
        return Vec::new();
    };
    vertices
        .iter()
        .filter_map(|&v| {
            let d = v - center;
            (d.magnitude() > 0.0).then(|| d.normalize())
        })
        .collect()
}
