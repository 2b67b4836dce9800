//! Polygon Simplicity Validator
//!
//! Decides whether a closed vertex loop is a simple polygon (no edge crosses
//! another edge). Only simple polygons are handed to the scanline filler.
//!
//! The test walks every edge and classifies the remaining vertices by the side
//! of the edge's supporting line they fall on. A side flip between two
//! consecutive vertices means the segment joining them reaches across that
//! line; it only crosses the edge itself if the edge endpoints are in turn
//! split by the segment's line. O(n²) in the vertex count.

use glam::Vec2;

/// Perpendicular of `v`, pointing to its right.
#[inline]
fn normal(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// True when `p` is on the non-negative side of the line through `origin`
/// with normal `n`.
#[inline]
fn on_positive_side(p: Vec2, origin: Vec2, n: Vec2) -> bool {
    (p - origin).dot(n) >= 0.0
}

/// Return whether `vertices` (implicitly closed) form a simple polygon.
///
/// - Fewer than 3 vertices are never simple.
/// - Any 3 vertices are reported simple, even when collinear or repeated.
/// - From 4 vertices up, exactly coincident vertices or crossing edges make
///   the polygon complex.
pub fn is_simple(vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    if n == 3 {
        return true;
    }

    if has_duplicate_vertex(vertices) {
        return false;
    }

    (0..n).all(|i| !edge_is_crossed(vertices, i))
}

fn has_duplicate_vertex(vertices: &[Vec2]) -> bool {
    vertices
        .iter()
        .enumerate()
        .any(|(i, a)| vertices[i + 1..].iter().any(|b| a == b))
}

/// Check edge `(i, i + 1)` against every edge that does not share a vertex
/// with it.
fn edge_is_crossed(vertices: &[Vec2], i: usize) -> bool {
    let n = vertices.len();
    let j = (i + 1) % n;
    let vi = vertices[i];
    let vj = vertices[j];
    let edge_normal = normal(vj - vi);

    // k runs from j + 1 around to i - 1
    let mut ks = (0..n - 2).map(|step| (j + 1 + step) % n);
    let Some(first) = ks.next() else {
        return false;
    };

    let mut prev = vertices[first];
    let mut prev_side = on_positive_side(prev, vi, edge_normal);

    for k in ks {
        let current = vertices[k];
        let side = on_positive_side(current, vi, edge_normal);

        if side != prev_side {
            let span_normal = normal(current - prev);
            if on_positive_side(vi, prev, span_normal) != on_positive_side(vj, prev, span_normal) {
                return true;
            }
        }

        prev = current;
        prev_side = side;
    }

    false
}
