//! Midpoint Line Tracer
//!
//! Generalized Bresenham walk that emits one pixel per unit step along a
//! segment's dominant axis using integer additions and comparisons only.
//! The same walk handles all eight octants: the per-step move is either the
//! axis step or the full diagonal step, picked by an error accumulator.
//!
//! While tracing, every emitted pixel is also recorded in a [`CrossingTable`]
//! so the scanline filler can run without a second pass over the edges.
//!
//! Segments are half-open: the end point is never emitted, so consecutive
//! edges of a polygon share exactly one pixel.

use glam::{IVec2, Vec2};

use super::crossing::CrossingTable;

/// Iterator over the pixels of `start..end` produced by the midpoint walk.
///
/// Yields exactly `max(|dx|, |dy|)` pixels, starting with `start` and never
/// reaching `end`.
#[derive(Debug, Clone)]
pub struct MidpointWalk {
    current: IVec2,
    diagonal: IVec2,
    axis: IVec2,
    longest: i64,
    shortest: i64,
    rise: i64,
    remaining: i64,
}

impl MidpointWalk {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        // Widened so the span of any two i32 endpoints fits
        let span = end.as_i64vec2() - start.as_i64vec2();
        let diagonal = span.signum().as_ivec2();

        let (longest, shortest, axis) = if span.y.abs() >= span.x.abs() {
            (span.y.abs(), span.x.abs(), IVec2::new(0, diagonal.y))
        } else {
            (span.x.abs(), span.y.abs(), IVec2::new(diagonal.x, 0))
        };

        Self {
            current: start,
            diagonal,
            axis,
            longest,
            shortest,
            rise: longest / 2,
            remaining: longest,
        }
    }
}

impl Iterator for MidpointWalk {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pixel = self.current;
        self.rise += self.shortest;
        if self.rise > self.longest {
            self.rise -= self.longest;
            self.current += self.diagonal;
        } else {
            self.current += self.axis;
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MidpointWalk {}

/// The walk always starts from the lexicographically smaller endpoint so that
/// `(a, b)` and `(b, a)` select the same pixels.
#[inline]
fn is_canonical(a: IVec2, b: IVec2) -> bool {
    (a.x, a.y) <= (b.x, b.y)
}

/// Trace the half-open segment `a..b`, appending its pixels to `outline` and
/// its row crossings to `crossings`.
///
/// Pixels are emitted in order from `a` towards `b`. Together with the
/// excluded end point they cover the same pixel set as `trace(b, a, ..)`
/// together with its own excluded end point.
pub fn trace(a: IVec2, b: IVec2, outline: &mut Vec<IVec2>, crossings: &mut CrossingTable) {
    let mut emit = |pixel: IVec2| {
        outline.push(pixel);
        crossings.record(pixel);
    };

    if is_canonical(a, b) {
        MidpointWalk::new(a, b).for_each(&mut emit);
        return;
    }

    // Walk b..a, then replay it backwards from a, leaving b out
    let run: Vec<IVec2> = MidpointWalk::new(b, a).collect();
    if run.is_empty() {
        return;
    }
    emit(a);
    run[1..].iter().rev().copied().for_each(&mut emit);
}

/// Largest pixel coordinate magnitude a vertex snaps to.
pub const PIXEL_LIMIT: i32 = 1 << 30;

/// Snap a world-space vertex to the pixel grid (round half away from zero),
/// clamped to `±PIXEL_LIMIT` on each axis.
///
/// Returns `None` for NaN or infinite coordinates.
#[inline]
pub fn snap_to_pixel(v: Vec2) -> Option<IVec2> {
    if !v.is_finite() {
        return None;
    }
    let limit = PIXEL_LIMIT as f32;
    Some(v.round().clamp(Vec2::splat(-limit), Vec2::splat(limit)).as_ivec2())
}

/// Trace every edge of the closed loop `vertices` in order.
///
/// Vertices are snapped to the pixel grid first; non-finite vertices are
/// left out of the loop. The closing edge runs from the last traced vertex
/// back to the first.
pub fn trace_polygon(vertices: &[Vec2], outline: &mut Vec<IVec2>, crossings: &mut CrossingTable) {
    let snapped: Vec<IVec2> = vertices.iter().filter_map(|&v| snap_to_pixel(v)).collect();
    let n = snapped.len();
    for i in 0..n {
        trace(snapped[i], snapped[(i + 1) % n], outline, crossings);
    }
}
