use heatmap_core::Point;

/// Chebyshev (L∞) distance between two points.
///
/// This is the number of steps between `a` and `b` on an open grid when
/// diagonal moves cost the same as cardinal ones.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
