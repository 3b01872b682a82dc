//! Grid coordinates: [`Point`] and the half-open rectangle [`Range`].
//!
//! `x` grows right and `y` grows down. Grids are stored row-major, so cell
//! `(x, y)` of a `width`-wide grid sits at index `y * width + x`.

use std::fmt;

/// A cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8-connected neighbourhood of the point, clockwise from north.
    /// Points outside any particular grid are included.
    pub fn neighbors_8(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y - 1),
            Self::new(x + 1, y),
            Self::new(x + 1, y + 1),
            Self::new(x, y + 1),
            Self::new(x - 1, y + 1),
            Self::new(x - 1, y),
            Self::new(x - 1, y - 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cells `p` with `min.x <= p.x < max.x` and `min.y <= p.y < max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanning the two corners, whichever order they come in.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `width × height` cells starting at the origin. Empty unless both are
    /// positive.
    #[inline]
    pub const fn with_size(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width, height),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Overlap of the two ranges; the default (empty) range if they are
    /// disjoint.
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// The 3×3 block centred on `p`, clipped to this range.
    #[inline]
    pub fn block_around(self, p: Point) -> Self {
        self.intersect(Self::new(p.x - 1, p.y - 1, p.x + 2, p.y + 2))
    }

    /// Row-major offset of `p` from `min`, or `None` outside the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let dx = (p.x - self.min.x) as usize;
        let dy = (p.y - self.min.y) as usize;
        Some(dy * self.width() as usize + dx)
    }

    /// Visits every cell row by row.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            rng: self,
            next: (!self.is_empty()).then_some(self.min),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major walk over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    rng: Range,
    next: Option<Point>,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.next?;
        self.next = if p.x + 1 < self.rng.max.x {
            Some(Point::new(p.x + 1, p.y))
        } else if p.y + 1 < self.rng.max.y {
            Some(Point::new(self.rng.min.x, p.y + 1))
        } else {
            None
        };
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_8_are_distinct_and_adjacent() {
        let p = Point::new(5, 5);
        let ns = p.neighbors_8();
        for (i, n) in ns.iter().enumerate() {
            assert_ne!(*n, p);
            assert_eq!((n.x - p.x).abs().max((n.y - p.y).abs()), 1);
            assert!(!ns[i + 1..].contains(n));
        }
    }

    #[test]
    fn new_orders_corners() {
        let r = Range::new(5, 4, 1, 0);
        assert_eq!(r.min, Point::new(1, 0));
        assert_eq!(r.max, Point::new(5, 4));
        assert_eq!((r.width(), r.height()), (4, 4));
    }

    #[test]
    fn iter_is_row_major() {
        let r = Range::with_size(3, 2);
        let pts: Vec<Point> = r.iter().collect();
        assert_eq!(pts.len(), r.len());
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[3], Point::new(0, 1));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn empty_ranges_yield_nothing() {
        let r = Range::with_size(0, 7);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().next(), None);
        assert_eq!(Range::with_size(-3, 2).len(), 0);
    }

    #[test]
    fn block_around_clips_at_edges() {
        let r = Range::with_size(5, 1);
        assert_eq!(r.block_around(Point::new(0, 0)), Range::new(0, 0, 2, 1));
        assert_eq!(r.block_around(Point::new(2, 0)), Range::new(1, 0, 4, 1));
        assert_eq!(r.block_around(Point::new(4, 0)).len(), 2);

        let big = Range::with_size(10, 10);
        assert_eq!(big.block_around(Point::new(5, 5)).len(), 9);
        assert_eq!(big.block_around(Point::new(9, 0)).len(), 4);
    }

    #[test]
    fn index_follows_iteration_order() {
        let r = Range::new(2, 3, 6, 8);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
        }
        assert_eq!(r.index(Point::new(0, 0)), None);
        assert_eq!(r.index(Point::new(6, 3)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_round_trip() {
        let r = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
