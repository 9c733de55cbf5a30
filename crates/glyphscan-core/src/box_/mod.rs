//! Box - Inclusive rectangle regions
//!
//! A [`Box`] is described by its two inclusive corner points. The corners
//! are private so that `low <= high` on both axes holds for every box that
//! exists: constructors validate or normalize, and the only mutators
//! ([`Box::extend_to_include`], [`Box::extend_to_include_box`]) can only
//! grow a box.

mod edge;

pub use edge::EdgeIter;

use crate::error::{Error, Result};
use crate::point::Point;
use std::fmt;

/// An axis-aligned rectangle with inclusive corners
///
/// Unlike a width/height rectangle, a `Box` always covers at least one
/// pixel: `Box::from_point(p)` is the 1x1 box at `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    low: Point,
    high: Point,
}

impl Box {
    /// Create a box from its low (top-left) and high (bottom-right) corners
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBox`] if `low` is greater than `high` on
    /// either axis.
    pub fn new(low: Point, high: Point) -> Result<Self> {
        if low.x > high.x || low.y > high.y {
            return Err(Error::InvalidBox { low, high });
        }
        Ok(Self { low, high })
    }

    /// Create a box from inclusive coordinates `(x1, y1)`-`(x2, y2)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBox`] if `x1 > x2` or `y1 > y2`.
    pub fn from_coords(x1: u32, y1: u32, x2: u32, y2: u32) -> Result<Self> {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Create a box from two arbitrary corners, ordering them as needed
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            low: Point::new(a.x.min(b.x), a.y.min(b.y)),
            high: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create the 1x1 box covering a single pixel
    pub const fn from_point(p: Point) -> Self {
        Self { low: p, high: p }
    }

    /// Create the box covering a `width` x `height` area at the origin
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            low: Point::new(0, 0),
            high: Point::new(width - 1, height - 1),
        })
    }

    /// Low (top-left) corner
    #[inline]
    pub fn low(&self) -> Point {
        self.low
    }

    /// High (bottom-right) corner
    #[inline]
    pub fn high(&self) -> Point {
        self.high
    }

    /// Number of columns covered
    #[inline]
    pub fn width(&self) -> u32 {
        self.high.x - self.low.x + 1
    }

    /// Number of rows covered
    #[inline]
    pub fn height(&self) -> u32 {
        self.high.y - self.low.y + 1
    }

    /// Number of pixels covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Middle column, rounded towards `low`
    #[inline]
    pub fn mid_x(&self) -> u32 {
        self.low.x + (self.high.x - self.low.x) / 2
    }

    /// Middle row, rounded towards `low`
    #[inline]
    pub fn mid_y(&self) -> u32 {
        self.low.y + (self.high.y - self.low.y) / 2
    }

    /// Height divided by width
    #[inline]
    pub fn proportion(&self) -> f64 {
        self.height() as f64 / self.width() as f64
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.low.x && p.x <= self.high.x && p.y >= self.low.y && p.y <= self.high.y
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &Box) -> bool {
        self.contains(other.low) && self.contains(other.high)
    }

    /// Check if a point lies on one of the box's four edges
    ///
    /// Only the coordinate matching an edge is tested, so a point outside
    /// the box that shares a row or column with an edge also matches;
    /// combine with [`Box::contains`] when that matters.
    #[inline]
    pub fn on_edge(&self, p: Point) -> bool {
        p.x == self.low.x || p.x == self.high.x || p.y == self.low.y || p.y == self.high.y
    }

    /// Grow the box so that it includes `p`
    pub fn extend_to_include(&mut self, p: Point) {
        self.low.x = self.low.x.min(p.x);
        self.low.y = self.low.y.min(p.y);
        self.high.x = self.high.x.max(p.x);
        self.high.y = self.high.y.max(p.y);
    }

    /// Grow the box so that it includes all of `other`
    pub fn extend_to_include_box(&mut self, other: &Box) {
        self.extend_to_include(other.low);
        self.extend_to_include(other.high);
    }

    /// Bounding box of `self` and `other`
    pub fn union(&self, other: &Box) -> Box {
        let mut b = *self;
        b.extend_to_include_box(other);
        b
    }

    /// Intersection of two boxes, if they overlap
    pub fn intersect(&self, other: &Box) -> Option<Box> {
        let low = Point::new(self.low.x.max(other.low.x), self.low.y.max(other.low.y));
        let high = Point::new(
            self.high.x.min(other.high.x),
            self.high.y.min(other.high.y),
        );
        Box::new(low, high).ok()
    }

    /// Whether two boxes have middle columns within `tolerance` pixels
    ///
    /// Used to decide that two strokes (the dot and stem of an `i`, the two
    /// bars of `=`) belong to the same glyph.
    pub fn has_similar_x_midpoint(&self, other: &Box, tolerance: u32) -> bool {
        self.mid_x().abs_diff(other.mid_x()) <= tolerance
    }

    /// The four quadrant sub-boxes, split at [`Box::mid_x`] / [`Box::mid_y`]
    ///
    /// Returned in the order top-right, top-left, bottom-left,
    /// bottom-right. Neighbouring quadrants share the middle row and column.
    pub fn quadrants(&self) -> [Box; 4] {
        let (mx, my) = (self.mid_x(), self.mid_y());
        [
            Box::from_corners(Point::new(mx, self.low.y), Point::new(self.high.x, my)),
            Box::from_corners(self.low, Point::new(mx, my)),
            Box::from_corners(Point::new(self.low.x, my), Point::new(mx, self.high.y)),
            Box::from_corners(Point::new(mx, my), self.high),
        ]
    }

    /// The vertical and horizontal one-pixel midlines
    pub fn midlines(&self) -> [Box; 2] {
        let (mx, my) = (self.mid_x(), self.mid_y());
        [
            Box::from_corners(Point::new(mx, self.low.y), Point::new(mx, self.high.y)),
            Box::from_corners(Point::new(self.low.x, my), Point::new(self.high.x, my)),
        ]
    }

    /// Iterate clockwise around the box edge, starting at `low`
    pub fn edge_points(&self) -> EdgeIter {
        EdgeIter::new(*self)
    }

    /// Iterate over every point in the box in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let b = *self;
        (b.low.y..=b.high.y).flat_map(move |y| (b.low.x..=b.high.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Box {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bx(x1: u32, y1: u32, x2: u32, y2: u32) -> Box {
        Box::from_coords(x1, y1, x2, y2).unwrap()
    }

    #[test]
    fn test_dimensions_are_inclusive() {
        let b = bx(2, 3, 5, 9);
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 7);
        assert_eq!(b.area(), 28);
        assert_eq!(Box::from_point(Point::new(4, 4)).area(), 1);
    }

    #[test]
    fn test_new_rejects_inverted() {
        assert!(Box::from_coords(5, 0, 4, 0).is_err());
        assert!(Box::from_coords(0, 5, 0, 4).is_err());
        assert!(Box::with_size(0, 3).is_err());
    }

    #[test]
    fn test_from_corners_normalizes() {
        let b = Box::from_corners(Point::new(7, 1), Point::new(2, 6));
        assert_eq!(b.low(), Point::new(2, 1));
        assert_eq!(b.high(), Point::new(7, 6));
    }

    #[test]
    fn test_contains_and_on_edge() {
        let b = bx(1, 1, 4, 4);
        assert!(b.contains(Point::new(1, 4)));
        assert!(!b.contains(Point::new(0, 2)));
        assert!(b.on_edge(Point::new(4, 2)));
        assert!(!b.on_edge(Point::new(2, 2)));
        assert!(b.contains_box(&bx(2, 2, 3, 4)));
        assert!(!b.contains_box(&bx(2, 2, 5, 4)));
    }

    #[test]
    fn test_extend_to_include() {
        let mut b = Box::from_point(Point::new(5, 5));
        b.extend_to_include(Point::new(2, 8));
        assert_eq!(b, bx(2, 5, 5, 8));
        b.extend_to_include_box(&bx(4, 1, 9, 2));
        assert_eq!(b, bx(2, 1, 9, 8));
        assert!(b.low().x <= b.high().x && b.low().y <= b.high().y);
    }

    #[test]
    fn test_intersect() {
        assert_eq!(bx(0, 0, 4, 4).intersect(&bx(3, 3, 8, 8)), Some(bx(3, 3, 4, 4)));
        assert_eq!(bx(0, 0, 2, 2).intersect(&bx(3, 3, 8, 8)), None);
    }

    #[test]
    fn test_similar_x_midpoint() {
        let stem = bx(10, 5, 12, 20);
        let dot = bx(10, 0, 12, 2);
        let next = bx(20, 5, 22, 20);
        assert!(stem.has_similar_x_midpoint(&dot, 0));
        assert!(!stem.has_similar_x_midpoint(&next, 3));
        assert!(stem.has_similar_x_midpoint(&next, 10));
    }

    #[test]
    fn test_quadrants_cover_box() {
        let b = bx(0, 0, 9, 5);
        let [q1, q2, q3, q4] = b.quadrants();
        assert_eq!(q2, bx(0, 0, 4, 2));
        assert_eq!(q1, bx(4, 0, 9, 2));
        assert_eq!(q3, bx(0, 2, 4, 5));
        assert_eq!(q4, bx(4, 2, 9, 5));
        let [m1, m2] = b.midlines();
        assert_eq!(m1, bx(4, 0, 4, 5));
        assert_eq!(m2, bx(0, 2, 9, 2));
    }

    #[test]
    fn test_points_row_major() {
        let pts: Vec<Point> = bx(1, 1, 2, 2).points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
    }
}
