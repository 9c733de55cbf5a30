//! Point - integer pixel coordinate

use std::cmp::Ordering;
use std::fmt;

/// Position of a pixel in an image
///
/// Points are hashable so they can key maps and sets (for example as BFS
/// node identities). Ordering is *strict dominance*: `a < b` only when `a`
/// is smaller on both axes, so two points that differ in opposite
/// directions are incomparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether `other` is greater than `self` on both axes
    #[inline]
    pub fn dominated_by(&self, other: &Point) -> bool {
        self.x < other.x && self.y < other.y
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.dominated_by(other) {
            Some(Ordering::Less)
        } else if other.dominated_by(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_strict_dominance() {
        let a = Point::new(1, 1);
        let b = Point::new(2, 3);
        assert!(a < b);
        assert!(b > a);
        assert!(!(a < a));
        assert!(a <= a);
    }

    #[test]
    fn test_incomparable_points() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 2);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(b < a));

        // Shared row is not strict dominance either
        let c = Point::new(3, 5);
        assert_eq!(a.partial_cmp(&c), None);
    }

    #[test]
    fn test_point_as_set_key() {
        let mut set = HashSet::new();
        set.insert(Point::new(3, 4));
        set.insert(Point::from((3, 4)));
        set.insert(Point::new(4, 3));
        assert_eq!(set.len(), 2);
    }
}
