//! Clockwise traversal of a box's edge pixels

use super::Box;
use crate::point::Point;
use std::iter::FusedIterator;

/// Iterator over the edge pixels of a [`Box`]
///
/// Starts at the low corner and walks clockwise: along the top row, down
/// the right column, back along the bottom row and up the left column.
/// Every edge pixel is yielded exactly once, so a 1-wide or 1-tall box
/// yields each of its pixels once and a 1x1 box yields a single point.
#[derive(Debug, Clone)]
pub struct EdgeIter {
    bounds: Box,
    current: Point,
    remaining: u64,
}

impl EdgeIter {
    pub(super) fn new(bounds: Box) -> Self {
        Self {
            bounds,
            current: bounds.low(),
            remaining: perimeter(&bounds),
        }
    }

    fn advance(&mut self) {
        let (low, high) = (self.bounds.low(), self.bounds.high());
        let p = &mut self.current;
        if p.y == low.y && p.x < high.x {
            p.x += 1;
        } else if p.x == high.x && p.y < high.y {
            p.y += 1;
        } else if p.y == high.y && p.x > low.x {
            p.x -= 1;
        } else if p.x == low.x && p.y > low.y {
            p.y -= 1;
        }
    }
}

/// Number of distinct pixels on the edge of `b`
fn perimeter(b: &Box) -> u64 {
    let (w, h) = (b.width() as u64, b.height() as u64);
    if w == 1 || h == 1 {
        w * h
    } else {
        2 * (w + h) - 4
    }
}

impl Iterator for EdgeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let p = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for EdgeIter {}

impl FusedIterator for EdgeIter {}
