//! Visitation tracking for region growing

use glyphscan_core::{Box, Point};

/// A flat boolean grid covering one search box
///
/// Indexed by `(y - low.y) * width + (x - low.x)`. A set belongs to a
/// single pass (one line scan, one hole count); [`VisitedSet::clear`]
/// lets a pass reuse the allocation.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    bounds: Box,
    width: usize,
    cells: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Create an all-unvisited set covering `bounds`
    pub fn new(bounds: Box) -> Self {
        let width = bounds.width() as usize;
        let len = width * bounds.height() as usize;
        Self {
            bounds,
            width,
            cells: vec![false; len],
            count: 0,
        }
    }

    /// The box this set covers
    #[inline]
    pub fn bounds(&self) -> Box {
        self.bounds
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let low = self.bounds.low();
        Some((p.y - low.y) as usize * self.width + (p.x - low.x) as usize)
    }

    /// Whether `p` has been visited. Points outside the set never are.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Mark `p` visited
    ///
    /// Returns `true` if `p` is inside the set and was not visited before.
    #[inline]
    pub fn mark(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if !self.cells[i] => {
                self.cells[i] = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of visited points
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reset every point to unvisited
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.count = 0;
    }
}
