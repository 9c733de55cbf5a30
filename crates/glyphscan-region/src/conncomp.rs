//! Connected ink components
//!
//! Finds every 8-connected ink region inside a box by scanning columns
//! left to right (each column top to bottom) and flood filling from the
//! first unvisited ink pixel of each region. Components therefore come
//! out ordered by their leftmost column, which is reading order for a
//! line of text.

use crate::error::RegionResult;
use crate::seedfill::{check_region, flood_fill};
use crate::visited::VisitedSet;
use glyphscan_core::{Box, Image, PixelClass, PixelClassifier, Point};

/// One connected ink region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// First pixel of the region met by the column scan
    pub seed: Point,
    /// Bounding box of the region
    pub bounds: Box,
}

/// Find the ink components inside `limit`, in column-major scan order
///
/// Regions are clipped to `limit`: ink that continues past its edge is
/// not followed.
///
/// # Errors
///
/// Returns [`crate::RegionError::BoundsViolation`] if `limit` reaches
/// outside `image`.
pub fn find_components(
    image: &Image,
    classifier: &PixelClassifier,
    limit: &Box,
) -> RegionResult<Vec<Component>> {
    check_region(image, limit)?;
    let mut visited = VisitedSet::new(*limit);
    let mut components = Vec::new();

    let (low, high) = (limit.low(), limit.high());
    for x in low.x..=high.x {
        for y in low.y..=high.y {
            let p = Point::new(x, y);
            if visited.is_visited(p) || !classifier.is_foreground(image.get_pixel_unchecked(x, y))
            {
                continue;
            }
            let bounds = flood_fill(image, classifier, p, PixelClass::Foreground, &mut visited)?;
            components.push(Component { seed: p, bounds });
        }
    }

    Ok(components)
}
