//! Flood fill
//!
//! Breadth-first region growing over 8-connected neighbours, clipped to
//! the box covered by a [`VisitedSet`]. The same routine traces ink
//! (segmentation) and paper (hole counting); the [`PixelClass`] argument
//! picks which one it grows through.

use crate::error::{RegionError, RegionResult};
use crate::visited::VisitedSet;
use glyphscan_core::{Box, Image, PixelClass, PixelClassifier, Point};
use log::trace;
use std::collections::VecDeque;

/// Offsets of the 8-connected neighbourhood
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Check that `region` lies entirely inside `image`
///
/// # Errors
///
/// Returns [`RegionError::BoundsViolation`] otherwise.
pub fn check_region(image: &Image, region: &Box) -> RegionResult<()> {
    if image.bounds().contains_box(region) {
        Ok(())
    } else {
        Err(RegionError::BoundsViolation {
            region: *region,
            width: image.width(),
            height: image.height(),
        })
    }
}

/// Grow the region of `class` pixels connected to `start`
///
/// The search is limited to `visited.bounds()`. Every admitted pixel is
/// marked in `visited` exactly once, and a pixel marked by an earlier call
/// is never entered again, so repeated calls over one set partition the
/// limit box into regions.
///
/// Returns the bounding box of the pixels visited by this call. When
/// `start` is already visited, or is not of `class`, nothing is visited
/// and the 1x1 box at `start` is returned.
///
/// # Errors
///
/// - [`RegionError::BoundsViolation`] if the limit box reaches outside
///   `image`
/// - [`RegionError::InvalidSeed`] if `start` is outside the limit box
pub fn flood_fill(
    image: &Image,
    classifier: &PixelClassifier,
    start: Point,
    class: PixelClass,
    visited: &mut VisitedSet,
) -> RegionResult<Box> {
    let limit = visited.bounds();
    check_region(image, &limit)?;
    if !limit.contains(start) {
        return Err(RegionError::InvalidSeed {
            x: start.x,
            y: start.y,
        });
    }

    let mut extent = Box::from_point(start);
    if visited.is_visited(start)
        || classifier.classify(image.get_pixel_unchecked(start.x, start.y)) != class
    {
        return Ok(extent);
    }

    let mut queue = VecDeque::new();
    visited.mark(start);
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        extent.extend_to_include(p);
        for (dx, dy) in NEIGHBORS {
            let (Some(x), Some(y)) = (p.x.checked_add_signed(dx), p.y.checked_add_signed(dy))
            else {
                continue;
            };
            let n = Point::new(x, y);
            if !limit.contains(n) || visited.is_visited(n) {
                continue;
            }
            if classifier.classify(image.get_pixel_unchecked(x, y)) == class {
                visited.mark(n);
                queue.push_back(n);
            }
        }
    }

    trace!("flood fill {:?} from {} covers {}", class, start, extent);
    Ok(extent)
}
