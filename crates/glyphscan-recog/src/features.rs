//! Glyph feature extraction
//!
//! All functions take the image, a [`PixelClassifier`] and a glyph box and
//! only read pixels. Boxes must lie inside the image; a box that does not
//! yields [`RecogError::BoundsViolation`] before any pixel is read.

use crate::error::{RecogError, RecogResult};
use crate::symbol::{Density, GlyphFeatures};
use glyphscan_core::{Box, Image, PixelClass, PixelClassifier, Point};
use glyphscan_region::{VisitedSet, flood_fill};

fn check_bounds(image: &Image, region: &Box) -> RecogResult<()> {
    if image.bounds().contains_box(region) {
        Ok(())
    } else {
        Err(RecogError::BoundsViolation {
            region: *region,
            width: image.width(),
            height: image.height(),
        })
    }
}

fn is_ink(image: &Image, classifier: &PixelClassifier, p: Point) -> bool {
    classifier.is_foreground(image.get_pixel_unchecked(p.x, p.y))
}

fn row_has_ink(image: &Image, c: &PixelClassifier, y: u32, x1: u32, x2: u32) -> bool {
    (x1..=x2).any(|x| is_ink(image, c, Point::new(x, y)))
}

fn col_has_ink(image: &Image, c: &PixelClassifier, x: u32, y1: u32, y2: u32) -> bool {
    (y1..=y2).any(|y| is_ink(image, c, Point::new(x, y)))
}

/// Shrink `region` to the bounding box of the ink it contains
///
/// The top and bottom rows are trimmed first, then the left and right
/// columns within the remaining rows. Returns `None` if the region holds
/// no ink at all.
pub fn pare_down(
    image: &Image,
    classifier: &PixelClassifier,
    region: &Box,
) -> RecogResult<Option<Box>> {
    check_bounds(image, region)?;
    let (low, high) = (region.low(), region.high());

    let Some(top) = (low.y..=high.y).find(|&y| row_has_ink(image, classifier, y, low.x, high.x))
    else {
        return Ok(None);
    };
    // A top row exists, so a bottom row does too
    let bottom = (top..=high.y)
        .rev()
        .find(|&y| row_has_ink(image, classifier, y, low.x, high.x))
        .unwrap_or(top);
    let left = (low.x..=high.x)
        .find(|&x| col_has_ink(image, classifier, x, top, bottom))
        .unwrap_or(low.x);
    let right = (left..=high.x)
        .rev()
        .find(|&x| col_has_ink(image, classifier, x, top, bottom))
        .unwrap_or(left);

    Ok(Some(Box::from_corners(
        Point::new(left, top),
        Point::new(right, bottom),
    )))
}

/// Count the background regions enclosed by ink inside `region`
///
/// The region is pared down first; a region without ink has no holes.
/// Background connected (8-way) to the edge of the pared box is outside
/// the glyph. Every other background region is one hole.
pub fn count_holes(
    image: &Image,
    classifier: &PixelClassifier,
    region: &Box,
) -> RecogResult<u32> {
    match pare_down(image, classifier, region)? {
        Some(glyph) => holes_in(image, classifier, &glyph),
        None => Ok(0),
    }
}

fn holes_in(image: &Image, classifier: &PixelClassifier, glyph: &Box) -> RecogResult<u32> {
    let mut visited = VisitedSet::new(*glyph);

    for p in glyph.edge_points() {
        if !is_ink(image, classifier, p) {
            flood_fill(image, classifier, p, PixelClass::Background, &mut visited)?;
        }
    }

    let (low, high) = (glyph.low(), glyph.high());
    let mut holes = 0;
    for y in low.y + 1..high.y {
        for x in low.x + 1..high.x {
            let p = Point::new(x, y);
            if !visited.is_visited(p) && !is_ink(image, classifier, p) {
                flood_fill(image, classifier, p, PixelClass::Background, &mut visited)?;
                holes += 1;
            }
        }
    }
    Ok(holes)
}

fn ink_ratio(ink: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        ink as f64 / total as f64
    }
}

/// Fraction of ink pixels in `region`
pub fn area_density(
    image: &Image,
    classifier: &PixelClassifier,
    region: &Box,
) -> RecogResult<f64> {
    check_bounds(image, region)?;
    let ink = region
        .points()
        .filter(|&p| is_ink(image, classifier, p))
        .count() as u64;
    Ok(ink_ratio(ink, region.area()))
}

/// Fraction of ink pixels on the edge of `region`
pub fn border_density(
    image: &Image,
    classifier: &PixelClassifier,
    region: &Box,
) -> RecogResult<f64> {
    check_bounds(image, region)?;
    let edge = region.edge_points();
    let total = edge.len() as u64;
    let ink = edge.filter(|&p| is_ink(image, classifier, p)).count() as u64;
    Ok(ink_ratio(ink, total))
}

/// Compute the feature vector of the glyph inside `region`
///
/// # Errors
///
/// - [`RecogError::BoundsViolation`] if `region` is not inside `image`
/// - [`RecogError::EmptyGlyphRegion`] if `region` holds no ink
pub fn extract_features(
    image: &Image,
    classifier: &PixelClassifier,
    region: &Box,
) -> RecogResult<GlyphFeatures> {
    let glyph = pare_down(image, classifier, region)?
        .ok_or(RecogError::EmptyGlyphRegion { region: *region })?;

    let [q1, q2, q3, q4] = glyph.quadrants();
    let [mid1, mid2] = glyph.midlines();
    let density = |b: &Box| area_density(image, classifier, b);

    Ok(GlyphFeatures {
        holes: holes_in(image, classifier, &glyph)?,
        proportion: glyph.proportion(),
        density: Density {
            total: density(&glyph)?,
            border: border_density(image, classifier, &glyph)?,
            q1: density(&q1)?,
            q2: density(&q2)?,
            q3: density(&q3)?,
            q4: density(&q4)?,
            mid1: density(&mid1)?,
            mid2: density(&mid2)?,
        },
    })
}
